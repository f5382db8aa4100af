//! Metadata parser: raw JSON bytes of one resource into a `MetadataDocument`.

mod wire;

use crate::config::Config;
use crate::error::{DocError, Result};
use crate::model::*;
use regex::Regex;
use std::sync::LazyLock;
use wire::{RawDocument, RawMethod, RawService, RawType};

/// Member, method and parameter names: a single identifier.
static RE_IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Type and service names: dot-joined identifiers.
static RE_QUALIFIED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$").unwrap()
});

/// Parse one metadata resource.
///
/// `resource` only labels errors. Invalid JSON, schema mismatches and names
/// that would make qualified keys ambiguous all yield `MalformedMetadata`.
pub fn parse(resource: &str, bytes: &[u8], config: &Config) -> Result<MetadataDocument> {
    let raw: RawDocument =
        serde_json::from_slice(bytes).map_err(|e| DocError::malformed(resource, e.to_string()))?;

    if let Some(ns) = raw.namespace.as_deref() {
        if !ns.is_empty() && !RE_QUALIFIED.is_match(ns) {
            return Err(DocError::malformed(
                resource,
                format!("invalid namespace `{}`", ns),
            ));
        }
    }
    let namespace = resolve_namespace(resource, &raw, &config.namespace_scopes);
    let cx = Context {
        resource,
        namespace: namespace.as_deref(),
    };

    let RawDocument {
        types,
        enums,
        structs,
        exceptions,
        typedefs,
        services,
        ..
    } = raw;

    let types = types
        .into_iter()
        .chain(enums)
        .chain(structs)
        .chain(exceptions)
        .chain(typedefs)
        .enumerate()
        .map(|(i, t)| cx.convert_type(i, t))
        .collect::<Result<Vec<_>>>()?;

    let services = services
        .into_iter()
        .enumerate()
        .map(|(i, s)| cx.convert_service(i, s))
        .collect::<Result<Vec<_>>>()?;

    Ok(MetadataDocument { types, services })
}

/// Pick the package path that qualifies bare names.
///
/// An explicit `namespace` wins (`""` means none), then the first configured
/// scope present in `namespaces`, then a lone `namespaces` entry. Per-language
/// entries that are not dot-paths (`thrift::test`, `Thrift\Test`) are
/// skipped. Otherwise names stay bare.
fn resolve_namespace(resource: &str, raw: &RawDocument, scopes: &[String]) -> Option<String> {
    if let Some(ns) = &raw.namespace {
        return (!ns.is_empty()).then(|| ns.clone());
    }

    let usable = |scope: &str, ns: &str| {
        let ok = RE_QUALIFIED.is_match(ns);
        if !ok {
            log::debug!("{}: ignoring `{}` namespace `{}`", resource, scope, ns);
        }
        ok
    };

    for scope in scopes {
        if let Some(ns) = raw.namespaces.get(scope) {
            if usable(scope.as_str(), ns.as_str()) {
                return Some(ns.clone());
            }
        }
    }
    if raw.namespaces.len() == 1 {
        let (scope, ns) = raw.namespaces.iter().next()?;
        if usable(scope.as_str(), ns.as_str()) {
            return Some(ns.clone());
        }
    }
    None
}

struct Context<'a> {
    resource: &'a str,
    namespace: Option<&'a str>,
}

impl Context<'_> {
    fn convert_type(&self, index: usize, raw: RawType) -> Result<TypeDoc> {
        let qualified_name =
            self.qualified_name("type", index, raw.qualified_name, raw.name)?;
        let members = raw
            .members
            .into_iter()
            .map(|m| -> Result<MemberDoc> {
                self.check_ident(&qualified_name, &m.name)?;
                Ok(MemberDoc {
                    name: m.name,
                    docstring: m.doc,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(TypeDoc {
            qualified_name,
            docstring: raw.doc,
            members,
        })
    }

    fn convert_service(&self, index: usize, raw: RawService) -> Result<ServiceDoc> {
        let qualified_name =
            self.qualified_name("service", index, raw.qualified_name, raw.name)?;
        let methods = raw
            .methods
            .into_iter()
            .map(|m| self.convert_method(&qualified_name, m))
            .collect::<Result<Vec<_>>>()?;
        Ok(ServiceDoc {
            qualified_name,
            docstring: raw.doc,
            methods,
        })
    }

    fn convert_method(&self, service: &str, raw: RawMethod) -> Result<MethodDoc> {
        self.check_ident(service, &raw.name)?;
        let owner = format!("{}#{}", service, raw.name);
        let params = raw
            .params
            .into_iter()
            .map(|p| -> Result<ParamDoc> {
                self.check_ident(&owner, &p.name)?;
                Ok(ParamDoc {
                    name: p.name,
                    docstring: p.doc,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(MethodDoc {
            name: raw.name,
            docstring: raw.doc,
            params,
        })
    }

    fn check_ident(&self, owner: &str, name: &str) -> Result<()> {
        if RE_IDENT.is_match(name) {
            Ok(())
        } else {
            Err(DocError::malformed(
                self.resource,
                format!("invalid element name `{}` in `{}`", name, owner),
            ))
        }
    }

    /// `qualifiedName` is taken verbatim; a bare `name` is joined to the
    /// document namespace.
    fn qualified_name(
        &self,
        what: &str,
        index: usize,
        qualified: Option<String>,
        bare: Option<String>,
    ) -> Result<String> {
        let name = match (qualified, bare) {
            (Some(q), _) => q,
            (None, Some(n)) => match self.namespace {
                Some(ns) => format!("{}.{}", ns, n),
                None => n,
            },
            (None, None) => {
                return Err(DocError::malformed(
                    self.resource,
                    format!("{} entry {} has neither `qualifiedName` nor `name`", what, index),
                ));
            }
        };
        if !RE_QUALIFIED.is_match(&name) {
            return Err(DocError::malformed(
                self.resource,
                format!("invalid {} name `{}`", what, name),
            ));
        }
        Ok(name)
    }
}
