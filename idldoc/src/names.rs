//! Qualified-name builder.
//!
//! Keys look like:
//! - `ns.Type` and `ns.Type.member` for enums, structs and their members
//! - `ns.Service` and `ns.Service#method` for services and their RPCs
//! - `ns.Service#method.param` for method parameters
//!
//! The parser guarantees member, method and parameter names contain neither
//! separator, and type names contain no `#`, so the kinds cannot collide.

use crate::model::MetadataDocument;

pub const MEMBER_SEPARATOR: char = '.';
pub const METHOD_SEPARATOR: char = '#';
pub const PARAM_SEPARATOR: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Type,
    Member,
    Service,
    Method,
    Param,
}

/// One documentable element with its lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element<'a> {
    pub key: String,
    pub kind: ElementKind,
    pub docstring: Option<&'a str>,
}

pub fn member_key(type_key: &str, member: &str) -> String {
    format!("{}{}{}", type_key, MEMBER_SEPARATOR, member)
}

pub fn method_key(service_key: &str, method: &str) -> String {
    format!("{}{}{}", service_key, METHOD_SEPARATOR, method)
}

pub fn param_key(method_key: &str, param: &str) -> String {
    format!("{}{}{}", method_key, PARAM_SEPARATOR, param)
}

/// Split a method key into its service key and method name.
pub fn split_method_key(key: &str) -> Option<(&str, &str)> {
    let (service, rest) = key.split_once(METHOD_SEPARATOR)?;
    let method = rest.split(PARAM_SEPARATOR).next().unwrap_or(rest);
    Some((service, method))
}

/// Every element of `doc` in declaration order: each type followed by its
/// members, then each service followed by its methods and their params.
pub fn elements(doc: &MetadataDocument) -> Vec<Element<'_>> {
    let mut out = Vec::new();

    for ty in &doc.types {
        out.push(Element {
            key: ty.qualified_name.clone(),
            kind: ElementKind::Type,
            docstring: ty.docstring.as_deref(),
        });
        for member in &ty.members {
            out.push(Element {
                key: member_key(&ty.qualified_name, &member.name),
                kind: ElementKind::Member,
                docstring: member.docstring.as_deref(),
            });
        }
    }

    for svc in &doc.services {
        out.push(Element {
            key: svc.qualified_name.clone(),
            kind: ElementKind::Service,
            docstring: svc.docstring.as_deref(),
        });
        for method in &svc.methods {
            let mkey = method_key(&svc.qualified_name, &method.name);
            out.push(Element {
                key: mkey.clone(),
                kind: ElementKind::Method,
                docstring: method.docstring.as_deref(),
            });
            for param in &method.params {
                out.push(Element {
                    key: param_key(&mkey, &param.name),
                    kind: ElementKind::Param,
                    docstring: param.docstring.as_deref(),
                });
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;

    fn sample() -> MetadataDocument {
        MetadataDocument {
            types: vec![TypeDoc {
                qualified_name: "thrift.test.Numberz".to_string(),
                docstring: Some("Docstring!".to_string()),
                members: vec![MemberDoc {
                    name: "ONE".to_string(),
                    docstring: None,
                }],
            }],
            services: vec![ServiceDoc {
                qualified_name: "thrift.test.ThriftTest".to_string(),
                docstring: None,
                methods: vec![MethodDoc {
                    name: "testString".to_string(),
                    docstring: Some("Prints a string".to_string()),
                    params: vec![ParamDoc {
                        name: "thing".to_string(),
                        docstring: Some("the string".to_string()),
                    }],
                }],
            }],
        }
    }

    #[test]
    fn keys_in_declaration_order() {
        let doc = sample();
        let keys: Vec<(String, ElementKind)> =
            elements(&doc).into_iter().map(|e| (e.key, e.kind)).collect();
        assert_eq!(
            keys,
            vec![
                ("thrift.test.Numberz".to_string(), ElementKind::Type),
                ("thrift.test.Numberz.ONE".to_string(), ElementKind::Member),
                ("thrift.test.ThriftTest".to_string(), ElementKind::Service),
                ("thrift.test.ThriftTest#testString".to_string(), ElementKind::Method),
                ("thrift.test.ThriftTest#testString.thing".to_string(), ElementKind::Param),
            ]
        );
    }

    #[test]
    fn docstrings_are_borrowed_as_is() {
        let doc = sample();
        let elems = elements(&doc);
        assert_eq!(elems[0].docstring, Some("Docstring!"));
        assert_eq!(elems[1].docstring, None);
        assert_eq!(elems[4].docstring, Some("the string"));
    }

    #[test]
    fn method_keys_split_back() {
        assert_eq!(
            split_method_key("thrift.test.ThriftTest#testVoid"),
            Some(("thrift.test.ThriftTest", "testVoid"))
        );
        assert_eq!(
            split_method_key("a.Svc#call.arg"),
            Some(("a.Svc", "call"))
        );
        assert_eq!(split_method_key("thrift.test.Numberz"), None);
    }

    #[test]
    fn same_name_different_kinds_do_not_collide() {
        // A struct field and a method both named `run` under the same prefix
        assert_ne!(member_key("a.Job", "run"), method_key("a.Job", "run"));
        assert_ne!(
            param_key(&method_key("a.Job", "run"), "x"),
            member_key(&member_key("a.Job", "run"), "x")
        );
    }
}
