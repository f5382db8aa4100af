//! Serde mirror of the JSON metadata layouts.
//!
//! Accepts both the canonical layout (`types` / `services` with
//! `qualifiedName`) and the layout written by the Thrift compiler's JSON
//! generator (`enums`, `structs`, `exceptions`, `typedefs`, `services` with
//! bare `name`s qualified by `namespaces`). Unknown fields are ignored.

use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    pub namespace: Option<String>,
    /// scope -> package path, e.g. {"java": "thrift.test"}
    #[serde(default)]
    pub namespaces: BTreeMap<String, String>,
    #[serde(default)]
    pub types: Vec<RawType>,
    #[serde(default)]
    pub enums: Vec<RawType>,
    #[serde(default)]
    pub structs: Vec<RawType>,
    #[serde(default)]
    pub exceptions: Vec<RawType>,
    #[serde(default)]
    pub typedefs: Vec<RawType>,
    #[serde(default)]
    pub services: Vec<RawService>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawType {
    pub qualified_name: Option<String>,
    pub name: Option<String>,
    pub doc: Option<String>,
    #[serde(default, alias = "fields")]
    pub members: Vec<RawNamed>,
}

/// Enum value, struct field or method parameter.
#[derive(Debug, Deserialize)]
pub struct RawNamed {
    pub name: String,
    pub doc: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawService {
    pub qualified_name: Option<String>,
    pub name: Option<String>,
    pub doc: Option<String>,
    #[serde(alias = "functions")]
    pub methods: Vec<RawMethod>,
}

#[derive(Debug, Deserialize)]
pub struct RawMethod {
    pub name: String,
    pub doc: Option<String>,
    #[serde(default, alias = "arguments")]
    pub params: Vec<RawNamed>,
}
