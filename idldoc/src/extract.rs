//! Per-resource extractor: one `qualified name -> docstring` map per document.

use crate::config::Config;
use crate::error::{DocError, Result};
use crate::model::MetadataDocument;
use crate::names;
use crate::parser;
use std::collections::{HashMap, HashSet};

/// Docstrings of a single resource, keyed by qualified name.
pub type DocMap = HashMap<String, String>;

/// Collect the documented elements of `doc`.
///
/// Undocumented elements get no entry. Key uniqueness is checked over every
/// element, documented or not; a collision fails the whole document.
pub fn extract(resource: &str, doc: &MetadataDocument) -> Result<DocMap> {
    let mut seen = HashSet::new();
    let mut map = DocMap::new();

    for element in names::elements(doc) {
        if !seen.insert(element.key.clone()) {
            return Err(DocError::DuplicateElement {
                resource: resource.to_string(),
                name: element.key,
            });
        }
        match element.docstring {
            Some(text) => {
                map.insert(element.key, text.to_string());
            }
            None => log::trace!("{}: undocumented {:?} {}", resource, element.kind, element.key),
        }
    }

    Ok(map)
}

/// Parse then extract.
pub fn extract_resource(resource: &str, bytes: &[u8], config: &Config) -> Result<DocMap> {
    let doc = parser::parse(resource, bytes, config)?;
    extract(resource, &doc)
}
