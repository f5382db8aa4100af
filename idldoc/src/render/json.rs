//! JSON renderer — structured output for tooling integration.
//!
//! Keys are sorted so repeated runs produce identical output.

use crate::render::Renderer;
use anyhow::Result;
use idldoc::{DocIndex, ResourceFailure};
use serde::Serialize;
use std::collections::BTreeMap;

pub struct JsonRenderer;

#[derive(Serialize)]
struct Output<'a> {
    docstrings: BTreeMap<&'a str, &'a str>,
    failures: Vec<Failure<'a>>,
}

#[derive(Serialize)]
struct Failure<'a> {
    resource: &'a str,
    error: String,
}

impl Renderer for JsonRenderer {
    fn render(&self, index: &DocIndex, failures: &[ResourceFailure]) -> Result<String> {
        let output = Output {
            docstrings: index.sorted(),
            failures: failures
                .iter()
                .map(|f| Failure {
                    resource: &f.resource,
                    error: f.error.to_string(),
                })
                .collect(),
        };
        let mut out = serde_json::to_string_pretty(&output)?;
        out.push('\n');
        Ok(out)
    }
}
