//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;

use anyhow::{anyhow, Result};
use idldoc::{DocIndex, ResourceFailure};

/// Trait for rendering an index, plus the resources that failed to load, into
/// a specific output format.
pub trait Renderer {
    fn render(&self, index: &DocIndex, failures: &[ResourceFailure]) -> Result<String>;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "json" => Ok(Box::new(json::JsonRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use json or markdown", format)),
    }
}
