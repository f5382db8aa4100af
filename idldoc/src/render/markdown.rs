//! GitHub-flavored markdown renderer.

use crate::render::Renderer;
use crate::toc;
use anyhow::Result;
use idldoc::names::split_method_key;
use idldoc::{DocIndex, ResourceFailure};

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, index: &DocIndex, failures: &[ResourceFailure]) -> Result<String> {
        let entries = index.sorted();
        let mut output = String::from("# Documentation index\n\n");

        // Page headings come first in the document and claim their anchors
        let mut anchors = toc::Anchors::default();
        anchors.claim("Documentation index");
        anchors.claim("Index");

        if !entries.is_empty() {
            output.push_str("## Index\n\n");
            for key in entries.keys() {
                output.push_str(&toc::render_toc_item(key, &anchors.claim(key)));
                output.push('\n');
            }
            output.push('\n');
        }

        for (key, doc) in &entries {
            output.push_str(&render_entry(key, doc));
            output.push('\n');
        }

        if !failures.is_empty() {
            output.push_str("## Failed resources\n\n");
            for failure in failures {
                output.push_str(&format!("* `{}`: {}\n", failure.resource, failure.error));
            }
            output.push('\n');
        }

        Ok(output)
    }
}

/// Render one documented element.
fn render_entry(key: &str, doc: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("### {}\n", key));

    if let Some((service, method)) = split_method_key(key) {
        lines.push(format!("_RPC `{}` of `{}`_\n", method, service));
    }

    if !doc.is_empty() {
        lines.push(doc.trim_end().to_string());
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(pairs: &[(&str, &str)]) -> DocIndex {
        DocIndex::from(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<idldoc::DocMap>(),
        )
    }

    #[test]
    fn renders_index_and_sections() {
        let out = MarkdownRenderer
            .render(
                &index(&[
                    ("thrift.test.Numberz", "Docstring!"),
                    ("thrift.test.ThriftTest#testVoid", "Prints nothing."),
                ]),
                &[],
            )
            .unwrap();

        assert!(out.starts_with("# Documentation index\n\n## Index\n\n"));
        assert!(out.contains("* [thrift.test.Numberz](#thrifttestnumberz)\n"));
        assert!(out.contains("### thrift.test.Numberz\n\nDocstring!\n"));
        assert!(out.contains("_RPC `testVoid` of `thrift.test.ThriftTest`_"));
        assert!(!out.contains("Failed resources"));
    }

    #[test]
    fn colliding_anchors_are_numbered() {
        let out = MarkdownRenderer
            .render(
                &index(&[
                    ("a.Point.x_axis", "underscored"),
                    ("a.Point.xaxis", "plain"),
                    ("Index", "bare type named like the page heading"),
                ]),
                &[],
            )
            .unwrap();

        assert!(out.contains("* [Index](#index-1)\n"));
        assert!(out.contains("* [a.Point.x_axis](#apointxaxis)\n"));
        assert!(out.contains("* [a.Point.xaxis](#apointxaxis-1)\n"));
    }

    #[test]
    fn empty_docstring_renders_heading_only() {
        let out = render_entry("x.T", "");
        assert_eq!(out, "### x.T\n");
    }
}
