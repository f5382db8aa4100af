//! Heading anchors for the markdown index.
//!
//! Qualified keys lose their separators in an anchor, so distinct keys can
//! map to the same one (`a.Point.x_axis`, `a.Point.xaxis`). GitHub numbers
//! repeated anchors in document order; `Anchors` does the same.

use std::collections::HashMap;

/// Anchor allocator for one rendered document.
#[derive(Debug, Default)]
pub struct Anchors {
    taken: HashMap<String, usize>,
}

impl Anchors {
    /// Anchor of the next heading titled `title`: the bare slug the first
    /// time, then `slug-1`, `slug-2`, ...
    pub fn claim(&mut self, title: &str) -> String {
        let slug = slugify(title);
        let repeats = self.taken.entry(slug.clone()).or_insert(0);
        let anchor = match *repeats {
            0 => slug,
            n => format!("{}-{}", slug, n),
        };
        *repeats += 1;
        anchor
    }
}

/// `* [title](#anchor)` list item.
pub fn render_toc_item(title: &str, anchor: &str) -> String {
    format!("* [{}](#{})", title, anchor)
}

/// Lowercased title with only alphanumerics and hyphens kept, spaces turned
/// into hyphens.
fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            '-' => Some('-'),
            c if c.is_alphanumeric() => Some(c),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_separators_vanish_from_slugs() {
        assert_eq!(slugify("thrift.test.Numberz"), "thrifttestnumberz");
        assert_eq!(
            slugify("thrift.test.ThriftTest#testVoid"),
            "thrifttestthrifttesttestvoid"
        );
        assert_eq!(
            slugify("thrift.test.ThriftTest#testVoid.arg_0"),
            "thrifttestthrifttesttestvoidarg0"
        );
        assert_eq!(slugify("Failed resources"), "failed-resources");
    }

    #[test]
    fn colliding_keys_get_numbered_anchors() {
        let mut anchors = Anchors::default();
        assert_eq!(anchors.claim("a.Point.x_axis"), "apointxaxis");
        assert_eq!(anchors.claim("a.Point.xaxis"), "apointxaxis-1");
        assert_eq!(anchors.claim("a.Point.x_axis"), "apointxaxis-2");
        assert_eq!(anchors.claim("a.Point.y"), "apointy");
    }

    #[test]
    fn method_and_type_with_same_letters_collide() {
        let mut anchors = Anchors::default();
        assert_eq!(anchors.claim("s.Svc#get"), "ssvcget");
        assert_eq!(anchors.claim("s.SvcGet"), "ssvcget-1");
    }

    #[test]
    fn toc_item() {
        assert_eq!(render_toc_item("a.B", "ab"), "* [a.B](#ab)");
    }
}
