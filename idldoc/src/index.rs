//! The aggregated, read-only documentation index.

use crate::extract::DocMap;
use std::collections::hash_map::Entry;
use std::collections::BTreeMap;

/// Qualified name -> docstring across every merged resource.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocIndex {
    entries: DocMap,
}

impl DocIndex {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries ordered by key.
    pub fn sorted(&self) -> BTreeMap<&str, &str> {
        self.iter().collect()
    }

    /// Add every entry of `map` whose key is not present yet. Returns the
    /// keys that were already taken.
    pub(crate) fn merge_first_wins(&mut self, map: DocMap) -> Vec<String> {
        let mut shadowed = Vec::new();
        for (key, doc) in map {
            match self.entries.entry(key) {
                Entry::Occupied(e) => shadowed.push(e.key().clone()),
                Entry::Vacant(e) => {
                    e.insert(doc);
                }
            }
        }
        shadowed.sort();
        shadowed
    }
}

impl From<DocMap> for DocIndex {
    fn from(entries: DocMap) -> Self {
        DocIndex { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> DocMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn first_merge_wins() {
        let mut index = DocIndex::default();
        assert!(index.merge_first_wins(map(&[("a.X", "one"), ("a.Y", "y")])).is_empty());

        let shadowed = index.merge_first_wins(map(&[("a.X", "two"), ("b.Z", "z")]));
        assert_eq!(shadowed, vec!["a.X".to_string()]);
        assert_eq!(index.get("a.X"), Some("one"));
        assert_eq!(index.get("b.Z"), Some("z"));
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn sorted_view_orders_keys() {
        let index = DocIndex::from(map(&[("b", "2"), ("a", "1")]));
        let keys: Vec<_> = index.sorted().into_keys().collect();
        assert_eq!(keys, ["a", "b"]);
    }
}
