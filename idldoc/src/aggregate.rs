//! Aggregator: merge the docstrings of many resources into one `DocIndex`.
//!
//! Resources are read and extracted in parallel. Merging happens afterwards
//! on one thread, in sorted resource order, so the first-resource-wins policy
//! does not depend on which extraction finished first.

use crate::config::Config;
use crate::error::{DocError, Result};
use crate::extract::{self, DocMap};
use crate::index::DocIndex;
use crate::resource::ResourceLoader;
use rayon::prelude::*;

/// A resource that could not contribute to the index.
#[derive(Debug)]
pub struct ResourceFailure {
    pub resource: String,
    pub error: DocError,
}

/// Result of one aggregation pass.
#[derive(Debug, Default)]
pub struct Aggregation {
    pub index: DocIndex,
    /// Resources merged into `index`, in merge order
    pub loaded: Vec<String>,
    pub failures: Vec<ResourceFailure>,
    /// Keys dropped because an earlier resource already defined them
    pub shadowed: usize,
}

/// Merge every resource in `resources` that can be read and extracted.
///
/// A failing resource is recorded in `failures` and skipped. When two
/// resources define the same key, the one sorting first keeps it.
pub fn aggregate_all<L>(loader: &L, resources: &[String], config: &Config) -> Aggregation
where
    L: ResourceLoader + ?Sized,
{
    let mut ordered = resources.to_vec();
    ordered.sort();
    ordered.dedup();

    let results: Vec<(String, Result<DocMap>)> = ordered
        .into_par_iter()
        .map(|resource| {
            let result = loader
                .read(&resource)
                .and_then(|bytes| extract::extract_resource(&resource, &bytes, config));
            (resource, result)
        })
        .collect();

    let mut agg = Aggregation::default();
    for (resource, result) in results {
        match result {
            Ok(map) => {
                log::debug!("{}: {} docstrings", resource, map.len());
                let shadowed = agg.index.merge_first_wins(map);
                for key in &shadowed {
                    log::debug!("{}: {} already defined by an earlier resource", resource, key);
                }
                agg.shadowed += shadowed.len();
                agg.loaded.push(resource);
            }
            Err(error) => {
                log::warn!("skipping {}: {}", resource, error);
                agg.failures.push(ResourceFailure { resource, error });
            }
        }
    }

    log::info!(
        "indexed {} docstrings from {} resources ({} failed)",
        agg.index.len(),
        agg.loaded.len(),
        agg.failures.len()
    );
    agg
}

impl Aggregation {
    /// True when resources were attempted but none of them could be read.
    pub fn nothing_readable(&self) -> bool {
        self.loaded.is_empty() && self.failures.iter().all(|f| f.error.is_read_failure())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::MemoryLoader;

    fn loader(files: &[(&str, &str)]) -> MemoryLoader {
        let mut loader = MemoryLoader::new(&Config::default());
        for (name, json) in files {
            let path = loader.path_of(name);
            loader.insert(path, *json);
        }
        loader
    }

    fn run(loader: &MemoryLoader) -> Aggregation {
        let resources = loader.discover().unwrap();
        aggregate_all(loader, &resources, &Config::default())
    }

    #[test]
    fn merges_every_resource() {
        let loader = loader(&[
            ("a.json", r#"{"types": [{"qualifiedName": "a.A", "doc": "from a"}]}"#),
            ("b.json", r#"{"types": [{"qualifiedName": "b.B", "doc": "from b"}]}"#),
        ]);
        let agg = run(&loader);
        assert_eq!(agg.index.get("a.A"), Some("from a"));
        assert_eq!(agg.index.get("b.B"), Some("from b"));
        assert_eq!(agg.loaded.len(), 2);
        assert!(agg.failures.is_empty());
    }

    #[test]
    fn first_resource_in_sorted_order_wins() {
        let loader = loader(&[
            ("z.json", r#"{"types": [{"qualifiedName": "x.T", "doc": "from z"}]}"#),
            ("a.json", r#"{"types": [{"qualifiedName": "x.T", "doc": "from a"}]}"#),
        ]);
        for _ in 0..8 {
            let agg = run(&loader);
            assert_eq!(agg.index.get("x.T"), Some("from a"));
            assert_eq!(agg.shadowed, 1);
        }

        // Caller order does not matter either
        let reversed = vec![loader.path_of("z.json"), loader.path_of("a.json")];
        let agg = aggregate_all(&loader, &reversed, &Config::default());
        assert_eq!(agg.index.get("x.T"), Some("from a"));
    }

    #[test]
    fn malformed_resource_does_not_blank_the_index() {
        let loader = loader(&[
            ("bad.json", "{ this is not json"),
            ("dup.json", r#"{"types": [{"qualifiedName": "d.D", "doc": "1"}, {"qualifiedName": "d.D"}]}"#),
            ("good.json", r#"{"types": [{"qualifiedName": "g.G", "doc": "ok"}]}"#),
        ]);
        let agg = run(&loader);
        assert_eq!(agg.index.len(), 1);
        assert_eq!(agg.index.get("g.G"), Some("ok"));
        assert!(!agg.index.contains_key("d.D"));

        let failed: Vec<_> = agg.failures.iter().map(|f| f.resource.as_str()).collect();
        assert_eq!(failed, [loader.path_of("bad.json"), loader.path_of("dup.json")]);
        assert!(matches!(agg.failures[0].error, DocError::MalformedMetadata { .. }));
        assert!(matches!(agg.failures[1].error, DocError::DuplicateElement { .. }));
        assert!(!agg.nothing_readable());
    }

    #[test]
    fn unreadable_resources_are_recorded() {
        let loader = loader(&[]);
        let missing = vec!["META-INF/idldoc/thrift/gone.json".to_string()];
        let agg = aggregate_all(&loader, &missing, &Config::default());
        assert!(agg.index.is_empty());
        assert!(agg.nothing_readable());
    }

    #[test]
    fn aggregation_is_repeatable() {
        let loader = loader(&[
            ("a.json", r#"{"types": [{"qualifiedName": "a.A", "doc": "a"}]}"#),
            ("b.json", r#"{"services": [{"qualifiedName": "b.S", "methods": [{"name": "m", "doc": "m"}]}]}"#),
        ]);
        assert_eq!(run(&loader).index, run(&loader).index);
    }
}
