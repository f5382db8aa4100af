//! idldoc — documentation index over IDL compiler JSON metadata.
//!
//! Turns the JSON an IDL compiler emits for enums, structs and services into
//! a map from qualified element name to docstring:
//!
//! - `thrift.test.Numberz` for a type, `thrift.test.Numberz.ONE` for a member
//! - `thrift.test.ThriftTest#testVoid` for a service method
//!
//! Single resources are read on demand with [`doc_strings_of`]; every
//! resource under the conventional directory is merged by [`all_doc_strings`].

pub mod aggregate;
pub mod config;
pub mod error;
pub mod extract;
pub mod index;
pub mod model;
pub mod names;
pub mod parser;
pub mod resource;

pub use aggregate::{Aggregation, ResourceFailure};
pub use config::Config;
pub use error::{DocError, Result};
pub use extract::DocMap;
pub use index::DocIndex;
pub use resource::{MemoryLoader, ResourceLoader, SearchPathLoader};

use once_cell::sync::OnceCell;

/// Docstrings of one resource, independent of any aggregated index.
pub fn doc_strings_of<L>(loader: &L, resource: &str, config: &Config) -> Result<DocMap>
where
    L: ResourceLoader + ?Sized,
{
    let bytes = loader.read(resource)?;
    extract::extract_resource(resource, &bytes, config)
}

/// Discover and merge every resource the loader can see.
///
/// Fails only if nothing was discovered or not a single resource could be
/// read. Malformed resources end up in `Aggregation::failures`.
pub fn all_doc_strings<L>(loader: &L, config: &Config) -> Result<Aggregation>
where
    L: ResourceLoader + ?Sized,
{
    let resources = loader.discover()?;
    if resources.is_empty() {
        return Err(DocError::NoResourcesFound {
            location: loader.location(),
        });
    }

    let agg = aggregate::aggregate_all(loader, &resources, config);
    if agg.nothing_readable() {
        return Err(DocError::NoResourcesFound {
            location: loader.location(),
        });
    }
    Ok(agg)
}

/// Long-lived lookup facade. The full index is built on first use and kept
/// for the lifetime of the facade.
pub struct DocStrings<L> {
    loader: L,
    config: Config,
    all: OnceCell<Aggregation>,
}

impl<L: ResourceLoader> DocStrings<L> {
    pub fn new(loader: L) -> Self {
        Self::with_config(loader, Config::default())
    }

    pub fn with_config(loader: L, config: Config) -> Self {
        DocStrings {
            loader,
            config,
            all: OnceCell::new(),
        }
    }

    pub fn doc_strings_of(&self, resource: &str) -> Result<DocMap> {
        doc_strings_of(&self.loader, resource, &self.config)
    }

    /// The aggregated index. A failed build is not cached and is retried on
    /// the next call.
    pub fn all_doc_strings(&self) -> Result<&Aggregation> {
        self.all
            .get_or_try_init(|| all_doc_strings(&self.loader, &self.config))
    }

    /// Docstring of `key` in the aggregated index.
    pub fn lookup(&self, key: &str) -> Result<Option<&str>> {
        Ok(self.all_doc_strings()?.index.get(key))
    }
}
