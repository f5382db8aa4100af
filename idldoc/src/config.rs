//! Settings shared by discovery, parsing and the facade.

/// Conventional directory, relative to each search-path root, that holds the
/// compiled metadata resources.
pub const DEFAULT_RESOURCE_DIR: &str = "META-INF/idldoc/thrift";

/// Upper bound on the size of a single resource.
pub const DEFAULT_MAX_RESOURCE_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory scanned by `ResourceLoader::discover`
    pub resource_dir: String,
    /// Preference order when a document declares per-language namespaces
    pub namespace_scopes: Vec<String>,
    pub max_resource_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            resource_dir: DEFAULT_RESOURCE_DIR.to_string(),
            namespace_scopes: vec!["java".to_string(), "*".to_string()],
            max_resource_bytes: DEFAULT_MAX_RESOURCE_BYTES,
        }
    }
}
