//! Resource discovery and bounded reading.
//!
//! The index never scans a runtime on its own. Hosts hand it a
//! `ResourceLoader`: either a classpath-like list of root directories or an
//! in-memory set of resources generated at build time.

use crate::config::Config;
use crate::error::{DocError, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Component, Path, PathBuf};

/// Source of metadata resources, addressed by `/`-separated relative paths.
pub trait ResourceLoader: Sync {
    /// Every `*.json` resource under the conventional directory, sorted.
    fn discover(&self) -> Result<Vec<String>>;

    /// Bytes of one resource.
    fn read(&self, resource: &str) -> Result<Vec<u8>>;

    /// Human-readable description of where discovery looks.
    fn location(&self) -> String;
}

/// Ordered list of root directories. Earlier roots shadow later ones for the
/// same relative path.
#[derive(Debug, Clone)]
pub struct SearchPathLoader {
    roots: Vec<PathBuf>,
    resource_dir: String,
    max_bytes: u64,
}

impl SearchPathLoader {
    pub fn new(roots: Vec<PathBuf>, config: &Config) -> Self {
        SearchPathLoader {
            roots,
            resource_dir: config.resource_dir.trim_matches('/').to_string(),
            max_bytes: config.max_resource_bytes,
        }
    }

    fn discover_in(&self, root: &Path) -> Result<Vec<String>> {
        let dir = root.join(&self.resource_dir);
        if !dir.is_dir() {
            log::debug!("no resource directory at {}", dir.display());
            return Ok(Vec::new());
        }

        let pattern = format!(
            "{}/**/*.json",
            glob::Pattern::escape(&dir.to_string_lossy())
        );
        let entries = glob::glob(&pattern).map_err(|e| DocError::Io {
            resource: dir.display().to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, e),
        })?;

        let mut found = Vec::new();
        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    log::warn!("skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if !path.is_file() {
                continue;
            }
            if let Ok(rel) = path.strip_prefix(root) {
                found.push(to_resource_path(rel));
            }
        }
        Ok(found)
    }
}

impl ResourceLoader for SearchPathLoader {
    fn discover(&self) -> Result<Vec<String>> {
        let mut all = Vec::new();
        for root in &self.roots {
            all.extend(self.discover_in(root)?);
        }
        all.sort();
        all.dedup();
        Ok(all)
    }

    fn read(&self, resource: &str) -> Result<Vec<u8>> {
        let not_found = || DocError::ResourceNotFound {
            resource: resource.to_string(),
        };
        let rel = Path::new(resource);
        if !rel
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(not_found());
        }

        let path = self
            .roots
            .iter()
            .map(|root| root.join(rel))
            .find(|p| p.is_file())
            .ok_or_else(not_found)?;
        read_bounded(resource, &path, self.max_bytes)
    }

    fn location(&self) -> String {
        let roots: Vec<String> = self
            .roots
            .iter()
            .map(|r| r.join(&self.resource_dir).display().to_string())
            .collect();
        roots.join(", ")
    }
}

/// Read at most `limit` bytes; anything longer is rejected rather than
/// truncated.
fn read_bounded(resource: &str, path: &Path, limit: u64) -> Result<Vec<u8>> {
    let io_err = |source| DocError::Io {
        resource: resource.to_string(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let mut buf = Vec::new();
    file.take(limit.saturating_add(1))
        .read_to_end(&mut buf)
        .map_err(io_err)?;
    if buf.len() as u64 > limit {
        return Err(DocError::ResourceTooLarge {
            resource: resource.to_string(),
            limit,
        });
    }
    Ok(buf)
}

fn to_resource_path(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Resources held in memory, e.g. a list generated at build time.
#[derive(Debug, Clone)]
pub struct MemoryLoader {
    resources: BTreeMap<String, Vec<u8>>,
    resource_dir: String,
    max_bytes: u64,
}

impl MemoryLoader {
    pub fn new(config: &Config) -> Self {
        MemoryLoader {
            resources: BTreeMap::new(),
            resource_dir: config.resource_dir.trim_matches('/').to_string(),
            max_bytes: config.max_resource_bytes,
        }
    }

    pub fn insert(&mut self, resource: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.resources.insert(resource.into(), bytes.into());
    }

    pub fn with(mut self, resource: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(resource, bytes);
        self
    }

    /// Path of `name` inside the conventional directory.
    pub fn path_of(&self, name: &str) -> String {
        format!("{}/{}", self.resource_dir, name)
    }
}

impl ResourceLoader for MemoryLoader {
    fn discover(&self) -> Result<Vec<String>> {
        let prefix = format!("{}/", self.resource_dir);
        Ok(self
            .resources
            .keys()
            .filter(|k| k.starts_with(&prefix) && k.ends_with(".json"))
            .cloned()
            .collect())
    }

    fn read(&self, resource: &str) -> Result<Vec<u8>> {
        let bytes = self
            .resources
            .get(resource)
            .ok_or_else(|| DocError::ResourceNotFound {
                resource: resource.to_string(),
            })?;
        if bytes.len() as u64 > self.max_bytes {
            return Err(DocError::ResourceTooLarge {
                resource: resource.to_string(),
                limit: self.max_bytes,
            });
        }
        Ok(bytes.clone())
    }

    fn location(&self) -> String {
        format!("memory:{}", self.resource_dir)
    }
}
