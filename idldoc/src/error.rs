use thiserror::Error;

pub type Result<T> = std::result::Result<T, DocError>;

#[derive(Error, Debug)]
pub enum DocError {
    #[error("resource not found: {resource}")]
    ResourceNotFound { resource: String },

    #[error("malformed metadata in {resource}: {reason}")]
    MalformedMetadata { resource: String, reason: String },

    #[error("duplicate element {name} in {resource}")]
    DuplicateElement { resource: String, name: String },

    #[error("no documentation resources found under {location}")]
    NoResourcesFound { location: String },

    #[error("resource {resource} exceeds the {limit} byte limit")]
    ResourceTooLarge { resource: String, limit: u64 },

    #[error("failed to read {resource}: {source}")]
    Io {
        resource: String,
        #[source]
        source: std::io::Error,
    },
}

impl DocError {
    pub(crate) fn malformed(resource: &str, reason: impl Into<String>) -> Self {
        DocError::MalformedMetadata {
            resource: resource.to_string(),
            reason: reason.into(),
        }
    }

    /// True when the resource bytes could not be obtained at all, as opposed
    /// to bytes that were read but did not hold valid metadata.
    pub fn is_read_failure(&self) -> bool {
        matches!(
            self,
            DocError::ResourceNotFound { .. }
                | DocError::ResourceTooLarge { .. }
                | DocError::Io { .. }
        )
    }
}
