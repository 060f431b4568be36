//! Error types for manifest loading.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for manifest loading and validation.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// YAML syntax or shape error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Manifest file could not be read
    #[error("cannot read manifest {path}: {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A key holds an unusable value
    #[error("invalid value for '{field}': {message}")]
    InvalidValue {
        /// Manifest key
        field: String,
        /// What is wrong with it
        message: String,
    },
}

impl ManifestError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
