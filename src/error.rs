//! Error types for the openapi-proto-gen crate.

use std::path::PathBuf;

/// Errors that can occur while loading a definition or generating proto text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to read the OpenAPI definition from disk.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON parse error.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parse error.
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Proto rendering failed while walking the definition tree.
    #[error("unable to generate protobuf schema: {0}")]
    Codegen(String),

    /// Failed to write the generated schema.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
