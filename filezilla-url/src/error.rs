//! Error types for manifest resolution and configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::product::Channel;

/// Result type for resolve operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors that can occur while resolving a product's version and URL.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A required input variable was not supplied.
    #[error("{name} is required but was not provided")]
    MissingInput { name: String },

    /// The product identifier is not in the product table.
    #[error("product_name {name} is invalid; it must be one of: {valid}")]
    InvalidProduct { name: String, valid: String },

    /// The HTTP transport could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),

    /// The manifest could not be retrieved.
    #[error("Unexpected error retrieving product manifest: '{0}'")]
    ManifestFetch(String),

    /// A line matched the channel but has too few fields.
    #[error("Malformed {channel} record in manifest: '{line}'")]
    MalformedRecord { channel: Channel, line: String },

    /// No manifest line yielded both a version and a URL.
    #[error("Version or URL not found for {channel} channel")]
    NotFound { channel: Channel },
}

impl ResolveError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingInput { .. } | Self::InvalidProduct { .. } => 2,
            Self::ManifestFetch(_) => 3,
            Self::MalformedRecord { .. } | Self::NotFound { .. } => 4,
            Self::HttpClient(_) => 1,
        }
    }
}

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}
