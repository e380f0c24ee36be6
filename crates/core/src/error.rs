//! Error types for s3url-core
//!
//! Resolver errors carry the raw input alongside the fragment that failed to
//! classify. Their rendered messages are consumed by existing tooling and must
//! stay byte-for-byte stable.

use thiserror::Error;

/// Result type alias for s3url-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for s3url-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// The input does not look like any recognized S3 URL convention
    #[error("invalid hostname: url: {url:?}, hostname: {hostname:?}")]
    InvalidHostname { url: String, hostname: String },

    /// The host was recognized but the path lacks the bucket and/or key
    #[error("invalid path: url: {url:?}, path: {path:?}")]
    InvalidPath { url: String, path: String },

    /// Validation found an empty bucket
    #[error("bucket name is required")]
    MissingBucket,

    /// Validation found an empty key
    #[error("object key is required")]
    MissingKey,

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Error {
    /// Get the appropriate exit code for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidHostname { .. } | Error::InvalidPath { .. } => 2, // UsageError
            Error::Config(_) | Error::TomlParse(_) => 2,                     // UsageError
            Error::MissingBucket | Error::MissingKey => 3,                   // ValidationError
            _ => 1,                                                          // GeneralError
        }
    }
}
