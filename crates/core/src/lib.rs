//! s3url-core: Address resolution for S3 object URLs
//!
//! This crate provides the core functionality for the s3url CLI, including:
//! - Parsing virtual-hosted, path-style and `s3://` URLs into references
//! - Validating bucket/key references before use
//! - Configuration management
//!
//! Nothing here performs I/O against a storage service; a caller hands the
//! resolved [`Reference`] to whatever client it uses.

pub mod config;
pub mod error;
pub mod reference;
pub mod resolver;

pub use config::{Config, ConfigManager, ResolverConfig};
pub use error::{Error, Result};
pub use reference::Reference;
pub use resolver::{parse_url, AddressStyle, Resolution, Resolver};
