//! Object references
//!
//! A [`Reference`] names one object: the bucket it lives in and its key.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A bucket/key pair pointing at a single object
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    /// Bucket name
    pub bucket: String,
    /// Object key, possibly containing slashes
    pub key: String,
}

impl Reference {
    /// Create a new Reference
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Check that both bucket and key are present
    ///
    /// The bucket is checked first, so an entirely empty reference
    /// reports [`Error::MissingBucket`].
    pub fn validate(&self) -> Result<()> {
        if self.bucket.is_empty() {
            return Err(Error::MissingBucket);
        }

        if self.key.is_empty() {
            return Err(Error::MissingKey);
        }

        Ok(())
    }
}

/// Renders the `s3://` form with each key segment percent-encoded, so the
/// output parses back to the same reference.
impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s3://{}/", self.bucket)?;
        for (i, segment) in self.key.split('/').enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(&urlencoding::encode(segment))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Reference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::resolver::parse_url(s)
    }
}
