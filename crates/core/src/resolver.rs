//! Address resolution
//!
//! Turns user-supplied S3 URLs into [`Reference`]s. Three conventions are
//! accepted and resolve to the same reference:
//!
//! - virtual-hosted style: `https://{bucket}.s3[-{region}].{domain}/{key}`
//! - path style: `https://s3[-{region}].{domain}/{bucket}/{key}`
//! - scheme-native form: `s3://{bucket}/{key}`
//!
//! Hosts are matched by shape rather than against a table of endpoints, so
//! new regions resolve without code changes.

use serde::Serialize;
use url::Url;

use crate::config::ResolverConfig;
use crate::error::{Error, Result};
use crate::reference::Reference;

/// Label that marks the storage endpoint inside a hostname
const ENDPOINT_LABEL: &str = "s3";

/// Addressing convention an input URL was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressStyle {
    /// Bucket embedded as a subdomain of the endpoint
    VirtualHosted,
    /// Bucket as the first path segment under a bare endpoint
    PathStyle,
    /// `s3://bucket/key`
    SchemeNative,
}

impl AddressStyle {
    /// Human-readable name used in CLI output
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VirtualHosted => "virtual-hosted",
            Self::PathStyle => "path-style",
            Self::SchemeNative => "scheme-native",
        }
    }
}

impl std::fmt::Display for AddressStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed URL together with how it was recognized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The resolved object reference
    #[serde(flatten)]
    pub reference: Reference,
    /// Convention the input used
    pub style: AddressStyle,
    /// Region taken from an `s3-{region}` endpoint label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// How a hostname relates to the storage endpoint
#[derive(Debug, PartialEq, Eq)]
enum HostShape {
    /// The host is the endpoint itself
    Endpoint { region: Option<String> },
    /// The host is `{bucket}.{endpoint}`
    Bucket {
        bucket: String,
        region: Option<String>,
    },
}

/// Resolves URL strings into object references
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    /// Create a resolver with the given settings
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Parse `raw` into a [`Reference`]
    pub fn parse(&self, raw: &str) -> Result<Reference> {
        self.resolve(raw).map(|resolution| resolution.reference)
    }

    /// Parse `raw` and report which convention it used
    ///
    /// The key of a virtual-hosted URL may come back empty; that is left for
    /// [`Reference::validate`] to report.
    pub fn resolve(&self, raw: &str) -> Result<Resolution> {
        let invalid_hostname = |hostname: &str| Error::InvalidHostname {
            url: raw.to_string(),
            hostname: hostname.to_string(),
        };

        let url = Url::parse(raw).map_err(|e| {
            tracing::debug!(url = raw, error = %e, "input is not a URL");
            invalid_hostname("")
        })?;

        // Url::path() drops dot segments and rewrites backslashes, so keys come from the input.
        let path = decode_path(raw_path(raw));
        let invalid_path = || Error::InvalidPath {
            url: raw.to_string(),
            path: path.clone(),
        };
        let stripped = path.strip_prefix('/').unwrap_or(&path);

        let host = url.host_str().unwrap_or_default();

        if url.scheme() == self.config.scheme {
            if host.is_empty() {
                return Err(invalid_hostname(host));
            }
            if stripped.is_empty() {
                return Err(invalid_path());
            }
            return Ok(self.resolved(
                raw,
                Reference::new(host, stripped),
                AddressStyle::SchemeNative,
                None,
            ));
        }

        let shape = self
            .classify_host(host)
            .ok_or_else(|| invalid_hostname(host))?;

        match shape {
            HostShape::Endpoint { region } => match stripped.split_once('/') {
                Some((bucket, key)) if !bucket.is_empty() && !key.is_empty() => Ok(self.resolved(
                    raw,
                    Reference::new(bucket, key),
                    AddressStyle::PathStyle,
                    region,
                )),
                _ => Err(invalid_path()),
            },
            HostShape::Bucket { bucket, region } => Ok(self.resolved(
                raw,
                Reference::new(bucket, stripped),
                AddressStyle::VirtualHosted,
                region,
            )),
        }
    }

    fn resolved(
        &self,
        raw: &str,
        reference: Reference,
        style: AddressStyle,
        region: Option<String>,
    ) -> Resolution {
        tracing::debug!(
            url = raw,
            %style,
            bucket = %reference.bucket,
            key = %reference.key,
            region = region.as_deref().unwrap_or_default(),
            "resolved address"
        );
        Resolution {
            reference,
            style,
            region,
        }
    }

    /// Locate the endpoint label in `host` and split off any bucket prefix
    ///
    /// The rightmost endpoint-shaped label wins, so bucket names that contain
    /// dots or start with `s3-` stay intact.
    fn classify_host(&self, host: &str) -> Option<HostShape> {
        if host.is_empty() {
            return None;
        }

        let labels: Vec<&str> = host.split('.').collect();
        if labels.iter().any(|label| label.is_empty()) {
            return None;
        }

        let index = labels
            .iter()
            .rposition(|label| endpoint_region(label).is_some())?;

        let domain = &labels[index + 1..];
        if domain.is_empty() || !self.domain_allowed(&domain.join(".")) {
            return None;
        }

        let region = endpoint_region(labels[index])
            .flatten()
            .map(str::to_string);

        if index == 0 {
            Some(HostShape::Endpoint { region })
        } else {
            Some(HostShape::Bucket {
                bucket: labels[..index].join("."),
                region,
            })
        }
    }

    fn domain_allowed(&self, domain: &str) -> bool {
        self.config.domains.is_empty()
            || self.config.domains.iter().any(|allowed| {
                domain == allowed
                    || domain
                        .strip_suffix(allowed.as_str())
                        .is_some_and(|rest| rest.ends_with('.'))
            })
    }
}

/// Parse `raw` with the default resolver settings
pub fn parse_url(raw: &str) -> Result<Reference> {
    Resolver::default().parse(raw)
}

/// Match `s3` or `s3-{region}`, returning the region if present
fn endpoint_region(label: &str) -> Option<Option<&str>> {
    if label == ENDPOINT_LABEL {
        return Some(None);
    }

    label
        .strip_prefix(ENDPOINT_LABEL)
        .and_then(|rest| rest.strip_prefix('-'))
        .filter(|region| !region.is_empty())
        .map(Some)
}

/// Slice the path out of `raw`: after the authority, up to any query or fragment
fn raw_path(raw: &str) -> &str {
    let raw = raw.trim_matches(|c: char| c <= ' ');
    let Some((_, rest)) = raw.split_once("://") else {
        return "";
    };

    let start = rest.find(['/', '\\', '?', '#']).unwrap_or(rest.len());
    let rest = &rest[start..];
    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    &rest[..end]
}

/// Percent-decode a URL path, keeping it as-is if it is not valid UTF-8
fn decode_path(path: &str) -> String {
    urlencoding::decode(path)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
