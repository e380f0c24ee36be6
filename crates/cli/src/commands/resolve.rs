//! resolve command - Parse and validate an S3 URL
//!
//! Prints the bucket and key an S3 URL points at, along with the addressing
//! style it was written in.

use clap::Args;
use s3url_core::{AddressStyle, Config, Resolution, Resolver};
use serde::Serialize;

use crate::exit_code::ExitCode;
use crate::output::Formatter;

/// Parse and validate an S3 URL
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Object URL (https://bucket.s3.amazonaws.com/key, https://s3.amazonaws.com/bucket/key or s3://bucket/key)
    #[arg(env = "S3URL")]
    pub url: String,
}

#[derive(Debug, Serialize)]
struct ResolveOutput<'a> {
    bucket: &'a str,
    key: &'a str,
    style: AddressStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<&'a str>,
    url: String,
}

impl<'a> From<&'a Resolution> for ResolveOutput<'a> {
    fn from(resolution: &'a Resolution) -> Self {
        Self {
            bucket: &resolution.reference.bucket,
            key: &resolution.reference.key,
            style: resolution.style,
            region: resolution.region.as_deref(),
            url: resolution.reference.to_string(),
        }
    }
}

/// Execute the resolve command
pub fn execute(args: ResolveArgs, config: &Config, formatter: &Formatter) -> ExitCode {
    let resolver = Resolver::new(config.resolver.clone());

    let resolution = match resolver.resolve(&args.url) {
        Ok(resolution) => resolution,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::from_error(&e);
        }
    };

    if let Err(e) = resolution.reference.validate() {
        formatter.error(&e.to_string());
        return ExitCode::from_error(&e);
    }

    if formatter.is_json() {
        formatter.json(&ResolveOutput::from(&resolution));
    } else {
        formatter.println(&render_human(&resolution));
    }

    ExitCode::Success
}

/// Render a resolution as aligned `Label : value` lines
fn render_human(resolution: &Resolution) -> String {
    let mut lines = vec![
        format!("Bucket : {}", resolution.reference.bucket),
        format!("Key    : {}", resolution.reference.key),
        format!("Style  : {}", resolution.style),
    ];
    if let Some(region) = &resolution.region {
        lines.push(format!("Region : {region}"));
    }
    lines.push(format!("URL    : {}", resolution.reference));
    lines.join("\n")
}
