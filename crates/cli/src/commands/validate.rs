//! validate command - Check an explicit bucket/key pair

use clap::Args;
use s3url_core::Reference;
use serde::Serialize;

use crate::exit_code::ExitCode;
use crate::output::Formatter;

/// Validate an explicit bucket/key pair
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Bucket name
    #[arg(long, default_value = "")]
    pub bucket: String,

    /// Object key
    #[arg(long, default_value = "")]
    pub key: String,
}

#[derive(Debug, Serialize)]
struct ValidateOutput {
    valid: bool,
    url: String,
}

/// Execute the validate command
pub fn execute(args: ValidateArgs, formatter: &Formatter) -> ExitCode {
    let reference = Reference::new(args.bucket, args.key);

    if let Err(e) = reference.validate() {
        formatter.error(&e.to_string());
        return ExitCode::from_error(&e);
    }

    if formatter.is_json() {
        formatter.json(&ValidateOutput {
            valid: true,
            url: reference.to_string(),
        });
    } else {
        formatter.success(&format!("{reference} is valid"));
    }

    ExitCode::Success
}
