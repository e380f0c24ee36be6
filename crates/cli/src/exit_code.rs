//! Exit code definitions for the s3url CLI
//!
//! Scripts depend on these values; changing one is a breaking change.

/// Exit codes for the s3url CLI application.
///
/// Scripts branch on these to tell malformed input apart from an
/// incomplete reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Operation completed successfully
    Success = 0,

    /// General/unspecified error
    GeneralError = 1,

    /// User input error: unrecognized URL, bad config, etc.
    UsageError = 2,

    /// The reference is missing its bucket or key
    ValidationError = 3,
}

impl ExitCode {
    /// Convert exit code to i32 for use with std::process::exit
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Create exit code from i32 value
    ///
    /// Returns None if the value doesn't correspond to a known exit code.
    pub const fn from_i32(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            1 => Some(Self::GeneralError),
            2 => Some(Self::UsageError),
            3 => Some(Self::ValidationError),
            _ => None,
        }
    }

    /// Map a core error onto its exit code
    pub fn from_error(error: &s3url_core::Error) -> Self {
        Self::from_i32(error.exit_code()).unwrap_or(Self::GeneralError)
    }

    /// Get a human-readable description of the exit code
    pub const fn description(self) -> &'static str {
        match self {
            Self::Success => "Operation completed successfully",
            Self::GeneralError => "General error",
            Self::UsageError => "Invalid arguments, URL or configuration",
            Self::ValidationError => "Bucket or key missing",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.description(), self.as_i32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use s3url_core::Error;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::UsageError.as_i32(), 2);
        assert_eq!(ExitCode::ValidationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_from_i32() {
        assert_eq!(ExitCode::from_i32(0), Some(ExitCode::Success));
        assert_eq!(ExitCode::from_i32(1), Some(ExitCode::GeneralError));
        assert_eq!(ExitCode::from_i32(2), Some(ExitCode::UsageError));
        assert_eq!(ExitCode::from_i32(3), Some(ExitCode::ValidationError));
        assert_eq!(ExitCode::from_i32(99), None);
    }

    #[test]
    fn test_exit_code_from_error() {
        let err = Error::InvalidPath {
            url: "s3://bucket".into(),
            path: String::new(),
        };
        assert_eq!(ExitCode::from_error(&err), ExitCode::UsageError);
        assert_eq!(
            ExitCode::from_error(&Error::MissingKey),
            ExitCode::ValidationError
        );
        assert_eq!(
            ExitCode::from_error(&Error::Io(std::io::Error::other("boom"))),
            ExitCode::GeneralError
        );
    }

    #[test]
    fn test_exit_code_into_i32() {
        let code: i32 = ExitCode::ValidationError.into();
        assert_eq!(code, 3);
    }

    #[test]
    fn test_exit_code_display() {
        let display = format!("{}", ExitCode::Success);
        assert!(display.contains("0"));
        assert!(display.contains("successfully"));

        let display = format!("{}", ExitCode::ValidationError);
        assert!(display.contains("3"));
        assert!(display.contains("missing"));
    }
}
