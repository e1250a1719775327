//! Error categories and their UNIX sysexits.h exit codes.

/// Exit status for a successful run, including lookups that find nothing.
pub const EX_OK: i32 = 0;
/// Command line usage error.
pub const EX_USAGE: i32 = 64;
/// Internal software error.
pub const EX_SOFTWARE: i32 = 70;
/// Failure writing output.
pub const EX_IOERR: i32 = 74;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidInput,
    Internal,
    External,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::InvalidInput => "invalid_input",
            ErrorCategory::Internal => "internal",
            ErrorCategory::External => "external",
        }
    }

    /// Converts to UNIX sysexits.h-compliant exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCategory::InvalidInput => EX_USAGE,
            ErrorCategory::Internal => EX_SOFTWARE,
            ErrorCategory::External => EX_IOERR,
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
