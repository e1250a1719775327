//! CLI errors with categories, suggestions and sysexits.h exit codes.
//!
//! A lookup that finds nothing is never an error; these cover bad command
//! lines and the rare failure to build the catalog or write output.

use std::io;

use clap::error::ContextKind;
use clap::error::ContextValue;
use clap::error::ErrorKind;
use drinks_common::ErrorCategory;
use drinks_common::error_codes::EX_OK;
use thiserror::Error;

use crate::catalog::CatalogError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Usage(#[from] clap::Error),

    #[error("Invalid recipe catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Returns the error category for programmatic handling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            CliError::Usage(_) => ErrorCategory::InvalidInput,
            CliError::Catalog(_) => ErrorCategory::Internal,
            CliError::Io(_) => ErrorCategory::External,
            CliError::Json(e) if e.is_io() => ErrorCategory::External,
            CliError::Json(_) => ErrorCategory::Internal,
        }
    }

    /// Clap reports `--help` and `--version` through its error type; those
    /// are not failures.
    pub fn is_informational(&self) -> bool {
        matches!(self, CliError::Usage(e) if !e.use_stderr())
    }

    /// Converts to UNIX sysexits.h-compliant exit code.
    pub fn exit_code(&self) -> i32 {
        if self.is_informational() {
            EX_OK
        } else {
            self.category().exit_code()
        }
    }

    /// Returns a helpful suggestion for resolving the error, if there is one.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::Usage(e) => match e.kind() {
                ErrorKind::MissingRequiredArgument | ErrorKind::ArgumentConflict => {
                    Some("Pass exactly one of --list, --ingredients or --drink.")
                }
                ErrorKind::InvalidValue if is_format_arg(e) => {
                    Some("Supported formats are 'text' and 'json'.")
                }
                _ => None,
            },
            CliError::Catalog(_) => None,
            CliError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                Some("The output stream was closed before all output was written.")
            }
            CliError::Io(_) | CliError::Json(_) => None,
        }
    }
}

fn is_format_arg(error: &clap::Error) -> bool {
    matches!(
        error.get(ContextKind::InvalidArg),
        Some(ContextValue::String(arg)) if arg.starts_with("--format")
    )
}
