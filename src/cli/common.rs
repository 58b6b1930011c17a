//! Shared error and exit code types for CLI commands.

use crate::error::SchemaError;
use std::fmt;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input was readable but did not fit (schema or configuration values)
    ValidationError = 1,
    /// A file could not be read, parsed or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit status.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error reported by a CLI command, carrying its exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// An I/O or parse failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// A schema or validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Wraps a library error, picking the exit code from its cause chain.
    ///
    /// Any [`SchemaError`] in the chain makes it a validation error; everything
    /// else (missing files, malformed JSON, failed writes) is an I/O error.
    pub fn from_anyhow(context: &str, err: &anyhow::Error) -> Self {
        let message = format!("{context}: {err:#}");
        if err.chain().any(|cause| cause.is::<SchemaError>()) {
            Self::validation(message)
        } else {
            Self::io(message)
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(ExitCode::ValidationError.code(), 1);
        assert_eq!(ExitCode::IoError.code(), 2);
    }

    #[test]
    fn test_from_anyhow_schema_error_is_validation() {
        let err = anyhow::Error::from(SchemaError::EmptyTable).context("Failed to render chart");
        let cli = CliError::from_anyhow("chart", &err);
        assert_eq!(cli.code, ExitCode::ValidationError);
        assert!(cli.message.starts_with("chart: Failed to render chart"));
        assert!(cli.message.contains("statistics table is empty"));
    }

    #[test]
    fn test_from_anyhow_other_errors_are_io() {
        let err = std::fs::read_to_string("/nonexistent/stats.json")
            .context("Failed to read /nonexistent/stats.json")
            .unwrap_err();
        let cli = CliError::from_anyhow("chart", &err);
        assert_eq!(cli.code, ExitCode::IoError);
        assert_eq!(cli.to_string(), cli.message);
    }
}
