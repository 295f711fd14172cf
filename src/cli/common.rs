//! Shared CLI plumbing: error type and exit codes.

use std::fmt;

/// Process exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed.
    Success = 0,
    /// Bad arguments or input values.
    ValidationError = 2,
    /// File system or clipboard I/O failed.
    IoError = 3,
    /// Rendering failed at every stage.
    RenderError = 4,
}

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// An error carrying a user-facing message and the exit code to die with.
#[derive(Debug)]
pub struct CliError {
    message: String,
    code: ExitCode,
}

impl CliError {
    /// A bad-input error (exit code 2).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: ExitCode::ValidationError,
        }
    }

    /// An I/O error (exit code 3).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: ExitCode::IoError,
        }
    }

    /// A rendering error (exit code 4).
    pub fn render(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: ExitCode::RenderError,
        }
    }

    /// The user-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The numeric exit code for `std::process::exit`.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.code as i32
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        assert_eq!(CliError::validation("x").exit_code(), 2);
        assert_eq!(CliError::io("x").exit_code(), 3);
        assert_eq!(CliError::render("x").exit_code(), 4);
    }
}
