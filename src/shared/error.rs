use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Client-facing error categories.
///
/// Transport layers (CLI, HTTP) map these to their own status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The base component or a requested metric does not exist
    NotFound,
    /// The caller lacks the required role on the project
    Forbidden,
    /// The request itself is malformed
    BadRequest,
    /// Programmer, configuration or infrastructure failure
    Internal,
}

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between different
/// types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the component tree was loaded and written
    Success = 0,
    /// Invalid command-line arguments or request parameters
    InvalidArguments = 2,
    /// Base component or metric keys not found
    NotFound = 3,
    /// Insufficient privileges on the project
    Forbidden = 4,
    /// Application error (store, file I/O, configuration, etc.)
    ApplicationError = 5,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error returned by the application.
    ///
    /// Errors that do not carry a `TreeError` are application errors.
    pub fn from_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<TreeError>().map(TreeError::category) {
            Some(ErrorCategory::NotFound) => ExitCode::NotFound,
            Some(ErrorCategory::Forbidden) => ExitCode::Forbidden,
            Some(ErrorCategory::BadRequest) => ExitCode::InvalidArguments,
            Some(ErrorCategory::Internal) | None => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::NotFound => write!(f, "Not Found (3)"),
            ExitCode::Forbidden => write!(f, "Forbidden (4)"),
            ExitCode::ApplicationError => write!(f, "Application Error (5)"),
        }
    }
}

/// Application-specific errors for component tree loading.
///
/// Uses thiserror to derive Display and Error traits automatically.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("Insufficient privileges")]
    InsufficientPrivileges,

    #[error("Illegal state: {message}")]
    IllegalState { message: String },

    /// Validation error for request and builder parameters
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read store fixture: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FixtureReadError { path: PathBuf, details: String },

    #[error("Failed to parse store fixture: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains a valid JSON store fixture")]
    FixtureParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

impl TreeError {
    pub fn not_found(message: impl Into<String>) -> Self {
        TreeError::NotFound {
            message: message.into(),
        }
    }

    pub fn illegal_state(message: impl Into<String>) -> Self {
        TreeError::IllegalState {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        TreeError::Validation {
            message: message.into(),
        }
    }

    /// Client-facing category of this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            TreeError::NotFound { .. } => ErrorCategory::NotFound,
            TreeError::InsufficientPrivileges => ErrorCategory::Forbidden,
            TreeError::Validation { .. } => ErrorCategory::BadRequest,
            TreeError::IllegalState { .. }
            | TreeError::FixtureReadError { .. }
            | TreeError::FixtureParseError { .. }
            | TreeError::FileWriteError { .. } => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::NotFound.as_i32(), 3);
        assert_eq!(ExitCode::Forbidden.as_i32(), 4);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 5);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::NotFound), "Not Found (3)");
        assert_eq!(format!("{}", ExitCode::Forbidden), "Forbidden (4)");
    }

    #[test]
    fn test_exit_code_from_tree_error() {
        let not_found: anyhow::Error = TreeError::not_found("Component key 'x' not found").into();
        assert_eq!(ExitCode::from_error(&not_found), ExitCode::NotFound);

        let forbidden: anyhow::Error = TreeError::InsufficientPrivileges.into();
        assert_eq!(ExitCode::from_error(&forbidden), ExitCode::Forbidden);

        let invalid: anyhow::Error = TreeError::validation("page must be >= 1").into();
        assert_eq!(ExitCode::from_error(&invalid), ExitCode::InvalidArguments);

        let fatal: anyhow::Error = TreeError::illegal_state("boom").into();
        assert_eq!(ExitCode::from_error(&fatal), ExitCode::ApplicationError);
    }

    #[test]
    fn test_exit_code_from_context_wrapped_error() {
        let error = anyhow::Error::from(TreeError::InsufficientPrivileges)
            .context("Failed to load component tree");
        assert_eq!(ExitCode::from_error(&error), ExitCode::Forbidden);
    }

    #[test]
    fn test_exit_code_from_plain_anyhow_error() {
        let error = anyhow::anyhow!("store unavailable");
        assert_eq!(ExitCode::from_error(&error), ExitCode::ApplicationError);
    }

    #[test]
    fn test_not_found_display_is_message() {
        let error = TreeError::not_found("The following metric keys are not found: bogus_key");
        assert_eq!(
            format!("{}", error),
            "The following metric keys are not found: bogus_key"
        );
    }

    #[test]
    fn test_insufficient_privileges_display() {
        assert_eq!(
            format!("{}", TreeError::InsufficientPrivileges),
            "Insufficient privileges"
        );
    }

    #[test]
    fn test_fixture_read_error_display() {
        let error = TreeError::FixtureReadError {
            path: PathBuf::from("/test/store.json"),
            details: "File not found".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read store fixture"));
        assert!(display.contains("/test/store.json"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = TreeError::FileWriteError {
            path: PathBuf::from("/test/output.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            TreeError::not_found("x").category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            TreeError::InsufficientPrivileges.category(),
            ErrorCategory::Forbidden
        );
        assert_eq!(
            TreeError::validation("x").category(),
            ErrorCategory::BadRequest
        );
        assert_eq!(
            TreeError::illegal_state("x").category(),
            ErrorCategory::Internal
        );
    }
}
