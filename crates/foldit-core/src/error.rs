//! Unified error handling for FoldIt Core.
//!
//! Wraps domain and application errors behind one type that knows how to
//! categorise itself and what the user can do about it.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for FoldIt Core operations.
#[derive(Debug, Error, Clone)]
pub enum FolditError {
    /// Invalid request: bad names, flags or option values.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Failure while executing a plan.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl FolditError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Check foldit.toml and FOLDIT__* environment variables".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in FoldIt".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// True when the failure is an existing-path conflict.
    pub fn is_conflict(&self) -> bool {
        self.category() == ErrorCategory::Conflict
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input; fix the command line.
    Validation,
    /// Something already exists where a new file was expected.
    Conflict,
    /// A required project file is missing.
    NotFound,
    Io,
    Subprocess,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type FolditResult<T> = Result<T, FolditError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn domain_errors_are_validation() {
        let err: FolditError = DomainError::NoHttpMethods.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.to_string(), "At least one HTTP method is required");
    }

    #[test]
    fn already_exists_is_a_conflict() {
        let err: FolditError = ApplicationError::AlreadyExists {
            path: PathBuf::from("src/app/about"),
        }
        .into();
        assert!(err.is_conflict());
        assert!(err.to_string().contains("already exists"));
    }
}
