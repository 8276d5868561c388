//! Application layer errors.
//!
//! These errors come from executing a plan against the outside world.
//! Invalid requests are `DomainError`s and never reach this layer.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while executing a scaffold plan.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The target file or directory is already on disk.
    #[error("{} already exists", path.display())]
    AlreadyExists { path: PathBuf },

    /// A file the command needs (usually `package.json`) is missing.
    #[error("{} not found in the current directory", path.display())]
    MissingProjectFile { path: PathBuf },

    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    #[error("Failed to render template '{template}': {reason}")]
    RenderingFailed {
        template: &'static str,
        reason: String,
    },

    /// An external program exited unsuccessfully or could not be started.
    #[error("Command `{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// `package.json` exists but is not a JSON object.
    #[error("Could not parse {}: {reason}", path.display())]
    ManifestUnreadable { path: PathBuf, reason: String },

    /// A shared in-memory store was poisoned by a panicking writer.
    #[error("Filesystem lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AlreadyExists { path } => vec![
                format!("Remove or rename {} first", path.display()),
                "Or choose a different name".into(),
            ],
            Self::MissingProjectFile { path } => vec![
                format!(
                    "Run this command from the root of a Next.js project (no {} here)",
                    path.display()
                ),
                "Create one with: npx create-next-app@latest".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::CommandFailed { command, .. } => {
                vec![format!("Run it manually: {command}")]
            }
            Self::ManifestUnreadable { path, .. } => {
                vec![format!("Check that {} is valid JSON", path.display())]
            }
            Self::RenderingFailed { .. } | Self::LockPoisoned => {
                vec!["Check the error details above".into()]
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyExists { .. } => ErrorCategory::Conflict,
            Self::MissingProjectFile { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::ManifestUnreadable { .. } => ErrorCategory::Io,
            Self::CommandFailed { .. } => ErrorCategory::Subprocess,
            Self::RenderingFailed { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
