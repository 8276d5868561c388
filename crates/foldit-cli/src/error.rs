//! Error handling for the FoldIt CLI.
//!
//! Provides structured errors with:
//! - the `Error <doing X>: <message>` line users see on stderr
//! - actionable suggestions
//! - proper error chaining
//!
//! Every failure exits with status 1; the category only changes how loudly
//! the failure is logged.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use foldit_core::error::{ErrorCategory as CoreCategory, FolditError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Status returned to the OS for any failure.
pub const EXIT_FAILURE: u8 = 1;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A scaffold command failed. `action` is the gerund phrase naming what
    /// the command was doing, e.g. `generating page scaffold`.
    #[error("Error {action}: {source}")]
    Scaffold {
        action: &'static str,
        #[source]
        source: FolditError,
    },

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Writing to the terminal failed.
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Scaffold { source, .. } => source.suggestions(),
            Self::Config { .. } => {
                let mut hints = vec![format!("Check ./{}", crate::config::LOCAL_FILE)];
                if let Some(path) = crate::config::AppConfig::config_path() {
                    hints.push(format!("Check {}", path.display()));
                }
                hints.push("Check FOLDIT__* environment variables".into());
                hints
            }
            Self::Io { .. } => vec!["Check that stdout and stderr are writable".into()],
        }
    }

    /// Get the error category for styling and log severity.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Scaffold { source, .. } => match source.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Conflict => ErrorCategory::Conflict,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Io | CoreCategory::Subprocess | CoreCategory::Internal => {
                    ErrorCategory::Internal
                }
            },
            Self::Config { .. } => ErrorCategory::Configuration,
            Self::Io { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    pub fn exit_code(&self) -> u8 {
        EXIT_FAILURE
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let headline = self.to_string();
        let mut output = format!("\n{} {}\n", "\u{2717}".red().bold(), headline.red());

        if verbose {
            for cause in self.causes(&headline) {
                output.push_str(&format!("  {} {}\n", "\u{2192}".dimmed(), cause.dimmed()));
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  \u{2022} {suggestion}\n"));
            }
        }

        if !verbose {
            output.push_str(&format!(
                "\n{} {}\n",
                "\u{2139}".blue(),
                "Use --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`]; no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let headline = self.to_string();
        let mut out = format!("\n\u{2717} {headline}\n");

        if verbose {
            for cause in self.causes(&headline) {
                out.push_str(&format!("  Caused by: {cause}\n"));
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  \u{2022} {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Conflict => tracing::warn!("Conflict: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }

    /// Source messages not already spelled out in the headline.
    fn causes(&self, headline: &str) -> Vec<String> {
        let mut causes = Vec::new();
        let mut source = self.source();
        while let Some(err) = source {
            let text = err.to_string();
            if !headline.contains(&text) {
                causes.push(text);
            }
            source = err.source();
        }
        causes
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad arguments or option values.
    UserError,
    /// The target already exists.
    Conflict,
    /// A required project file is missing.
    NotFound,
    Configuration,
    /// Filesystem, rendering or other system failure.
    Internal,
}

// ── ScaffoldContext trait ─────────────────────────────────────────────────────

/// Attach the action a command was performing to a core failure.
pub trait ScaffoldContext<T> {
    fn during(self, action: &'static str) -> CliResult<T>;
}

impl<T, E> ScaffoldContext<T> for Result<T, E>
where
    E: Into<FolditError>,
{
    fn during(self, action: &'static str) -> CliResult<T> {
        self.map_err(|e| CliError::Scaffold {
            action,
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    use foldit_core::application::ApplicationError;
    use foldit_core::domain::DomainError;

    fn conflict() -> CliError {
        Err::<(), _>(ApplicationError::AlreadyExists {
            path: PathBuf::from("src/app/about"),
        })
        .during("generating page scaffold")
        .unwrap_err()
    }

    #[test]
    fn headline_names_the_action() {
        assert_eq!(
            conflict().to_string(),
            "Error generating page scaffold: src/app/about already exists"
        );
    }

    #[test]
    fn categories_follow_core_errors() {
        assert_eq!(conflict().category(), ErrorCategory::Conflict);

        let usage = Err::<(), _>(DomainError::NoHttpMethods)
            .during("generating API route")
            .unwrap_err();
        assert_eq!(usage.category(), ErrorCategory::UserError);

        let missing = Err::<(), _>(ApplicationError::MissingProjectFile {
            path: PathBuf::from("package.json"),
        })
        .during("creating Docker files")
        .unwrap_err();
        assert_eq!(missing.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn every_failure_exits_one() {
        assert_eq!(conflict().exit_code(), 1);
        let io_err: CliError = io::Error::other("broken pipe").into();
        assert_eq!(io_err.exit_code(), 1);
        assert_eq!(io_err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn suggestions_come_from_core() {
        let suggestions = conflict().suggestions();
        assert!(suggestions.iter().any(|s| s.contains("src/app/about")));
    }

    #[test]
    fn format_plain_contains_headline_and_suggestions() {
        let s = conflict().format_plain(false);
        assert!(s.contains("\u{2717} Error generating page scaffold:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn verbose_does_not_repeat_the_headline() {
        let s = conflict().format_plain(true);
        assert!(!s.contains("Caused by"));
        assert!(!s.contains("--verbose"));
    }
}
