//! Driven (output) ports, implemented by infrastructure.

use std::path::Path;

use crate::domain::{InstallStep, PackageManager, Template, ToolCommand};
use crate::error::FolditResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `foldit_adapters::filesystem::LocalFilesystem` (production)
/// - `foldit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are absolute by the time they reach the port; the application
/// resolves project-relative paths against the execution context first.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> FolditResult<()>;

    /// Create a file that must not exist yet.
    ///
    /// An existing file yields `ApplicationError::AlreadyExists`; the check
    /// and the create are one operation.
    fn create_new(&self, path: &Path, content: &str) -> FolditResult<()>;

    /// Write a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> FolditResult<()>;

    /// Append to a file, creating it when absent.
    fn append(&self, path: &Path, content: &str) -> FolditResult<()>;

    /// Read a file as UTF-8. `Ok(None)` when it does not exist.
    fn read_to_string(&self, path: &Path) -> FolditResult<Option<String>>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template rendering.
///
/// Implemented by `foldit_adapters::renderer::BuiltinRenderer`.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &Template) -> FolditResult<String>;
}

/// Port for installing npm packages.
#[cfg_attr(test, mockall::automock)]
pub trait PackageInstaller: Send + Sync {
    /// Install `step` with `manager` in `cwd`, blocking until it exits.
    fn install(&self, cwd: &Path, manager: PackageManager, step: &InstallStep)
    -> FolditResult<()>;
}

/// Port for running other external tools.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    fn run(&self, cwd: &Path, command: &ToolCommand) -> FolditResult<()>;
}

/// Port for user-facing progress output.
///
/// Messages arrive fully formatted; implementations decide on colour,
/// symbols and quiet mode.
#[cfg_attr(test, mockall::automock)]
pub trait Reporter: Send + Sync {
    fn success(&self, message: &str);
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    /// A block of text the user should copy somewhere by hand.
    fn note(&self, heading: &str, body: &str);
}
