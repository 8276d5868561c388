//! Infrastructure adapters for FoldIt.
//!
//! This crate implements the ports defined in `foldit-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod process;
pub mod renderer;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{SystemCommandRunner, SystemPackageInstaller};
pub use renderer::BuiltinRenderer;
