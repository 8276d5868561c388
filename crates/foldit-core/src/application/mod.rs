//! Application layer for FoldIt.
//!
//! This layer contains:
//! - **Services**: the scaffold orchestrator, the materializer and
//!   `package.json` patching
//! - **Ports**: traits for the filesystem, rendering, processes and output
//! - **Context**: the per-invocation `ExecutionContext`
//! - **Errors**: failures that happen while executing a plan
//!
//! Decisions about *what* to write live in `crate::domain`; this layer only
//! decides how to carry a plan out.

pub mod context;
pub mod error;
pub mod ports;
pub mod services;

pub use context::ExecutionContext;
pub use error::ApplicationError;
pub use ports::{CommandRunner, Filesystem, PackageInstaller, Reporter, TemplateRenderer};
pub use services::{MaterializationResult, Materializer, Outcome, ScaffoldReport, ScaffoldService};
