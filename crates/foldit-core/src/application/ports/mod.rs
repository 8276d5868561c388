//! Application ports (traits) for external dependencies.
//!
//! The application layer only talks to the outside world through these
//! traits. `foldit-adapters` implements them for real disks and processes,
//! the CLI implements the reporter.
//!
//! - `Filesystem`: reads, exclusive creates, appends
//! - `TemplateRenderer`: template descriptor to text
//! - `PackageInstaller`: dependency installs with the detected manager
//! - `CommandRunner`: other external tools (`npx prisma ...`)
//! - `Reporter`: user-facing progress lines

pub mod output;

pub use output::{CommandRunner, Filesystem, PackageInstaller, Reporter, TemplateRenderer};

#[cfg(test)]
pub use output::{
    MockCommandRunner, MockFilesystem, MockPackageInstaller, MockReporter, MockTemplateRenderer,
};
