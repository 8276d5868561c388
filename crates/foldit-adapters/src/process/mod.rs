//! Subprocess adapters: package installs and follow-up tools.
//!
//! Children inherit stdio so the user sees the package manager's own
//! progress output. Both adapters block until the child exits.

use std::path::Path;
use std::process::Command;

use tracing::{debug, instrument};

use foldit_core::{
    application::{
        ApplicationError,
        ports::{CommandRunner, PackageInstaller},
    },
    domain::{InstallStep, PackageManager, ToolCommand},
    error::FolditResult,
};

/// Runs tools with `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    #[instrument(skip_all, fields(command = %command))]
    fn run(&self, cwd: &Path, command: &ToolCommand) -> FolditResult<()> {
        let status = Command::new(program_name(&command.program))
            .args(&command.args)
            .current_dir(cwd)
            .status()
            .map_err(|e| ApplicationError::CommandFailed {
                command: command.to_string(),
                reason: format!("could not start {}: {e}", command.program),
            })?;

        debug!(%status, "Command exited");
        if status.success() {
            Ok(())
        } else {
            Err(ApplicationError::CommandFailed {
                command: command.to_string(),
                reason: status.to_string(),
            }
            .into())
        }
    }
}

/// Installs packages by shelling out to npm, yarn or pnpm.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPackageInstaller {
    runner: SystemCommandRunner,
}

impl SystemPackageInstaller {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PackageInstaller for SystemPackageInstaller {
    fn install(
        &self,
        cwd: &Path,
        manager: PackageManager,
        step: &InstallStep,
    ) -> FolditResult<()> {
        if step.packages.is_empty() {
            return Ok(());
        }
        self.runner.run(cwd, &step.command(manager))
    }
}

/// npm, npx, yarn and pnpm ship as `.cmd` shims on Windows.
fn program_name(program: &str) -> String {
    if cfg!(windows) {
        format!("{program}.cmd")
    } else {
        program.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(program: &str, args: &[&str]) -> ToolCommand {
        ToolCommand {
            program: program.into(),
            args: args.iter().map(|a| (*a).to_owned()).collect(),
            description: "test",
        }
    }

    #[test]
    fn missing_program_is_a_command_failure() {
        let err = SystemCommandRunner::new()
            .run(
                Path::new("."),
                &command("definitely-not-a-real-program-foldit", &[]),
            )
            .unwrap_err();
        assert!(err.to_string().contains("definitely-not-a-real-program-foldit"));
    }

    #[test]
    fn empty_install_is_a_no_op() {
        let step = InstallStep {
            packages: vec![],
            dev: false,
        };
        SystemPackageInstaller::new()
            .install(Path::new("."), PackageManager::Npm, &step)
            .unwrap();
    }
}
