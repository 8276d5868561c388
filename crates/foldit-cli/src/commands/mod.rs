//! Command handlers.
//!
//! Each handler turns its parsed arguments into a `ScaffoldRequest`, runs
//! it through [`scaffold`], and prints a summary. No business logic lives
//! here.

pub mod api;
pub mod completions;
pub mod docker;
pub mod integrate;
pub mod kube;
pub mod page;
pub mod service;
pub mod structure;

use std::sync::Arc;

use tracing::{debug, info, instrument};

use foldit_adapters::{
    BuiltinRenderer, LocalFilesystem, SystemCommandRunner, SystemPackageInstaller,
};
use foldit_core::{
    application::ApplicationError,
    prelude::{ExecutionContext, ScaffoldReport, ScaffoldRequest, ScaffoldService},
};

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliResult, ScaffoldContext},
    output::{ConsoleReporter, OutputManager},
};

/// Wire the real adapters together and run one request in the current
/// directory.
#[instrument(skip_all, fields(kind = %request.kind(), name = %request.name()))]
pub fn scaffold(
    request: &ScaffoldRequest,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<ScaffoldReport> {
    let action = request.action();
    let cwd = std::env::current_dir()
        .map_err(|e| ApplicationError::FilesystemError {
            path: ".".into(),
            reason: e.to_string(),
        })
        .during(action)?;

    let filesystem = Arc::new(LocalFilesystem::new());
    let mut ctx = ExecutionContext::detect(&cwd, &*filesystem)
        .with_auto_install(config.packages.auto_install && !global.skip_install);
    if let Some(manager) = config.packages.manager {
        ctx = ctx.with_package_manager(manager);
    }
    debug!(
        package_manager = %ctx.package_manager(),
        auto_install = ctx.auto_install(),
        "Execution context ready"
    );

    let service = ScaffoldService::new(
        Box::new(BuiltinRenderer::new()),
        filesystem,
        Box::new(SystemPackageInstaller::new()),
        Box::new(SystemCommandRunner::new()),
        Box::new(ConsoleReporter::new(output.clone())),
    );

    let report = service.scaffold(request, &ctx).during(action)?;
    info!(
        written = report.written().count(),
        pending = report.pending_commands.len(),
        "Command finished"
    );
    Ok(report)
}

/// Print the commands that still have to be run by hand, if any.
pub fn print_pending(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    output.list("Run these commands manually:", &report.pending_commands)?;
    Ok(())
}
