//! # FoldIt CLI
//!
//! Next.js scaffolding from the command line.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version`).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (defaults + files + env).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                      |
//! |------|----------------------------------------------|
//! |  0   | Success, help or version                     |
//! |  1   | Usage error, conflict or any other failure   |

use std::process::ExitCode;

use clap::{CommandFactory, Parser, error::ErrorKind};
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, EXIT_FAILURE},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return handle_parse_error(&e),
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(EXIT_FAILURE);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        skip_install = cli.global.skip_install,
        "CLI started"
    );

    let Some(command) = cli.command else {
        return print_help();
    };
    let global = cli.global;
    let verbose = global.verbose > 0;

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(global.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, verbose),
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&global, &config);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(command, &global, &config, &output) {
        Ok(()) => {
            info!("FoldIt completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(
    command: Commands,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    match command {
        Commands::GeneratePage(args) => commands::page::execute(args, global, config, output),
        Commands::GenerateApi(args) => commands::api::execute(args, global, config, output),
        Commands::GenerateService(args) => {
            commands::service::execute(args, global, config, output)
        }
        Commands::GenerateStructure(args) => {
            commands::structure::execute(args, global, config, output)
        }
        Commands::Integrate(cmd) => commands::integrate::execute(cmd, global, config, output),
        Commands::Dockerize(args) => commands::docker::execute(args, global, config, output),
        Commands::AddKube(args) => commands::kube::execute(args, global, config, output),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Help and version go to stdout with status 0. Anything else is a usage
/// error: clap's message, plus the full help for an unknown command.
fn handle_parse_error(err: &clap::Error) -> ExitCode {
    if let Err(io) = err.print() {
        eprintln!("{io}");
    }
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        ErrorKind::InvalidSubcommand => {
            eprintln!("{}", Cli::command().render_help());
            ExitCode::from(EXIT_FAILURE)
        }
        _ => ExitCode::from(EXIT_FAILURE),
    }
}

fn print_help() -> ExitCode {
    match Cli::command().print_help() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => handle_error(CliError::from(e), false),
    }
}

/// Translate a `CliError` into a user message and an exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
