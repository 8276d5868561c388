//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use tracing::debug;

use foldit_core::application::ports::Reporter;

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Manages CLI output based on flags and configuration.
#[derive(Debug, Clone)]
pub struct OutputManager {
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let color = !(args.no_color || config.output.no_color) && io::stdout().is_terminal();
        Self {
            quiet: args.quiet,
            color,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.color {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        } else {
            format!("\u{2713} {msg}")
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.color {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        } else {
            format!("\u{26a0} {msg}")
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.color {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        } else {
            format!("\u{2139} {msg}")
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.color {
            text.cyan().bold().to_string()
        } else {
            text.to_owned()
        };
        self.term.write_line(&line)
    }

    /// Indented bullet list under a header, e.g. next steps.
    pub fn list(&self, heading: &str, items: &[String]) -> io::Result<()> {
        if self.quiet || items.is_empty() {
            return Ok(());
        }
        self.print("")?;
        self.header(heading)?;
        for item in items {
            self.print(&format!("   \u{2022} {item}"))?;
        }
        Ok(())
    }
}

/// Feeds the scaffold pipeline's progress lines into an [`OutputManager`].
///
/// The port has no error channel; a failed terminal write is logged and
/// dropped.
#[derive(Debug, Clone)]
pub struct ConsoleReporter(OutputManager);

impl ConsoleReporter {
    pub fn new(output: OutputManager) -> Self {
        Self(output)
    }
}

fn dropped(result: io::Result<()>) {
    if let Err(e) = result {
        debug!(error = %e, "Dropped progress line");
    }
}

impl Reporter for ConsoleReporter {
    fn success(&self, message: &str) {
        dropped(self.0.success(message));
    }

    fn info(&self, message: &str) {
        dropped(self.0.info(message));
    }

    fn warning(&self, message: &str) {
        dropped(self.0.warning(message));
    }

    fn note(&self, heading: &str, body: &str) {
        dropped(self.0.header(heading));
        dropped(self.0.print(body));
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            quiet,
            no_color,
            ..GlobalArgs::default()
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true);
        assert!(out.print("hello").is_ok());
        assert!(out.list("Next steps:", &["a".into()]).is_ok());
    }

    #[test]
    fn no_color_flag_disables_color() {
        assert!(!make_manager(false, true).color);
    }

    #[test]
    fn config_can_disable_color() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let out = OutputManager::new(&GlobalArgs::default(), &config);
        assert!(!out.color);
    }

    #[test]
    fn reporter_never_panics() {
        let reporter = ConsoleReporter::new(make_manager(false, true));
        reporter.success("Created page: src/app/about/page.tsx");
        reporter.note("Add the following models to prisma/schema.prisma:", "model A {}");
    }
}
