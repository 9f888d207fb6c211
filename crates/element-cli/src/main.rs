//! # Element CLI
//!
//! Log in, scaffold and publish blocks to the Element registry.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch the invocation through the core dispatcher.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                     |
//! |------|-----------------------------|
//! |  0   | Success (including help)    |
//! |  1   | Internal / system error     |
//! |  2   | User / input error          |
//! |  3   | Resource not found          |
//! |  4   | Configuration error         |
//! |  5   | Registry / network failure  |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use element_core::application::{DispatchSettings, Dispatcher};

use crate::{
    cli::Cli,
    commands::{LazyApp, progress::SpinnerActions},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
    prompt::TerminalPrompter,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod prompt;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    // Silently ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    // Help output is a clap "error" with exit code 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    if cli.version {
        println!("{VERSION}");
        return ExitCode::SUCCESS;
    }

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: Some(e.into()),
            };
            return handle_error(err, verbose, !cli.global.no_color);
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, &config, &output) {
        Ok(()) => {
            info!("Element completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, output.supports_color()),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let invocation = commands::invocation(cli.command)?;
    let app = LazyApp::new(config);
    let actions = SpinnerActions::new(&app, output);
    let prompter = TerminalPrompter::new();
    let settings = DispatchSettings {
        suppress_auto_help: config.is_test_mode(),
    };

    let outcome = Dispatcher::new(&actions, &prompter, settings).dispatch(invocation)?;
    commands::report(&outcome, output)
}

/// Translate a `CliError` into a user message on stderr and an exit code.
///
/// Colour needs both the caller's permission and a terminal on stderr.
fn handle_error(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();

    let msg = if color && std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
