//! Global arguments that apply to every subcommand.
//!
//! Declared here and flattened into [`super::Cli`] so that `-V`, `-q`, etc.
//! are available on any invocation without repetition.

use clap::Args;
use std::path::PathBuf;

/// Global arguments for all commands.
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-V`), twice for DEBUG (`-VV`), three times for
    /// TRACE (`-VVV`). Conflicts with `--quiet`.
    #[arg(
        short = 'V',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Display verbose output (-V, -VV, -VVV)",
        long_help = "Display verbose output:
    (none)  - Only warnings and errors
    -V      - Info level (progress messages)
    -VV     - Debug level (detailed diagnostics)
    -VVV    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file path. Long form only: `-c` belongs to `publish`.
    #[arg(
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,
}
