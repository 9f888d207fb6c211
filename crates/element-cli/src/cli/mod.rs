//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text. No business logic lives here.

use clap::{Args, Parser, Subcommand};

use element_core::domain::CommandKind;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// clap's own `--version` is disabled: `-V` is the verbosity switch and the
/// version is printed through `-v`.
#[derive(Debug, Parser)]
#[command(
    name     = "element",
    bin_name = "element",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Command line interface for the Element block ecosystem",
    override_usage = "element [options] command",
    after_help = "EXAMPLES:\n\
        \x20 element login\n\
        \x20 element new hero-banner\n\
        \x20 element publish --name \"Hero Banner\" --category Headers\n\
        \x20 element update --toggle-public",
    disable_version_flag = true,
)]
pub struct Cli {
    /// Print the version and exit.
    #[arg(short = 'v', long = "version", help = "Output the version number")]
    pub version: bool,

    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; none prints the help text.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = CommandKind::Login.description())]
    Login,

    #[command(
        about = CommandKind::New.description(),
        after_help = "EXAMPLES:\n\
            \x20 element new hero-banner"
    )]
    New(NewArgs),

    #[command(
        about = CommandKind::Publish.description(),
        after_help = "Suggestion: Keep your screenshots under 500 kb and aim for more of \
                      a rectangle than a square."
    )]
    Publish(PublishArgs),

    #[command(
        about = CommandKind::Update.description(),
        after_help = "-p/--toggle-public toggles whether or not the block is viewable by \
                      members outside of your organization."
    )]
    Update(UpdateArgs),

    /// Anything that is not a known command.
    #[command(external_subcommand)]
    External(Vec<String>),
}

// ── new ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Name of the block directory to create.
    #[arg(value_name = "NAME", help = "Block name")]
    pub name: String,
}

// ── publish ───────────────────────────────────────────────────────────────────

/// Both flags take an optional value; a bare flag counts as not given.
#[derive(Debug, Args)]
pub struct PublishArgs {
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        num_args = 0..=1,
        help = "Name for publishing (defaults to directory name)"
    )]
    pub name: Option<Option<String>>,

    #[arg(
        short = 'c',
        long = "category",
        value_name = "CATEGORY",
        num_args = 0..=1,
        help = "The Category name that best fits this block"
    )]
    pub category: Option<Option<String>>,
}

// ── update ────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[arg(
        short = 'p',
        long = "toggle-public",
        value_name = "BOOL",
        num_args = 0..=1,
        help = "Toggle whether or not the block is public"
    )]
    pub toggle_public: Option<Option<String>>,
}

// ── tests ─────────────────────────────────────────────────────────────────────
