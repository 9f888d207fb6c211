//! Error handling for the Element CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use element_core::error::ElementError;

pub use element_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file or variable could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `element-core` or one of its adapters.
    ///
    /// Displayed verbatim: core messages are already written for users.
    #[error("{0}")]
    Core(#[from] ElementError),

    // ── System errors ──────────────────────────────────────────────────────
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check the file passed with --config".into(),
                "Check your ELEMENT_* environment variables".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Remote => ErrorCategory::Remote,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Remote        |  5   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Remote => 5,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -V for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -V for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        if matches!(self, Self::Core(core) if core.is_cancelled()) {
            tracing::info!("Cancelled by user");
            return;
        }
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Remote => tracing::error!("Registry error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid input, unknown command or a cancelled prompt.
    UserError,
    /// Missing session, record or category list.
    NotFound,
    Configuration,
    /// The registry or the boilerplate repository failed.
    Remote,
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Convert foreign error types into [`CliError`] at call-sites with a
/// context message.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use element_core::application::ApplicationError;
    use element_core::domain::DomainError;
    use std::io;
    use std::path::PathBuf;

    fn core(err: impl Into<ElementError>) -> CliError {
        CliError::Core(err.into())
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn invalid_command_is_user_error() {
        let err = core(ApplicationError::InvalidCommand {
            command: "frobnicate".into(),
        });
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Invalid command: frobnicate");
    }

    #[test]
    fn cancelled_prompt_is_user_error() {
        assert_eq!(core(ApplicationError::Cancelled).exit_code(), 2);
    }

    #[test]
    fn invalid_toggle_is_user_error() {
        let err = core(DomainError::InvalidToggle {
            value: "maybe".into(),
        });
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_session_is_not_found() {
        assert_eq!(core(ApplicationError::NotLoggedIn).exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn registry_failures_are_remote() {
        let err = core(ApplicationError::RemoteRejected {
            operation: "publish".into(),
            status: 500,
            message: "boom".into(),
        });
        assert_eq!(err.exit_code(), 5);
        assert_eq!(
            core(ApplicationError::Unauthorized {
                reason: "expired".into()
            })
            .exit_code(),
            5
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── suggestions / format ──────────────────────────────────────────────

    #[test]
    fn invalid_command_points_at_help() {
        let err = core(ApplicationError::InvalidCommand {
            command: "x".into(),
        });
        assert!(err.suggestions().iter().any(|s| s.contains("--help")));
    }

    #[test]
    fn not_logged_in_suggests_login() {
        let err = core(ApplicationError::NotLoggedIn);
        assert!(err.suggestions().iter().any(|s| s.contains("element login")));
    }

    #[test]
    fn format_plain_contains_error_header() {
        let err = core(ApplicationError::BlockExists {
            path: PathBuf::from("/tmp/x"),
        });
        let s = err.format_plain(false);
        assert!(s.contains("Error: Block already exists at /tmp/x"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("-V"));
    }

    #[test]
    fn format_plain_verbose_shows_cause_and_omits_hint() {
        let err = CliError::ConfigError {
            message: "bad file".into(),
            source: Some(Box::new(io::Error::other("expected a table"))),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: expected a table"));
        assert!(!s.contains("for more details"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading working directory");
        assert!(matches!(cli, Err(CliError::IoError { ref message, .. }) if message == "reading working directory"));
    }
}
