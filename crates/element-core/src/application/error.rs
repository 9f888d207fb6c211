//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the
//! collaborators behind the ports. Rule violations are `DomainError`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The user aborted an interactive prompt.
    #[error("Operation cancelled")]
    Cancelled,

    /// The prompt could not be shown (no terminal, I/O failure).
    #[error("Could not read input: {reason}")]
    PromptFailed { reason: String },

    /// argv named a command that does not exist.
    #[error("Invalid command: {command}")]
    InvalidCommand { command: String },

    /// No stored session.
    #[error("You are not logged in")]
    NotLoggedIn,

    /// `update` in a directory that has never been published.
    #[error("No published block found in {path}")]
    NotPublished { path: PathBuf },

    /// The registry returned an empty category list.
    #[error("The registry did not return any categories")]
    NoCategories,

    /// The registry refused the credentials or the session token.
    #[error("Authentication failed: {reason}")]
    Unauthorized { reason: String },

    /// The registry answered with a non-success status.
    #[error("Registry rejected {operation} ({status}): {message}")]
    RemoteRejected {
        operation: String,
        status: u16,
        message: String,
    },

    /// The registry could not be reached or answered garbage.
    #[error("Registry {operation} failed: {reason}")]
    Registry { operation: String, reason: String },

    /// Reading or writing the stored session failed.
    #[error("Credential store error at {path}: {reason}")]
    CredentialStore { path: PathBuf, reason: String },

    /// The block could not be packaged for upload.
    #[error("Could not bundle block: {reason}")]
    BundleFailed { reason: String },

    /// The boilerplate could not be fetched.
    #[error("Boilerplate unavailable: {reason}")]
    BoilerplateUnavailable { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The destination of `new` already exists.
    #[error("Block already exists at {path}")]
    BlockExists { path: PathBuf },

    /// In-memory adapter lock poisoned.
    #[error("Store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Cancelled => vec!["No changes were made".into()],
            Self::PromptFailed { .. } => vec![
                "Interactive input requires a terminal".into(),
                "Pass the value as a flag where one exists (e.g. --category)".into(),
            ],
            Self::InvalidCommand { .. } => {
                vec!["See --help for a list of available commands.".into()]
            }
            Self::NotLoggedIn => vec!["Log in first: element login".into()],
            Self::NotPublished { .. } => vec![
                "Run `element update` from the directory you published".into(),
                "Or publish it first: element publish".into(),
            ],
            Self::NoCategories => vec!["Try again later or pass --category explicitly".into()],
            Self::Unauthorized { .. } => vec![
                "Check your username and password".into(),
                "Your session may have expired: element login".into(),
            ],
            Self::RemoteRejected { .. } | Self::Registry { .. } => vec![
                "Check your network connection".into(),
                "Check registry.url in your configuration".into(),
            ],
            Self::BundleFailed { .. } => vec![
                "Build your block before publishing so that dist/ exists".into(),
                "Keep your thumbnail under 500 kb".into(),
            ],
            Self::BoilerplateUnavailable { .. } => vec![
                "Ensure git is installed and in your PATH".into(),
                "Check boilerplate.git_url in your configuration".into(),
            ],
            Self::BlockExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different block name".into(),
            ],
            Self::FilesystemError { path, .. } | Self::CredentialStore { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Cancelled
            | Self::InvalidCommand { .. }
            | Self::BlockExists { .. }
            | Self::BundleFailed { .. } => ErrorCategory::Validation,
            Self::NotLoggedIn | Self::NotPublished { .. } | Self::NoCategories => {
                ErrorCategory::NotFound
            }
            Self::Unauthorized { .. }
            | Self::RemoteRejected { .. }
            | Self::Registry { .. }
            | Self::BoilerplateUnavailable { .. } => ErrorCategory::Remote,
            Self::PromptFailed { .. }
            | Self::CredentialStore { .. }
            | Self::FilesystemError { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
