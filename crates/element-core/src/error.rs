//! Unified error handling for Element Core.
//!
//! Wraps domain and application errors behind one type that the CLI can
//! categorise and attach suggestions to.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Element Core operations.
#[derive(Debug, Error, Clone)]
pub enum ElementError {
    /// Errors from the domain layer (invalid names, flags, structures).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration and collaborator failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ElementError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file and ELEMENT_* environment variables".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
        }
    }

    /// `true` when the user aborted an interactive prompt.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::Cancelled))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Remote,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type ElementResult<T> = Result<T, ElementError>;
