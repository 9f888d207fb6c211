// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel through the core unchanged)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid block name '{name}': {reason}")]
    InvalidBlockName { name: String, reason: String },

    #[error("Category cannot be empty")]
    EmptyCategory,

    #[error("Invalid value for --toggle-public: '{value}'")]
    InvalidToggle { value: String },

    #[error("Invalid project structure: {0}")]
    InvalidStructure(String),

    #[error("Duplicate path in boilerplate: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidBlockName { name, reason } => vec![
                format!("Block name '{}' is invalid: {}", name, reason),
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Examples: hero-banner, product_grid, footer2".into(),
            ],
            Self::EmptyCategory => vec![
                "Pass a category with -c/--category, or omit the flag to pick one".into(),
            ],
            Self::InvalidToggle { value } => vec![
                format!("'{}' is not a boolean", value),
                "Use -p on its own, or one of: true, false, yes, no, 1, 0".into(),
            ],
            Self::InvalidStructure(_) | Self::DuplicatePath { .. } => vec![
                "The boilerplate appears to be corrupted".into(),
                "Check boilerplate.git_url in your configuration".into(),
            ],
            _ => vec!["See `element --help` for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRequiredField { .. } => ErrorCategory::Internal,
            _ => ErrorCategory::Validation,
        }
    }
}
