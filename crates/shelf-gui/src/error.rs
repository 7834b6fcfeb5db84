//! Semantic error types for presenter operations.
//!
//! These errors are domain-focused. Rendering surfaces map `GuiError` to
//! whatever they display (or assert on, in development builds).

use std::fmt;

use shelf_core::{ListError, SettingsError};

/// Semantic errors for list presenter operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuiError {
    /// The caller broke a contract (bad row index, no signed-in user).
    ///
    /// Indicates a programming defect in the surface, not bad data.
    PreconditionViolation(String),

    /// Input data or settings failed validation.
    ValidationFailed(String),

    /// The action is not available in the current view state.
    Conflict(String),
}

impl GuiError {
    pub const fn is_precondition_violation(&self) -> bool {
        matches!(self, Self::PreconditionViolation(_))
    }
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreconditionViolation(msg) => write!(f, "precondition violated: {msg}"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
            Self::Conflict(msg) => write!(f, "conflict: {msg}"),
        }
    }
}

impl std::error::Error for GuiError {}

// ============================================================================
// Conversions from core errors
// ============================================================================

impl From<ListError> for GuiError {
    fn from(err: ListError) -> Self {
        if err.is_precondition_violation() {
            Self::PreconditionViolation(err.to_string())
        } else {
            Self::ValidationFailed(err.to_string())
        }
    }
}

impl From<SettingsError> for GuiError {
    fn from(err: SettingsError) -> Self {
        Self::ValidationFailed(err.to_string())
    }
}
