//! Core Error Types
//!
//! Defines the foundational error types used across the VibePitch workspace.
//! These error types are dependency-free (only thiserror + std) to keep the
//! core crate lightweight.
//!
//! The engine crate extends these with additional variants (e.g. provider
//! failures) that require heavier dependencies.

use thiserror::Error;

/// Core error type for the VibePitch workspace.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors (empty required fields, ambiguous lookups)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors (row lookups)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Parse errors (unrecognized tone labels and the like)
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

/// Convert CoreError to a string
impl From<CoreError> for String {
    fn from(err: CoreError) -> String {
        err.to_string()
    }
}
