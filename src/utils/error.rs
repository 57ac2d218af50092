//! Error Handling
//!
//! Unified error types for the engine.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;
use vibepitch_core::CoreError;
use vibepitch_llm::LlmError;

/// Engine-wide error type
#[derive(Error, Debug)]
pub enum EngineError {
    /// Input validation errors, raised before any provider call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Lookup errors (unknown batch row)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Provider call failed (auth, quota, network, malformed output)
    #[error("Provider error: {0}")]
    Provider(#[from] LlmError),

    /// Errors bubbled up from domain-type operations
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for engine errors
pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

/// Convert EngineError to a string suitable for host UI surfaces
impl From<EngineError> for String {
    fn from(err: EngineError) -> String {
        err.to_string()
    }
}
