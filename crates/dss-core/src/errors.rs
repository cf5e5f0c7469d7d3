//! Cross-cutting error types.
//!
//! Source and configuration errors live in their own crates. The `dss`
//! binary converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any dss crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// A value failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
