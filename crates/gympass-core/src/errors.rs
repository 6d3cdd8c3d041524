//! Cross-cutting error types for gympass.
//!
//! Storage errors (`DatabaseError`) and configuration errors (`ConfigError`)
//! live in their own crates. Everything converges in `ServiceError` in
//! `gympass-service`.

use thiserror::Error;

/// Errors that can be raised by any gympass crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (empty title, non-finite coordinate, ...).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
