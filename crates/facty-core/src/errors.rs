//! Cross-cutting error types for Facty.
//!
//! Domain-specific errors (`ConfigError`, `ClientError`, `FactCheckError`)
//! live in their respective crates.

use thiserror::Error;

/// Errors that can be raised by any Facty crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
