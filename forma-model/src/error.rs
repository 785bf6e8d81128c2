//! Error types for the model crate.

use thiserror::Error;

/// Errors raised when parsing model enums from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown scope: {0}")]
    UnknownScope(String),

    #[error("unknown action variant: {0}")]
    UnknownVariant(String),

    #[error("unknown action position: {0}")]
    UnknownPosition(String),
}
