//! Error types for schema compilation.

use thiserror::Error;

/// Result type for schema compilation.
pub type SchemaResult<T> = Result<T, ConfigurationError>;

/// A programming mistake in a schema definition.
///
/// Raised while the schema is built, never at interaction time; these are
/// not meant to be recovered from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("domain '{domain}' has no action '{action}'")]
    UnknownAction { domain: String, action: String },

    #[error("domain '{domain}' has no field '{field}'")]
    UnknownField { domain: String, field: String },

    #[error("domain '{domain}' does not declare scope '{scope}'")]
    UnknownScope { domain: String, scope: String },

    #[error("field '{field}' of domain '{domain}' names undeclared group '{group}'")]
    UnknownGroup {
        domain: String,
        field: String,
        group: String,
    },

    #[error("domain '{domain}' removes action '{action}', which is not inherited")]
    MissingRemovalTarget { domain: String, action: String },

    #[error("invalid pattern on field '{field}' of domain '{domain}': {detail}")]
    InvalidPattern {
        domain: String,
        field: String,
        detail: String,
    },
}
