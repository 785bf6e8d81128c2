//! Error types for dispatch and external collaborators.

use forma_proxy::ProxyError;
use forma_schema::ConfigurationError;
use thiserror::Error;

/// Result type for collaborator calls.
pub type ContractResult<T> = Result<T, ContractError>;

/// Result type for dispatched functions.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// A failure reported by an external collaborator.
///
/// These propagate out of handlers unchanged; reporting them to the user is
/// the caller's job.
#[derive(Debug, Error)]
pub enum ContractError {
    /// The backend refused the operation.
    #[error("rejected: {0}")]
    Rejected(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// The user or the render layer abandoned the operation.
    #[error("cancelled")]
    Cancelled,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Errors raised while dispatching a handler, event, or hook.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("collaborator failed: {0}")]
    Contract(#[from] ContractError),

    #[error("proxy error: {0}")]
    Proxy(#[from] ProxyError),

    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A handler needed a collaborator the render layer did not supply.
    #[error("missing collaborator: {0}")]
    MissingCollaborator(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
