//! Error types for the core library.

use thiserror::Error;

use crate::session::{AuthError, GateError};
use crate::store::StoreError;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Content store operation failed.
    #[error("Content store error: {0}")]
    Store(#[from] StoreError),

    /// Authentication service operation failed.
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Confirmation gate rejected a transition.
    #[error("Session gate error: {0}")]
    Gate(#[from] GateError),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
