//! Error types for jndio-resin
//!
//! A rejected build is final: the request is structurally invalid for this
//! container family, so retrying the same call can never succeed.

use thiserror::Error;

/// Result type for jndio-resin operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for jndio-resin
#[derive(Error, Debug)]
pub enum Error {
    /// The container cannot honor the requested transactional wiring mode
    #[error("unsupported transaction mode: {message}")]
    UnsupportedTransactionMode { message: String },

    /// Error from the container-agnostic core (malformed resource,
    /// conversion failure, invalid parameter key)
    #[error(transparent)]
    Core(#[from] jndio_core::Error),
}

impl Error {
    /// Create an unsupported-transaction-mode error
    pub fn unsupported_transaction_mode(message: impl Into<String>) -> Self {
        Self::UnsupportedTransactionMode {
            message: message.into(),
        }
    }
}
