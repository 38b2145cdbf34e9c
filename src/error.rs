//! Unified error types for the signal store.
//!
//! This module provides the public error type. Internal crates report
//! through `signal_store_core::Error`, which maps onto it one to one.

use thiserror::Error;

/// All signal store errors.
///
/// Absence of a record is never an error; reads return `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Rejected input (empty record key, invalid peer id, Null value)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The document store failed the operation
    #[error("store failure: {0}")]
    StoreFailure(String),

    /// A stored value does not have the shape its category requires
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Invalid or incomplete configuration
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for signal store operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is an invalid-argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Check if this is a store failure.
    ///
    /// Store failures are the only errors that may succeed on retry.
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Error::StoreFailure(_))
    }

    /// Check if this is a serialization error.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Error::Serialization(_))
    }

    /// Check if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

// Convert from internal core errors
impl From<signal_store_core::Error> for Error {
    fn from(e: signal_store_core::Error) -> Self {
        use signal_store_core::Error as CoreError;
        match e {
            CoreError::InvalidArgument(msg) => Error::InvalidArgument(msg),
            CoreError::StoreFailure(msg) => Error::StoreFailure(msg),
            CoreError::Serialization(msg) => Error::Serialization(msg),
        }
    }
}

// Convert from TOML configuration errors
impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
