//! Error types for the signal protocol store
//!
//! Absence of a record is never an error. Every read has a `None` outcome
//! distinct from the failures below.

use thiserror::Error;

/// Core error type
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required key, identifier or value was missing or malformed.
    ///
    /// Raised before the document store is touched; never retried.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The document store rejected or failed an operation
    #[error("store failure: {0}")]
    StoreFailure(String),

    /// A stored value did not have the shape its category requires
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand for [`Error::InvalidArgument`]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Shorthand for [`Error::StoreFailure`]
    pub fn store_failure(msg: impl Into<String>) -> Self {
        Error::StoreFailure(msg.into())
    }

    /// Shorthand for [`Error::Serialization`]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Error::Serialization(msg.into())
    }

    /// Check if this is an argument validation error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Check if this error came from the document store
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Error::StoreFailure(_))
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Error::Serialization(_))
    }
}
