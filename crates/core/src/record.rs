//! Records held by the document store

use crate::value::Value;
use serde::{Deserialize, Serialize};

/// One document: a unique id and its value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Record id, unique within the collection
    pub id: String,
    /// Stored value, never `Value::Null`
    pub value: Value,
}

impl Record {
    /// Create a record
    pub fn new(id: impl Into<String>, value: Value) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }
}

/// Acknowledgment returned by the document store for a write or delete
///
/// An acknowledgment may be provisional: on an eventually consistent store
/// the write is accepted but not necessarily visible to the next read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteAck {
    /// Id of the record the operation targeted
    pub id: String,
    /// Store-assigned, monotonically increasing operation sequence
    pub sequence: u64,
}

impl WriteAck {
    /// Create an acknowledgment
    pub fn new(id: impl Into<String>, sequence: u64) -> Self {
        Self {
            id: id.into(),
            sequence,
        }
    }
}
