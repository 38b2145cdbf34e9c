//! Value types for the document store
//!
//! This module defines the value model records carry through the
//! document store. The store has no schema; every category of
//! protocol state is expressed with these seven variants.
//!
//! ## Rules
//!
//! - No implicit type coercions
//! - `Bytes` and `String` are distinct types
//! - `Null` is never persisted; absence is modelled by a missing record

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Document store value
///
/// ## The Seven Types
///
/// 1. `Null` - absence of value, rejected on write
/// 2. `Bool` - Boolean true or false
/// 3. `Int` - 64-bit signed integer (registration ids)
/// 4. `String` - UTF-8 encoded string
/// 5. `Bytes` - Arbitrary binary data (identity keys, session records)
/// 6. `Array` - Ordered sequence of values
/// 7. `Object` - String-keyed map of values (serialized key pairs)
///
/// ## Equality Rules
///
/// - Different types are NEVER equal
/// - `String("abc")` != `Bytes([97, 98, 99])`
/// - An empty `Bytes` is present, not absent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// Absence of value
    Null,

    /// Boolean true or false
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// UTF-8 encoded string
    String(String),

    /// Arbitrary binary data
    /// NOT equivalent to String - distinct type
    Bytes(Vec<u8>),

    /// Ordered sequence of values
    Array(Vec<Value>),

    /// String-keyed map of values
    Object(HashMap<String, Value>),
}

impl Value {
    /// Returns the type name as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
        }
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Registration ids and other integers
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Base64 fields of a serialized key pair
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Fields of a serialized key pair
    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Take the payload of a `Bytes` record (identity key, session state)
    ///
    /// Any other variant is a [`Error::Serialization`] naming `what`.
    pub fn into_bytes_of(self, what: impl fmt::Display) -> Result<Vec<u8>> {
        match self {
            Value::Bytes(bytes) => Ok(bytes),
            other => Err(Error::serialization(format!(
                "{}: expected Bytes, found {}",
                what,
                other.type_name()
            ))),
        }
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}
