//! Key pairs and their serialization contract
//!
//! A key pair never reaches the document store as raw binary. It is stored
//! as an object with exactly two string fields holding base64 (standard
//! alphabet, padded):
//!
//! ```json
//! { "pubKey": "BQ3u...", "privKey": "aG9s..." }
//! ```
//!
//! Decoding reconstructs the original buffers byte for byte, empty buffers
//! included.

use crate::error::{Error, Result};
use crate::value::Value;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::collections::HashMap;
use std::fmt;

const PUBLIC_FIELD: &str = "pubKey";
const PRIVATE_FIELD: &str = "privKey";

/// A public/private key pair
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    /// Public half
    pub public_key: Vec<u8>,
    /// Private half
    pub private_key: Vec<u8>,
}

impl KeyPair {
    /// Create a key pair from its halves
    pub fn new(public_key: impl Into<Vec<u8>>, private_key: impl Into<Vec<u8>>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    /// Encode into the two-field object stored in the document store
    pub fn to_value(&self) -> Value {
        let mut fields = HashMap::with_capacity(2);
        fields.insert(
            PUBLIC_FIELD.to_string(),
            Value::String(STANDARD.encode(&self.public_key)),
        );
        fields.insert(
            PRIVATE_FIELD.to_string(),
            Value::String(STANDARD.encode(&self.private_key)),
        );
        Value::Object(fields)
    }

    /// Decode from a stored value
    ///
    /// Fails with [`Error::Serialization`] unless the value is an object with
    /// exactly the `pubKey` and `privKey` fields, both valid base64 strings.
    pub fn from_value(value: &Value) -> Result<Self> {
        let fields = value.as_object().ok_or_else(|| {
            Error::serialization(format!(
                "key pair must be an Object, got {}",
                value.type_name()
            ))
        })?;
        if fields.len() != 2 {
            return Err(Error::serialization(format!(
                "key pair must have exactly 2 fields, got {}",
                fields.len()
            )));
        }
        Ok(Self {
            public_key: decode_field(fields, PUBLIC_FIELD)?,
            private_key: decode_field(fields, PRIVATE_FIELD)?,
        })
    }
}

fn decode_field(fields: &HashMap<String, Value>, name: &str) -> Result<Vec<u8>> {
    let encoded = fields
        .get(name)
        .ok_or_else(|| Error::serialization(format!("key pair is missing {}", name)))?
        .as_str()
        .ok_or_else(|| Error::serialization(format!("key pair field {} is not a String", name)))?;
    STANDARD
        .decode(encoded)
        .map_err(|e| Error::serialization(format!("key pair field {}: {}", name, e)))
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .field("private_key", &format_args!("<{} bytes redacted>", self.private_key.len()))
            .finish()
    }
}

impl From<&KeyPair> for Value {
    fn from(pair: &KeyPair) -> Self {
        pair.to_value()
    }
}

impl TryFrom<&Value> for KeyPair {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        KeyPair::from_value(value)
    }
}
