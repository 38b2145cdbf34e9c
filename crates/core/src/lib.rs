//! Core types for the signal protocol store
//!
//! This crate defines the fundamental types shared by every layer:
//! - [`Value`] / [`Record`]: what the document store holds
//! - [`StoreKey`]: the tagged namespace mapped onto flat record ids
//! - [`KeyPair`]: key-pair shaped values and their serialization contract
//! - [`PeerId`], [`ProtocolAddress`], [`Direction`]: protocol addressing
//! - [`Error`]: the core error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod key;
pub mod key_pair;
pub mod record;
pub mod types;
pub mod value;

pub use error::{Error, Result};
pub use key::StoreKey;
pub use key_pair::KeyPair;
pub use record::{Record, WriteAck};
pub use types::{DeviceId, Direction, KeyId, PeerId, ProtocolAddress};
pub use value::Value;
