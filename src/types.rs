//! Public types for the signal store.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Values and records
pub use signal_store_core::{Record, Value, WriteAck};

// Addressing
pub use signal_store_core::{DeviceId, Direction, KeyId, PeerId, ProtocolAddress};

// Keys
pub use signal_store_core::{KeyPair, StoreKey};

// Document store predicate
pub use signal_store_storage::Predicate;
