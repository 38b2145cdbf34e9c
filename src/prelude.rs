//! Convenient imports for the signal store.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```
//! use signalstore::prelude::*;
//!
//! let store = SignalStore::ephemeral();
//! let peer = PeerId::new("alice").unwrap();
//! # let _ = (store, peer);
//! ```

// Main entry point
pub use crate::store::{SignalStore, SignalStoreBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Layer traits, needed to call their methods
pub use signal_store_api::{KvFacade, ProtocolStore, StoreConfig};

// Document stores
pub use signal_store_storage::{DocumentStore, FaultyStore, MemoryStore, ReplicaStore};

// Core types
pub use crate::types::{DeviceId, Direction, KeyId, KeyPair, PeerId, ProtocolAddress, Value};
