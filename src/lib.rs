//! # signalstore
//!
//! Key and session persistence for a Signal-style asynchronous messaging
//! protocol, on top of an eventually-consistent document store.
//!
//! The protocol engine reads and writes its identity keys, prekeys and
//! per-device sessions through [`ProtocolStore`]. Everything lands as
//! records in a [`DocumentStore`] that only offers `put`, `query` and
//! `delete` and may not show a write to the very next read.
//!
//! ## Quick Start
//!
//! ```
//! use signalstore::prelude::*;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let store = SignalStore::ephemeral();
//!
//! // Provision the local identity
//! store.protocol.store_identity_key_pair(&KeyPair::new(vec![5; 33], vec![7; 32])).await.unwrap();
//! store.protocol.store_local_registration_id(4711).await.unwrap();
//!
//! // Sessions are keyed by peer and device
//! let bob = ProtocolAddress::new(PeerId::new("bob").unwrap(), 1);
//! store.protocol.store_session(&bob, b"ratchet state").await.unwrap();
//! assert_eq!(store.protocol.load_session(&bob).await.unwrap(), Some(b"ratchet state".to_vec()));
//! # });
//! ```
//!
//! ## Layers
//!
//! - [`ProtocolStore`]: identity trust-on-first-use, prekeys, signed prekeys,
//!   sessions with confirmed writes
//! - [`KvFacade`]: single-key operations desugared onto the document store
//! - [`DocumentStore`]: the backend; [`MemoryStore`], [`ReplicaStore`] and
//!   [`FaultyStore`] ship in-memory
//!
//! ## Logging
//!
//! The crates emit `tracing` events and never install a subscriber.

#![warn(missing_docs)]

mod error;
mod store;
mod types;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use store::{SignalStore, SignalStoreBuilder};

// Re-export layers
pub use signal_store_api::{FacadeImpl, KvFacade, ProtocolStore, ProtocolStoreImpl, StoreConfig};
pub use signal_store_storage::{DocumentStore, FaultyStore, MemoryStore, OpStats, ReplicaStore};

// Re-export types
pub use types::*;
