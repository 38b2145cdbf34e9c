//! Document store layer
//!
//! This crate defines the document store the protocol store is built on and
//! ships in-memory implementations of it:
//! - [`DocumentStore`]: `put` / `query` / `delete`, the only primitives used
//! - [`MemoryStore`]: DashMap-backed, strongly consistent
//! - [`ReplicaStore`]: eventually consistent replica with a visibility lag
//! - [`FaultyStore`]: wrapper that fails writes for selected ids
//! - [`OpStats`]: per-store operation counters

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod faulty;
pub mod memory;
pub mod replica;
pub mod stats;
pub mod traits;

pub use faulty::FaultyStore;
pub use memory::MemoryStore;
pub use replica::ReplicaStore;
pub use stats::{OpCounters, OpStats};
pub use traits::{DocumentStore, Predicate};
