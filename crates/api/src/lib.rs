//! Key-value facade and protocol store adapter
//!
//! Two layers, leaf first:
//!
//! - [`facade`]: a single-key view over the document store's
//!   `put` / `query` / `delete` (existence checks, argument validation,
//!   delete-if-present, batched removal, confirmed writes)
//! - [`protocol`]: the persistence interface the protocol engine calls
//!   (identity, registration, prekeys, signed prekeys, sessions)
//!
//! ```text
//! protocol engine ─► ProtocolStore ─► KvFacade ─► DocumentStore
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod facade;
pub mod protocol;

pub use config::StoreConfig;
pub use facade::{FacadeImpl, KvFacade};
pub use protocol::{ProtocolStore, ProtocolStoreImpl};
