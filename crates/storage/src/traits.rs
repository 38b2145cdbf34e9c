//! Document store trait definitions.

use async_trait::async_trait;
use signal_store_core::{Record, Result, WriteAck};
use std::sync::Arc;

/// Record filter passed to [`DocumentStore::query`].
pub type Predicate = dyn Fn(&Record) -> bool + Send + Sync;

/// Abstract append-only document store.
///
/// Implementations must be thread-safe (`Send + Sync`). The store may be
/// eventually consistent: a completed `put` is not guaranteed to be visible
/// to the next `query`, on this replica or another.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Write a record, replacing any record with the same id.
    ///
    /// # Returns
    ///
    /// * `Ok(WriteAck)` once the store accepted the write (possibly provisionally).
    /// * `Err(Error::StoreFailure)` if the store rejected it.
    async fn put(&self, record: Record) -> Result<WriteAck>;

    /// Return every visible record matching `predicate`.
    ///
    /// An empty result is not an error.
    async fn query(&self, predicate: &Predicate) -> Result<Vec<Record>>;

    /// Delete the record with the given id.
    ///
    /// Deleting an id that does not exist succeeds.
    async fn delete(&self, id: &str) -> Result<WriteAck>;
}

#[async_trait]
impl<S: DocumentStore + ?Sized> DocumentStore for Arc<S> {
    async fn put(&self, record: Record) -> Result<WriteAck> {
        (**self).put(record).await
    }

    async fn query(&self, predicate: &Predicate) -> Result<Vec<Record>> {
        (**self).query(predicate).await
    }

    async fn delete(&self, id: &str) -> Result<WriteAck> {
        (**self).delete(id).await
    }
}
