//! KV facade trait and its document store implementation

use async_trait::async_trait;
use futures::future::join_all;
use signal_store_core::{Error, Record, Result, Value, WriteAck};
use signal_store_storage::DocumentStore;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// KV Facade - single-key operations over a document store
///
/// ## Implicit Behaviors
///
/// - Empty keys are rejected with `InvalidArgument` before the store is touched
/// - `Value::Null` is never written; absence means "no record"
/// - A missing record is `Ok(None)`, never an error
/// - No locking: the document store is the only serialization point
#[async_trait]
pub trait KvFacade: Send + Sync {
    /// Write a value, replacing any existing value for the key
    ///
    /// Returns the store's acknowledgment, which may be provisional.
    async fn put(&self, key: &str, value: Value) -> Result<WriteAck>;

    /// Get a value by key
    ///
    /// Returns `None` if key doesn't exist.
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Get a value by key, falling back to `default` when absent
    async fn get_or(&self, key: &str, default: Option<Value>) -> Result<Option<Value>> {
        Ok(self.get(key).await?.or(default))
    }

    /// Check if a key exists
    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// Delete a key if present
    ///
    /// Returns `Some(ack)` if a delete was issued, `None` if there was
    /// nothing to remove. Removing an absent key is success.
    async fn remove(&self, key: &str) -> Result<Option<WriteAck>>;

    /// Remove a batch of keys
    ///
    /// Every key is attempted even if others fail; failures are logged.
    /// Returns `true` iff every key was removed (or already absent).
    async fn remove_many(&self, keys: &[String]) -> bool;

    /// Write and confirm the write is readable
    ///
    /// After the first write, reads the key back; while it is absent and
    /// the `retries` budget lasts, writes again. Returns the last write's
    /// acknowledgment.
    ///
    /// Verification checks presence only: an older value still visible for
    /// `key` on a lagging replica counts as confirmed.
    async fn confirmed_put(&self, key: &str, value: Value, retries: u32) -> Result<WriteAck>;

    /// Ids of every record starting with `prefix`
    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>>;
}

/// [`KvFacade`] backed by a [`DocumentStore`]
#[derive(Clone)]
pub struct FacadeImpl {
    store: Arc<dyn DocumentStore>,
}

impl FacadeImpl {
    /// Create a facade over a document store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// The underlying document store
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }
}

impl std::fmt::Debug for FacadeImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FacadeImpl").finish_non_exhaustive()
    }
}

fn validate_key(key: &str, op: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::invalid_argument(format!("{}: key must not be empty", op)));
    }
    Ok(())
}

#[async_trait]
impl KvFacade for FacadeImpl {
    async fn put(&self, key: &str, value: Value) -> Result<WriteAck> {
        validate_key(key, "put")?;
        if value.is_null() {
            return Err(Error::invalid_argument(format!(
                "put: refusing to store Null for {}",
                key
            )));
        }
        debug!(key, "put");
        self.store.put(Record::new(key, value)).await
    }

    async fn get(&self, key: &str) -> Result<Option<Value>> {
        validate_key(key, "get")?;
        let id = key.to_string();
        let found = self.store.query(&move |r: &Record| r.id == id).await?;
        debug!(key, found = !found.is_empty(), "get");
        Ok(found.into_iter().next().map(|r| r.value))
    }

    async fn remove(&self, key: &str) -> Result<Option<WriteAck>> {
        validate_key(key, "remove")?;
        if self.get(key).await?.is_none() {
            debug!(key, "remove: already absent");
            return Ok(None);
        }
        debug!(key, "remove");
        self.store.delete(key).await.map(Some)
    }

    async fn remove_many(&self, keys: &[String]) -> bool {
        let outcomes = join_all(keys.iter().map(|key| self.remove(key))).await;

        let mut removed = 0usize;
        for (key, outcome) in keys.iter().zip(outcomes) {
            match outcome {
                Ok(_) => removed += 1,
                Err(e) => warn!(key = %key, error = %e, "batch removal of key failed"),
            }
        }
        if removed != keys.len() {
            warn!(removed, requested = keys.len(), "batch removal incomplete");
        }
        removed == keys.len()
    }

    async fn confirmed_put(&self, key: &str, value: Value, retries: u32) -> Result<WriteAck> {
        let mut ack = self.put(key, value.clone()).await?;
        for attempt in 1..=retries {
            if self.exists(key).await? {
                return Ok(ack);
            }
            info!(key, attempt, "write not yet readable, writing again");
            ack = self.put(key, value.clone()).await?;
        }
        if retries > 0 {
            warn!(key, retries, "retry budget spent, returning unconfirmed write");
        }
        Ok(ack)
    }

    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let owned = prefix.to_string();
        let found = self
            .store
            .query(&move |r: &Record| r.id.starts_with(&owned))
            .await?;
        Ok(found.into_iter().map(|r| r.id).collect())
    }
}
