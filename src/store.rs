//! Main entry point for the signal store.
//!
//! This module provides the `SignalStore` struct, which wires a document
//! store to the key-value facade and the protocol store adapter.

use crate::error::{Error, Result};
use signal_store_api::{FacadeImpl, KvFacade, ProtocolStoreImpl, StoreConfig};
use signal_store_storage::{DocumentStore, MemoryStore};
use std::sync::Arc;
use tracing::debug;

/// The signal store.
///
/// Create one with [`SignalStore::builder`] over any [`DocumentStore`], or
/// with [`SignalStore::ephemeral`] for a fresh in-memory store.
///
/// # Example
///
/// ```
/// use signalstore::prelude::*;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let store = SignalStore::ephemeral();
/// let alice = PeerId::new("alice").unwrap();
///
/// assert!(store.protocol.is_trusted_identity(&alice, &[5, 1], Direction::Receiving).await.unwrap());
/// store.protocol.save_identity(&alice, &[5, 1]).await.unwrap();
/// assert!(!store.protocol.is_trusted_identity(&alice, &[5, 2], Direction::Receiving).await.unwrap());
/// # });
/// ```
#[derive(Clone)]
pub struct SignalStore {
    /// Key-value operations
    pub kv: Arc<dyn KvFacade>,

    /// Protocol engine persistence
    pub protocol: ProtocolStoreImpl,

    store: Arc<dyn DocumentStore>,
}

impl SignalStore {
    /// Create a store over a fresh in-memory document store.
    ///
    /// All data is lost when the store is dropped. Use this for unit tests
    /// and throwaway sessions.
    pub fn ephemeral() -> Self {
        Self::from_parts(Arc::new(MemoryStore::new()), StoreConfig::default())
    }

    /// Create a builder for store configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use signalstore::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let store = SignalStore::builder()
    ///     .store(Arc::new(MemoryStore::new()))
    ///     .session_write_retries(2)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(store.config().session_write_retries, 2);
    /// ```
    pub fn builder() -> SignalStoreBuilder {
        SignalStoreBuilder::new()
    }

    /// Active configuration.
    pub fn config(&self) -> &StoreConfig {
        self.protocol.config()
    }

    /// The document store everything is written to.
    pub fn document_store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    fn from_parts(store: Arc<dyn DocumentStore>, config: StoreConfig) -> Self {
        let kv: Arc<dyn KvFacade> = Arc::new(FacadeImpl::new(Arc::clone(&store)));
        let protocol = ProtocolStoreImpl::new(Arc::clone(&kv), config);
        Self {
            kv,
            protocol,
            store,
        }
    }
}

impl std::fmt::Debug for SignalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalStore")
            .field("config", self.config())
            .finish_non_exhaustive()
    }
}

/// Builder for store configuration.
///
/// # Example
///
/// ```
/// use signalstore::prelude::*;
/// use std::sync::Arc;
///
/// // Lagging replica, verify session writes with up to three rewrites
/// let store = SignalStore::builder()
///     .store(Arc::new(ReplicaStore::with_visibility_lag(2)))
///     .session_write_retries(3)
///     .build()
///     .unwrap();
///
/// // Settings from a TOML file's contents
/// let store = SignalStore::builder()
///     .store(Arc::new(MemoryStore::new()))
///     .config_toml("verify_session_writes = false")
///     .unwrap()
///     .build()
///     .unwrap();
/// assert!(!store.config().verify_session_writes);
/// ```
#[derive(Default)]
pub struct SignalStoreBuilder {
    store: Option<Arc<dyn DocumentStore>>,
    config: StoreConfig,
}

impl SignalStoreBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document store to write to.
    pub fn store(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the configuration with one parsed from TOML.
    ///
    /// Unset fields take their defaults; unknown fields are a `Config` error.
    pub fn config_toml(mut self, toml: &str) -> Result<Self> {
        self.config = StoreConfig::from_toml_str(toml)?;
        Ok(self)
    }

    /// Rewrites allowed when a session write does not read back.
    pub fn session_write_retries(mut self, retries: u32) -> Self {
        self.config = self.config.session_write_retries(retries);
        self
    }

    /// Read back session writes at all (default `true`).
    pub fn verify_session_writes(mut self, verify: bool) -> Self {
        self.config = self.config.verify_session_writes(verify);
        self
    }

    /// Build the store.
    ///
    /// Fails with `Config` if no document store was set.
    pub fn build(self) -> Result<SignalStore> {
        let store = self
            .store
            .ok_or_else(|| Error::Config("no document store configured".to_string()))?;
        debug!(config = ?self.config, "building signal store");
        Ok(SignalStore::from_parts(store, self.config))
    }
}

impl std::fmt::Debug for SignalStoreBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalStoreBuilder")
            .field("store", &self.store.is_some())
            .field("config", &self.config)
            .finish()
    }
}
