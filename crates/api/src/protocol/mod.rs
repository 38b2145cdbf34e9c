//! Protocol store adapter
//!
//! The persistence interface an asynchronous-messaging protocol engine
//! calls, built only on [`KvFacade`](crate::KvFacade):
//!
//! | Category | Operations | Stored as |
//! |----------|------------|-----------|
//! | Local identity | `get_identity_key_pair`, `store_identity_key_pair` | key pair object |
//! | Registration | `get_local_registration_id`, `store_local_registration_id` | `Int` |
//! | Remote identity | `load_identity_key`, `save_identity`, `is_trusted_identity` | `Bytes` |
//! | Prekeys | `load_pre_key`, `store_pre_key`, `remove_pre_key` | key pair object |
//! | Signed prekeys | `load_signed_pre_key`, `store_signed_pre_key`, `remove_signed_pre_key` | key pair object |
//! | Sessions | `load_session`, `store_session`, `remove_session`, `remove_all_sessions` | `Bytes` |
//!
//! Every read returns `Ok(None)` when nothing is stored. A stored value of
//! the wrong shape for its category is a `Serialization` error.

mod identity;
mod key_pairs;
mod sessions;

use crate::config::StoreConfig;
use crate::facade::{FacadeImpl, KvFacade};
use async_trait::async_trait;
use signal_store_core::{
    DeviceId, Direction, KeyId, KeyPair, PeerId, ProtocolAddress, Result, StoreKey, WriteAck,
};
use signal_store_storage::DocumentStore;
use std::sync::Arc;

/// Persistence interface of the protocol engine
#[async_trait]
pub trait ProtocolStore: Send + Sync {
    // =========================================================================
    // Local identity
    // =========================================================================

    /// The local identity key pair, `None` until provisioned
    async fn get_identity_key_pair(&self) -> Result<Option<KeyPair>>;

    /// The local registration id, `None` until provisioned
    async fn get_local_registration_id(&self) -> Result<Option<u32>>;

    /// Provision the local identity key pair
    async fn store_identity_key_pair(&self, pair: &KeyPair) -> Result<WriteAck>;

    /// Provision the local registration id
    async fn store_local_registration_id(&self, registration_id: u32) -> Result<WriteAck>;

    // =========================================================================
    // Remote identities
    // =========================================================================

    /// Trust-on-first-use check of `identity_key` for `peer`
    ///
    /// Trusted when nothing is stored for the peer yet, otherwise only if
    /// byte-identical to the stored key. An empty key is an ordinary key.
    async fn is_trusted_identity(
        &self,
        peer: &PeerId,
        identity_key: &[u8],
        direction: Direction,
    ) -> Result<bool>;

    /// Stored identity key of `peer`
    async fn load_identity_key(&self, peer: &PeerId) -> Result<Option<Vec<u8>>>;

    /// Store `identity_key` for `peer`, unconditionally
    ///
    /// Returns `true` when a different key was replaced (identity rotation),
    /// `false` on first save or when the key is unchanged. A stored value of
    /// the wrong shape is overwritten and counts as replaced. Refusing
    /// untrusted keys is the caller's job, via
    /// [`ProtocolStore::is_trusted_identity`].
    async fn save_identity(&self, peer: &PeerId, identity_key: &[u8]) -> Result<bool>;

    // =========================================================================
    // Prekeys
    // =========================================================================

    /// One-time prekey `id`, `None` once consumed
    async fn load_pre_key(&self, id: KeyId) -> Result<Option<KeyPair>>;

    /// Store one-time prekey `id`
    async fn store_pre_key(&self, id: KeyId, pair: &KeyPair) -> Result<WriteAck>;

    /// Remove one-time prekey `id`; removing an unknown id succeeds
    async fn remove_pre_key(&self, id: KeyId) -> Result<Option<WriteAck>>;

    /// Signed prekey `id`
    async fn load_signed_pre_key(&self, id: KeyId) -> Result<Option<KeyPair>>;

    /// Store signed prekey `id`
    async fn store_signed_pre_key(&self, id: KeyId, pair: &KeyPair) -> Result<WriteAck>;

    /// Remove signed prekey `id`; removing an unknown id succeeds
    async fn remove_signed_pre_key(&self, id: KeyId) -> Result<Option<WriteAck>>;

    // =========================================================================
    // Sessions
    // =========================================================================

    /// Serialized session state for `address`
    async fn load_session(&self, address: &ProtocolAddress) -> Result<Option<Vec<u8>>>;

    /// Store session state with a confirmed write
    async fn store_session(&self, address: &ProtocolAddress, record: &[u8]) -> Result<WriteAck>;

    /// Remove the session for one device
    async fn remove_session(&self, address: &ProtocolAddress) -> Result<Option<WriteAck>>;

    /// Remove the sessions of every device of `peer`
    ///
    /// Returns `true` iff every session found was removed.
    async fn remove_all_sessions(&self, peer: &PeerId) -> Result<bool>;

    /// Devices of `peer` with a stored session, ascending
    async fn session_devices(&self, peer: &PeerId) -> Result<Vec<DeviceId>>;
}

/// [`ProtocolStore`] over a [`KvFacade`]
#[derive(Clone)]
pub struct ProtocolStoreImpl {
    kv: Arc<dyn KvFacade>,
    config: StoreConfig,
}

impl ProtocolStoreImpl {
    /// Create an adapter over a facade
    pub fn new(kv: Arc<dyn KvFacade>, config: StoreConfig) -> Self {
        Self { kv, config }
    }

    /// Create an adapter with default configuration directly over a document store
    pub fn over_store(store: Arc<dyn DocumentStore>) -> Self {
        Self::new(Arc::new(FacadeImpl::new(store)), StoreConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The facade this adapter writes through
    pub fn facade(&self) -> &Arc<dyn KvFacade> {
        &self.kv
    }
}

impl std::fmt::Debug for ProtocolStoreImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProtocolStoreImpl")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ProtocolStore for ProtocolStoreImpl {
    async fn get_identity_key_pair(&self) -> Result<Option<KeyPair>> {
        key_pairs::load_pair(self.kv.as_ref(), &StoreKey::LocalIdentity).await
    }

    async fn get_local_registration_id(&self) -> Result<Option<u32>> {
        identity::registration_id(self.kv.as_ref()).await
    }

    async fn store_identity_key_pair(&self, pair: &KeyPair) -> Result<WriteAck> {
        key_pairs::store_pair(self.kv.as_ref(), &StoreKey::LocalIdentity, pair).await
    }

    async fn store_local_registration_id(&self, registration_id: u32) -> Result<WriteAck> {
        identity::store_registration_id(self.kv.as_ref(), registration_id).await
    }

    async fn is_trusted_identity(
        &self,
        peer: &PeerId,
        identity_key: &[u8],
        direction: Direction,
    ) -> Result<bool> {
        identity::is_trusted(self.kv.as_ref(), peer, identity_key, direction).await
    }

    async fn load_identity_key(&self, peer: &PeerId) -> Result<Option<Vec<u8>>> {
        identity::load(self.kv.as_ref(), peer).await
    }

    async fn save_identity(&self, peer: &PeerId, identity_key: &[u8]) -> Result<bool> {
        identity::save(self.kv.as_ref(), peer, identity_key).await
    }

    async fn load_pre_key(&self, id: KeyId) -> Result<Option<KeyPair>> {
        key_pairs::load_pair(self.kv.as_ref(), &StoreKey::PreKey(id)).await
    }

    async fn store_pre_key(&self, id: KeyId, pair: &KeyPair) -> Result<WriteAck> {
        key_pairs::store_pair(self.kv.as_ref(), &StoreKey::PreKey(id), pair).await
    }

    async fn remove_pre_key(&self, id: KeyId) -> Result<Option<WriteAck>> {
        self.kv.remove(&StoreKey::PreKey(id).encode()).await
    }

    async fn load_signed_pre_key(&self, id: KeyId) -> Result<Option<KeyPair>> {
        key_pairs::load_pair(self.kv.as_ref(), &StoreKey::SignedPreKey(id)).await
    }

    async fn store_signed_pre_key(&self, id: KeyId, pair: &KeyPair) -> Result<WriteAck> {
        key_pairs::store_pair(self.kv.as_ref(), &StoreKey::SignedPreKey(id), pair).await
    }

    async fn remove_signed_pre_key(&self, id: KeyId) -> Result<Option<WriteAck>> {
        self.kv.remove(&StoreKey::SignedPreKey(id).encode()).await
    }

    async fn load_session(&self, address: &ProtocolAddress) -> Result<Option<Vec<u8>>> {
        sessions::load(self.kv.as_ref(), address).await
    }

    async fn store_session(&self, address: &ProtocolAddress, record: &[u8]) -> Result<WriteAck> {
        let retries = self.config.effective_session_retries();
        sessions::store(self.kv.as_ref(), address, record, retries).await
    }

    async fn remove_session(&self, address: &ProtocolAddress) -> Result<Option<WriteAck>> {
        self.kv.remove(&StoreKey::Session(address.clone()).encode()).await
    }

    async fn remove_all_sessions(&self, peer: &PeerId) -> Result<bool> {
        sessions::remove_all(self.kv.as_ref(), peer).await
    }

    async fn session_devices(&self, peer: &PeerId) -> Result<Vec<DeviceId>> {
        sessions::devices(self.kv.as_ref(), peer).await
    }
}
