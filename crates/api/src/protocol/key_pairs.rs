//! Key pair shaped records: local identity, prekeys, signed prekeys

use crate::facade::KvFacade;
use signal_store_core::{KeyPair, Result, StoreKey, WriteAck};

pub(super) async fn load_pair(kv: &dyn KvFacade, key: &StoreKey) -> Result<Option<KeyPair>> {
    match kv.get(&key.encode()).await? {
        Some(value) => KeyPair::from_value(&value).map(Some),
        None => Ok(None),
    }
}

pub(super) async fn store_pair(kv: &dyn KvFacade, key: &StoreKey, pair: &KeyPair) -> Result<WriteAck> {
    kv.put(&key.encode(), pair.to_value()).await
}
