//! Per-device session records

use crate::facade::KvFacade;
use signal_store_core::{DeviceId, PeerId, ProtocolAddress, Result, StoreKey, Value, WriteAck};
use tracing::debug;

pub(super) async fn load(kv: &dyn KvFacade, address: &ProtocolAddress) -> Result<Option<Vec<u8>>> {
    kv.get(&StoreKey::Session(address.clone()).encode())
        .await?
        .map(|value| value.into_bytes_of(format_args!("session {}", address)))
        .transpose()
}

/// `retries` of `None` skips read-back entirely
pub(super) async fn store(
    kv: &dyn KvFacade,
    address: &ProtocolAddress,
    record: &[u8],
    retries: Option<u32>,
) -> Result<WriteAck> {
    let key = StoreKey::Session(address.clone()).encode();
    let value = Value::Bytes(record.to_vec());
    match retries {
        Some(retries) => kv.confirmed_put(&key, value, retries).await,
        None => kv.put(&key, value).await,
    }
}

pub(super) async fn remove_all(kv: &dyn KvFacade, peer: &PeerId) -> Result<bool> {
    let ids = kv.keys_with_prefix(&StoreKey::session_prefix(peer)).await?;
    debug!(peer = %peer, sessions = ids.len(), "removing all sessions");
    Ok(kv.remove_many(&ids).await)
}

pub(super) async fn devices(kv: &dyn KvFacade, peer: &PeerId) -> Result<Vec<DeviceId>> {
    let ids = kv.keys_with_prefix(&StoreKey::session_prefix(peer)).await?;
    let mut devices: Vec<DeviceId> = ids
        .iter()
        .filter_map(|id| match StoreKey::parse(id) {
            Some(StoreKey::Session(address)) => Some(address.device_id()),
            _ => None,
        })
        .collect();
    devices.sort_unstable();
    devices.dedup();
    Ok(devices)
}
