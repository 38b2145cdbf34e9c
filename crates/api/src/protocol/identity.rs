//! Registration id and remote identities with trust-on-first-use

use crate::facade::KvFacade;
use signal_store_core::{Direction, Error, PeerId, Result, StoreKey, Value, WriteAck};
use tracing::{debug, warn};

pub(super) async fn registration_id(kv: &dyn KvFacade) -> Result<Option<u32>> {
    let value = match kv.get(&StoreKey::Registration.encode()).await? {
        Some(value) => value,
        None => return Ok(None),
    };
    let raw = value.as_int().ok_or_else(|| {
        Error::serialization(format!(
            "registration id: expected Int, found {}",
            value.type_name()
        ))
    })?;
    u32::try_from(raw)
        .map(Some)
        .map_err(|_| Error::serialization(format!("registration id {} out of range", raw)))
}

pub(super) async fn store_registration_id(kv: &dyn KvFacade, id: u32) -> Result<WriteAck> {
    kv.put(&StoreKey::Registration.encode(), Value::from(id)).await
}

pub(super) async fn load(kv: &dyn KvFacade, peer: &PeerId) -> Result<Option<Vec<u8>>> {
    kv.get(&StoreKey::Identity(peer.clone()).encode())
        .await?
        .map(|value| value.into_bytes_of(format_args!("identity key of {}", peer)))
        .transpose()
}

pub(super) async fn is_trusted(
    kv: &dyn KvFacade,
    peer: &PeerId,
    identity_key: &[u8],
    direction: Direction,
) -> Result<bool> {
    match load(kv, peer).await? {
        None => {
            debug!(peer = %peer, %direction, "no identity on record, trusting on first use");
            Ok(true)
        }
        Some(stored) if stored == identity_key => Ok(true),
        Some(_) => {
            warn!(peer = %peer, %direction, "identity key differs from the one on record");
            Ok(false)
        }
    }
}

/// Overwrites whatever is stored, a malformed previous value included
pub(super) async fn save(kv: &dyn KvFacade, peer: &PeerId, identity_key: &[u8]) -> Result<bool> {
    let key = StoreKey::Identity(peer.clone()).encode();
    let previous = kv.get(&key).await?;
    kv.put(&key, Value::Bytes(identity_key.to_vec())).await?;

    let changed = match previous {
        Some(Value::Bytes(old)) => old != identity_key,
        Some(_) => true,
        None => false,
    };
    if changed {
        warn!(peer = %peer, "identity key replaced");
    }
    Ok(changed)
}
