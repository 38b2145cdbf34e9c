//! Namespaced store keys
//!
//! Every category of protocol state lives in one flat record id space.
//! [`StoreKey`] is the only place ids are built, so categories cannot
//! collide by accident.
//!
//! ## Id Scheme
//!
//! | Key | Record id |
//! |-----|-----------|
//! | `LocalIdentity` | `identityKey` |
//! | `Registration` | `registrationId` |
//! | `Identity(peer)` | `identityKey:<peer>` |
//! | `PreKey(id)` | `25519KeypreKey:<id>` |
//! | `SignedPreKey(id)` | `25519KeysignedKey:<id>` |
//! | `Session(addr)` | `session:<peer>:<device>` |
//!
//! Each prefix ends in `:` and peer names cannot contain `:`, so the id of
//! one key is never a prefix of an id from another category or peer.

use crate::types::{DeviceId, KeyId, PeerId, ProtocolAddress, KEY_DELIMITER};
use std::fmt;

const LOCAL_IDENTITY: &str = "identityKey";
const REGISTRATION: &str = "registrationId";
const IDENTITY_PREFIX: &str = "identityKey:";
const PRE_KEY_PREFIX: &str = "25519KeypreKey:";
const SIGNED_PRE_KEY_PREFIX: &str = "25519KeysignedKey:";
const SESSION_PREFIX: &str = "session:";

/// Tagged key for one record of protocol state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// The local identity key pair
    LocalIdentity,
    /// The local registration id
    Registration,
    /// A remote party's identity public key
    Identity(PeerId),
    /// A one-time prekey pair
    PreKey(KeyId),
    /// A signed prekey pair
    SignedPreKey(KeyId),
    /// Session state for one device of a peer
    Session(ProtocolAddress),
}

impl StoreKey {
    /// Encode to the record id used in the document store
    pub fn encode(&self) -> String {
        match self {
            StoreKey::LocalIdentity => LOCAL_IDENTITY.to_string(),
            StoreKey::Registration => REGISTRATION.to_string(),
            StoreKey::Identity(peer) => format!("{}{}", IDENTITY_PREFIX, peer),
            StoreKey::PreKey(id) => format!("{}{}", PRE_KEY_PREFIX, id),
            StoreKey::SignedPreKey(id) => format!("{}{}", SIGNED_PRE_KEY_PREFIX, id),
            StoreKey::Session(addr) => format!(
                "{}{}{}{}",
                SESSION_PREFIX,
                addr.peer(),
                KEY_DELIMITER,
                addr.device_id()
            ),
        }
    }

    /// Id prefix shared by every session record of `peer`, and only those
    pub fn session_prefix(peer: &PeerId) -> String {
        format!("{}{}{}", SESSION_PREFIX, peer, KEY_DELIMITER)
    }

    /// Decode a record id produced by [`StoreKey::encode`]
    ///
    /// Returns `None` for ids outside the scheme.
    pub fn parse(id: &str) -> Option<StoreKey> {
        if id == LOCAL_IDENTITY {
            return Some(StoreKey::LocalIdentity);
        }
        if id == REGISTRATION {
            return Some(StoreKey::Registration);
        }
        if let Some(rest) = id.strip_prefix(IDENTITY_PREFIX) {
            return PeerId::new(rest).ok().map(StoreKey::Identity);
        }
        if let Some(rest) = id.strip_prefix(PRE_KEY_PREFIX) {
            return parse_number(rest).map(StoreKey::PreKey);
        }
        if let Some(rest) = id.strip_prefix(SIGNED_PRE_KEY_PREFIX) {
            return parse_number(rest).map(StoreKey::SignedPreKey);
        }
        if let Some(rest) = id.strip_prefix(SESSION_PREFIX) {
            let (name, device) = rest.split_once(KEY_DELIMITER)?;
            let peer = PeerId::new(name).ok()?;
            let device_id: DeviceId = parse_number(device)?;
            return Some(StoreKey::Session(ProtocolAddress::new(peer, device_id)));
        }
        None
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Parse a canonical decimal `u32` (no sign, no leading zeros)
fn parse_number(s: &str) -> Option<u32> {
    let n = s.parse::<u32>().ok()?;
    (n.to_string() == s).then_some(n)
}
