//! Protocol addressing types
//!
//! This module defines how the protocol engine names the parties it stores
//! state for:
//! - [`PeerId`]: a validated remote party name
//! - [`ProtocolAddress`]: a peer plus one of its devices
//! - [`KeyId`] / [`DeviceId`]: numeric discriminators
//! - [`Direction`]: which way a message flows during a trust check
//!
//! Addresses are parsed once, by the caller, and handed to the store already
//! typed. The store never parses address strings itself.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a one-time or signed prekey
pub type KeyId = u32;

/// Identifier of one of a peer's devices
pub type DeviceId = u32;

/// Character that terminates every namespace segment in a record id
pub(crate) const KEY_DELIMITER: char = ':';

/// Name of a remote party
///
/// Names are non-empty and never contain the record id delimiter `:`,
/// which keeps every peer's records disjoint from every other peer's.
///
/// # Examples
///
/// ```
/// use signal_store_core::PeerId;
///
/// let alice = PeerId::new("alice").unwrap();
/// assert_eq!(alice.as_str(), "alice");
///
/// assert!(PeerId::new("").is_err());
/// assert!(PeerId::new("a:b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PeerId(String);

impl PeerId {
    /// Create a validated peer id
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::invalid_argument("peer id must not be empty"));
        }
        if name.contains(KEY_DELIMITER) {
            return Err(Error::invalid_argument(format!(
                "peer id {:?} must not contain '{}'",
                name, KEY_DELIMITER
            )));
        }
        Ok(PeerId(name))
    }

    /// Get the peer name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PeerId {
    type Error = Error;

    fn try_from(name: String) -> Result<Self> {
        PeerId::new(name)
    }
}

impl From<PeerId> for String {
    fn from(peer: PeerId) -> Self {
        peer.0
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PeerId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PeerId::new(s)
    }
}

/// A peer together with one of its devices
///
/// The string form is `<peer>.<device>`. Parsing splits on the last `.`,
/// so peer names may themselves contain dots.
///
/// # Examples
///
/// ```
/// use signal_store_core::ProtocolAddress;
///
/// let addr: ProtocolAddress = "alice.1".parse().unwrap();
/// assert_eq!(addr.peer().as_str(), "alice");
/// assert_eq!(addr.device_id(), 1);
/// assert_eq!(addr.to_string(), "alice.1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProtocolAddress {
    peer: PeerId,
    device_id: DeviceId,
}

impl ProtocolAddress {
    /// Create an address from its parts
    pub fn new(peer: PeerId, device_id: DeviceId) -> Self {
        Self { peer, device_id }
    }

    /// The peer this address belongs to
    pub fn peer(&self) -> &PeerId {
        &self.peer
    }

    /// The device number
    pub fn device_id(&self) -> DeviceId {
        self.device_id
    }
}

impl fmt::Display for ProtocolAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.peer, self.device_id)
    }
}

impl FromStr for ProtocolAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, device) = s.rsplit_once('.').ok_or_else(|| {
            Error::invalid_argument(format!("address {:?} is not <peer>.<device>", s))
        })?;
        let device_id = device.parse::<DeviceId>().map_err(|_| {
            Error::invalid_argument(format!("address {:?} has invalid device id", s))
        })?;
        Ok(Self::new(PeerId::new(name)?, device_id))
    }
}

/// Direction of the message a trust decision is made for
///
/// Recorded for diagnostics; trust-on-first-use treats both directions alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// We are about to encrypt to the peer
    Sending = 1,
    /// We received a message from the peer
    Receiving = 2,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Sending => f.write_str("sending"),
            Direction::Receiving => f.write_str("receiving"),
        }
    }
}
