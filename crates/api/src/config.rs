//! Protocol store configuration
//!
//! ```toml
//! # Extra writes allowed when a session write is not yet readable
//! session_write_retries = 1
//! # Read back session writes at all
//! verify_session_writes = true
//! ```

use serde::{Deserialize, Serialize};

/// Default number of rewrites for an unconfirmed session write
pub const DEFAULT_SESSION_WRITE_RETRIES: u32 = 1;

/// Tunables for [`ProtocolStoreImpl`](crate::ProtocolStoreImpl)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Rewrites allowed after a session write fails to read back
    pub session_write_retries: u32,
    /// Confirm session writes with a read; plain puts when false
    pub verify_session_writes: bool,
}

impl StoreConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML, filling unset fields with defaults
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Set the session write retry budget
    pub fn session_write_retries(mut self, retries: u32) -> Self {
        self.session_write_retries = retries;
        self
    }

    /// Enable or disable read-back of session writes
    pub fn verify_session_writes(mut self, verify: bool) -> Self {
        self.verify_session_writes = verify;
        self
    }

    /// Retry budget actually applied to session writes
    pub(crate) fn effective_session_retries(&self) -> Option<u32> {
        self.verify_session_writes.then_some(self.session_write_retries)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            session_write_retries: DEFAULT_SESSION_WRITE_RETRIES,
            verify_session_writes: true,
        }
    }
}
