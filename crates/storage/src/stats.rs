//! Operation counters shared by the in-memory stores

use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of how many primitive operations a store has served
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpStats {
    /// `put` calls
    pub puts: u64,
    /// `query` calls
    pub queries: u64,
    /// `delete` calls
    pub deletes: u64,
}

/// Live counters behind [`OpStats`]
#[derive(Debug, Default)]
pub struct OpCounters {
    puts: AtomicU64,
    queries: AtomicU64,
    deletes: AtomicU64,
}

impl OpCounters {
    /// Create zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn record_put(&self) {
        self.puts.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_query(&self) {
        self.queries.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_delete(&self) {
        self.deletes.fetch_add(1, Ordering::Relaxed);
    }

    /// Read the current counts
    pub fn snapshot(&self) -> OpStats {
        OpStats {
            puts: self.puts.load(Ordering::Relaxed),
            queries: self.queries.load(Ordering::Relaxed),
            deletes: self.deletes.load(Ordering::Relaxed),
        }
    }
}
