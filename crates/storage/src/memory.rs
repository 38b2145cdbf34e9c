//! Strongly consistent in-memory document store
//!
//! # Design
//!
//! - DashMap: sharded by record id, lock-free reads
//! - AtomicU64: store-wide operation sequence for acknowledgments
//! - Every write is visible to the next query (read-your-writes)

use crate::stats::{OpCounters, OpStats};
use crate::traits::{DocumentStore, Predicate};
use async_trait::async_trait;
use dashmap::DashMap;
use signal_store_core::{Record, Result, Value, WriteAck};
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory document store
///
/// # Thread Safety
///
/// All operations are thread-safe:
/// - query(): Lock-free reads via DashMap
/// - put()/delete(): Only lock the target id's shard
///
/// # Example
///
/// ```ignore
/// use signal_store_storage::{DocumentStore, MemoryStore};
/// use signal_store_core::{Record, Value};
///
/// let store = MemoryStore::new();
/// store.put(Record::new("registrationId", Value::Int(7))).await?;
/// ```
pub struct MemoryStore {
    /// Record id -> value
    records: DashMap<String, Value>,
    /// Last assigned operation sequence
    sequence: AtomicU64,
    counters: OpCounters,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            sequence: AtomicU64::new(0),
            counters: OpCounters::new(),
        }
    }

    /// Create with expected number of records
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: DashMap::with_capacity(capacity),
            sequence: AtomicU64::new(0),
            counters: OpCounters::new(),
        }
    }

    /// Increment sequence and return new value
    #[inline]
    fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Get the last assigned sequence
    pub fn sequence(&self) -> u64 {
        self.sequence.load(Ordering::Acquire)
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check if a record exists, bypassing the counters
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Read a record's value, bypassing the counters
    pub fn peek(&self, id: &str) -> Option<Value> {
        self.records.get(id).map(|entry| entry.value().clone())
    }

    /// All record ids, sorted
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.records.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }

    /// Operation counts served so far
    pub fn stats(&self) -> OpStats {
        self.counters.snapshot()
    }

    pub(crate) fn insert(&self, record: Record) -> WriteAck {
        let sequence = self.next_sequence();
        let ack = WriteAck::new(record.id.as_str(), sequence);
        self.records.insert(record.id, record.value);
        ack
    }

    pub(crate) fn remove(&self, id: &str) -> WriteAck {
        let sequence = self.next_sequence();
        self.records.remove(id);
        WriteAck::new(id, sequence)
    }

    pub(crate) fn select(&self, predicate: &Predicate) -> Vec<Record> {
        let mut results: Vec<Record> = self
            .records
            .iter()
            .map(|entry| Record::new(entry.key().as_str(), entry.value().clone()))
            .filter(|record| predicate(record))
            .collect();

        // Sort for consistent ordering
        results.sort_by(|a, b| a.id.cmp(&b.id));
        results
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("records", &self.len())
            .field("sequence", &self.sequence())
            .finish()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn put(&self, record: Record) -> Result<WriteAck> {
        self.counters.record_put();
        Ok(self.insert(record))
    }

    async fn query(&self, predicate: &Predicate) -> Result<Vec<Record>> {
        self.counters.record_query();
        Ok(self.select(predicate))
    }

    async fn delete(&self, id: &str) -> Result<WriteAck> {
        self.counters.record_delete();
        Ok(self.remove(id))
    }
}
