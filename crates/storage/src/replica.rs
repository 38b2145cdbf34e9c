//! Eventually consistent replica
//!
//! [`ReplicaStore`] acknowledges every write immediately but only applies it
//! to the readable state after a configurable number of later queries have
//! run (the visibility lag). It can also acknowledge and then silently lose
//! writes, the failure mode a replicated document store exhibits when a
//! write never reaches the replica being read.
//!
//! ```text
//! put(a)  ─► pending[a, lag]            query ─► apply pending with lag 0
//!                                                 evaluate predicate
//!                                                 age remaining pending by 1
//! ```

use crate::memory::MemoryStore;
use crate::stats::{OpCounters, OpStats};
use crate::traits::{DocumentStore, Predicate};
use async_trait::async_trait;
use parking_lot::Mutex;
use signal_store_core::{Record, Result, WriteAck};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

#[derive(Debug)]
enum PendingOp {
    Put(Record),
    Delete(String),
}

#[derive(Debug)]
struct Pending {
    op: PendingOp,
    remaining: u32,
}

#[derive(Debug, Default)]
struct ReplicaState {
    pending: VecDeque<Pending>,
    puts_to_drop: u32,
}

/// Document store whose writes become visible late, or never
pub struct ReplicaStore {
    /// Readable state
    visible: MemoryStore,
    state: Mutex<ReplicaState>,
    lag: u32,
    /// Last assigned acknowledgment sequence
    sequence: AtomicU64,
    counters: OpCounters,
}

impl ReplicaStore {
    /// Create a replica where each write stays invisible for `lag` queries
    ///
    /// A lag of 0 behaves like [`MemoryStore`].
    pub fn with_visibility_lag(lag: u32) -> Self {
        Self {
            visible: MemoryStore::new(),
            state: Mutex::new(ReplicaState::default()),
            lag,
            sequence: AtomicU64::new(0),
            counters: OpCounters::new(),
        }
    }

    /// Configured visibility lag
    pub fn visibility_lag(&self) -> u32 {
        self.lag
    }

    /// Acknowledge the next `count` puts without ever applying them
    pub fn drop_next_puts(&self, count: u32) {
        self.state.lock().puts_to_drop += count;
    }

    /// Apply every pending operation now
    pub fn sync(&self) {
        let drained: Vec<Pending> = self.state.lock().pending.drain(..).collect();
        for pending in drained {
            self.apply(pending.op);
        }
    }

    /// Number of acknowledged operations not yet visible
    pub fn pending_len(&self) -> usize {
        self.state.lock().pending.len()
    }

    /// Operation counts served so far
    pub fn stats(&self) -> OpStats {
        self.counters.snapshot()
    }

    /// The currently readable state
    pub fn visible(&self) -> &MemoryStore {
        &self.visible
    }

    #[inline]
    fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::AcqRel) + 1
    }

    fn apply(&self, op: PendingOp) {
        match op {
            PendingOp::Put(record) => {
                self.visible.insert(record);
            }
            PendingOp::Delete(id) => {
                self.visible.remove(&id);
            }
        }
    }

    fn enqueue(&self, op: PendingOp) {
        if self.lag == 0 {
            self.apply(op);
        } else {
            self.state.lock().pending.push_back(Pending {
                op,
                remaining: self.lag,
            });
        }
    }

    /// Apply due operations in order, returning how many were applied
    fn catch_up(&self) -> usize {
        let mut due = Vec::new();
        {
            let mut state = self.state.lock();
            while state.pending.front().map_or(false, |p| p.remaining == 0) {
                if let Some(pending) = state.pending.pop_front() {
                    due.push(pending.op);
                }
            }
        }
        let applied = due.len();
        for op in due {
            self.apply(op);
        }
        applied
    }

    fn age_pending(&self) {
        for pending in self.state.lock().pending.iter_mut() {
            pending.remaining = pending.remaining.saturating_sub(1);
        }
    }
}

impl std::fmt::Debug for ReplicaStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplicaStore")
            .field("lag", &self.lag)
            .field("visible", &self.visible.len())
            .field("pending", &self.pending_len())
            .finish()
    }
}

#[async_trait]
impl DocumentStore for ReplicaStore {
    async fn put(&self, record: Record) -> Result<WriteAck> {
        self.counters.record_put();
        let dropped = {
            let mut state = self.state.lock();
            if state.puts_to_drop > 0 {
                state.puts_to_drop -= 1;
                true
            } else {
                false
            }
        };
        let ack = WriteAck::new(record.id.as_str(), self.next_sequence());
        if dropped {
            debug!(id = %record.id, "replica dropped acknowledged put");
        } else {
            self.enqueue(PendingOp::Put(record));
        }
        Ok(ack)
    }

    async fn query(&self, predicate: &Predicate) -> Result<Vec<Record>> {
        self.counters.record_query();
        let applied = self.catch_up();
        if applied > 0 {
            debug!(applied, "replica caught up");
        }
        let results = self.visible.select(predicate);
        self.age_pending();
        Ok(results)
    }

    async fn delete(&self, id: &str) -> Result<WriteAck> {
        self.counters.record_delete();
        let ack = WriteAck::new(id, self.next_sequence());
        self.enqueue(PendingOp::Delete(id.to_string()));
        Ok(ack)
    }
}
