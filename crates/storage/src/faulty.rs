//! Fault injection wrapper
//!
//! Wraps any [`DocumentStore`] and rejects operations on chosen record ids
//! with `StoreFailure`, leaving everything else to the inner store.

use crate::traits::{DocumentStore, Predicate};
use async_trait::async_trait;
use parking_lot::RwLock;
use signal_store_core::{Error, Record, Result, WriteAck};
use std::collections::HashSet;

#[derive(Debug, Default)]
struct FaultPlan {
    failing_puts: HashSet<String>,
    failing_deletes: HashSet<String>,
    failing_queries: bool,
}

/// Document store that fails selected operations
#[derive(Debug)]
pub struct FaultyStore<S> {
    inner: S,
    plan: RwLock<FaultPlan>,
}

impl<S: DocumentStore> FaultyStore<S> {
    /// Wrap a store with no faults planned
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            plan: RwLock::new(FaultPlan::default()),
        }
    }

    /// The wrapped store
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Reject every put of `id`
    pub fn fail_puts_for(&self, id: impl Into<String>) {
        self.plan.write().failing_puts.insert(id.into());
    }

    /// Reject every delete of `id`
    pub fn fail_deletes_for(&self, id: impl Into<String>) {
        self.plan.write().failing_deletes.insert(id.into());
    }

    /// Reject every query while `enabled`
    pub fn fail_queries(&self, enabled: bool) {
        self.plan.write().failing_queries = enabled;
    }

    /// Remove all planned faults
    pub fn heal(&self) {
        *self.plan.write() = FaultPlan::default();
    }
}

#[async_trait]
impl<S: DocumentStore> DocumentStore for FaultyStore<S> {
    async fn put(&self, record: Record) -> Result<WriteAck> {
        if self.plan.read().failing_puts.contains(&record.id) {
            return Err(Error::store_failure(format!("injected put failure for {}", record.id)));
        }
        self.inner.put(record).await
    }

    async fn query(&self, predicate: &Predicate) -> Result<Vec<Record>> {
        if self.plan.read().failing_queries {
            return Err(Error::store_failure("injected query failure"));
        }
        self.inner.query(predicate).await
    }

    async fn delete(&self, id: &str) -> Result<WriteAck> {
        if self.plan.read().failing_deletes.contains(id) {
            return Err(Error::store_failure(format!("injected delete failure for {}", id)));
        }
        self.inner.delete(id).await
    }
}
