//! Session Tests
//!
//! Confirmed session writes over eventually-consistent stores, per-peer
//! bulk removal, and device enumeration.

use crate::*;

// =============================================================================
// LOAD / STORE
// =============================================================================

#[tokio::test]
async fn test_session_roundtrip() {
    let store = create_store();
    let bob = address("bob", 1);

    store.protocol.store_session(&bob, b"record-1").await.unwrap();
    assert_eq!(
        store.protocol.load_session(&bob).await.unwrap(),
        Some(b"record-1".to_vec())
    );
    assert_eq!(store.protocol.load_session(&address("bob", 2)).await.unwrap(), None);
}

#[tokio::test]
async fn test_session_overwrite() {
    let store = create_store();
    let bob = address("bob", 1);

    store.protocol.store_session(&bob, b"old").await.unwrap();
    store.protocol.store_session(&bob, b"new").await.unwrap();
    assert_eq!(
        store.protocol.load_session(&bob).await.unwrap(),
        Some(b"new".to_vec())
    );
}

#[tokio::test]
async fn test_consistent_store_writes_session_once() {
    let (store, backend) = create_store_with_backend();

    store.protocol.store_session(&address("bob", 1), b"r").await.unwrap();
    assert_eq!(backend.stats().puts, 1);
}

// =============================================================================
// EVENTUAL CONSISTENCY
// =============================================================================

#[tokio::test]
async fn test_hidden_first_write_is_written_exactly_twice() {
    let (store, replica) = create_lagging_store(1);
    let peer_a = address("peerA", 1);

    store.protocol.store_session(&peer_a, b"recordX").await.unwrap();
    assert_eq!(replica.stats().puts, 2);
    assert_eq!(
        store.protocol.load_session(&peer_a).await.unwrap(),
        Some(b"recordX".to_vec())
    );
}

#[tokio::test]
async fn test_lost_first_write_recovered_by_rewrite() {
    let (store, replica) = create_lagging_store(0);
    replica.drop_next_puts(1);
    let peer_a = address("peerA", 1);

    store.protocol.store_session(&peer_a, b"recordX").await.unwrap();
    assert_eq!(replica.stats().puts, 2);
    assert_eq!(
        store.protocol.load_session(&peer_a).await.unwrap(),
        Some(b"recordX".to_vec())
    );
}

#[tokio::test]
async fn test_retry_budget_is_configurable() {
    init_tracing();
    let replica = Arc::new(ReplicaStore::with_visibility_lag(5));
    let store = SignalStore::builder()
        .store(Arc::clone(&replica) as Arc<dyn DocumentStore>)
        .session_write_retries(2)
        .build()
        .unwrap();

    store.protocol.store_session(&address("bob", 1), b"r").await.unwrap();
    assert_eq!(replica.stats().puts, 3);
}

#[tokio::test]
async fn test_unverified_session_writes() {
    init_tracing();
    let replica = Arc::new(ReplicaStore::with_visibility_lag(1));
    let store = SignalStore::builder()
        .store(Arc::clone(&replica) as Arc<dyn DocumentStore>)
        .config_toml("verify_session_writes = false")
        .unwrap()
        .build()
        .unwrap();

    store.protocol.store_session(&address("bob", 1), b"r").await.unwrap();
    assert_eq!(replica.stats().puts, 1);
    assert_eq!(replica.stats().queries, 0);
}

// =============================================================================
// REMOVAL
// =============================================================================

#[tokio::test]
async fn test_remove_session_single_device() {
    let store = create_store();
    store.protocol.store_session(&address("bob", 1), b"a").await.unwrap();
    store.protocol.store_session(&address("bob", 2), b"b").await.unwrap();

    assert!(store
        .protocol
        .remove_session(&address("bob", 1))
        .await
        .unwrap()
        .is_some());
    assert_eq!(store.protocol.load_session(&address("bob", 1)).await.unwrap(), None);
    assert!(store
        .protocol
        .load_session(&address("bob", 2))
        .await
        .unwrap()
        .is_some());
    assert_eq!(store.protocol.remove_session(&address("bob", 1)).await.unwrap(), None);
}

#[tokio::test]
async fn test_remove_all_sessions_leaves_other_peers() {
    let (store, backend) = create_store_with_backend();
    for (name, device) in [("bob", 1), ("bob", 2), ("bob", 3), ("bobby", 1), ("alice", 1)] {
        store
            .protocol
            .store_session(&address(name, device), b"s")
            .await
            .unwrap();
    }
    store.protocol.save_identity(&peer("bob"), &[1]).await.unwrap();

    assert!(store.protocol.remove_all_sessions(&peer("bob")).await.unwrap());

    assert!(store.protocol.session_devices(&peer("bob")).await.unwrap().is_empty());
    assert!(backend.contains("session:bobby:1"));
    assert!(backend.contains("session:alice:1"));
    assert!(backend.contains("identityKey:bob"));
}

#[tokio::test]
async fn test_remove_all_sessions_partial_failure() {
    let (store, faulty) = create_faulty_store();
    for device in [1, 2, 3] {
        store
            .protocol
            .store_session(&address("bob", device), b"s")
            .await
            .unwrap();
    }
    faulty.fail_deletes_for("session:bob:2");

    assert!(!store.protocol.remove_all_sessions(&peer("bob")).await.unwrap());
    assert_eq!(store.protocol.session_devices(&peer("bob")).await.unwrap(), vec![2]);

    faulty.heal();
    assert!(store.protocol.remove_all_sessions(&peer("bob")).await.unwrap());
}

#[tokio::test]
async fn test_remove_all_sessions_query_failure_propagates() {
    let (store, faulty) = create_faulty_store();
    faulty.fail_queries(true);

    let err = store
        .protocol
        .remove_all_sessions(&peer("bob"))
        .await
        .unwrap_err();
    assert!(err.is_store_failure());
}

#[tokio::test]
async fn test_session_devices_sorted() {
    let store = create_store();
    for device in [12, 1, 5] {
        store
            .protocol
            .store_session(&address("carol", device), b"s")
            .await
            .unwrap();
    }
    assert_eq!(
        store.protocol.session_devices(&peer("carol")).await.unwrap(),
        vec![1, 5, 12]
    );
}

#[test]
fn test_address_text_form() {
    let addr: ProtocolAddress = "peerA.1".parse().unwrap();
    assert_eq!(addr, address("peerA", 1));
    assert_eq!(addr.to_string(), "peerA.1");
}
