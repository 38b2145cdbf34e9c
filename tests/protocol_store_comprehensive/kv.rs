//! KV Facade Tests
//!
//! put / get / exists / remove / remove_many / confirmed_put through the
//! store's `kv` handle.

use crate::*;

// =============================================================================
// PUT / GET TESTS
// =============================================================================

#[tokio::test]
async fn test_put_and_get_roundtrip() {
    let store = create_store();

    store.kv.put("key1", Value::Int(42)).await.unwrap();
    assert_eq!(store.kv.get("key1").await.unwrap(), Some(Value::Int(42)));
}

#[tokio::test]
async fn test_get_nonexistent_returns_none() {
    let store = create_store();
    assert!(store.kv.get("nonexistent").await.unwrap().is_none());
}

#[tokio::test]
async fn test_put_overwrites_existing() {
    let store = create_store();

    store.kv.put("key", Value::Int(1)).await.unwrap();
    store.kv.put("key", Value::Int(2)).await.unwrap();

    assert_eq!(store.kv.get("key").await.unwrap(), Some(Value::Int(2)));
}

#[tokio::test]
async fn test_put_all_value_types() {
    let store = create_store();

    for (name, value) in standard_test_values() {
        let key = format!("type:{}", name);
        store.kv.put(&key, value.clone()).await.unwrap();

        let retrieved = store.kv.get(&key).await.unwrap();
        assert_eq!(retrieved, Some(value), "Failed for type: {}", name);
    }
}

#[tokio::test]
async fn test_put_desugars_to_one_document_put() {
    let (store, backend) = create_store_with_backend();

    store.kv.put("k", Value::Bool(true)).await.unwrap();
    assert_eq!(
        backend.stats(),
        OpStats {
            puts: 1,
            queries: 0,
            deletes: 0
        }
    );
    assert_eq!(backend.peek("k"), Some(Value::Bool(true)));
}

#[tokio::test]
async fn test_store_failure_propagates() {
    let (store, faulty) = create_faulty_store();
    faulty.fail_puts_for("k");

    let err = store.kv.put("k", Value::Int(1)).await.unwrap_err();
    assert!(err.is_store_failure());

    let err: signalstore::Error = err.into();
    assert!(err.is_store_failure());
}

// =============================================================================
// REMOVE TESTS
// =============================================================================

#[tokio::test]
async fn test_remove_missing_is_noop_success() {
    let (store, backend) = create_store_with_backend();

    assert_eq!(store.kv.remove("missing").await.unwrap(), None);
    assert_eq!(backend.stats().deletes, 0);
}

#[tokio::test]
async fn test_remove_then_get_or_returns_default() {
    let store = create_store();
    store.kv.put("k", Value::Int(1)).await.unwrap();

    assert!(store.kv.remove("k").await.unwrap().is_some());
    let got = store
        .kv
        .get_or("k", Some(Value::String("default".into())))
        .await
        .unwrap();
    assert_eq!(got, Some(Value::String("default".into())));
}

#[tokio::test]
async fn test_empty_value_is_present_and_removable() {
    let (store, backend) = create_store_with_backend();
    store.kv.put("k", Value::Bytes(vec![])).await.unwrap();

    assert!(store.kv.exists("k").await.unwrap());
    assert!(store.kv.remove("k").await.unwrap().is_some());
    assert_eq!(backend.stats().deletes, 1);
    assert!(!backend.contains("k"));
}

// =============================================================================
// REMOVE_MANY TESTS
// =============================================================================

#[tokio::test]
async fn test_remove_many_all_succeed() {
    let store = create_store();
    for k in ["a", "b", "c"] {
        store.kv.put(k, Value::Int(1)).await.unwrap();
    }

    let keys: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    assert!(store.kv.remove_many(&keys).await);
    for k in ["a", "b", "c"] {
        assert!(!store.kv.exists(k).await.unwrap());
    }
}

#[tokio::test]
async fn test_remove_many_reports_incomplete_but_attempts_all() {
    let (store, faulty) = create_faulty_store();
    for k in ["a", "b", "c"] {
        store.kv.put(k, Value::Int(1)).await.unwrap();
    }
    faulty.fail_deletes_for("a");

    let keys: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    assert!(!store.kv.remove_many(&keys).await);
    assert!(faulty.inner().contains("a"));
    assert!(!faulty.inner().contains("b"));
    assert!(!faulty.inner().contains("c"));
}

// =============================================================================
// ARGUMENT VALIDATION
// =============================================================================

#[tokio::test]
async fn test_invalid_arguments_never_reach_store() {
    let (store, backend) = create_store_with_backend();

    assert!(store.kv.put("", Value::Int(1)).await.unwrap_err().is_invalid_argument());
    assert!(store.kv.put("k", Value::Null).await.unwrap_err().is_invalid_argument());
    assert!(store.kv.get("").await.unwrap_err().is_invalid_argument());
    assert!(store.kv.exists("").await.unwrap_err().is_invalid_argument());
    assert!(store.kv.remove("").await.unwrap_err().is_invalid_argument());
    assert_eq!(backend.stats(), OpStats::default());
}

// =============================================================================
// CONFIRMED PUT
// =============================================================================

#[tokio::test]
async fn test_confirmed_put_over_lagging_replica() {
    let (store, replica) = create_lagging_store(1);

    store.kv.confirmed_put("k", Value::Int(3), 1).await.unwrap();
    assert_eq!(replica.stats().puts, 2);
    assert_eq!(store.kv.get("k").await.unwrap(), Some(Value::Int(3)));
}

#[tokio::test]
async fn test_plain_put_over_lagging_replica_is_not_read_your_write() {
    let (store, replica) = create_lagging_store(1);

    store.kv.put("k", Value::Int(3)).await.unwrap();
    assert_eq!(store.kv.get("k").await.unwrap(), None);
    assert_eq!(store.kv.get("k").await.unwrap(), Some(Value::Int(3)));

    replica.sync();
    assert_eq!(replica.pending_len(), 0);
}
