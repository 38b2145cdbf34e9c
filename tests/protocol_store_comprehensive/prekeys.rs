//! Prekey Tests
//!
//! One-time prekeys and signed prekeys: byte-exact round trips,
//! consumption, and namespace separation.

use crate::*;

#[tokio::test]
async fn test_pre_key_roundtrip_is_byte_identical() {
    let store = create_store();
    let pair = KeyPair::new(vec![0x05, 0x00, 0x80, 0xFF, 0x7F], vec![0x00, 0x01, 0xFE]);

    store.protocol.store_pre_key(7, &pair).await.unwrap();
    let loaded = store.protocol.load_pre_key(7).await.unwrap().unwrap();

    assert_eq!(loaded.public_key, pair.public_key);
    assert_eq!(loaded.private_key, pair.private_key);
}

#[tokio::test]
async fn test_pre_key_consumed_after_remove() {
    let store = create_store();
    store.protocol.store_pre_key(7, &key_pair(7)).await.unwrap();

    assert!(store.protocol.remove_pre_key(7).await.unwrap().is_some());
    assert_eq!(store.protocol.load_pre_key(7).await.unwrap(), None);
}

#[tokio::test]
async fn test_remove_unknown_pre_key_succeeds() {
    let (store, backend) = create_store_with_backend();

    assert_eq!(store.protocol.remove_pre_key(404).await.unwrap(), None);
    assert_eq!(store.protocol.remove_signed_pre_key(404).await.unwrap(), None);
    assert_eq!(backend.stats().deletes, 0);
}

#[tokio::test]
async fn test_many_pre_keys_independent() {
    let store = create_store();
    for id in 0..20u32 {
        store
            .protocol
            .store_pre_key(id, &key_pair(id as u8))
            .await
            .unwrap();
    }
    store.protocol.remove_pre_key(10).await.unwrap();

    for id in 0..20u32 {
        let loaded = store.protocol.load_pre_key(id).await.unwrap();
        if id == 10 {
            assert_eq!(loaded, None);
        } else {
            assert_eq!(loaded, Some(key_pair(id as u8)), "pre key {}", id);
        }
    }
}

#[tokio::test]
async fn test_pre_key_ids_do_not_alias() {
    let store = create_store();
    store.protocol.store_pre_key(1, &key_pair(1)).await.unwrap();
    store.protocol.store_pre_key(10, &key_pair(10)).await.unwrap();

    store.protocol.remove_pre_key(1).await.unwrap();
    assert_eq!(store.protocol.load_pre_key(10).await.unwrap(), Some(key_pair(10)));
}

#[tokio::test]
async fn test_signed_pre_key_lifecycle() {
    let store = create_store();
    let pair = key_pair(3);

    store.protocol.store_signed_pre_key(1, &pair).await.unwrap();
    assert_eq!(
        store.protocol.load_signed_pre_key(1).await.unwrap(),
        Some(pair)
    );

    assert!(store.protocol.remove_signed_pre_key(1).await.unwrap().is_some());
    assert_eq!(store.protocol.load_signed_pre_key(1).await.unwrap(), None);
}

#[tokio::test]
async fn test_pre_key_and_signed_pre_key_namespaces_separate() {
    let store = create_store();
    store.protocol.store_pre_key(1, &key_pair(1)).await.unwrap();
    store.protocol.store_signed_pre_key(1, &key_pair(2)).await.unwrap();

    store.protocol.remove_pre_key(1).await.unwrap();
    assert_eq!(
        store.protocol.load_signed_pre_key(1).await.unwrap(),
        Some(key_pair(2))
    );
}

#[tokio::test]
async fn test_stored_pair_uses_base64_object_encoding() {
    let (store, backend) = create_store_with_backend();
    store
        .protocol
        .store_pre_key(5, &KeyPair::new(vec![0xFF, 0x00], vec![0x01]))
        .await
        .unwrap();

    let raw = backend.peek("25519KeypreKey:5").unwrap();
    let fields = raw.as_object().unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields["pubKey"], Value::String("/wA=".into()));
    assert_eq!(fields["privKey"], Value::String("AQ==".into()));
}

#[tokio::test]
async fn test_corrupt_pre_key_is_serialization_error() {
    let store = create_store();
    store
        .kv
        .put("25519KeypreKey:5", Value::String("not a key pair".into()))
        .await
        .unwrap();

    let err = store.protocol.load_pre_key(5).await.unwrap_err();
    assert!(err.is_serialization());
}
