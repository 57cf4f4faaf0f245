use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use typedstore::{StoreError, StoreStatus, TypedKey, TypedStore};

fn hash_of<T>(key: &TypedKey<T>) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_key_identity_is_the_id() {
    let int_key = TypedKey::<i32>::new("slot");
    let string_key = TypedKey::<String>::new("slot");
    let other = TypedKey::<i32>::new("elsewhere");

    // Equality and hashing ignore the type parameter entirely.
    assert_eq!(int_key, string_key);
    assert_eq!(hash_of(&int_key), hash_of(&string_key));
    assert_ne!(int_key, other);
}

#[test]
fn test_add_and_get() {
    let mut store = TypedStore::new();
    let key = TypedKey::<i32>::new("score");

    assert_eq!(store.add(&key, 42).unwrap(), StoreStatus::Success);
    assert_eq!(store.get(&key).unwrap(), Some(42));
}

#[test]
fn test_get_absent_key_is_none() {
    let store = TypedStore::new();
    let key = TypedKey::<String>::new("nonexistent");

    assert_eq!(store.get(&key).unwrap(), None);
}

#[test]
fn test_add_existing_key_is_rejected() {
    let mut store = TypedStore::new();
    let key = TypedKey::<i32>::new("score");

    assert_eq!(store.add(&key, 1).unwrap(), StoreStatus::Success);
    assert_eq!(store.add(&key, 2).unwrap(), StoreStatus::KeyAlreadyExists);

    // The first value is untouched.
    assert_eq!(store.get(&key).unwrap(), Some(1));
}

#[test]
fn test_add_none_is_null_value() {
    let mut store = TypedStore::new();
    let key = TypedKey::<i32>::new("score");
    store.add(&key, 1).unwrap();

    let before = store.snapshot();
    assert_eq!(
        store.add(&TypedKey::<i32>::new("other"), None).unwrap(),
        StoreStatus::NullValue
    );

    // The mapping is unchanged.
    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_replace_absent_key_is_rejected() {
    let mut store = TypedStore::new();
    let key = TypedKey::<i32>::new("score");

    let before = store.snapshot();
    assert_eq!(store.replace(&key, 1).unwrap(), StoreStatus::KeyDoesNotExist);
    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_replace_overwrites_present_key() {
    let mut store = TypedStore::new();
    let key = TypedKey::<String>::new("name");

    store.add(&key, "Alice".to_string()).unwrap();
    assert_eq!(
        store.replace(&key, "Bob".to_string()).unwrap(),
        StoreStatus::Success
    );
    assert_eq!(store.get(&key).unwrap(), Some("Bob".to_string()));
}

#[test]
fn test_get_with_wrong_type_is_mismatch() {
    let mut store = TypedStore::new();
    store.add(&TypedKey::<i32>::new("score"), 42).unwrap();

    // Same id, different type parameter.
    let wrong = TypedKey::<String>::new("score");
    let result = store.get(&wrong);

    match result {
        Err(StoreError::TypeMismatch {
            key,
            stored,
            requested,
        }) => {
            assert_eq!(key, "score");
            assert_eq!(stored, std::any::type_name::<i32>());
            assert_eq!(requested, std::any::type_name::<String>());
        }
        other => panic!("expected TypeMismatch, got {:?}", other),
    }
}

#[test]
fn test_replace_may_change_the_stored_type() {
    let mut store = TypedStore::new();
    let as_int = TypedKey::<i32>::new("value");
    let as_string = TypedKey::<String>::new("value");

    store.add(&as_int, 42).unwrap();

    // The slot's tag follows the new value.
    assert_eq!(
        store.replace(&as_string, "forty-two".to_string()).unwrap(),
        StoreStatus::Success
    );
    assert_eq!(store.get(&as_string).unwrap(), Some("forty-two".to_string()));

    // Reading through the old key now reports the disagreement.
    assert!(matches!(
        store.get(&as_int),
        Err(StoreError::TypeMismatch { .. })
    ));
}

#[test]
fn test_snapshot_is_isolated_from_later_mutation() {
    let mut store = TypedStore::new();
    let score = TypedKey::<i32>::new("score");
    let name = TypedKey::<String>::new("name");

    store.add(&score, 1).unwrap();
    let snapshot = store.snapshot();

    store.replace(&score, 2).unwrap();
    store.add(&name, "Alice".to_string()).unwrap();

    assert_eq!(snapshot.get(&score).unwrap(), Some(1));
    assert_eq!(snapshot.get(&name).unwrap(), None);
    assert_eq!(snapshot.len(), 1);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_heterogeneous_values_in_one_store() {
    let mut store = TypedStore::new();

    store.add(&TypedKey::<i32>::new("int"), 42).unwrap();
    store
        .add(&TypedKey::<String>::new("string"), "hello".to_string())
        .unwrap();
    store.add(&TypedKey::<f64>::new("float"), 3.14f64).unwrap();
    store
        .add(&TypedKey::<Vec<u8>>::new("bytes"), vec![1u8, 2, 3])
        .unwrap();

    assert_eq!(store.get(&TypedKey::<i32>::new("int")).unwrap(), Some(42));
    assert_eq!(
        store.get(&TypedKey::<String>::new("string")).unwrap(),
        Some("hello".to_string())
    );
    assert_eq!(
        store.get(&TypedKey::<f64>::new("float")).unwrap(),
        Some(3.14)
    );
    assert_eq!(
        store.get(&TypedKey::<Vec<u8>>::new("bytes")).unwrap(),
        Some(vec![1u8, 2, 3])
    );

    let mut ids: Vec<&str> = store.ids().collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["bytes", "float", "int", "string"]);
}

#[test]
fn test_empty_store_queries() {
    let store = TypedStore::new();

    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(!store.contains_key(&TypedKey::<i32>::new("anything")));
    assert!(store.snapshot().is_empty());
}

#[test]
fn test_default_implementation() {
    let mut store: TypedStore = Default::default();

    assert!(store.is_empty());
    store.add(&TypedKey::<i32>::new("test"), 42).unwrap();
    assert_eq!(store.get(&TypedKey::<i32>::new("test")).unwrap(), Some(42));
}

#[test]
fn test_error_display() {
    let mut store = TypedStore::new();
    store.add(&TypedKey::<i32>::new("score"), 42).unwrap();

    let err = store.get(&TypedKey::<bool>::new("score")).unwrap_err();
    let message = format!("{}", err);

    assert!(message.contains("score"));
    assert!(message.contains("i32"));
    assert!(message.contains("bool"));
}
