use std::any::type_name;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A typed handle for a slot in a [`TypedStore`](crate::TypedStore).
///
/// A `TypedKey<T>` pairs a string identifier with a compile-time type
/// parameter. The identifier is the key's *only* identity: two keys are equal
/// whenever their ids match, even if their type parameters differ. The type
/// parameter is a retrieval-time aid layered on top of a plain string-keyed
/// space: it tells the store what type to hand back. Nothing stops you from
/// constructing two keys with the same id and different types; the store
/// reports this as [`StoreError::TypeMismatch`](crate::StoreError::TypeMismatch)
/// when the mismatched key is used to read.
///
/// Keys are typically declared once and reused everywhere they are needed:
///
/// ```
/// use typedstore::{TypedKey, TypedStore};
///
/// fn score_key() -> TypedKey<u32> {
///     TypedKey::new("score")
/// }
///
/// let mut store = TypedStore::new();
/// store.add(&score_key(), 42u32).unwrap();
/// assert_eq!(store.get(&score_key()).unwrap(), Some(42));
/// ```
pub struct TypedKey<T> {
    id: String,
    // fn() -> T keeps the key Send + Sync + covariant without owning a T.
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypedKey<T> {
    /// Creates a key binding the type `T` to the given identifier.
    ///
    /// Duplicate ids across distinct keys are permitted here; uniqueness is
    /// enforced only when inserting into a particular store.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            _marker: PhantomData,
        }
    }

    /// The key's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The runtime witness for the key's bound type.
    ///
    /// This is what the store compares against the tag recorded with each
    /// stored value when the key is used to read.
    pub fn type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

// Manual impls: derives would bound T, but the key never holds a T.

impl<T> Clone for TypedKey<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for TypedKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedKey")
            .field("id", &self.id)
            .field("type", &self.type_name())
            .finish()
    }
}

/// Keys are equal iff their ids are equal; the type parameter plays no part.
impl<T, U> PartialEq<TypedKey<U>> for TypedKey<T> {
    fn eq(&self, other: &TypedKey<U>) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for TypedKey<T> {}

/// Hashes the id only, consistent with equality across type parameters.
impl<T> Hash for TypedKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::TypedKey;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T>(key: &TypedKey<T>) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_ignores_type_parameter() {
        let a = TypedKey::<i32>::new("slot");
        let b = TypedKey::<String>::new("slot");
        let c = TypedKey::<i32>::new("other");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_agrees_with_equality() {
        let a = TypedKey::<i32>::new("slot");
        let b = TypedKey::<Vec<u8>>::new("slot");

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn keys_are_clone_and_debug_without_value_bounds() {
        struct NotClone;

        let key = TypedKey::<NotClone>::new("opaque");
        let copy = key.clone();
        assert_eq!(key, copy);
        assert!(format!("{:?}", key).contains("opaque"));
    }

    #[test]
    fn type_name_reports_bound_type() {
        let key = TypedKey::<u32>::new("n");
        assert_eq!(key.type_name(), std::any::type_name::<u32>());
    }
}
