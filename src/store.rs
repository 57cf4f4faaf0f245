use crate::error::StoreError;
use crate::key::TypedKey;
use crate::value::StoredValue;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

/// The outcome of an [`add`](TypedStore::add) or [`replace`](TypedStore::replace).
///
/// These are routine results of a key-value workflow, so they are returned as
/// values rather than errors. The set is closed; nothing else is ever
/// reported through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    /// The mutation was applied.
    Success,
    /// `add` was given no value; the store is unchanged.
    NullValue,
    /// `add` found the key's id already present; the store is unchanged.
    KeyAlreadyExists,
    /// `replace` found nothing under the key's id; the store is unchanged.
    KeyDoesNotExist,
}

/// A heterogeneous key-value store addressed by [`TypedKey`]s.
///
/// A single `TypedStore` holds values of many different types. Each slot is
/// stored type-erased together with a runtime type tag; reading through a
/// [`TypedKey<T>`] checks the tag against `T` before handing the value back,
/// so a key whose type disagrees with the slot produces a reportable
/// [`StoreError::TypeMismatch`] instead of a bad cast.
///
/// Slots are kept in the codec's encoded form, which is what allows a whole
/// store to be written to disk and read back without the reader naming any
/// concrete types (see [`write`](crate::write) and [`read`](crate::read)).
/// Values must therefore be `Serialize` to go in and `DeserializeOwned` to
/// come out.
///
/// The store is deliberately unsynchronized. Callers that need concurrent
/// access should wrap the whole store in a lock of their choosing.
///
/// # Examples
///
/// ```
/// use typedstore::{StoreStatus, TypedKey, TypedStore};
///
/// let mut store = TypedStore::new();
///
/// let score = TypedKey::<u32>::new("score");
/// let name = TypedKey::<String>::new("name");
///
/// assert_eq!(store.add(&score, 42u32)?, StoreStatus::Success);
/// assert_eq!(store.add(&name, "Alice".to_string())?, StoreStatus::Success);
///
/// // Retrieval is typed by the key.
/// assert_eq!(store.get(&score)?, Some(42));
/// assert_eq!(store.get(&name)?, Some("Alice".to_string()));
///
/// // Absence is a value, not an error.
/// let missing = TypedKey::<bool>::new("active");
/// assert_eq!(store.get(&missing)?, None);
/// # Ok::<(), typedstore::StoreError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypedStore {
    entries: HashMap<String, StoredValue>,
}

impl TypedStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Retrieves the value stored under `key`, decoded as the key's type.
    ///
    /// Returns `Ok(None)` if the key's id is not present.
    ///
    /// # Errors
    ///
    /// - [`StoreError::TypeMismatch`] if the slot was written through a key
    ///   of a different type
    /// - [`StoreError::Decode`] if the slot's bytes fail to decode
    ///
    /// # Examples
    ///
    /// ```
    /// use typedstore::{TypedKey, TypedStore};
    ///
    /// let mut store = TypedStore::new();
    /// let key = TypedKey::<Vec<i32>>::new("numbers");
    /// store.add(&key, vec![1, 2, 3])?;
    ///
    /// assert_eq!(store.get(&key)?, Some(vec![1, 2, 3]));
    /// # Ok::<(), typedstore::StoreError>(())
    /// ```
    pub fn get<T>(&self, key: &TypedKey<T>) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        lookup(&self.entries, key)
    }

    /// Inserts a value under `key` if the key's id is not already present.
    ///
    /// Accepts anything convertible into `Option<T>`, so both `add(&key, v)`
    /// and `add(&key, None)` compile. Passing `None` is rejected with
    /// [`StoreStatus::NullValue`] before the store is touched; an id that is
    /// already present is rejected with [`StoreStatus::KeyAlreadyExists`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Encode`] if the codec cannot encode the value.
    /// The store is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use typedstore::{StoreStatus, TypedKey, TypedStore};
    ///
    /// let mut store = TypedStore::new();
    /// let key = TypedKey::<i32>::new("count");
    ///
    /// assert_eq!(store.add(&key, 1)?, StoreStatus::Success);
    /// assert_eq!(store.add(&key, 2)?, StoreStatus::KeyAlreadyExists);
    /// assert_eq!(store.add(&key, None)?, StoreStatus::NullValue);
    ///
    /// // The first value is still in place.
    /// assert_eq!(store.get(&key)?, Some(1));
    /// # Ok::<(), typedstore::StoreError>(())
    /// ```
    pub fn add<T, V>(&mut self, key: &TypedKey<T>, value: V) -> Result<StoreStatus, StoreError>
    where
        T: Serialize,
        V: Into<Option<T>>,
    {
        let value = match value.into() {
            None => return Ok(StoreStatus::NullValue),
            Some(value) => value,
        };
        if self.entries.contains_key(key.id()) {
            return Ok(StoreStatus::KeyAlreadyExists);
        }
        let slot = StoredValue::encode(&value)?;
        self.entries.insert(key.id().to_string(), slot);
        Ok(StoreStatus::Success)
    }

    /// Overwrites the value stored under `key`.
    ///
    /// If the key's id is absent, returns [`StoreStatus::KeyDoesNotExist`]
    /// and leaves the store unchanged.
    ///
    /// The new value's type is not required to match the old one: the slot's
    /// type tag is rewritten along with the value, so the store stays
    /// consistent and a later `get` through a key of the old type reports
    /// [`StoreError::TypeMismatch`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Encode`] if the codec cannot encode the value.
    /// The store is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use typedstore::{StoreStatus, TypedKey, TypedStore};
    ///
    /// let mut store = TypedStore::new();
    /// let key = TypedKey::<i32>::new("count");
    ///
    /// assert_eq!(store.replace(&key, 1)?, StoreStatus::KeyDoesNotExist);
    ///
    /// store.add(&key, 1)?;
    /// assert_eq!(store.replace(&key, 2)?, StoreStatus::Success);
    /// assert_eq!(store.get(&key)?, Some(2));
    /// # Ok::<(), typedstore::StoreError>(())
    /// ```
    pub fn replace<T>(&mut self, key: &TypedKey<T>, value: T) -> Result<StoreStatus, StoreError>
    where
        T: Serialize,
    {
        if !self.entries.contains_key(key.id()) {
            return Ok(StoreStatus::KeyDoesNotExist);
        }
        let slot = StoredValue::encode(&value)?;
        self.entries.insert(key.id().to_string(), slot);
        Ok(StoreStatus::Success)
    }

    /// Returns an immutable copy of the store's contents at this instant.
    ///
    /// The snapshot is defensive: mutating the live store afterwards does not
    /// affect it, and the snapshot offers no way to mutate the store.
    ///
    /// # Examples
    ///
    /// ```
    /// use typedstore::{TypedKey, TypedStore};
    ///
    /// let mut store = TypedStore::new();
    /// let key = TypedKey::<i32>::new("count");
    /// store.add(&key, 1)?;
    ///
    /// let before = store.snapshot();
    /// store.replace(&key, 2)?;
    ///
    /// assert_eq!(before.get(&key)?, Some(1));
    /// assert_eq!(store.get(&key)?, Some(2));
    /// # Ok::<(), typedstore::StoreError>(())
    /// ```
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            entries: self.entries.clone(),
        }
    }

    /// Returns true if a value is stored under the key's id.
    pub fn contains_key<T>(&self, key: &TypedKey<T>) -> bool {
        self.entries.contains_key(key.id())
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the ids of all stored entries, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub(crate) fn entries(&self) -> &HashMap<String, StoredValue> {
        &self.entries
    }

    pub(crate) fn from_entries(entries: HashMap<String, StoredValue>) -> Self {
        Self { entries }
    }
}

/// An immutable point-in-time copy of a [`TypedStore`]'s contents.
///
/// Snapshots compare equal when they hold the same entries, which is what
/// makes round-trip checks possible: persist a store, read it back, and the
/// two snapshots are `==` entry for entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: HashMap<String, StoredValue>,
}

impl Snapshot {
    /// Retrieves the snapshotted value under `key`, decoded as the key's type.
    ///
    /// Same contract as [`TypedStore::get`]: absence is `Ok(None)`, a
    /// disagreeing key type is [`StoreError::TypeMismatch`].
    pub fn get<T>(&self, key: &TypedKey<T>) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        lookup(&self.entries, key)
    }

    /// Returns true if the snapshot holds an entry under the key's id.
    pub fn contains_key<T>(&self, key: &TypedKey<T>) -> bool {
        self.entries.contains_key(key.id())
    }

    /// Returns the number of snapshotted entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the snapshot holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the ids of all snapshotted entries, in no particular
    /// order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

fn lookup<T>(
    entries: &HashMap<String, StoredValue>,
    key: &TypedKey<T>,
) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
{
    match entries.get(key.id()) {
        None => Ok(None),
        Some(slot) => {
            if !slot.is_type::<T>() {
                return Err(StoreError::TypeMismatch {
                    key: key.id().to_string(),
                    stored: slot.type_name().to_string(),
                    requested: key.type_name(),
                });
            }
            slot.decode().map(Some)
        }
    }
}
