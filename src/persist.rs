//! Whole-store persistence.
//!
//! A store is written as the codec's encoding of its entry map, nothing more:
//! no magic number, no header, no version field of this crate's own. Format
//! versioning is delegated entirely to the codec, so `write` and `read` must
//! use the same codec version to round-trip.

use crate::error::StoreError;
use crate::store::TypedStore;
use crate::value::StoredValue;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Serializes the entire store to a file at `path`, overwriting any existing
/// file.
///
/// The store body is encoded in memory before the filesystem is touched, so
/// an encode failure leaves any prior file intact. Beyond that there is no
/// atomic-replace guarantee; a failure mid-write is whatever the underlying
/// filesystem leaves behind.
///
/// # Errors
///
/// - [`StoreError::Encode`] if the store body cannot be encoded
/// - [`StoreError::Io`] if the file cannot be created or written
///
/// # Examples
///
/// ```no_run
/// use typedstore::{TypedKey, TypedStore};
///
/// let mut store = TypedStore::new();
/// store.add(&TypedKey::<u32>::new("score"), 42u32)?;
///
/// typedstore::write(&store, "store.bin")?;
/// let restored = typedstore::read("store.bin")?;
/// assert_eq!(restored.snapshot(), store.snapshot());
/// # Ok::<(), typedstore::StoreError>(())
/// ```
pub fn write(store: &TypedStore, path: impl AsRef<Path>) -> Result<(), StoreError> {
    let path = path.as_ref();
    let bytes = bincode::serialize(store.entries()).map_err(StoreError::Encode)?;
    fs::write(path, &bytes)?;
    debug!(
        path = %path.display(),
        entries = store.len(),
        bytes = bytes.len(),
        "store written"
    );
    Ok(())
}

/// Deserializes a previously written file into a new store.
///
/// Every entry comes back with the type tag it was written with, so values
/// read out through the same typed keys used before persisting.
///
/// # Errors
///
/// - [`StoreError::Io`] if the file does not exist or cannot be read
/// - [`StoreError::Decode`] if the bytes are not a valid store encoding
///   (corrupt file, wrong format, codec version mismatch)
pub fn read(path: impl AsRef<Path>) -> Result<TypedStore, StoreError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let entries: HashMap<String, StoredValue> =
        bincode::deserialize(&bytes).map_err(StoreError::Decode)?;
    debug!(
        path = %path.display(),
        entries = entries.len(),
        bytes = bytes.len(),
        "store read"
    );
    Ok(TypedStore::from_entries(entries))
}
