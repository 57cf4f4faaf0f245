use std::io;
use thiserror::Error;

/// Errors reported by [`TypedStore`](crate::TypedStore) and the persistence
/// adapter.
///
/// Routine outcomes of `add`/`replace` are not errors; they come back as
/// [`StoreStatus`](crate::StoreStatus) values, and a `get` on a missing key
/// is `Ok(None)`. This enum covers the failures that remain: the filesystem,
/// the codec, and a key whose type disagrees with what the slot holds.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persistence file could not be created, opened, or read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A value (or the store body) could not be encoded by the codec.
    #[error("failed to encode value: {0}")]
    Encode(#[source] bincode::Error),

    /// Stored bytes are not a valid encoding: a corrupt or truncated file,
    /// or a slot decoded after its codec changed shape.
    #[error("failed to decode stored data: {0}")]
    Decode(#[source] bincode::Error),

    /// The key used to read a slot carries a type other than the one the
    /// slot was written with.
    #[error("type mismatch for key `{key}`: slot holds `{stored}`, key expects `{requested}`")]
    TypeMismatch {
        key: String,
        stored: String,
        requested: &'static str,
    },
}
