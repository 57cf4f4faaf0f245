//! # typedstore
//!
//! A type-safe heterogeneous key-value store with whole-store persistence.
//!
//! `typedstore` lets a single container hold values of many different types,
//! each addressed by a [`TypedKey`] that pins the value's type. Retrieval
//! goes through the key, so callers never cast: the store checks the key's
//! type against a tag recorded with each value and reports disagreement as an
//! error instead of misreading the bytes. A companion pair of functions,
//! [`write`] and [`read`], persists an entire store to a file and restores it
//! byte-for-byte.
//!
//! ## Key Features
//!
//! - **Typed keys**: a key's identity is its id string; its type parameter
//!   rides along and types every read through it
//! - **Checked retrieval**: a runtime type tag is stored with every value and
//!   verified on each `get`
//! - **Status results**: routine outcomes of `add`/`replace` are values from
//!   a closed [`StoreStatus`] set, never errors
//! - **Whole-store persistence**: one call writes the store to disk, one call
//!   reads it back, round-tripping every entry
//!
//! ## Basic Usage
//!
//! ```rust
//! use typedstore::{StoreStatus, TypedKey, TypedStore};
//!
//! fn main() -> Result<(), typedstore::StoreError> {
//!     let mut store = TypedStore::new();
//!
//!     // Keys are usually declared once and reused everywhere.
//!     let score = TypedKey::<u32>::new("score");
//!     let name = TypedKey::<String>::new("name");
//!     let active = TypedKey::<bool>::new("active");
//!
//!     store.add(&score, 42u32)?;
//!     store.add(&name, "Alice".to_string())?;
//!     store.add(&active, true)?;
//!
//!     // Each read is typed by its key.
//!     assert_eq!(store.get(&score)?, Some(42));
//!     assert_eq!(store.get(&name)?, Some("Alice".to_string()));
//!
//!     // Adding under an occupied id is a status, not an error.
//!     assert_eq!(store.add(&score, 7u32)?, StoreStatus::KeyAlreadyExists);
//!
//!     // Replacing only works on occupied ids.
//!     assert_eq!(store.replace(&active, false)?, StoreStatus::Success);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Snapshots
//!
//! A [`Snapshot`] is a defensive copy of the store's contents at one instant.
//! Later mutation of the live store does not leak into it, which makes it the
//! unit of comparison for persistence round-trips.
//!
//! ```rust
//! use typedstore::{TypedKey, TypedStore};
//!
//! # fn main() -> Result<(), typedstore::StoreError> {
//! let mut store = TypedStore::new();
//! let counter = TypedKey::<i64>::new("counter");
//! store.add(&counter, 1i64)?;
//!
//! let before = store.snapshot();
//! store.replace(&counter, 2i64)?;
//!
//! assert_eq!(before.get(&counter)?, Some(1));
//! assert_eq!(store.get(&counter)?, Some(2));
//! # Ok(())
//! # }
//! ```
//!
//! ## Persistence
//!
//! ```rust,no_run
//! use typedstore::{TypedKey, TypedStore};
//!
//! # fn main() -> Result<(), typedstore::StoreError> {
//! let mut store = TypedStore::new();
//! store.add(&TypedKey::<u32>::new("score"), 42u32)?;
//!
//! typedstore::write(&store, "player.bin")?;
//!
//! let restored = typedstore::read("player.bin")?;
//! assert_eq!(restored.snapshot(), store.snapshot());
//! # Ok(())
//! # }
//! ```
//!
//! ## What the store is not
//!
//! The store is single-threaded and unsynchronized by design. Wrap the whole
//! store in a `Mutex` (or similar) if multiple threads need it; the store
//! itself takes no locks. The persisted file format is the codec's encoding
//! of the store body with no header or version field of its own, so files
//! round-trip only through a matching codec version.

mod error;
mod key;
mod persist;
mod store;
mod value;

pub use error::StoreError;
pub use key::TypedKey;
pub use persist::{read, write};
pub use store::{Snapshot, StoreStatus, TypedStore};
