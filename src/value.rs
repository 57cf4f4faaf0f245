use crate::error::StoreError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::any::type_name;

/// A container for type-erased values that preserves type information.
///
/// The erased form is the codec's own encoding of the value plus a runtime
/// type tag. Keeping slots in encoded form is what lets a whole store be
/// persisted and restored without the reader naming any concrete types: the
/// tag travels with the bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct StoredValue {
    type_name: String,
    bytes: Vec<u8>,
}

impl StoredValue {
    /// Encode a value into its erased form, tagging it with its type.
    pub(crate) fn encode<T: Serialize>(value: &T) -> Result<Self, StoreError> {
        let bytes = bincode::serialize(value).map_err(StoreError::Encode)?;
        Ok(Self {
            type_name: type_name::<T>().to_string(),
            bytes,
        })
    }

    /// Check if the contained value was encoded as type T.
    pub(crate) fn is_type<T>(&self) -> bool {
        self.type_name == type_name::<T>()
    }

    /// The tag recorded when the value was encoded.
    pub(crate) fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Decode the contained value as type T.
    ///
    /// Callers are expected to have checked the tag with [`is_type`]
    /// first; decoding under the wrong type fails with `Decode` at best and
    /// silently misreads the bytes at worst, since the codec is not
    /// self-describing.
    ///
    /// [`is_type`]: StoredValue::is_type
    pub(crate) fn decode<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        bincode::deserialize(&self.bytes).map_err(StoreError::Decode)
    }
}
