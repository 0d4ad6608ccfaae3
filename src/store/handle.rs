//! Per-field accessor bound to one derived key

use std::marker::PhantomData;
use std::sync::Arc;

use chrono::DateTime;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::provider::StorageProvider;
use crate::schema::FieldDef;
use crate::serializer::{SerializeError, Stringifier};

use super::errors::StoreResult;

/// Read-path decoding mode, resolved once at handle construction.
///
/// The codec's native representation of a date is a plain string, which is
/// not a date-validatable value by itself; date-kind fields therefore
/// re-interpret the decoded string as a timestamp before validation. Only
/// RFC 3339 strings are accepted: epoch numbers and lenient date strings
/// are healed away on read rather than coerced. Nulls are not
/// re-interpreted; the required/optional check owns them, same as every
/// other kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DecodeMode {
    /// Decoded value is validated as-is
    Plain,
    /// Decoded value is re-interpreted as an RFC 3339 timestamp
    Date,
}

/// The get/set/remove accessor for exactly one schema field.
///
/// Owns no mutable state beyond the closed-over derived key, sub-schema,
/// codec, and backend reference. Stateless across calls: every operation
/// round-trips through the backend store directly.
pub struct FieldHandle {
    key: String,
    def: FieldDef,
    decode: DecodeMode,
    stringifier: Arc<dyn Stringifier>,
    provider: Arc<dyn StorageProvider>,
}

impl FieldHandle {
    pub(crate) fn new(
        key: String,
        def: FieldDef,
        decode: DecodeMode,
        stringifier: Arc<dyn Stringifier>,
        provider: Arc<dyn StorageProvider>,
    ) -> Self {
        Self {
            key,
            def,
            decode,
            stringifier,
            provider,
        }
    }

    /// The derived backend key this handle reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The field definition this handle validates against.
    pub fn definition(&self) -> &FieldDef {
        &self.def
    }

    /// Reads the field's value from the backend store.
    ///
    /// Returns `None` when no entry exists at the derived key. When an entry
    /// exists but cannot be decoded, or decodes to a value the sub-schema
    /// rejects, the entry is deleted and `None` is returned: corrupt or
    /// tampered data is treated as absent, never as an error. After any
    /// `None` return the key is guaranteed absent from the backend. Note
    /// this also erases well-formed values written under an older schema
    /// version; there is no migration path.
    pub fn get(&self) -> Option<Value> {
        let raw = self.provider.get_item(&self.key)?;
        match self.decode_and_check(&raw) {
            Some(value) => Some(value),
            None => {
                log::warn!("discarding invalid entry at '{}'", self.key);
                self.provider.remove_item(&self.key);
                None
            }
        }
    }

    /// Writes a value to the backend store.
    ///
    /// The value is validated against the field's sub-schema first; a
    /// rejected value fails with [`StoreError::Validation`] and nothing is
    /// written. A valid value is serialized and overwrites any prior entry.
    ///
    /// [`StoreError::Validation`]: super::StoreError::Validation
    pub fn set(&self, value: &Value) -> StoreResult<()> {
        self.def.validate(value)?;
        let raw = self.stringifier.stringify(value)?;
        self.provider.set_item(&self.key, &raw);
        Ok(())
    }

    /// Deletes the entry at the derived key. Idempotent.
    pub fn remove(&self) {
        self.provider.remove_item(&self.key);
    }

    /// Returns a typed view over this handle.
    ///
    /// The type parameter fixes the value type at the call seam; the
    /// runtime schema check underneath is unchanged.
    pub fn typed<T: Serialize + DeserializeOwned>(&self) -> TypedHandle<'_, T> {
        TypedHandle {
            handle: self,
            _marker: PhantomData,
        }
    }

    fn decode_and_check(&self, raw: &str) -> Option<Value> {
        let parsed = self.stringifier.parse(raw).ok()?;
        let value = match self.decode {
            DecodeMode::Plain => parsed,
            DecodeMode::Date => {
                // Only strings are re-interpreted; anything else (including
                // null, which the required/optional check owns) falls
                // through to validation untouched
                if let Some(ts) = parsed.as_str() {
                    DateTime::parse_from_rfc3339(ts).ok()?;
                }
                parsed
            }
        };
        self.def.check(&value).then_some(value)
    }
}

impl std::fmt::Debug for FieldHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldHandle")
            .field("key", &self.key)
            .field("def", &self.def)
            .field("decode", &self.decode)
            .finish_non_exhaustive()
    }
}

/// Typed view over a [`FieldHandle`].
///
/// Converts between `T` and the handle's value representation at the seam,
/// so callers keep compile-time knowledge of each field's value type.
/// `chrono::DateTime<Utc>` round-trips through date-kind fields.
pub struct TypedHandle<'a, T> {
    handle: &'a FieldHandle,
    _marker: PhantomData<T>,
}

impl<T: Serialize + DeserializeOwned> TypedHandle<'_, T> {
    /// Reads and converts the field's value.
    ///
    /// Returns `None` when the entry is absent, was self-healed away, or
    /// does not convert to `T`.
    pub fn get(&self) -> Option<T> {
        let value = self.handle.get()?;
        serde_json::from_value(value).ok()
    }

    /// Converts and writes a value, subject to the same validate-first
    /// contract as [`FieldHandle::set`].
    pub fn set(&self, value: &T) -> StoreResult<()> {
        let value = serde_json::to_value(value)
            .map_err(|e| SerializeError::Encode(e.to_string()))?;
        self.handle.set(&value)
    }

    /// Deletes the entry at the derived key. Idempotent.
    pub fn remove(&self) {
        self.handle.remove()
    }
}
