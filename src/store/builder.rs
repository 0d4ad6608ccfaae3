//! Storage builder: record schema in, frozen handle set out

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::provider::{MemoryProvider, StorageProvider};
use crate::schema::RecordSchema;
use crate::serializer::{JsonStringifier, Stringifier};

use super::aggregate::FieldStore;
use super::errors::{StoreError, StoreResult};
use super::handle::{DecodeMode, FieldHandle};

/// Builder producing a [`FieldStore`] from a record schema.
///
/// The schema is the only required input; namespace, per-field key
/// overrides, backend store, and codec are optional and chainable. Each
/// `with_*` call overwrites any prior value for that option.
///
/// ```
/// use fieldstore::schema::{FieldDef, RecordSchema};
/// use fieldstore::store::StorageBuilder;
/// use serde_json::json;
///
/// let schema = RecordSchema::new().with_field("name", FieldDef::required_string());
/// let store = StorageBuilder::new(schema).build().unwrap();
///
/// store.field("name").unwrap().set(&json!("John")).unwrap();
/// assert_eq!(store.field("name").unwrap().get(), Some(json!("John")));
/// ```
pub struct StorageBuilder {
    schema: RecordSchema,
    keys: HashMap<String, String>,
    namespace: String,
    provider: Arc<dyn StorageProvider>,
    stringifier: Arc<dyn Stringifier>,
}

impl std::fmt::Debug for StorageBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageBuilder")
            .field("schema", &self.schema)
            .field("keys", &self.keys)
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

impl StorageBuilder {
    /// Creates a builder over the given record schema.
    ///
    /// Defaults: empty namespace, no key overrides, a fresh
    /// [`MemoryProvider`] as the backend, and the JSON codec.
    pub fn new(schema: RecordSchema) -> Self {
        Self {
            schema,
            keys: HashMap::new(),
            namespace: String::new(),
            provider: Arc::new(MemoryProvider::new()),
            stringifier: Arc::new(JsonStringifier),
        }
    }

    /// Sets per-field key overrides (field name to backend key).
    ///
    /// The mapping may cover any subset of fields; uncovered fields keep
    /// their field name as the key. Entries naming undeclared fields are
    /// ignored at build time.
    pub fn with_keys<K, V>(mut self, keys: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.keys = keys
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Sets the backend store. Shared stores go through `Arc`.
    pub fn with_provider(mut self, provider: Arc<dyn StorageProvider>) -> Self {
        self.provider = provider;
        self
    }

    /// Sets the value codec.
    pub fn with_stringifier(mut self, stringifier: Arc<dyn Stringifier>) -> Self {
        self.stringifier = stringifier;
        self
    }

    /// Sets the namespace prefixed to every derived key.
    ///
    /// No separator is inserted; a trailing `_` or `:` belongs in the
    /// namespace itself.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidNamespace`] for the empty string.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> StoreResult<Self> {
        let namespace = namespace.into();
        if namespace.is_empty() {
            return Err(StoreError::InvalidNamespace);
        }
        self.namespace = namespace;
        Ok(self)
    }

    /// Builds the frozen handle set.
    ///
    /// Walks the schema's fields in declared order; for each field derives
    /// `namespace ++ (override or field_name)`, resolves the decode mode,
    /// and constructs a [`FieldHandle`] bound to the configured codec and
    /// backend. Derived keys are fixed for the handles' lifetime;
    /// reconfiguring this builder afterwards has no effect on them.
    ///
    /// Building from an empty schema succeeds and yields an aggregate with
    /// only `clear()`. Repeated calls yield functionally equivalent,
    /// distinct handle sets over the same configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BuilderNotInitialized`] only when the
    /// constructed handle set disagrees with the schema, an internal
    /// invariant violation.
    pub fn build(&self) -> StoreResult<FieldStore> {
        let mut handles = IndexMap::with_capacity(self.schema.len());

        for (field_name, def) in self.schema.fields() {
            let item_key = self.keys.get(field_name).unwrap_or(field_name);
            let key = format!("{}{}", self.namespace, item_key);
            let decode = if def.field_type.is_date() {
                DecodeMode::Date
            } else {
                DecodeMode::Plain
            };

            log::debug!("field '{}' bound to key '{}'", field_name, key);
            handles.insert(
                field_name.clone(),
                FieldHandle::new(
                    key,
                    def.clone(),
                    decode,
                    Arc::clone(&self.stringifier),
                    Arc::clone(&self.provider),
                ),
            );
        }

        if handles.len() != self.schema.len() {
            return Err(StoreError::BuilderNotInitialized(format!(
                "built {} handles for {} schema fields",
                handles.len(),
                self.schema.len()
            )));
        }

        Ok(FieldStore::new(handles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldDef;
    use serde_json::json;

    fn sample_schema() -> RecordSchema {
        RecordSchema::new()
            .with_field("name", FieldDef::required_string())
            .with_field("age", FieldDef::optional_int())
    }

    #[test]
    fn test_build_one_handle_per_field() {
        let store = StorageBuilder::new(sample_schema()).build().unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.field("name").is_some());
        assert!(store.field("age").is_some());
        assert!(store.field("missing").is_none());
    }

    #[test]
    fn test_empty_schema_builds() {
        let store = StorageBuilder::new(RecordSchema::new()).build().unwrap();
        assert!(store.is_empty());
        store.clear();
    }

    #[test]
    fn test_default_key_is_field_name() {
        let store = StorageBuilder::new(sample_schema()).build().unwrap();
        assert_eq!(store.field("name").unwrap().key(), "name");
    }

    #[test]
    fn test_key_override() {
        let store = StorageBuilder::new(sample_schema())
            .with_keys([("name", "CUSTOM_KEY_FOR_NAME")])
            .build()
            .unwrap();
        assert_eq!(store.field("name").unwrap().key(), "CUSTOM_KEY_FOR_NAME");
        // Uncovered field keeps its name
        assert_eq!(store.field("age").unwrap().key(), "age");
    }

    #[test]
    fn test_namespace_prefixes_all_keys() {
        let store = StorageBuilder::new(sample_schema())
            .with_namespace("k1_")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(store.field("name").unwrap().key(), "k1_name");
        assert_eq!(store.field("age").unwrap().key(), "k1_age");
    }

    #[test]
    fn test_namespace_composes_with_override() {
        let store = StorageBuilder::new(sample_schema())
            .with_keys([("name", "CUSTOM_KEY_FOR_NAME")])
            .with_namespace("k1_")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            store.field("name").unwrap().key(),
            "k1_CUSTOM_KEY_FOR_NAME"
        );
    }

    #[test]
    fn test_empty_namespace_rejected() {
        let err = StorageBuilder::new(sample_schema())
            .with_namespace("")
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidNamespace));
    }

    #[test]
    fn test_stray_override_ignored() {
        let store = StorageBuilder::new(sample_schema())
            .with_keys([("no_such_field", "X")])
            .build()
            .unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.field("name").unwrap().key(), "name");
    }

    #[test]
    fn test_later_with_keys_overwrites_earlier() {
        let store = StorageBuilder::new(sample_schema())
            .with_keys([("name", "FIRST")])
            .with_keys([("age", "SECOND")])
            .build()
            .unwrap();
        // First mapping fully replaced, not merged
        assert_eq!(store.field("name").unwrap().key(), "name");
        assert_eq!(store.field("age").unwrap().key(), "SECOND");
    }

    #[test]
    fn test_repeated_build_yields_equivalent_handles() {
        let provider = MemoryProvider::new();
        let builder = StorageBuilder::new(sample_schema())
            .with_provider(Arc::new(provider.clone()));

        let first = builder.build().unwrap();
        let second = builder.build().unwrap();

        first.field("name").unwrap().set(&json!("John")).unwrap();
        assert_eq!(second.field("name").unwrap().get(), Some(json!("John")));
    }

    #[test]
    fn test_reconfiguration_does_not_affect_built_handles() {
        let builder = StorageBuilder::new(sample_schema());
        let before = builder.build().unwrap();

        let builder = builder.with_namespace("ns_").unwrap();
        let after = builder.build().unwrap();

        assert_eq!(before.field("name").unwrap().key(), "name");
        assert_eq!(after.field("name").unwrap().key(), "ns_name");
    }
}
