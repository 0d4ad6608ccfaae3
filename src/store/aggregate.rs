//! The frozen handle set returned by `build()`

use indexmap::IndexMap;

use super::handle::FieldHandle;

/// Immutable mapping from field name to [`FieldHandle`], plus `clear()`.
///
/// The handle set is fixed at build time; there is no way to add, remove,
/// or replace a handle afterwards. Handles operate independently against
/// the backend store; the aggregate itself holds no other state.
pub struct FieldStore {
    handles: IndexMap<String, FieldHandle>,
}

impl FieldStore {
    pub(crate) fn new(handles: IndexMap<String, FieldHandle>) -> Self {
        Self { handles }
    }

    /// Returns the handle for a field, if the schema declared it
    pub fn field(&self, name: &str) -> Option<&FieldHandle> {
        self.handles.get(name)
    }

    /// Iterates handles in the schema's declared field order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldHandle)> {
        self.handles.iter().map(|(name, h)| (name.as_str(), h))
    }

    /// Number of field handles
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether the aggregate holds no handles (empty schema)
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Removes every field's entry from the backend store.
    ///
    /// Touches only the derived keys owned by this aggregate; unrelated
    /// keys and differently-namespaced aggregates are untouched. The N
    /// deletions are independent, with no cross-key atomicity. Idempotent.
    pub fn clear(&self) {
        for handle in self.handles.values() {
            handle.remove();
        }
    }
}

impl std::fmt::Debug for FieldStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldStore")
            .field("fields", &self.handles.keys().collect::<Vec<_>>())
            .finish()
    }
}
