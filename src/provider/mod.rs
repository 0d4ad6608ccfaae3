//! Backend store boundary
//!
//! The accessor layer requires exactly three operations on its backend,
//! keyed by string: get, set, remove. Any object implementing this
//! tri-operation contract is a valid backend; [`MemoryProvider`] is the
//! built-in default. The backend is always injected explicitly — there is
//! no hidden process-wide store.

mod memory;

pub use memory::MemoryProvider;

/// The flat key-value backend contract.
///
/// Methods take `&self`; implementations with mutable state use interior
/// mutability so one provider can back many field handles.
pub trait StorageProvider: Send + Sync {
    /// Returns the string stored at `key`, if any
    fn get_item(&self, key: &str) -> Option<String>;

    /// Stores `value` at `key`, overwriting any prior entry
    fn set_item(&self, key: &str, value: &str);

    /// Deletes the entry at `key`; absent keys are not an error
    fn remove_item(&self, key: &str);
}
