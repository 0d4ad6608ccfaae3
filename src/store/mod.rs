//! Storage builder, field handles, and the frozen aggregate
//!
//! This is the core of the crate: [`StorageBuilder`] turns a record schema
//! into one [`FieldHandle`] per field, each bound to a derived backend key
//! (`namespace ++ override-or-field-name`), and freezes the handle set into
//! a [`FieldStore`] with an aggregate `clear()`.
//!
//! # Design Principles
//!
//! - Derived keys are fixed at build time; reconfiguring a builder never
//!   affects handles already built
//! - Handles are stateless: every call round-trips through the backend,
//!   no caching layer
//! - Write-path validation failures surface loudly and leave no partial
//!   state; read-path failures are recovered by erasing the entry
//! - No multi-key atomicity: `clear()` over N fields is N independent
//!   deletions, and a concurrent reader through a shared backend may
//!   observe a partially cleared aggregate

mod aggregate;
mod builder;
mod errors;
mod handle;

pub use aggregate::FieldStore;
pub use builder::StorageBuilder;
pub use errors::{StoreError, StoreResult};
pub use handle::{FieldHandle, TypedHandle};
