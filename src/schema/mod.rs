//! Record schema subsystem for fieldstore
//!
//! A record schema is an ordered mapping from field name to a per-field
//! definition. Each field definition carries a tagged sub-schema kind
//! (string, int, bool, float, date, enum, array, object) resolved statically,
//! never discovered by walking values at runtime.
//!
//! # Design Principles
//!
//! - Exact type matching (no implicit coercion)
//! - No undeclared fields inside nested objects
//! - Null admitted only for optional fields, never inside arrays
//! - Validation is deterministic and never mutates the value
//! - Declared field order is the iteration order

mod errors;
mod types;
mod validator;

pub use errors::{SchemaResult, ValidationError};
pub use types::{FieldDef, FieldType, RecordSchema};
