//! fieldstore - schema-validated, namespaced accessors over flat key-value storage
//!
//! Given a declarative record schema, the [`store::StorageBuilder`] produces
//! one read/write/remove handle per schema field. Writes validate and then
//! serialize to a string; reads deserialize and validate, deleting any entry
//! that fails either step.

pub mod provider;
pub mod schema;
pub mod serializer;
pub mod store;
