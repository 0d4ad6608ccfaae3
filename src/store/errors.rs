//! Error types for the store subsystem.

use thiserror::Error;

use crate::schema::ValidationError;
use crate::serializer::SerializeError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the storage builder and field handles.
///
/// Read-path parse and validation failures never appear here; they are
/// recovered inside `get()` by erasing the offending entry.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Namespace rejected by `with_namespace`
    #[error("namespace must contain at least one character")]
    InvalidNamespace,

    /// Internal invariant violation in `build()`: the handle set disagrees
    /// with the schema. Not reachable through normal schema use; the empty
    /// schema builds successfully.
    #[error("storage builder not initialized: {0}")]
    BuilderNotInitialized(String),

    /// Value rejected by the field's sub-schema on write; no write occurred
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The configured stringifier failed to encode a validated value
    #[error(transparent)]
    Serialize(#[from] SerializeError),
}
