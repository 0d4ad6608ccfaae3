//! Validation error types for the schema subsystem.

use thiserror::Error;

/// Result type for schema validation
pub type SchemaResult<T> = Result<T, ValidationError>;

/// Errors reported when a value does not conform to a field definition.
///
/// Each variant carries the path of the offending value, dotted for nested
/// object fields and indexed for array elements (e.g. `address.city`,
/// `tags[2]`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value has a different type than the sub-schema declares
    #[error("type mismatch at '{path}': expected {expected}, got {actual}")]
    TypeMismatch {
        /// Path of the offending value
        path: String,
        /// Declared type name
        expected: &'static str,
        /// Actual type name of the supplied value
        actual: &'static str,
    },

    /// Required field absent from a nested object
    #[error("missing required field '{path}'")]
    MissingField {
        /// Path of the missing field
        path: String,
    },

    /// Field present in a nested object but not declared by its schema
    #[error("undeclared field '{path}'")]
    ExtraField {
        /// Path of the undeclared field
        path: String,
    },

    /// Null supplied where the sub-schema forbids it
    #[error("null value at '{path}'")]
    NullValue {
        /// Path of the null value
        path: String,
    },

    /// Date-kind field holding a string that is not an RFC 3339 timestamp
    #[error("invalid date at '{path}': {reason}")]
    InvalidDate {
        /// Path of the offending value
        path: String,
        /// Parser diagnostic
        reason: String,
    },

    /// Enum-kind field holding a string outside the declared variant set
    #[error("unknown variant '{value}' at '{path}'")]
    UnknownVariant {
        /// Path of the offending value
        path: String,
        /// The rejected string
        value: String,
    },
}
