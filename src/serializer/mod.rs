//! Pluggable value-to-string codec
//!
//! Persisted entries are strings; the [`Stringifier`] strategy decides their
//! wire form. The default [`JsonStringifier`] round-trips every value shape
//! the schema subsystem supports. Callers can swap in compact or compressed
//! encodings as long as `parse` stays the left inverse of `stringify` and
//! malformed input surfaces as a recoverable error, never a panic.

mod json;

pub use json::JsonStringifier;

use serde_json::Value;
use thiserror::Error;

/// Errors from a [`Stringifier`] implementation
#[derive(Debug, Clone, Error)]
pub enum SerializeError {
    /// Value could not be encoded to a string
    #[error("failed to encode value: {0}")]
    Encode(String),
    /// Raw string could not be decoded to a value
    #[error("failed to decode value: {0}")]
    Decode(String),
}

/// Strategy converting a value to its persisted string form and back.
///
/// `stringify` must be lossless for any value the schema subsystem accepts;
/// `parse` must be its left inverse for well-formed input and must report
/// malformed input through the `Err` channel.
pub trait Stringifier: Send + Sync {
    /// Encodes a value to its persisted string form
    fn stringify(&self, value: &Value) -> Result<String, SerializeError>;

    /// Decodes a persisted string back to a value
    fn parse(&self, raw: &str) -> Result<Value, SerializeError>;
}
