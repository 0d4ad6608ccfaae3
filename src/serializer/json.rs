//! Default JSON codec

use serde_json::Value;

use super::{SerializeError, Stringifier};

/// JSON implementation of the [`Stringifier`] strategy.
///
/// `parse` is the exact inverse of `stringify` for primitives, arrays, and
/// nested records. Dates are not a JSON primitive; they travel as strings,
/// and the field handle re-interprets them on read.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonStringifier;

impl Stringifier for JsonStringifier {
    fn stringify(&self, value: &Value) -> Result<String, SerializeError> {
        serde_json::to_string(value).map_err(|e| SerializeError::Encode(e.to_string()))
    }

    fn parse(&self, raw: &str) -> Result<Value, SerializeError> {
        serde_json::from_str(raw).map_err(|e| SerializeError::Decode(e.to_string()))
    }
}
