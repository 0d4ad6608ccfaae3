//! Schema type definitions
//!
//! Supported sub-schema kinds:
//! - string: UTF-8 string
//! - int: 64-bit signed integer
//! - bool: Boolean
//! - float: 64-bit floating point
//! - date: RFC 3339 timestamp
//! - enum: one of a fixed set of string variants
//! - object: nested record with its own field schema
//! - array: homogeneous array with one element type

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Supported sub-schema kinds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
    /// Boolean
    Bool,
    /// 64-bit floating point
    Float,
    /// Calendar date/time, persisted as an RFC 3339 string
    Date,
    /// One of a fixed set of string variants
    Enum {
        /// Accepted variant strings
        variants: Vec<String>,
    },
    /// Nested record with its own field schema
    Object {
        /// Nested field definitions, in declared order
        fields: IndexMap<String, FieldDef>,
    },
    /// Homogeneous array with single element type
    Array {
        /// Element type (boxed to allow recursive types)
        #[serde(rename = "element_type")]
        element_type: Box<FieldType>,
    },
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Bool => "bool",
            FieldType::Float => "float",
            FieldType::Date => "date",
            FieldType::Enum { .. } => "enum",
            FieldType::Object { .. } => "object",
            FieldType::Array { .. } => "array",
        }
    }

    /// Whether this kind denotes a calendar date/time.
    ///
    /// Date-kind fields take a distinct read path in the field handle: the
    /// codec's native representation of a date is a plain string, so the
    /// handle re-interprets it as a timestamp before validation.
    pub fn is_date(&self) -> bool {
        matches!(self, FieldType::Date)
    }
}

/// Field definition: a sub-schema kind plus presence requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field data type
    #[serde(flatten)]
    pub field_type: FieldType,
    /// Whether a null value is rejected for this field
    pub required: bool,
}

impl FieldDef {
    /// Create a required field of the given type
    pub fn required(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: true,
        }
    }

    /// Create an optional field of the given type
    pub fn optional(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: false,
        }
    }

    /// Create a required string field
    pub fn required_string() -> Self {
        Self::required(FieldType::String)
    }

    /// Create an optional string field
    pub fn optional_string() -> Self {
        Self::optional(FieldType::String)
    }

    /// Create a required int field
    pub fn required_int() -> Self {
        Self::required(FieldType::Int)
    }

    /// Create an optional int field
    pub fn optional_int() -> Self {
        Self::optional(FieldType::Int)
    }

    /// Create a required bool field
    pub fn required_bool() -> Self {
        Self::required(FieldType::Bool)
    }

    /// Create an optional bool field
    pub fn optional_bool() -> Self {
        Self::optional(FieldType::Bool)
    }

    /// Create a required float field
    pub fn required_float() -> Self {
        Self::required(FieldType::Float)
    }

    /// Create a required date field
    pub fn required_date() -> Self {
        Self::required(FieldType::Date)
    }

    /// Create an optional date field
    pub fn optional_date() -> Self {
        Self::optional(FieldType::Date)
    }

    /// Create a required enum field over the given variants
    pub fn required_enum(variants: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::required(FieldType::Enum {
            variants: variants.into_iter().map(Into::into).collect(),
        })
    }

    /// Create a required object field
    pub fn required_object(fields: IndexMap<String, FieldDef>) -> Self {
        Self::required(FieldType::Object { fields })
    }

    /// Create an optional object field
    pub fn optional_object(fields: IndexMap<String, FieldDef>) -> Self {
        Self::optional(FieldType::Object { fields })
    }

    /// Create a required array field
    pub fn required_array(element_type: FieldType) -> Self {
        Self::required(FieldType::Array {
            element_type: Box::new(element_type),
        })
    }

    /// Create an optional array field
    pub fn optional_array(element_type: FieldType) -> Self {
        Self::optional(FieldType::Array {
            element_type: Box::new(element_type),
        })
    }
}

/// A record schema: an ordered mapping from field name to field definition.
///
/// Insertion order is the declared order and the iteration order. Field names
/// are unique; re-inserting a name replaces its definition in place.
/// Constructed once by the caller and treated as immutable input by the
/// storage builder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordSchema {
    fields: IndexMap<String, FieldDef>,
}

impl RecordSchema {
    /// Create an empty record schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record schema from an ordered field map
    pub fn from_fields(fields: IndexMap<String, FieldDef>) -> Self {
        Self { fields }
    }

    /// Add a field, chainable
    pub fn with_field(mut self, name: impl Into<String>, def: FieldDef) -> Self {
        self.fields.insert(name.into(), def);
        self
    }

    /// Returns the definition for a field, if declared
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }

    /// Iterates fields in declared order
    pub fn fields(&self) -> impl Iterator<Item = (&String, &FieldDef)> {
        self.fields.iter()
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema declares no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
