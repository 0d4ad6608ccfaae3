//! Value validation against field definitions
//!
//! Validation semantics:
//! - Field types exactly match the declared sub-schema kind
//! - No implicit type coercion (an int is not a float)
//! - Required fields reject null; optional fields admit it
//! - Nested objects allow no undeclared fields
//! - Array elements are never null
//!
//! Validation is deterministic and does not mutate values. The throwing
//! variant ([`FieldDef::validate`]) backs the write path; the non-throwing
//! variant ([`FieldDef::check`]) backs the read path, where a failure is
//! recovered rather than reported.

use chrono::DateTime;
use indexmap::IndexMap;
use serde_json::Value;

use super::errors::{SchemaResult, ValidationError};
use super::types::{FieldDef, FieldType};

impl FieldDef {
    /// Validates a value against this field definition.
    ///
    /// The path in any returned error is rooted at the field itself (`$`),
    /// extended with dotted member names and `[i]` element indices for
    /// nested shapes.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the first violation found.
    pub fn validate(&self, value: &Value) -> SchemaResult<()> {
        if value.is_null() {
            if self.required {
                return Err(ValidationError::NullValue { path: "$".into() });
            }
            return Ok(());
        }
        validate_value(value, &self.field_type, "$")
    }

    /// Non-throwing validation: reports conformance as a boolean.
    pub fn check(&self, value: &Value) -> bool {
        self.validate(value).is_ok()
    }
}

/// Validates a value against a sub-schema kind.
fn validate_value(value: &Value, expected_type: &FieldType, path: &str) -> SchemaResult<()> {
    match expected_type {
        FieldType::String => {
            if !value.is_string() {
                return Err(type_error(path, "string", value));
            }
        }
        FieldType::Int => {
            // Must be an integer, not a float
            if !value.is_i64() && !value.is_u64() {
                return Err(type_error(path, "int", value));
            }
        }
        FieldType::Bool => {
            if !value.is_boolean() {
                return Err(type_error(path, "bool", value));
            }
        }
        FieldType::Float => {
            // Accept both integers and floats as float
            if !value.is_number() {
                return Err(type_error(path, "float", value));
            }
        }
        FieldType::Date => {
            let raw = value.as_str().ok_or_else(|| type_error(path, "date", value))?;
            DateTime::parse_from_rfc3339(raw).map_err(|e| ValidationError::InvalidDate {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        }
        FieldType::Enum { variants } => {
            let raw = value.as_str().ok_or_else(|| type_error(path, "enum", value))?;
            if !variants.iter().any(|v| v == raw) {
                return Err(ValidationError::UnknownVariant {
                    path: path.to_string(),
                    value: raw.to_string(),
                });
            }
        }
        FieldType::Object { fields } => {
            let obj = value
                .as_object()
                .ok_or_else(|| type_error(path, "object", value))?;
            validate_object(obj, fields, path)?;
        }
        FieldType::Array { element_type } => {
            let arr = value
                .as_array()
                .ok_or_else(|| type_error(path, "array", value))?;

            for (i, elem) in arr.iter().enumerate() {
                let elem_path = format!("{}[{}]", path, i);

                if elem.is_null() {
                    return Err(ValidationError::NullValue { path: elem_path });
                }

                validate_value(elem, element_type, &elem_path)?;
            }
        }
    }

    Ok(())
}

/// Validates a nested object against field definitions.
fn validate_object(
    obj: &serde_json::Map<String, Value>,
    fields: &IndexMap<String, FieldDef>,
    path_prefix: &str,
) -> SchemaResult<()> {
    // No undeclared fields allowed
    for key in obj.keys() {
        if !fields.contains_key(key) {
            return Err(ValidationError::ExtraField {
                path: make_path(path_prefix, key),
            });
        }
    }

    for (field_name, field_def) in fields {
        let field_path = make_path(path_prefix, field_name);

        match obj.get(field_name) {
            Some(value) => {
                if value.is_null() {
                    if field_def.required {
                        return Err(ValidationError::NullValue { path: field_path });
                    }
                    continue;
                }
                validate_value(value, &field_def.field_type, &field_path)?;
            }
            None => {
                if field_def.required {
                    return Err(ValidationError::MissingField { path: field_path });
                }
            }
        }
    }

    Ok(())
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Creates a field path from prefix and member name.
fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

/// Creates a type mismatch error.
fn type_error(path: &str, expected: &'static str, actual: &Value) -> ValidationError {
    ValidationError::TypeMismatch {
        path: path.to_string(),
        expected,
        actual: json_type_name(actual),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_exact_match() {
        let def = FieldDef::required_string();
        assert!(def.validate(&json!("John")).is_ok());
        assert!(def.validate(&json!(42)).is_err());
        assert!(def.validate(&json!(true)).is_err());
    }

    #[test]
    fn test_int_rejects_float() {
        let def = FieldDef::required_int();
        assert!(def.validate(&json!(42)).is_ok());
        assert!(def.validate(&json!(42.5)).is_err());
        assert!(def.validate(&json!("42")).is_err());
    }

    #[test]
    fn test_float_accepts_int() {
        let def = FieldDef::required_float();
        assert!(def.validate(&json!(42.5)).is_ok());
        assert!(def.validate(&json!(42)).is_ok());
        assert!(def.validate(&json!("42.5")).is_err());
    }

    #[test]
    fn test_null_depends_on_required() {
        assert!(FieldDef::required_string().validate(&Value::Null).is_err());
        assert!(FieldDef::optional_string().validate(&Value::Null).is_ok());
    }

    #[test]
    fn test_date_requires_rfc3339_string() {
        let def = FieldDef::required_date();
        assert!(def.validate(&json!("2024-03-01T12:00:00Z")).is_ok());
        assert!(def.validate(&json!("2024-03-01T12:00:00+02:00")).is_ok());
        assert!(def.validate(&json!("yesterday")).is_err());
        assert!(def.validate(&json!(1709294400)).is_err());
    }

    #[test]
    fn test_enum_variant_membership() {
        let def = FieldDef::required_enum(["red", "green", "blue"]);
        assert!(def.validate(&json!("green")).is_ok());
        assert!(def.validate(&json!("yellow")).is_err());
        assert!(def.validate(&json!(2)).is_err());
    }

    #[test]
    fn test_nested_object_missing_field() {
        let def = FieldDef::required_object(
            IndexMap::from([
                ("city".to_string(), FieldDef::required_string()),
                ("zip".to_string(), FieldDef::required_string()),
            ]),
        );
        assert!(def.validate(&json!({"city": "Oslo", "zip": "0150"})).is_ok());

        let err = def.validate(&json!({"city": "Oslo"})).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                path: "$.zip".into()
            }
        );
    }

    #[test]
    fn test_nested_object_extra_field() {
        let def = FieldDef::required_object(
            IndexMap::from([("city".to_string(), FieldDef::required_string())]),
        );
        let err = def
            .validate(&json!({"city": "Oslo", "country": "NO"}))
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::ExtraField {
                path: "$.country".into()
            }
        );
    }

    #[test]
    fn test_nested_optional_field_admits_null_and_absence() {
        let def = FieldDef::required_object(
            IndexMap::from([("nickname".to_string(), FieldDef::optional_string())]),
        );
        assert!(def.validate(&json!({})).is_ok());
        assert!(def.validate(&json!({ "nickname": null })).is_ok());
    }

    #[test]
    fn test_array_elements_validated_with_paths() {
        let def = FieldDef::required_array(FieldType::Int);
        assert!(def.validate(&json!([1, 2, 3])).is_ok());

        let err = def.validate(&json!([1, "two", 3])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TypeMismatch {
                path: "$[1]".into(),
                expected: "int",
                actual: "string",
            }
        );
    }

    #[test]
    fn test_array_rejects_null_elements() {
        let def = FieldDef::optional_array(FieldType::String);
        let err = def.validate(&json!(["a", null])).unwrap_err();
        assert_eq!(err, ValidationError::NullValue { path: "$[1]".into() });
    }

    #[test]
    fn test_validation_is_deterministic() {
        let def = FieldDef::required_object(
            IndexMap::from([("name".to_string(), FieldDef::required_string())]),
        );
        let doc = json!({"name": "Alice"});
        for _ in 0..100 {
            assert!(def.validate(&doc).is_ok());
        }
    }

    #[test]
    fn test_check_mirrors_validate() {
        let def = FieldDef::required_int();
        assert!(def.check(&json!(7)));
        assert!(!def.check(&json!("7")));
    }
}
