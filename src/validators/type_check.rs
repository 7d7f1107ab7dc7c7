//! Type constraint checking.

use serde_json::Value;

use crate::validators::{ValidationError, ValidationErrorType, ValidationResult, ValidationRule};
use crate::value::kind_name;

/// Checks a value against the schema `type` keyword.
///
/// `type` may be a single type name or an array of alternatives (a union).
/// A schema without a `type` key accepts any value.
pub struct TypeValidator;

/// Returns true when the value matches one JSON Schema type name.
fn matches_type(value: &Value, type_name: &str) -> bool {
    match type_name {
        "string" => value.is_string(),
        // integer means an integral number, not any number
        "integer" => matches!(value, Value::Number(n) if n.is_i64() || n.is_u64()),
        "number" => value.is_number(),
        "boolean" => value.is_boolean(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        "null" => value.is_null(),
        _ => false,
    }
}

impl ValidationRule for TypeValidator {
    fn name(&self) -> &'static str {
        "type"
    }

    fn validate(&self, value: &Value, schema: &Value) -> ValidationResult {
        let Some(expected) = schema.get("type") else {
            return ValidationResult::valid();
        };

        match expected {
            Value::String(type_name) => {
                if matches_type(value, type_name) {
                    ValidationResult::valid()
                } else {
                    ValidationResult::with_error(
                        ValidationError::new(
                            ValidationErrorType::TypeMismatch,
                            format!("expected {}, got {}", type_name, kind_name(value)),
                        )
                        .with_suggestion(format!("provide a {type_name} value")),
                    )
                }
            }
            Value::Array(alternatives) => {
                let matched = alternatives
                    .iter()
                    .filter_map(|alt| alt.as_str())
                    .any(|alt| matches_type(value, alt));
                if matched {
                    ValidationResult::valid()
                } else {
                    let allowed: Vec<&str> = alternatives
                        .iter()
                        .filter_map(|alt| alt.as_str())
                        .collect();
                    ValidationResult::with_error(
                        ValidationError::new(
                            ValidationErrorType::TypeMismatch,
                            format!(
                                "expected one of [{}], got {}",
                                allowed.join(", "),
                                kind_name(value)
                            ),
                        )
                        .with_suggestion(format!("provide one of: {}", allowed.join(", "))),
                    )
                }
            }
            // 非法的 type 描述不阻塞校验
            _ => ValidationResult::valid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(value: Value, schema: Value) -> ValidationResult {
        TypeValidator.validate(&value, &schema)
    }

    #[test]
    fn test_no_type_key_is_always_valid() {
        assert!(check(json!(42), json!({})).is_valid());
        assert!(check(json!(null), json!({"minimum": 3})).is_valid());
    }

    #[test]
    fn test_single_type_match() {
        assert!(check(json!("hi"), json!({"type": "string"})).is_valid());
        assert!(check(json!(3), json!({"type": "integer"})).is_valid());
        assert!(check(json!(3), json!({"type": "number"})).is_valid());
        assert!(check(json!(3.5), json!({"type": "number"})).is_valid());
        assert!(check(json!(true), json!({"type": "boolean"})).is_valid());
        assert!(check(json!({}), json!({"type": "object"})).is_valid());
        assert!(check(json!([]), json!({"type": "array"})).is_valid());
        assert!(check(json!(null), json!({"type": "null"})).is_valid());
    }

    #[test]
    fn test_float_is_not_integer() {
        let result = check(json!(3.5), json!({"type": "integer"}));
        assert!(!result.is_valid());
        assert_eq!(result.errors[0].error_type, ValidationErrorType::TypeMismatch);
        assert!(result.errors[0].message.contains("number"));
    }

    #[test]
    fn test_mismatch_reports_actual_kind() {
        let result = check(json!("hi"), json!({"type": "integer"}));
        assert_eq!(
            result.errors[0].message,
            "expected integer, got string"
        );
    }

    #[test]
    fn test_union_type() {
        let schema = json!({"type": ["string", "null"]});
        assert!(check(json!("x"), schema.clone()).is_valid());
        assert!(check(json!(null), schema.clone()).is_valid());

        let result = check(json!(1), schema);
        assert!(!result.is_valid());
        // failure message lists all allowed types
        assert!(result.errors[0].message.contains("string"));
        assert!(result.errors[0].message.contains("null"));
    }
}
