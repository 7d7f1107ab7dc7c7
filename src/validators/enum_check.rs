//! Enum membership checking.

use serde_json::Value;

use crate::validators::{ValidationError, ValidationErrorType, ValidationResult, ValidationRule};

/// Checks a value against the schema `enum` array.
///
/// Membership is structural equality, so `1` and `"1"` are different
/// members. The failure message lists every allowed value.
pub struct EnumValidator;

/// Renders one allowed value for the failure message.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{s}'"),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

impl ValidationRule for EnumValidator {
    fn name(&self) -> &'static str {
        "enum"
    }

    fn validate(&self, value: &Value, schema: &Value) -> ValidationResult {
        let Some(allowed) = schema.get("enum").and_then(Value::as_array) else {
            return ValidationResult::valid();
        };

        if allowed.iter().any(|candidate| candidate == value) {
            return ValidationResult::valid();
        }

        let rendered: Vec<String> = allowed.iter().map(render).collect();
        ValidationResult::with_error(
            ValidationError::new(
                ValidationErrorType::EnumViolation,
                format!(
                    "value {} is not one of the allowed values: {}",
                    render(value),
                    rendered.join(", ")
                ),
            )
            .with_suggestion(format!("choose one of: {}", rendered.join(", "))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(value: Value, schema: Value) -> ValidationResult {
        EnumValidator.validate(&value, &schema)
    }

    #[test]
    fn test_member_is_valid() {
        let schema = json!({"enum": [1, 2, 3]});
        assert!(check(json!(1), schema).is_valid());
    }

    #[test]
    fn test_membership_is_type_strict() {
        let schema = json!({"enum": [1, 2, 3]});
        let result = check(json!("1"), schema);
        assert!(!result.is_valid());
        assert_eq!(
            result.errors[0].error_type,
            ValidationErrorType::EnumViolation
        );
    }

    #[test]
    fn test_message_renders_all_allowed_values() {
        let schema = json!({"enum": ["dev", 8, true, null]});
        let result = check(json!("prod"), schema);
        let msg = &result.errors[0].message;
        assert!(msg.contains("'dev'"));
        assert!(msg.contains("8"));
        assert!(msg.contains("true"));
        assert!(msg.contains("null"));
    }

    #[test]
    fn test_structural_equality_for_objects() {
        let schema = json!({"enum": [{"mode": "a"}, {"mode": "b"}]});
        assert!(check(json!({"mode": "a"}), schema.clone()).is_valid());
        assert!(!check(json!({"mode": "c"}), schema).is_valid());
    }

    #[test]
    fn test_no_enum_key_is_valid() {
        assert!(check(json!("anything"), json!({})).is_valid());
    }
}
