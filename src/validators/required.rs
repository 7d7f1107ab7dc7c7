//! Required-field checking.

use serde_json::Value;

use crate::validators::{ValidationError, ValidationErrorType, ValidationResult, ValidationRule};

/// Checks an object against the schema `required` array.
///
/// Only applies when the target value is an object and the schema carries a
/// `required` array. A field counts as present only if the key exists and
/// its value is not null; present-but-null equals missing.
pub struct RequiredValidator;

impl ValidationRule for RequiredValidator {
    fn name(&self) -> &'static str {
        "required"
    }

    fn validate(&self, value: &Value, schema: &Value) -> ValidationResult {
        let Some(obj) = value.as_object() else {
            return ValidationResult::valid();
        };
        let Some(required) = schema.get("required").and_then(Value::as_array) else {
            return ValidationResult::valid();
        };

        let mut result = ValidationResult::valid();
        for name in required.iter().filter_map(Value::as_str) {
            let present = obj.get(name).is_some_and(|v| !v.is_null());
            if !present {
                result.merge(ValidationResult::with_error(
                    ValidationError::new(
                        ValidationErrorType::Required,
                        format!("required field '{name}' is missing"),
                    )
                    .with_field(name)
                    .with_suggestion(format!("add a value for '{name}'")),
                ));
            }
        }
        result
    }
}
