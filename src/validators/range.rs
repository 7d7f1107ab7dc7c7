//! Numeric range and string length checking.

use serde_json::Value;

use crate::validators::{ValidationError, ValidationErrorType, ValidationResult, ValidationRule};

/// Checks numeric bounds (`minimum`/`maximum`) and string length bounds
/// (`minLength`/`maxLength`).
///
/// `exclusiveMinimum`/`exclusiveMaximum` are booleans that make the
/// corresponding bound exclusive; both default to inclusive. The numeric
/// branch reports at most one violation per call, minimum first. Values
/// that are neither numbers nor strings are accepted untouched.
pub struct RangeValidator;

fn check_number(n: f64, schema: &Value) -> ValidationResult {
    let exclusive_min = schema
        .get("exclusiveMinimum")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let exclusive_max = schema
        .get("exclusiveMaximum")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if let Some(min) = schema.get("minimum").and_then(Value::as_f64) {
        let violated = if exclusive_min { n <= min } else { n < min };
        if violated {
            let bound = if exclusive_min { "exclusive minimum" } else { "minimum" };
            return ValidationResult::with_error(
                ValidationError::new(
                    ValidationErrorType::MinimumViolation,
                    format!("value {n} is below the {bound} of {min}"),
                )
                .with_suggestion(format!("use a value of at least {min}")),
            );
        }
    }

    if let Some(max) = schema.get("maximum").and_then(Value::as_f64) {
        let violated = if exclusive_max { n >= max } else { n > max };
        if violated {
            let bound = if exclusive_max { "exclusive maximum" } else { "maximum" };
            return ValidationResult::with_error(
                ValidationError::new(
                    ValidationErrorType::MaximumViolation,
                    format!("value {n} is above the {bound} of {max}"),
                )
                .with_suggestion(format!("use a value of at most {max}")),
            );
        }
    }

    ValidationResult::valid()
}

fn check_string(s: &str, schema: &Value) -> ValidationResult {
    let len = s.chars().count();
    let mut result = ValidationResult::valid();

    if let Some(min_len) = schema.get("minLength").and_then(Value::as_u64)
        && (len as u64) < min_len
    {
        result.merge(ValidationResult::with_error(
            ValidationError::new(
                ValidationErrorType::MinLengthViolation,
                format!("string has {len} characters, minimum length is {min_len}"),
            )
            .with_suggestion(format!("use at least {min_len} characters")),
        ));
    }

    if let Some(max_len) = schema.get("maxLength").and_then(Value::as_u64)
        && (len as u64) > max_len
    {
        result.merge(ValidationResult::with_error(
            ValidationError::new(
                ValidationErrorType::MaxLengthViolation,
                format!("string has {len} characters, maximum length is {max_len}"),
            )
            .with_suggestion(format!("use at most {max_len} characters")),
        ));
    }

    result
}

impl ValidationRule for RangeValidator {
    fn name(&self) -> &'static str {
        "range"
    }

    fn validate(&self, value: &Value, schema: &Value) -> ValidationResult {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(f) => check_number(f, schema),
                None => ValidationResult::valid(),
            },
            Value::String(s) => check_string(s, schema),
            _ => ValidationResult::valid(),
        }
    }
}
