//! Whole-document schema validation.

use serde_json::{Map, Value};

use crate::validators::{
    EnumValidator, PatternValidator, RangeValidator, RequiredValidator, TypeValidator,
    ValidationResult, ValidationRule,
};

/// Rule pipeline applied to each declared property, in order.
fn property_rules() -> [&'static dyn ValidationRule; 4] {
    [
        &TypeValidator,
        &RangeValidator,
        &PatternValidator,
        &EnumValidator,
    ]
}

/// Composes the rule checkers against a full schema document.
///
/// Validation order: required fields at the document root first, then for
/// every property declared in the schema's `properties` (declaration order)
/// that is present in the document, the type, range, pattern, and enum rules
/// in that order. Properties absent from the document that are not required
/// are skipped entirely.
pub struct SchemaValidator;

impl SchemaValidator {
    /// Validates a configuration document against a schema document.
    pub fn validate(schema: &Value, document: &Value) -> ValidationResult {
        let mut result = RequiredValidator.validate(document, schema);

        let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
            return result;
        };

        for (name, sub_schema) in properties {
            let Some(field_value) = document.get(name) else {
                // 未填写的可选字段不做检查
                continue;
            };
            for rule in property_rules() {
                result.merge(rule.validate(field_value, sub_schema).for_field(name));
            }
        }

        result
    }

    /// Validates a single candidate field value against the schema.
    ///
    /// Builds a minimal single-key document holding just the candidate value
    /// and validates it the same way, with the required check scoped to that
    /// field. Intended for live, per-keystroke validation in an editor.
    pub fn validate_field(schema: &Value, field: &str, value: &Value) -> ValidationResult {
        let mut document = Map::new();
        document.insert(field.to_string(), value.clone());
        let document = Value::Object(document);

        let mut result = ValidationResult::valid();
        if is_required(schema, field) {
            let scoped = serde_json::json!({ "required": [field] });
            result.merge(RequiredValidator.validate(&document, &scoped));
        }

        if let Some(sub_schema) = schema
            .get("properties")
            .and_then(|props| props.get(field))
        {
            for rule in property_rules() {
                result.merge(rule.validate(value, sub_schema).for_field(field));
            }
        }

        result
    }
}

fn is_required(schema: &Value, field: &str) -> bool {
    schema
        .get("required")
        .and_then(Value::as_array)
        .is_some_and(|names| names.iter().any(|n| n.as_str() == Some(field)))
}
