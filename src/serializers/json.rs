//! JSON serializer.

use serde_json::Value;

use crate::error::{Result, SerializationError};
use crate::serializers::{FormatSerializer, FormatType, SerializationContext};
use crate::value;

/// Serializer for standard JSON text.
///
/// Output is UTF-8 with optional 2-space pretty printing; object key order
/// is preserved as given. Deserialization requires a non-empty document
/// with an object root.
#[derive(Debug)]
pub struct JsonSerializer;

impl FormatSerializer for JsonSerializer {
    fn serialize(&self, context: &SerializationContext) -> Result<String> {
        if let Some(message) = self.validate_pre_serialization(context) {
            return Err(SerializationError::schema_validation(message));
        }
        value::dump(&context.data, context.pretty_print)
    }

    fn deserialize(&self, input: &str) -> Result<Value> {
        if input.trim().is_empty() {
            return Err(SerializationError::invalid_json("empty JSON input"));
        }
        let parsed = value::parse(input)?;
        if !parsed.is_object() {
            return Err(SerializationError::invalid_json(format!(
                "root of a configuration document must be an object, got {}",
                value::kind_name(&parsed)
            )));
        }
        Ok(parsed)
    }

    fn format(&self) -> FormatType {
        FormatType::Json
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }
}
