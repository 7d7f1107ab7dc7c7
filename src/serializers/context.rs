//! Serialization call context.

use std::path::PathBuf;

use serde_json::Value;

use crate::serializers::FormatType;

/// Everything one serialization call needs to know.
///
/// A context is built once per call with a named constructor and the fluent
/// `with_*` methods, then passed immutably to the serializer.
///
/// ```rust
/// use cfgcore::serializers::SerializationContext;
/// use serde_json::json;
///
/// let context = SerializationContext::for_json(json!({"name": "demo"}))
///     .with_pretty_print(true)
///     .with_file_path("demo.json");
/// ```
#[derive(Debug, Clone)]
pub struct SerializationContext {
    /// The document to serialize.
    pub data: Value,
    /// Target output format.
    pub target_format: FormatType,
    /// Destination path, when the caller intends to write a file.
    pub file_path: Option<PathBuf>,
    /// Schema used for pre-serialization validation.
    pub schema: Option<Value>,
    /// Whether to indent output (formats that support it).
    pub pretty_print: bool,
    /// Whether to validate against the schema before serializing.
    pub validate_pre_serialization: bool,
}

impl SerializationContext {
    fn new(data: Value, target_format: FormatType) -> Self {
        Self {
            data,
            target_format,
            file_path: None,
            schema: None,
            pretty_print: true,
            validate_pre_serialization: false,
        }
    }

    /// Creates a context targeting JSON output.
    pub fn for_json(data: Value) -> Self {
        Self::new(data, FormatType::Json)
    }

    /// Creates a context targeting INI output.
    pub fn for_ini(data: Value) -> Self {
        Self::new(data, FormatType::Ini)
    }

    /// Sets the destination file path.
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Attaches a schema for pre-serialization validation.
    pub fn with_schema(mut self, schema: Value) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Enables or disables pretty printing.
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Enables or disables pre-serialization validation.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate_pre_serialization = validate;
        self
    }
}
