//! Multi-format serialization.
//!
//! Provides a unified interface for configuration formats. Currently
//! supports JSON and INI; YAML exists only as a declared format that the
//! factory rejects.
//!
//! Serializers are stateless and created per use through
//! [`create_serializer`] or [`create_serializer_for_path`].

use std::path::Path;

use serde_json::Value;

use crate::error::{Result, SerializationError};
use crate::validators::SchemaValidator;

/// Serialization call context.
pub mod context;

/// INI serializer (flatten/unflatten).
pub mod ini;

/// JSON serializer.
pub mod json;

pub use context::SerializationContext;
pub use ini::IniSerializer;
pub use json::JsonSerializer;

/// Supported serialization formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatType {
    /// Standard JSON text.
    Json,
    /// Flat, section-based INI text.
    Ini,
    /// Declared but unsupported; the factory rejects it.
    Yaml,
}

impl FormatType {
    /// Returns the lowercase name of the format.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Ini => "ini",
            Self::Yaml => "yaml",
        }
    }
}

/// Serializer interface.
///
/// All formats must implement this interface. Implementations are stateless;
/// the only process-wide state touched during serialization is the pattern
/// compile cache used by schema validation.
pub trait FormatSerializer: std::fmt::Debug {
    /// Serializes the context's data into format text.
    ///
    /// When the context requests pre-serialization validation, a failed
    /// validation aborts with [`SerializationError::SchemaValidation`].
    fn serialize(&self, context: &SerializationContext) -> Result<String>;

    /// Deserializes format text into a value.
    fn deserialize(&self, input: &str) -> Result<Value>;

    /// Runs schema validation ahead of serialization.
    ///
    /// Returns a combined message when the context carries a schema, asks
    /// for validation, and the document fails it; `None` otherwise.
    fn validate_pre_serialization(&self, context: &SerializationContext) -> Option<String> {
        if !context.validate_pre_serialization {
            return None;
        }
        let schema = context.schema.as_ref()?;
        let result = SchemaValidator::validate(schema, &context.data);
        if result.is_valid() {
            return None;
        }
        let messages: Vec<String> = result
            .errors
            .iter()
            .map(|e| {
                if e.field.is_empty() {
                    e.message.clone()
                } else {
                    format!("{}: {}", e.field, e.message)
                }
            })
            .collect();
        Some(messages.join("; "))
    }

    /// Returns the format handled by this serializer.
    fn format(&self) -> FormatType;

    /// Returns the name of the format.
    fn format_name(&self) -> &'static str {
        self.format().name()
    }

    /// Returns the MIME type of the format.
    fn mime_type(&self) -> &'static str;
}

/// Creates a serializer for a format.
///
/// # Errors
///
/// Returns [`SerializationError::InvalidFormat`] for formats without an
/// implementation (today, everything except JSON and INI).
pub fn create_serializer(format: FormatType) -> Result<Box<dyn FormatSerializer>> {
    match format {
        FormatType::Json => Ok(Box::new(JsonSerializer)),
        FormatType::Ini => Ok(Box::new(IniSerializer)),
        other => Err(SerializationError::invalid_format(format!(
            "no serializer available for format '{}'",
            other.name()
        ))),
    }
}

/// Creates a serializer from a file path, keyed on the extension.
///
/// Recognizes `.json` as JSON and `.ini`/`.cfg`/`.conf` as INI,
/// case-insensitively.
pub fn create_serializer_for_path(path: impl AsRef<Path>) -> Result<Box<dyn FormatSerializer>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => create_serializer(FormatType::Json),
        "ini" | "cfg" | "conf" => create_serializer(FormatType::Ini),
        _ => Err(SerializationError::invalid_format(format!(
            "unsupported config file extension: {:?}",
            ext
        ))),
    }
}
