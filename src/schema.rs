//! Schema document wrapper.
//!
//! A [`Schema`] is a JSON object interpreted with the recognized top-level
//! keys `type`, `properties`, `required`, `title` and `description`, plus
//! per-property constraint keys (`minimum`, `maximum`, `minLength`,
//! `maxLength`, `pattern`, `enum`, `default`, ...). Structural validity of
//! the schema itself is checked only superficially: the root must be an
//! object. Deep schema validity is not verified at load time.

use schemars::JsonSchema;
use serde_json::{Map, Value};

use crate::error::{Result, SerializationError};
use crate::value;

/// A loaded JSON Schema document.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    root: Value,
}

impl Schema {
    /// Wraps a parsed schema value.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError::DataTypeMismatch`] when the root value
    /// is not an object.
    pub fn from_value(root: Value) -> Result<Self> {
        if !root.is_object() {
            return Err(SerializationError::data_type_mismatch(format!(
                "schema root must be an object, got {}",
                value::kind_name(&root)
            )));
        }
        Ok(Self { root })
    }

    /// Parses a schema from JSON text.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_value(value::parse(text)?)
    }

    /// Derives a schema from a Rust type implementing [`JsonSchema`].
    pub fn of<T: JsonSchema>() -> Result<Self> {
        let schema = schemars::schema_for!(T);
        Self::from_value(serde_json::to_value(&schema)?)
    }

    /// Returns the underlying schema value.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Consumes the wrapper and returns the schema value.
    pub fn into_value(self) -> Value {
        self.root
    }

    /// Returns the schema `title`, if declared.
    pub fn title(&self) -> Option<&str> {
        self.root.get("title").and_then(Value::as_str)
    }

    /// Returns the schema `description`, if declared.
    pub fn description(&self) -> Option<&str> {
        self.root.get("description").and_then(Value::as_str)
    }

    /// Returns the declared properties in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.root
            .get("properties")
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|props| props.iter().map(|(k, v)| (k.as_str(), v)))
    }

    /// Returns the sub-schema of one declared property.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.root
            .get("properties")
            .and_then(|props| props.get(name))
    }

    /// Returns the names listed in the `required` array.
    pub fn required(&self) -> Vec<&str> {
        self.root
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Builds a document from the declared property defaults.
    ///
    /// Properties without a `default` are omitted; nested object schemas are
    /// walked recursively, and empty nested objects are left out.
    pub fn default_document(&self) -> Value {
        Value::Object(defaults_of(&self.root))
    }
}

fn defaults_of(schema: &Value) -> Map<String, Value> {
    let mut doc = Map::new();
    let Some(props) = schema.get("properties").and_then(Value::as_object) else {
        return doc;
    };
    for (name, sub) in props {
        if let Some(default) = sub.get("default") {
            doc.insert(name.clone(), default.clone());
        } else if sub.get("properties").is_some() {
            let nested = defaults_of(sub);
            if !nested.is_empty() {
                doc.insert(name.clone(), Value::Object(nested));
            }
        }
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn server_schema() -> Schema {
        Schema::from_value(json!({
            "type": "object",
            "title": "Server",
            "description": "Server configuration",
            "properties": {
                "host": {"type": "string", "default": "localhost"},
                "port": {"type": "integer", "minimum": 1, "maximum": 65535, "default": 8080},
                "tls": {
                    "type": "object",
                    "properties": {
                        "enabled": {"type": "boolean", "default": false},
                        "cert": {"type": "string"}
                    }
                },
                "tags": {"type": "array"}
            },
            "required": ["host", "port"]
        }))
        .unwrap()
    }

    #[test]
    fn test_root_must_be_object() {
        let err = Schema::from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, SerializationError::DataTypeMismatch(_)));
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        assert!(Schema::parse("{not json").is_err());
    }

    #[test]
    fn test_accessors() {
        let schema = server_schema();
        assert_eq!(schema.title(), Some("Server"));
        assert_eq!(schema.description(), Some("Server configuration"));
        assert_eq!(schema.required(), vec!["host", "port"]);
        assert!(schema.property("port").is_some());
        assert!(schema.property("nope").is_none());

        let names: Vec<&str> = schema.properties().map(|(name, _)| name).collect();
        // declaration order is preserved
        assert_eq!(names, vec!["host", "port", "tls", "tags"]);
    }

    #[test]
    fn test_default_document() {
        let schema = server_schema();
        assert_eq!(
            schema.default_document(),
            json!({
                "host": "localhost",
                "port": 8080,
                "tls": {"enabled": false}
            })
        );
    }

    #[test]
    fn test_default_document_empty_schema() {
        let schema = Schema::from_value(json!({"type": "object"})).unwrap();
        assert_eq!(schema.default_document(), json!({}));
    }

    #[test]
    fn test_schema_of_rust_type() {
        #[derive(JsonSchema)]
        #[allow(dead_code)]
        struct DemoConfig {
            host: String,
            port: u16,
        }

        let schema = Schema::of::<DemoConfig>().unwrap();
        assert!(schema.property("host").is_some());
        assert!(schema.property("port").is_some());
    }
}
