//! # cfgcore
//!
//! Schema-driven configuration validation and multi-format serialization core.
//!
//! `cfgcore` is the data layer of a JSON Schema configuration editor: it
//! validates configuration documents against a schema built from composable
//! rule checkers, and moves the documents between nested JSON and flat,
//! section-based INI text without losing structure.
//!
//! ## Features
//!
//! - JSON Schema (Draft-7 subset) validation: type, required,
//!   minimum/maximum, minLength/maxLength, pattern, enum
//! - Composable, stateless rule checkers with structured errors and
//!   derived severities
//! - Full-string pattern matching with a process-wide regex compile cache
//! - JSON and INI serialization behind one interface, selected by format
//!   or file extension
//! - Lossless flatten/unflatten between nested documents and dotted INI
//!   key paths, including arrays
//! - Atomic configuration file writes (temp file + rename)
//! - Per-field editing state for interactive sessions
//!
//! ## Quick Start
//!
//! ```rust
//! use cfgcore::schema::Schema;
//! use cfgcore::serializers::{FormatType, create_serializer};
//! use cfgcore::validators::SchemaValidator;
//!
//! let schema = Schema::parse(r#"{
//!     "type": "object",
//!     "properties": {"port": {"type": "integer", "minimum": 1}},
//!     "required": ["port"]
//! }"#).unwrap();
//!
//! let serializer = create_serializer(FormatType::Ini).unwrap();
//! let config = serializer.deserialize("port=8080\n").unwrap();
//!
//! let result = SchemaValidator::validate(schema.as_value(), &config);
//! assert!(result.is_valid());
//! ```
//!
//! ## Modules
//!
//! - [`value`] - value model helpers and dotted-path access
//! - [`schema`] - schema document wrapper
//! - [`validators`] - validation rules and composition
//! - [`serializers`] - JSON/INI serialization and the format factory
//! - [`io`] - validated reads and atomic writes
//! - [`models`] - editing-session field state
//! - [`error`] - error codes and the crate result type

/// Error types and result definitions.
pub mod error;

/// Configuration file I/O with atomic writes.
pub mod io;

/// Editing-session document state.
pub mod models;

/// Schema document wrapper and accessors.
pub mod schema;

/// Multi-format serialization (JSON, INI).
pub mod serializers;

/// Schema validation rules and composition.
pub mod validators;

/// Value model helpers.
pub mod value;

pub use error::{Result, SerializationError};
pub use models::{ConfigurationData, FieldState};
pub use schema::Schema;
pub use serializers::{
    FormatSerializer, FormatType, IniSerializer, JsonSerializer, SerializationContext,
    create_serializer, create_serializer_for_path,
};
pub use validators::{
    SchemaValidator, Severity, ValidationError, ValidationErrorType, ValidationResult,
};
pub use serde_json::Value;

/// Current version of the cfgcore implementation
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
