//! Schema validation rules and composition.
//!
//! Validation is built from small, stateless rule checkers that each look at
//! one schema keyword family:
//!
//! - [`TypeValidator`] - the `type` keyword, single or union
//! - [`RequiredValidator`] - the `required` array on object schemas
//! - [`RangeValidator`] - `minimum`/`maximum` and `minLength`/`maxLength`
//! - [`PatternValidator`] - the `pattern` keyword, full-string regex match
//! - [`EnumValidator`] - the `enum` membership list
//!
//! [`SchemaValidator`] composes the checkers against a full schema document
//! and produces the aggregate error list. All checkers are re-entrant; the
//! only shared state in this module is the process-wide pattern compile
//! cache (see [`pattern`]).

use serde_json::Value;

/// Validation error data types.
pub mod error;

/// Enum membership checking.
pub mod enum_check;

/// Regular-expression pattern checking and the compile cache.
pub mod pattern;

/// Numeric range and string length checking.
pub mod range;

/// Required-field checking.
pub mod required;

/// Whole-document schema validation.
pub mod document;

/// Type constraint checking.
pub mod type_check;

pub use document::SchemaValidator;
pub use enum_check::EnumValidator;
pub use error::{Severity, ValidationError, ValidationErrorType, ValidationResult};
pub use pattern::{PatternValidator, clear_pattern_cache, pattern_cache_len};
pub use range::RangeValidator;
pub use required::RequiredValidator;
pub use type_check::TypeValidator;

/// Interface implemented by every validation rule.
///
/// A rule inspects one (value, schema-fragment) pair and reports zero or
/// more errors. Constraints irrelevant to the value's actual kind are
/// ignored, so rules can be applied unconditionally.
pub trait ValidationRule {
    /// Checks a value against a schema fragment.
    fn validate(&self, value: &Value, schema: &Value) -> ValidationResult;

    /// Returns the name of the rule for diagnostics.
    fn name(&self) -> &'static str;
}
