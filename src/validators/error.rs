//! Validation error data types.

use serde::{Deserialize, Serialize};

/// Classification of a single validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorType {
    /// No error. Placeholder for default-constructed errors.
    None,
    /// A required field is missing (or present with a null value).
    Required,
    /// Value kind does not match the schema `type`.
    TypeMismatch,
    /// Numeric value is below `minimum`.
    MinimumViolation,
    /// Numeric value is above `maximum`.
    MaximumViolation,
    /// String is shorter than `minLength`.
    MinLengthViolation,
    /// String is longer than `maxLength`.
    MaxLengthViolation,
    /// String does not match the schema `pattern`.
    PatternMismatch,
    /// Value is not a member of the schema `enum`.
    EnumViolation,
    /// A custom validation hook rejected the value.
    CustomValidationFailed,
}

/// Severity level derived from the error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Informational only.
    Low,
    /// The value is questionable but usable.
    Medium,
    /// The document cannot be used as configuration.
    High,
}

impl ValidationErrorType {
    /// Returns the severity associated with this error type.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Required
            | Self::TypeMismatch
            | Self::MinimumViolation
            | Self::MaximumViolation
            | Self::EnumViolation => Severity::High,
            Self::MinLengthViolation
            | Self::MaxLengthViolation
            | Self::PatternMismatch
            | Self::CustomValidationFailed => Severity::Medium,
            Self::None => Severity::Low,
        }
    }
}

/// A single structured validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Dotted field path, or empty for document-level errors.
    pub field: String,
    /// Failure classification.
    pub error_type: ValidationErrorType,
    /// Human-readable description for display.
    pub message: String,
    /// Optional hint on how to fix the value.
    pub suggestion: String,
}

impl ValidationError {
    /// Creates an error with an empty field path and no suggestion.
    pub fn new(error_type: ValidationErrorType, message: impl Into<String>) -> Self {
        Self {
            field: String::new(),
            error_type,
            message: message.into(),
            suggestion: String::new(),
        }
    }

    /// Sets the field path.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Sets the fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = suggestion.into();
        self
    }

    /// Returns the severity derived from the error type.
    pub fn severity(&self) -> Severity {
        self.error_type.severity()
    }
}

/// Outcome of running one or more validation rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    /// Errors collected in rule order. No deduplication is performed.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates an empty (valid) result.
    pub fn valid() -> Self {
        Self::default()
    }

    /// Creates a result holding a single error.
    pub fn with_error(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Returns true when no errors were collected.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Appends all errors from another result.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    /// Stamps a field path onto every error that does not carry one yet.
    pub fn for_field(mut self, field: &str) -> Self {
        for err in &mut self.errors {
            if err.field.is_empty() {
                err.field = field.to_string();
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        assert_eq!(ValidationErrorType::Required.severity(), Severity::High);
        assert_eq!(ValidationErrorType::TypeMismatch.severity(), Severity::High);
        assert_eq!(
            ValidationErrorType::MinimumViolation.severity(),
            Severity::High
        );
        assert_eq!(
            ValidationErrorType::EnumViolation.severity(),
            Severity::High
        );
        assert_eq!(
            ValidationErrorType::MinLengthViolation.severity(),
            Severity::Medium
        );
        assert_eq!(
            ValidationErrorType::PatternMismatch.severity(),
            Severity::Medium
        );
        assert_eq!(
            ValidationErrorType::CustomValidationFailed.severity(),
            Severity::Medium
        );
        assert_eq!(ValidationErrorType::None.severity(), Severity::Low);
    }

    #[test]
    fn test_for_field_only_fills_empty() {
        let mut result = ValidationResult::with_error(ValidationError::new(
            ValidationErrorType::TypeMismatch,
            "expected string",
        ));
        result.merge(ValidationResult::with_error(
            ValidationError::new(ValidationErrorType::Required, "missing").with_field("other"),
        ));

        let stamped = result.for_field("age");
        assert_eq!(stamped.errors[0].field, "age");
        assert_eq!(stamped.errors[1].field, "other");
    }

    #[test]
    fn test_merge_preserves_order() {
        let mut a = ValidationResult::with_error(ValidationError::new(
            ValidationErrorType::MinimumViolation,
            "too small",
        ));
        a.merge(ValidationResult::with_error(ValidationError::new(
            ValidationErrorType::PatternMismatch,
            "bad pattern",
        )));
        assert!(!a.is_valid());
        assert_eq!(a.errors[0].error_type, ValidationErrorType::MinimumViolation);
        assert_eq!(a.errors[1].error_type, ValidationErrorType::PatternMismatch);
    }
}
