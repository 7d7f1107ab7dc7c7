//! Editing-session document state.
//!
//! [`ConfigurationData`] wraps one live configuration document together with
//! per-field editing state (dirty/focus flags, validation errors, current
//! value). It is consumed by an editor frontend but has no dependency on
//! one; the crate only manages the data.
//!
//! Not thread-safe for concurrent mutation: one instance belongs to one
//! editing session and must be accessed from its owning thread.

use std::collections::HashMap;

use serde_json::Value;

use crate::validators::ValidationError;
use crate::value;

/// Editing state of a single field.
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    /// Whether the field was modified in this session.
    pub is_dirty: bool,
    /// Whether the field currently holds input focus.
    pub is_focused: bool,
    /// Validation errors attached to the field.
    pub errors: Vec<ValidationError>,
    /// The field's current value as last entered.
    pub current_value: Value,
}

/// A live configuration document plus per-field editing state.
#[derive(Debug, Clone)]
pub struct ConfigurationData {
    document: Value,
    fields: HashMap<String, FieldState>,
}

impl Default for ConfigurationData {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationData {
    /// Creates an empty configuration (empty object document).
    pub fn new() -> Self {
        Self {
            document: Value::Object(serde_json::Map::new()),
            fields: HashMap::new(),
        }
    }

    /// Wraps a loaded document.
    pub fn from_value(document: Value) -> Self {
        Self {
            document,
            fields: HashMap::new(),
        }
    }

    /// Returns the live document.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Consumes the session and returns the document.
    pub fn into_document(self) -> Value {
        self.document
    }

    /// Sets a field value, writing through to the document.
    ///
    /// The field name is a dotted path; missing intermediate objects are
    /// created. The field is marked dirty and its current value recorded.
    pub fn set_value(&mut self, field: &str, val: Value) {
        value::set_path(&mut self.document, field, val.clone());
        let state = self.fields.entry(field.to_string()).or_default();
        state.current_value = val;
        state.is_dirty = true;
    }

    /// Returns the value at a dotted field path, if present.
    pub fn value_of(&self, field: &str) -> Option<&Value> {
        value::get_path(&self.document, field)
    }

    /// Marks a field dirty without changing its value.
    pub fn mark_dirty(&mut self, field: &str) {
        self.fields.entry(field.to_string()).or_default().is_dirty = true;
    }

    /// Moves input focus to a field (clearing it elsewhere).
    pub fn set_focus(&mut self, field: &str) {
        for state in self.fields.values_mut() {
            state.is_focused = false;
        }
        self.fields.entry(field.to_string()).or_default().is_focused = true;
    }

    /// Attaches a validation error to a field.
    pub fn add_error(&mut self, field: &str, error: ValidationError) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .errors
            .push(error);
    }

    /// Clears the validation errors of one field.
    pub fn clear_errors(&mut self, field: &str) {
        if let Some(state) = self.fields.get_mut(field) {
            state.errors.clear();
        }
    }

    /// Clears the validation errors of every field.
    pub fn clear_all_errors(&mut self) {
        for state in self.fields.values_mut() {
            state.errors.clear();
        }
    }

    /// Returns the editing state of a field, if any was recorded.
    pub fn field_state(&self, field: &str) -> Option<&FieldState> {
        self.fields.get(field)
    }

    /// Returns true when any field was modified in this session.
    pub fn is_dirty(&self) -> bool {
        self.fields.values().any(|state| state.is_dirty)
    }

    /// Returns true when any field carries validation errors.
    pub fn has_errors(&self) -> bool {
        self.fields.values().any(|state| !state.errors.is_empty())
    }

    /// Drops all per-field editing state, keeping the document.
    pub fn reset(&mut self) {
        self.fields.clear();
    }
}
