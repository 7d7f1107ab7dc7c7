//! Regular-expression pattern checking with a process-wide compile cache.

use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};

use log::warn;
use regex::Regex;
use serde_json::Value;

use crate::validators::{ValidationError, ValidationErrorType, ValidationResult, ValidationRule};

/// Process-wide cache of compiled patterns, keyed by the raw pattern string.
///
/// Reads vastly outnumber writes (the same schema is validated over and
/// over), so the cache sits behind a reader/writer lock. Entries are never
/// evicted automatically; call [`clear_pattern_cache`] for test isolation or
/// long-running-process hygiene.
static PATTERN_CACHE: LazyLock<RwLock<HashMap<String, Regex>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Empties the pattern cache.
pub fn clear_pattern_cache() {
    PATTERN_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
}

/// Returns the number of cached compiled patterns.
pub fn pattern_cache_len() -> usize {
    PATTERN_CACHE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .len()
}

/// Fetches the compiled form of a pattern, compiling and caching on miss.
///
/// The pattern is anchored at both ends so that matching is full-string, not
/// a substring search. Returns `None` when the pattern does not compile;
/// compile failures are not cached.
fn compiled(pattern: &str) -> Option<Regex> {
    if let Some(re) = PATTERN_CACHE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(pattern)
    {
        return Some(re.clone());
    }

    let anchored = format!(r"\A(?:{pattern})\z");
    let re = match Regex::new(&anchored) {
        Ok(re) => re,
        Err(err) => {
            warn!("invalid schema pattern '{pattern}': {err}");
            return None;
        }
    };

    let mut cache = PATTERN_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    // Re-check under the write lock: another thread may have compiled the
    // same pattern while we were compiling.
    Some(cache.entry(pattern.to_string()).or_insert(re).clone())
}

/// Checks a string value against the schema `pattern` keyword.
///
/// The entire value must match the entire pattern. An invalid pattern is
/// treated as passing so that a broken schema does not block user input.
pub struct PatternValidator;

impl ValidationRule for PatternValidator {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn validate(&self, value: &Value, schema: &Value) -> ValidationResult {
        let Some(s) = value.as_str() else {
            return ValidationResult::valid();
        };
        let Some(pattern) = schema.get("pattern").and_then(Value::as_str) else {
            return ValidationResult::valid();
        };

        let Some(re) = compiled(pattern) else {
            // fail-open on compile failure
            return ValidationResult::valid();
        };

        if re.is_match(s) {
            ValidationResult::valid()
        } else {
            ValidationResult::with_error(
                ValidationError::new(
                    ValidationErrorType::PatternMismatch,
                    format!("value '{s}' does not match pattern '{pattern}'"),
                )
                .with_suggestion(format!("use a value matching '{pattern}'")),
            )
        }
    }
}
