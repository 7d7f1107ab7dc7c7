//! INI serializer.
//!
//! Nested configuration trees are stored in a flat, section-based text
//! format. On write, every leaf value gets a dotted key path (array elements
//! use numeric index segments); the path is split at its last dot into a
//! `[section]` and a leaf key. On read, dotted section names and numeric or
//! `key[N]` segments rebuild the nested structure.
//!
//! ## Value encoding
//!
//! - strings: `\n`, `\r`, `\t` and `\\` are escaped; a raw `=` needs no
//!   escape because parsing splits on the first `=` only
//! - integers: decimal
//! - floats: fixed-point with up to six decimals, trailing zeros stripped
//! - booleans: `true`/`false`
//! - nulls: omitted from the output entirely
//!
//! On read, values are type-inferred in bool → integer → float → string
//! preference order. Lines that are neither blank, comment (`;`/`#`),
//! section header nor key-value pair are skipped without error.

use std::collections::BTreeMap;

use log::debug;
use serde_json::{Map, Value};

use crate::error::{Result, SerializationError};
use crate::serializers::{FormatSerializer, FormatType, SerializationContext};
use crate::value;

/// Serializer for the flat INI format.
#[derive(Debug)]
pub struct IniSerializer;

/// Escapes control characters and backslashes in a string value.
fn escape_value(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

/// Reverses [`escape_value`].
///
/// `\=` is also accepted (some writers escape the equals sign); any other
/// unknown escape sequence is kept verbatim.
fn unescape_value(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some('=') => out.push('='),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Formats a float with up to six decimals, trailing zeros stripped.
fn format_float(f: f64) -> String {
    let fixed = format!("{f:.6}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Recursively flattens a value tree into (key path, encoded value) pairs.
fn flatten(prefix: &str, val: &Value, entries: &mut Vec<(String, String)>) {
    match val {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, entries);
            }
        }
        Value::Array(items) => {
            for (idx, child) in items.iter().enumerate() {
                let path = if prefix.is_empty() {
                    idx.to_string()
                } else {
                    format!("{prefix}.{idx}")
                };
                flatten(&path, child, entries);
            }
        }
        // null 不写入输出
        Value::Null => {}
        Value::Bool(b) => entries.push((prefix.to_string(), b.to_string())),
        Value::Number(n) => {
            let encoded = if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                format_float(n.as_f64().unwrap_or(0.0))
            };
            entries.push((prefix.to_string(), encoded));
        }
        Value::String(s) => entries.push((prefix.to_string(), escape_value(s))),
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_float_literal(s: &str) -> bool {
    let body = s.strip_prefix(['+', '-']).unwrap_or(s);
    let mut dots = 0;
    let mut digits = 0;
    for b in body.bytes() {
        match b {
            b'.' => dots += 1,
            b'0'..=b'9' => digits += 1,
            _ => return false,
        }
    }
    dots == 1 && digits > 0
}

/// Infers a typed value from INI text, bool → integer → float → string.
fn infer_value(s: &str) -> Value {
    if s.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if is_integer_literal(s)
        && let Ok(i) = s.parse::<i64>()
    {
        return Value::from(i);
    }
    if is_float_literal(s)
        && let Ok(f) = s.parse::<f64>()
        && let Some(n) = serde_json::Number::from_f64(f)
    {
        return Value::Number(n);
    }
    Value::String(s.to_string())
}

impl FormatSerializer for IniSerializer {
    fn serialize(&self, context: &SerializationContext) -> Result<String> {
        if let Some(message) = self.validate_pre_serialization(context) {
            return Err(SerializationError::schema_validation(message));
        }
        if !context.data.is_object() {
            return Err(SerializationError::data_type_mismatch(format!(
                "INI serialization requires an object document, got {}",
                value::kind_name(&context.data)
            )));
        }

        let mut entries = Vec::new();
        flatten("", &context.data, &mut entries);

        // Group by section: the path splits at its last dot, dotless paths
        // land in the unnamed root section, which sorts first.
        let mut sections: BTreeMap<String, Vec<(String, String)>> = BTreeMap::new();
        for (path, encoded) in entries {
            let (section, key) = match path.rfind('.') {
                Some(pos) => (path[..pos].to_string(), path[pos + 1..].to_string()),
                None => (String::new(), path),
            };
            sections.entry(section).or_default().push((key, encoded));
        }

        let mut out = String::new();
        let mut first = true;
        for (section, pairs) in &sections {
            if !first {
                out.push('\n');
            }
            first = false;
            if !section.is_empty() {
                out.push('[');
                out.push_str(section);
                out.push_str("]\n");
            }
            for (key, encoded) in pairs {
                out.push_str(key);
                out.push('=');
                out.push_str(encoded);
                out.push('\n');
            }
        }
        Ok(out)
    }

    fn deserialize(&self, input: &str) -> Result<Value> {
        let mut doc = Value::Object(Map::new());
        let mut section = String::new();

        for line in input.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
                continue;
            }
            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                section = trimmed[1..trimmed.len() - 1].trim().to_string();
                continue;
            }
            match trimmed.find('=') {
                Some(pos) if pos > 0 => {
                    let key = trimmed[..pos].trim();
                    let raw = trimmed[pos + 1..].trim();
                    let val = infer_value(&unescape_value(raw));
                    let path = if section.is_empty() {
                        key.to_string()
                    } else {
                        format!("{section}.{key}")
                    };
                    value::set_path(&mut doc, &path, val);
                }
                _ => {
                    // lenient: malformed lines are skipped, not errors
                    debug!("skipping malformed INI line: {trimmed}");
                }
            }
        }
        Ok(doc)
    }

    fn format(&self) -> FormatType {
        FormatType::Ini
    }

    fn mime_type(&self) -> &'static str {
        "text/plain"
    }
}
