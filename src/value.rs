//! Value model helpers.
//!
//! The universal in-memory representation for configuration documents and
//! schemas is [`serde_json::Value`] (with the `preserve_order` feature, so
//! object keys keep their insertion order through parse→mutate→dump round
//! trips). This module adds the pieces the editing core needs on top of it:
//! kind names for diagnostics, and dotted-path access used by the INI
//! serializer and the field-state model.
//!
//! ## Path syntax
//!
//! A path is a `.`-separated list of segments. A segment that is all digits
//! addresses an array index; `key[N]` is accepted as an alias for `key.N`.
//! Missing intermediate objects are created on write, and arrays are padded
//! with `null` up to the written index.

use serde_json::{Map, Value};

use crate::error::Result;

/// One resolved path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Seg {
    /// Object key.
    Key(String),
    /// Array index.
    Index(usize),
}

/// Parses JSON text into a [`Value`].
pub fn parse(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Dumps a [`Value`] as JSON text.
///
/// With `pretty` set, output is indented with two spaces.
pub fn dump(value: &Value, pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

/// Returns the kind name of a value for use in messages.
///
/// Integral numbers report `"integer"`, floating-point numbers `"number"`;
/// schema `type: integer` vs `type: number` checks rely on the distinction.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "number"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns true when the value is an integral number.
pub fn is_integer(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_i64() || n.is_u64())
}

/// Splits a dotted path into segments, resolving numeric and `key[N]` forms.
fn parse_path(path: &str) -> Vec<Seg> {
    let mut segs = Vec::new();
    for part in path.split('.') {
        if part.is_empty() {
            continue;
        }
        // key[N] bracket notation splits into a key plus an index
        if let Some(open) = part.find('[')
            && part.ends_with(']')
        {
            let key = &part[..open];
            let idx = &part[open + 1..part.len() - 1];
            if let Ok(n) = idx.parse::<usize>() {
                if !key.is_empty() {
                    segs.push(Seg::Key(key.to_string()));
                }
                segs.push(Seg::Index(n));
                continue;
            }
        }
        if part.bytes().all(|b| b.is_ascii_digit())
            && let Ok(n) = part.parse::<usize>()
        {
            // 纯数字段视为数组索引
            segs.push(Seg::Index(n));
        } else {
            segs.push(Seg::Key(part.to_string()));
        }
    }
    segs
}

/// Looks up the value at a dotted path.
///
/// Returns `None` when any segment is missing or of the wrong kind.
pub fn get_path<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = doc;
    for seg in parse_path(path) {
        current = match seg {
            Seg::Key(key) => current.as_object()?.get(&key)?,
            Seg::Index(idx) => current.as_array()?.get(idx)?,
        };
    }
    Some(current)
}

/// Sets the value at a dotted path, creating intermediate structure.
///
/// Each missing object segment becomes a new empty object; an index segment
/// turns the slot into an array, padded with `null` up to the index. An
/// existing value of the wrong kind is replaced.
pub fn set_path(doc: &mut Value, path: &str, value: Value) {
    let segs = parse_path(path);
    if segs.is_empty() {
        *doc = value;
        return;
    }
    set_at(doc, &segs, value);
}

fn set_at(current: &mut Value, segs: &[Seg], value: Value) {
    match segs {
        [] => *current = value,
        [Seg::Key(key), rest @ ..] => {
            if !current.is_object() {
                *current = Value::Object(Map::new());
            }
            let obj = current.as_object_mut().unwrap();
            if rest.is_empty() {
                obj.insert(key.clone(), value);
            } else {
                let entry = obj.entry(key.clone()).or_insert(Value::Null);
                set_at(entry, rest, value);
            }
        }
        [Seg::Index(idx), rest @ ..] => {
            if !current.is_array() {
                *current = Value::Array(Vec::new());
            }
            let arr = current.as_array_mut().unwrap();
            while arr.len() <= *idx {
                arr.push(Value::Null);
            }
            if rest.is_empty() {
                arr[*idx] = value;
            } else {
                set_at(&mut arr[*idx], rest, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_kind_names() {
        assert_eq!(kind_name(&json!(null)), "null");
        assert_eq!(kind_name(&json!(true)), "boolean");
        assert_eq!(kind_name(&json!(42)), "integer");
        assert_eq!(kind_name(&json!(1.5)), "number");
        assert_eq!(kind_name(&json!("hi")), "string");
        assert_eq!(kind_name(&json!([])), "array");
        assert_eq!(kind_name(&json!({})), "object");
    }

    #[test]
    fn test_parse_preserves_number_kind() {
        let v = parse(r#"{"a": 1, "b": 1.0}"#).unwrap();
        assert!(is_integer(&v["a"]));
        assert!(!is_integer(&v["b"]));
    }

    #[test]
    fn test_dump_round_trip_preserves_key_order() {
        let text = r#"{"zeta":1,"alpha":2,"mid":{"b":1,"a":2}}"#;
        let v = parse(text).unwrap();
        assert_eq!(dump(&v, false).unwrap(), text);
    }

    #[test]
    fn test_set_path_nested_objects() {
        let mut doc = json!({});
        set_path(&mut doc, "server.http.port", json!(8080));
        assert_eq!(doc, json!({"server": {"http": {"port": 8080}}}));
    }

    #[test]
    fn test_set_path_numeric_segment_creates_array() {
        let mut doc = json!({});
        set_path(&mut doc, "items.0", json!("a"));
        set_path(&mut doc, "items.1", json!("b"));
        assert_eq!(doc, json!({"items": ["a", "b"]}));
    }

    #[test]
    fn test_set_path_bracket_notation() {
        let mut doc = json!({});
        set_path(&mut doc, "items[1]", json!("b"));
        // 索引 0 用 null 填充
        assert_eq!(doc, json!({"items": [null, "b"]}));
    }

    #[test]
    fn test_set_path_array_of_objects() {
        let mut doc = json!({});
        set_path(&mut doc, "servers.0.host", json!("a"));
        set_path(&mut doc, "servers.1.host", json!("b"));
        assert_eq!(
            doc,
            json!({"servers": [{"host": "a"}, {"host": "b"}]})
        );
    }

    #[test]
    fn test_set_path_replaces_wrong_kind() {
        let mut doc = json!({"server": "flat"});
        set_path(&mut doc, "server.port", json!(1));
        assert_eq!(doc, json!({"server": {"port": 1}}));
    }

    #[test]
    fn test_get_path() {
        let doc = json!({"a": {"b": [10, {"c": true}]}});
        assert_eq!(get_path(&doc, "a.b.0"), Some(&json!(10)));
        assert_eq!(get_path(&doc, "a.b.1.c"), Some(&json!(true)));
        assert_eq!(get_path(&doc, "a.b[1].c"), Some(&json!(true)));
        assert_eq!(get_path(&doc, "a.missing"), None);
        assert_eq!(get_path(&doc, "a.b.7"), None);
    }
}
