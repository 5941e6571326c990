//! Conversions into `Value` from Rust primitives and parsed documents.
//!
//! JSON and TOML ingestion parses with the ecosystem parsers first, then
//! walks the parsed tree. JSON keeps key order because `serde_json` is
//! built with `preserve_order`; TOML tables are already ordered.

use std::sync::Arc;

use super::{Datetime, Map, Value};
use crate::error::ValueError;

impl Value {
    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, ValueError> {
        let parsed: serde_json::Value = serde_json::from_str(content)?;
        Ok(parsed.into())
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ValueError> {
        let parsed: toml::Value = toml::from_str(content)?;
        Ok(parsed.into())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Datetime> for Value {
    fn from(dt: Datetime) -> Self {
        Value::Datetime(dt)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(Arc::new(items))
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    // u64 beyond i64::MAX lands here, losing precision
                    Value::Float(f)
                } else {
                    Value::Null
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(Arc::new(items.into_iter().map(Value::from).collect()))
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, entry)| (key, Value::from(entry)))
                    .collect(),
            ),
        }
    }
}

impl From<toml::Value> for Value {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Value::String(s),
            toml::Value::Integer(i) => Value::Integer(i),
            toml::Value::Float(f) => Value::Float(f),
            toml::Value::Boolean(b) => Value::Bool(b),
            toml::Value::Datetime(dt) => {
                // Offset and local-time forms keep their string rendering
                let rendered = dt.to_string();
                Datetime::parse(&rendered)
                    .map(Value::Datetime)
                    .unwrap_or(Value::String(rendered))
            }
            toml::Value::Array(items) => {
                Value::Array(Arc::new(items.into_iter().map(Value::from).collect()))
            }
            toml::Value::Table(table) => Value::Map(
                table
                    .into_iter()
                    .map(|(key, entry)| (key, Value::from(entry)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    #[test]
    fn test_json_ingest_preserves_key_order() {
        let doc = Value::from_json_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<&str> = doc.as_map().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_json_numbers_split_by_shape() {
        let doc = Value::from_json_str(r#"{"n": 1, "f": 1.5}"#).unwrap();
        assert_eq!(doc.get("n"), Some(&Value::Integer(1)));
        assert_eq!(doc.get("f"), Some(&Value::Float(1.5)));
    }

    #[test]
    fn test_json_parse_failure_is_an_error() {
        let err = Value::from_json_str("{").unwrap_err();
        assert!(matches!(err, ValueError::Json(_)));
    }

    #[test]
    fn test_toml_ingest_nested_tables() {
        let doc = Value::from_toml_str(
            r#"
            title = "blog"

            [theme]
            repo = "reeli/blog"
            edit_links = true
            "#,
        )
        .unwrap();

        assert_eq!(doc.get("title").and_then(Value::as_str), Some("blog"));
        let theme = doc.get("theme").unwrap();
        assert_eq!(theme.kind(), ValueKind::PlainMapping);
        assert_eq!(theme.get("edit_links"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_toml_datetime_becomes_other_leaf() {
        let doc = Value::from_toml_str("date = 2024-06-15").unwrap();
        let date = doc.get("date").unwrap();
        assert_eq!(date.kind(), ValueKind::Other);
        assert_eq!(date.as_datetime(), Some(Datetime::from_ymd(2024, 6, 15)));
    }

    #[test]
    fn test_toml_offset_datetime_falls_back_to_string() {
        let doc = Value::from_toml_str("date = 2024-06-15T14:30:45+07:00").unwrap();
        assert_eq!(doc.get("date").unwrap().kind(), ValueKind::Primitive);
    }
}
