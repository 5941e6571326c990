//! The dynamic value universe that cloning operates on.
//!
//! `Value` covers the shapes found in JSON and TOML documents plus a
//! datetime leaf. Mappings preserve key insertion order end-to-end;
//! arrays are held behind a shared handle so that "copied by reference,
//! not deep-cloned" stays observable after a clone.

mod convert;
mod datetime;
mod kind;
mod ser;

pub use datetime::Datetime;
pub use kind::ValueKind;

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

/// Order-preserving string-keyed mapping.
pub type Map = IndexMap<String, Value>;

/// A dynamically typed document value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// Specialized built-in leaf, never treated as a cloneable container.
    Datetime(Datetime),
    /// Sequence container, shared rather than rebuilt by cloning.
    Array(Arc<Vec<Value>>),
    /// The plain mapping, the only shape `clone_deep` rebuilds.
    Map(Map),
}

impl Value {
    /// Build an array value from owned items.
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Arc::new(items))
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<Datetime> {
        match self {
            Value::Datetime(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a mapping entry. `None` for non-mappings and missing keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.as_map_mut().and_then(|map| map.get_mut(key))
    }

    /// Render as indented JSON (datetimes as RFC 3339 strings).
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Compact JSON rendering.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
