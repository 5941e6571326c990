//! Deep cloning of plain mappings.
//!
//! The clone rebuilds every nested plain mapping, so mutating the input
//! afterwards never shows through. Everything else is copied as-is:
//! primitives by value, arrays by shared handle. An input that is not a
//! plain mapping produces `None` - not an error, and not an empty mapping.

use crate::value::{Map, Value};

/// Deep-clone a plain mapping.
///
/// Returns `None` for any non-mapping input, arrays included. Array
/// *entries* inside a mapping keep their shared backing rather than being
/// rebuilt, matching how only mappings count as cloneable containers.
pub fn clone_deep(input: &Value) -> Option<Value> {
    match input {
        Value::Map(map) => Some(Value::Map(clone_map(map))),
        _ => None,
    }
}

/// Rebuild a mapping entry by entry, recursing into nested mappings only.
fn clone_map(map: &Map) -> Map {
    map.iter()
        .map(|(key, entry)| {
            let cloned = match entry {
                Value::Map(nested) => Value::Map(clone_map(nested)),
                other => other.clone(),
            };
            (key.clone(), cloned)
        })
        .collect()
}

impl Value {
    /// Method form of [`clone_deep`].
    #[inline]
    pub fn clone_deep(&self) -> Option<Value> {
        clone_deep(self)
    }
}
