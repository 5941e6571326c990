//! Value classification.

use super::Value;

/// Category of a value, determines clone strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Basic key-value object - rebuilt entry by entry when cloning
    PlainMapping,
    /// Sequence container - copied by shared handle, never rebuilt
    Array,
    /// Null, booleans, numbers, strings - copied by value
    Primitive,
    /// Specialized built-in leaves (datetimes) - copied by value
    Other,
}

impl ValueKind {
    /// Display name for this category.
    pub const fn name(self) -> &'static str {
        match self {
            Self::PlainMapping => "plain mapping",
            Self::Array => "array",
            Self::Primitive => "primitive",
            Self::Other => "other",
        }
    }
}

impl Value {
    /// Classify this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Map(_) => ValueKind::PlainMapping,
            Value::Array(_) => ValueKind::Array,
            Value::Datetime(_) => ValueKind::Other,
            Value::Null
            | Value::Bool(_)
            | Value::Integer(_)
            | Value::Float(_)
            | Value::String(_) => ValueKind::Primitive,
        }
    }

    /// Check whether this value is the one shape cloning rebuilds.
    #[inline]
    pub const fn is_plain_mapping(&self) -> bool {
        matches!(self, Value::Map(_))
    }
}
