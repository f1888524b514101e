//! Value kinds and type predicates.
//!
//! A value is exactly one of [`Kind::Scalar`], [`Kind::Sequence`] or
//! [`Kind::Mapping`]. Null counts as a scalar, so it is never treated as a
//! mapping during recursive traversal.

use serde_json::Value;

/// Structural classification of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Null, boolean, number or string.
    Scalar,
    /// An ordered, index-addressed collection.
    Sequence,
    /// A key to value association with unique string keys.
    Mapping,
}

/// Classifies a value.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use shortkit_util::json_kind::{kind, Kind};
///
/// assert_eq!(kind(&json!(null)), Kind::Scalar);
/// assert_eq!(kind(&json!([1, 2])), Kind::Sequence);
/// assert_eq!(kind(&json!({"a": 1})), Kind::Mapping);
/// ```
pub fn kind(value: &Value) -> Kind {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Kind::Scalar,
        Value::Array(_) => Kind::Sequence,
        Value::Object(_) => Kind::Mapping,
    }
}

pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// True for mappings only; sequences and null are not objects here.
pub fn is_object(value: &Value) -> bool {
    kind(value) == Kind::Mapping
}

pub fn is_array(value: &Value) -> bool {
    kind(value) == Kind::Sequence
}

pub fn is_boolean(value: &Value) -> bool {
    value.is_boolean()
}

pub fn is_null(value: &Value) -> bool {
    value.is_null()
}

/// True for numbers. Every `serde_json` number is finite.
pub fn is_num(value: &Value) -> bool {
    value.is_number()
}

/// A slot is defined when it is present and not null.
pub fn is_defined(value: Option<&Value>) -> bool {
    matches!(value, Some(v) if !v.is_null())
}

/// A slot is undefined when it is absent. Null is a defined-but-empty value
/// and does not count.
pub fn is_undefined(value: Option<&Value>) -> bool {
    value.is_none()
}
