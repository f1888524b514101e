//! Deep clone of JSON-like values.

use serde_json::{Map, Value};

/// Returns a fully independent deep copy of `value`.
///
/// Scalars are copied as they are, sequences element by element and mappings
/// key by key, each through a recursive call. Only the mapping's own entries
/// exist in a [`Value`], so nothing inherited is ever visited.
///
/// Recursion depth equals nesting depth; pathologically deep input can
/// exhaust the stack and is unsupported.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use shortkit_util::clone;
///
/// let original = json!({"a": [1, {"b": 2}]});
/// let mut copy = clone(&original);
/// copy["a"][1]["b"] = json!(3);
/// assert_eq!(original["a"][1]["b"], json!(2));
/// ```
pub fn clone(value: &Value) -> Value {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => value.clone(),
        Value::Array(items) => Value::Array(items.iter().map(clone).collect()),
        Value::Object(entries) => {
            let mut cloned = Map::with_capacity(entries.len());
            for (key, val) in entries {
                cloned.insert(key.clone(), clone(val));
            }
            Value::Object(cloned)
        }
    }
}
