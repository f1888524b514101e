//! Shallow helpers over mapping values.

use serde_json::{Map, Value};

/// Shallow-merges every mapping argument into a new mapping. Later keys win;
/// non-mapping arguments are ignored.
///
/// ```
/// use serde_json::json;
/// use shortkit_util::json_object::extend;
///
/// let merged = extend(&[json!({"a": 1, "b": 1}), json!(null), json!({"b": {"c": 2}})]);
/// assert_eq!(merged, json!({"a": 1, "b": {"c": 2}}));
/// ```
pub fn extend<'a, I>(values: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut out = Map::new();
    for value in values {
        if let Value::Object(entries) = value {
            for (key, val) in entries {
                out.insert(key.clone(), val.clone());
            }
        }
    }
    Value::Object(out)
}

/// Null, empty strings, empty sequences and empty mappings are empty. Every
/// other scalar is not.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// True when `value` directly owns `key`: a mapping entry, or an in-range
/// decimal index of a sequence.
pub fn has_own(value: &Value, key: &str) -> bool {
    match value {
        Value::Object(entries) => entries.contains_key(key),
        Value::Array(items) => key
            .parse::<usize>()
            .is_ok_and(|index| index < items.len() && index.to_string() == key),
        _ => false,
    }
}

pub fn is_empty_object(value: &Value) -> bool {
    matches!(value, Value::Object(entries) if entries.is_empty())
}

pub fn keys(value: &Value) -> Vec<&str> {
    match value {
        Value::Object(entries) => entries.keys().map(String::as_str).collect(),
        _ => Vec::new(),
    }
}

pub fn values(value: &Value) -> Vec<&Value> {
    match value {
        Value::Object(entries) => entries.values().collect(),
        _ => Vec::new(),
    }
}

pub fn entries(value: &Value) -> Vec<(&str, &Value)> {
    match value {
        Value::Object(entries) => entries.iter().map(|(k, v)| (k.as_str(), v)).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extend_is_shallow() {
        let merged = extend(&[json!({"a": {"x": 1}}), json!({"a": {"y": 2}})]);
        assert_eq!(merged, json!({"a": {"y": 2}}));
    }

    #[test]
    fn extend_of_nothing_is_empty_mapping() {
        assert_eq!(extend(&[] as &[Value]), json!({}));
        assert_eq!(extend(&[json!([1]), json!("s")]), json!({}));
    }

    #[test]
    fn emptiness() {
        assert!(is_empty(&json!(null)));
        assert!(is_empty(&json!("")));
        assert!(is_empty(&json!([])));
        assert!(is_empty(&json!({})));
        assert!(!is_empty(&json!(0)));
        assert!(!is_empty(&json!(false)));
        assert!(!is_empty(&json!(" ")));
    }

    #[test]
    fn own_keys() {
        assert!(has_own(&json!({"a": null}), "a"));
        assert!(!has_own(&json!({"a": 1}), "b"));
        assert!(has_own(&json!([1, 2]), "1"));
        assert!(!has_own(&json!([1, 2]), "2"));
        assert!(!has_own(&json!([1, 2]), "01"));
        assert!(!has_own(&json!("abc"), "0"));
    }

    #[test]
    fn empty_object_requires_mapping() {
        assert!(is_empty_object(&json!({})));
        assert!(!is_empty_object(&json!([])));
        assert!(!is_empty_object(&json!({"a": 1})));
    }

    #[test]
    fn key_value_listing_keeps_order() {
        let v = json!({"b": 1, "a": 2});
        assert_eq!(keys(&v), vec!["b", "a"]);
        assert_eq!(values(&v), vec![&json!(1), &json!(2)]);
        assert_eq!(entries(&v), vec![("b", &json!(1)), ("a", &json!(2))]);
        assert!(keys(&json!(3)).is_empty());
    }
}
