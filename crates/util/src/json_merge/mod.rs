//! Recursive in-place merge of mapping values.
//!
//! Merge rules, applied per key of each mapping source in order:
//!
//! - a mapping source value is merged recursively into the target slot; a
//!   target slot that is absent or not a mapping is first replaced by an
//!   empty mapping, so scalars, null and sequences in that slot are dropped;
//! - any other source value, sequences included, overwrites the slot
//!   wholesale. Sequences are never merged element-wise.
//!
//! Non-mapping targets and non-mapping sources are ignored.

use serde_json::{Map, Value};

use crate::json_kind::{kind, Kind};

const LOG_TARGET: &str = "shortkit.merge";

/// Merges every mapping in `sources` into `target` and returns `target`.
///
/// Never fails: a non-mapping `target` is returned unchanged and non-mapping
/// sources are skipped.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use shortkit_util::deep_merge;
///
/// let mut target = json!({"a": {"x": 1}, "list": [1, 2]});
/// deep_merge(&mut target, &[json!({"a": {"y": 2}, "list": [3]})]);
/// assert_eq!(target, json!({"a": {"x": 1, "y": 2}, "list": [3]}));
/// ```
pub fn deep_merge<'a, 'b, I>(target: &'a mut Value, sources: I) -> &'a mut Value
where
    I: IntoIterator<Item = &'b Value>,
{
    if let Value::Object(entries) = &mut *target {
        for source in sources {
            if let Value::Object(source) = source {
                merge_mapping(entries, source);
            }
        }
    } else {
        log::debug!(target: LOG_TARGET, "merge target is not a mapping, leaving it unchanged");
    }
    target
}

fn merge_mapping(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, incoming) in source {
        match incoming {
            Value::Object(nested) => {
                let slot = target
                    .entry(key.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                if kind(slot) != Kind::Mapping {
                    log::trace!(
                        target: LOG_TARGET,
                        "replacing non-mapping slot {key:?} with an empty mapping"
                    );
                    *slot = Value::Object(Map::new());
                }
                if let Value::Object(slot) = slot {
                    merge_mapping(slot, nested);
                }
            }
            other => {
                target.insert(key.clone(), other.clone());
            }
        }
    }
}
