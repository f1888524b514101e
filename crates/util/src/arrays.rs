//! Sequence helpers.

use std::hash::Hash;

use indexmap::IndexSet;
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArrayError {
    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,
}

/// Removes duplicates, keeping the first occurrence of each item in order.
///
/// ```
/// use shortkit_util::arrays::unique;
///
/// assert_eq!(unique(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn unique<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    items.iter().cloned().collect::<IndexSet<T>>().into_iter().collect()
}

/// Fully flattens nested sequences into one flat list.
pub fn flatten(values: &[Value]) -> Vec<Value> {
    let mut out = Vec::with_capacity(values.len());
    flatten_into(values, &mut out);
    out
}

fn flatten_into(values: &[Value], out: &mut Vec<Value>) {
    for value in values {
        match value {
            Value::Array(nested) => flatten_into(nested, out),
            other => out.push(other.clone()),
        }
    }
}

/// Splits `items` into consecutive chunks of `size`; the last chunk may be
/// shorter.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, ArrayError> {
    if size == 0 {
        return Err(ArrayError::ZeroChunkSize);
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Shuffles `items` in place.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Removes the element at `index`. Out-of-range indices leave `items`
/// untouched and return `None`.
pub fn remove_at<T>(items: &mut Vec<T>, index: usize) -> Option<T> {
    if index < items.len() {
        Some(items.remove(index))
    } else {
        None
    }
}

/// Returns a copy of `items` without the elements equal to `value`.
pub fn remove_value<T: PartialEq + Clone>(items: &[T], value: &T) -> Vec<T> {
    items.iter().filter(|item| *item != value).cloned().collect()
}
