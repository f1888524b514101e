//! Number helpers over plain `f64` and JSON values.

use rand::Rng;
use serde_json::Value;

use crate::json_kind::is_num;

/// Limits `n` to `[min, max]`. With inverted bounds `max` wins.
pub fn clamp(n: f64, min: f64, max: f64) -> f64 {
    n.max(min).min(max)
}

/// Rounds to `decimals` places, halves toward positive infinity.
///
/// ```
/// use shortkit_util::numbers::round;
///
/// assert_eq!(round(1.23456, 2), 1.23);
/// assert_eq!(round(2.345, 1), 2.3);
/// assert_eq!(round(-2.5, 0), -2.0);
/// ```
pub fn round(n: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = n * factor;
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded / factor
}

fn as_finite(value: &Value) -> Option<f64> {
    if is_num(value) {
        value.as_f64()
    } else {
        None
    }
}

/// Sums the numeric entries; everything else counts as zero.
pub fn sum(values: &[Value]) -> f64 {
    values.iter().filter_map(as_finite).sum()
}

/// Mean over all entries (non-numeric entries count as zero). Empty input
/// averages to zero.
pub fn average(values: &[Value]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    sum(values) / values.len() as f64
}

fn integral(value: &Value) -> Option<f64> {
    as_finite(value).filter(|n| n.fract() == 0.0)
}

pub fn is_even(value: &Value) -> bool {
    integral(value).is_some_and(|n| n % 2.0 == 0.0)
}

pub fn is_odd(value: &Value) -> bool {
    integral(value).is_some_and(|n| n % 2.0 != 0.0)
}

/// Uniform random integer in `[min, max]`. Inverted bounds are swapped.
pub fn rand_int<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(lo..=hi)
}
