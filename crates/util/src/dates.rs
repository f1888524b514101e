//! Calendar-free date arithmetic on [`SystemTime`].
//!
//! Days are fixed 24-hour spans; there is no time zone or daylight saving
//! adjustment.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Milliseconds since the Unix epoch. A clock set before the epoch reads 0.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// Moves `at` by `days` whole days, backwards for negative counts.
///
/// Returns `at` unchanged when the result is not representable.
pub fn add_days(at: SystemTime, days: i64) -> SystemTime {
    let Some(span) = u32::try_from(days.unsigned_abs())
        .ok()
        .and_then(|n| DAY.checked_mul(n))
    else {
        return at;
    };
    let moved = if days < 0 {
        at.checked_sub(span)
    } else {
        at.checked_add(span)
    };
    moved.unwrap_or(at)
}

/// Whole days between two instants, rounding any partial day up. Order does
/// not matter.
pub fn diff_days(a: SystemTime, b: SystemTime) -> u64 {
    let span = match b.duration_since(a) {
        Ok(d) => d,
        Err(e) => e.duration(),
    };
    let millis = span.as_millis();
    let day = DAY.as_millis();
    millis.div_ceil(day) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn epoch_plus(secs: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn add_days_moves_both_directions() {
        let start = epoch_plus(10 * 86_400);
        assert_eq!(add_days(start, 3), epoch_plus(13 * 86_400));
        assert_eq!(add_days(start, -4), epoch_plus(6 * 86_400));
        assert_eq!(add_days(start, 0), start);
    }

    #[test]
    fn add_days_out_of_range_is_a_no_op() {
        let start = epoch_plus(0);
        assert_eq!(add_days(start, i64::MAX), start);
        assert_eq!(add_days(start, i64::MIN), start);
    }

    #[test]
    fn diff_days_rounds_partial_days_up() {
        let a = epoch_plus(0);
        assert_eq!(diff_days(a, a), 0);
        assert_eq!(diff_days(a, epoch_plus(86_400)), 1);
        assert_eq!(diff_days(a, epoch_plus(86_400 + 43_200)), 2);
        assert_eq!(diff_days(a, a + Duration::from_millis(1)), 1);
    }

    #[test]
    fn diff_days_ignores_order() {
        let a = epoch_plus(5 * 86_400);
        let b = epoch_plus(2 * 86_400);
        assert_eq!(diff_days(a, b), 3);
        assert_eq!(diff_days(b, a), 3);
    }

    #[test]
    fn add_then_diff_agrees() {
        let start = epoch_plus(1_000_000);
        assert_eq!(diff_days(start, add_days(start, 30)), 30);
    }

    #[test]
    fn now_is_after_the_epoch() {
        let before = now_millis();
        assert!(before > 0);
        assert!(now_millis() >= before);
    }
}
