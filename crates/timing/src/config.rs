//! JSON-configurable rate limiting.
//!
//! ```
//! use std::rc::Rc;
//! use shortkit_timing::{RateLimit, RateMode, TimerQueue};
//!
//! let limit = RateLimit::from_json(r#"{"mode": "throttle", "delay_ms": 250}"#).unwrap();
//! assert_eq!(limit.mode, RateMode::Throttle);
//!
//! let queue = Rc::new(TimerQueue::manual());
//! let on_scroll = limit.wrap(queue.clone(), |_offset: f64| {});
//! on_scroll.call(12.0);
//! ```

use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::debounce::{debounce, Debounced};
use crate::queue::Scheduler;
use crate::throttle::{throttle, Throttled};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid rate limit config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateMode {
    Debounce,
    Throttle,
}

/// Rate limiting settings, e.g. `{"mode": "debounce", "delay_ms": 300}`.
/// `delay_ms` defaults to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateLimit {
    pub mode: RateMode,
    #[serde(default)]
    pub delay_ms: u64,
}

impl RateLimit {
    pub fn debounce(delay: Duration) -> Self {
        Self {
            mode: RateMode::Debounce,
            delay_ms: millis(delay),
        }
    }

    pub fn throttle(delay: Duration) -> Self {
        Self {
            mode: RateMode::Throttle,
            delay_ms: millis(delay),
        }
    }

    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Wraps `f` with the configured debounce or throttle.
    pub fn wrap<A, F>(&self, scheduler: Rc<dyn Scheduler>, f: F) -> RateLimited<A>
    where
        A: 'static,
        F: FnMut(A) + 'static,
    {
        match self.mode {
            RateMode::Debounce => RateLimited::Debounced(debounce(scheduler, self.delay(), f)),
            RateMode::Throttle => RateLimited::Throttled(throttle(scheduler, self.delay(), f)),
        }
    }
}

fn millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

/// Either wrapper behind one call interface.
pub enum RateLimited<A> {
    Debounced(Debounced<A>),
    Throttled(Throttled<A>),
}

impl<A: 'static> RateLimited<A> {
    pub fn call(&self, args: A) {
        match self {
            RateLimited::Debounced(g) => g.call(args),
            RateLimited::Throttled(g) => g.call(args),
        }
    }

    pub fn is_pending(&self) -> bool {
        match self {
            RateLimited::Debounced(g) => g.is_pending(),
            RateLimited::Throttled(g) => g.is_pending(),
        }
    }
}

impl<A> Clone for RateLimited<A> {
    fn clone(&self) -> Self {
        match self {
            RateLimited::Debounced(g) => RateLimited::Debounced(g.clone()),
            RateLimited::Throttled(g) => RateLimited::Throttled(g.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_modes() {
        let limit = RateLimit::from_value(json!({"mode": "debounce", "delay_ms": 300})).unwrap();
        assert_eq!(limit, RateLimit::debounce(Duration::from_millis(300)));
        let limit = RateLimit::from_json(r#"{"mode":"throttle"}"#).unwrap();
        assert_eq!(limit.delay(), Duration::ZERO);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(RateLimit::from_json(r#"{"mode":"sample","delay_ms":1}"#).is_err());
        assert!(RateLimit::from_json(r#"{"mode":"throttle","delay":1}"#).is_err());
        assert!(RateLimit::from_json(r#"{"mode":"throttle","delay_ms":-1}"#).is_err());
        let err = RateLimit::from_json("nope").unwrap_err();
        assert!(err.to_string().starts_with("invalid rate limit config"));
    }

    #[test]
    fn round_trips_through_json() {
        let limit = RateLimit::throttle(Duration::from_millis(75));
        let text = serde_json::to_string(&limit).unwrap();
        assert_eq!(text, r#"{"mode":"throttle","delay_ms":75}"#);
    }
}
