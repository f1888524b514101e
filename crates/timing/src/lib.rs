//! shortkit-timing - debounce and throttle over a cooperative timer queue.
//!
//! Wrapped callables never spawn threads. They schedule work on a host
//! [`Scheduler`], normally a [`TimerQueue`], and return immediately. The host
//! decides when time passes: [`TimerQueue::manual`] uses virtual time for
//! deterministic drivers and tests, [`TimerQueue::system`] sleeps on the
//! wall clock.
//!
//! # Overview
//!
//! - [`debounce`] - run only the last call of a burst, after a quiet period
//! - [`throttle`] - run at most once per window, leading call plus one
//!   coalesced trailing call
//! - [`RateLimit`] - serde-configurable choice between the two
//!
//! Everything here is single-threaded (`Rc`/`RefCell`); wrapped callables
//! are not `Send`.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use std::time::Duration;
//! use shortkit_timing::{throttle, TimerQueue};
//!
//! let queue = Rc::new(TimerQueue::manual());
//! let fired = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&fired);
//! let g = throttle(queue.clone(), Duration::from_millis(50), move |n: u32| {
//!     sink.borrow_mut().push(n)
//! });
//!
//! g.call(1); // fires now
//! g.call(2); // coalesced
//! g.call(3); // replaces 2
//! queue.advance(Duration::from_millis(50));
//! assert_eq!(*fired.borrow(), vec![1, 3]);
//! ```

mod clock;
mod config;
mod debounce;
mod queue;
mod throttle;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, RateLimit, RateLimited, RateMode};
pub use debounce::{debounce, Debounced};
pub use queue::{Scheduler, Task, TimerId, TimerQueue};
pub use throttle::{throttle, Throttled};
