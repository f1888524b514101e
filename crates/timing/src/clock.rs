//! Time sources for the timer queue.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A monotonic time source measured from an arbitrary origin.
pub trait Clock {
    fn now(&self) -> Duration;

    /// Moves the clock forward to `deadline`, blocking if the clock is real.
    /// Deadlines in the past return immediately; time never goes backwards.
    fn wait_until(&self, deadline: Duration);
}

/// Virtual time that only moves when the queue driver moves it.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now: Duration) -> Self {
        Self {
            now: Cell::new(now),
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn wait_until(&self, deadline: Duration) {
        if deadline > self.now.get() {
            self.now.set(deadline);
        }
    }
}

/// Wall-clock time from [`Instant`]; waiting sleeps the current thread.
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn wait_until(&self, deadline: Duration) {
        let now = self.now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_never_goes_back() {
        let clock = ManualClock::starting_at(Duration::from_millis(10));
        clock.wait_until(Duration::from_millis(5));
        assert_eq!(clock.now(), Duration::from_millis(10));
        clock.wait_until(Duration::from_millis(30));
        assert_eq!(clock.now(), Duration::from_millis(30));
    }

    #[test]
    fn system_clock_waits() {
        let clock = SystemClock::new();
        let target = clock.now() + Duration::from_millis(5);
        clock.wait_until(target);
        assert!(clock.now() >= target);
    }
}
