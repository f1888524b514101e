//! Leading-edge throttle with a single coalesced trailing call.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::queue::{Scheduler, TimerId, LOG_TARGET};

#[derive(Debug, Default)]
struct ThrottleState {
    pending: Option<TimerId>,
    last_fire: Option<Duration>,
}

/// A callable that runs `f` at most once per `delay` window.
///
/// Clones share the same state.
pub struct Throttled<A> {
    scheduler: Rc<dyn Scheduler>,
    delay: Duration,
    func: Rc<RefCell<dyn FnMut(A)>>,
    state: Rc<RefCell<ThrottleState>>,
}

/// Wraps `f` so that it fires immediately on the first call of a burst and at
/// most once per `delay` afterwards.
///
/// Calls inside the window are coalesced into one trailing call carrying the
/// latest arguments, fired exactly `delay` after the previous firing. A call
/// arriving exactly `delay` after the previous firing counts as outside the
/// window and fires immediately.
pub fn throttle<A, F>(scheduler: Rc<dyn Scheduler>, delay: Duration, f: F) -> Throttled<A>
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    let func: Rc<RefCell<dyn FnMut(A)>> = Rc::new(RefCell::new(f));
    Throttled {
        scheduler,
        delay,
        func,
        state: Rc::new(RefCell::new(ThrottleState::default())),
    }
}

impl<A: 'static> Throttled<A> {
    pub fn call(&self, args: A) {
        let now = self.scheduler.now();
        let mut state = self.state.borrow_mut();
        let elapsed = state.last_fire.map(|at| now.saturating_sub(at));

        if let Some(id) = state.pending.take() {
            self.scheduler.clear_timeout(id);
        }

        match elapsed {
            Some(elapsed) if elapsed < self.delay => {
                let wait = self.delay - elapsed;
                log::trace!(target: LOG_TARGET, "throttle: coalesced, trailing call in {wait:?}");
                state.pending = Some(self.schedule_trailing(wait, args));
            }
            _ => match self.func.try_borrow_mut() {
                Ok(mut func) => {
                    state.last_fire = Some(now);
                    drop(state);
                    log::trace!(target: LOG_TARGET, "throttle: firing immediately at {now:?}");
                    (&mut *func)(args);
                }
                Err(_) => {
                    // Reentrant call from inside `f`: run it as the next task.
                    log::trace!(target: LOG_TARGET, "throttle: callable busy, deferring call");
                    state.pending = Some(self.schedule_trailing(Duration::ZERO, args));
                }
            },
        }
    }

    fn schedule_trailing(&self, wait: Duration, args: A) -> TimerId {
        schedule_trailing(
            &self.scheduler,
            Rc::clone(&self.func),
            Rc::clone(&self.state),
            wait,
            args,
        )
    }

    /// Whether a trailing call is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.state.borrow().pending.is_some()
    }

    /// Time of the most recent firing, if any.
    pub fn last_fire(&self) -> Option<Duration> {
        self.state.borrow().last_fire
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Schedules a trailing firing of `func`. If `func` is still running when the
/// task comes due, the firing moves to the next task instead.
fn schedule_trailing<A: 'static>(
    scheduler: &Rc<dyn Scheduler>,
    func: Rc<RefCell<dyn FnMut(A)>>,
    state: Rc<RefCell<ThrottleState>>,
    wait: Duration,
    args: A,
) -> TimerId {
    let weak: Weak<dyn Scheduler> = Rc::downgrade(scheduler);
    scheduler.set_timeout(
        wait,
        Box::new(move || {
            let Some(scheduler) = weak.upgrade() else {
                return;
            };
            let Ok(mut callable) = func.try_borrow_mut() else {
                let id = schedule_trailing(
                    &scheduler,
                    Rc::clone(&func),
                    Rc::clone(&state),
                    Duration::ZERO,
                    args,
                );
                state.borrow_mut().pending = Some(id);
                return;
            };
            {
                let mut state = state.borrow_mut();
                state.pending = None;
                state.last_fire = Some(scheduler.now());
            }
            log::trace!(target: LOG_TARGET, "throttle: trailing call fired");
            (&mut *callable)(args);
        }),
    )
}

impl<A> Clone for Throttled<A> {
    fn clone(&self) -> Self {
        Self {
            scheduler: Rc::clone(&self.scheduler),
            delay: self.delay,
            func: Rc::clone(&self.func),
            state: Rc::clone(&self.state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TimerQueue;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn first_call_fires_synchronously() {
        let queue = Rc::new(TimerQueue::manual());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let g = throttle(queue.clone(), ms(100), move |n: u8| s.borrow_mut().push(n));
        g.call(1);
        assert_eq!(*seen.borrow(), vec![1]);
        assert_eq!(g.last_fire(), Some(ms(0)));
        assert!(!g.is_pending());
    }

    #[test]
    fn zero_delay_never_coalesces() {
        let queue = Rc::new(TimerQueue::manual());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let g = throttle(queue.clone(), Duration::ZERO, move |n: u8| s.borrow_mut().push(n));
        g.call(1);
        g.call(2);
        g.call(3);
        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
        assert!(queue.is_empty());
    }
}
