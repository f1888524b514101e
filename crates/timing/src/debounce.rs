//! Trailing-edge debounce.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::queue::{Scheduler, TimerId, LOG_TARGET};

#[derive(Debug, Default)]
struct DebounceState {
    pending: Option<TimerId>,
}

/// A callable that defers `f` until `delay` has passed without another call.
///
/// Clones share the same pending slot, so a call through any clone resets
/// the quiescence window for all of them.
pub struct Debounced<A> {
    scheduler: Rc<dyn Scheduler>,
    delay: Duration,
    func: Rc<RefCell<dyn FnMut(A)>>,
    state: Rc<RefCell<DebounceState>>,
}

/// Wraps `f` so that only the last call of a burst runs, `delay` after that
/// call, with that call's arguments.
///
/// A bound call context is expressed by capturing it in `f`; multiple
/// arguments travel as a tuple.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use std::time::Duration;
/// use shortkit_timing::{debounce, TimerQueue};
///
/// let queue = Rc::new(TimerQueue::manual());
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// let search = debounce(queue.clone(), Duration::from_millis(50), move |q: &'static str| {
///     sink.borrow_mut().push(q)
/// });
///
/// search.call("r");
/// search.call("ru");
/// search.call("rust");
/// queue.advance(Duration::from_millis(50));
/// assert_eq!(*seen.borrow(), vec!["rust"]);
/// ```
pub fn debounce<A, F>(scheduler: Rc<dyn Scheduler>, delay: Duration, f: F) -> Debounced<A>
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    let func: Rc<RefCell<dyn FnMut(A)>> = Rc::new(RefCell::new(f));
    Debounced {
        scheduler,
        delay,
        func,
        state: Rc::new(RefCell::new(DebounceState::default())),
    }
}

impl<A: 'static> Debounced<A> {
    /// Cancels the pending call, if any, and schedules a fresh one with
    /// `args`.
    pub fn call(&self, args: A) {
        let mut state = self.state.borrow_mut();
        if let Some(id) = state.pending.take() {
            self.scheduler.clear_timeout(id);
            log::trace!(target: LOG_TARGET, "debounce: pending call {id:?} superseded");
        }
        let func = Rc::clone(&self.func);
        let slot = Rc::clone(&self.state);
        let id = self.scheduler.set_timeout(
            self.delay,
            Box::new(move || {
                slot.borrow_mut().pending = None;
                (&mut *func.borrow_mut())(args);
            }),
        );
        state.pending = Some(id);
    }

    /// Whether a deferred call is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.state.borrow().pending.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self {
            scheduler: Rc::clone(&self.scheduler),
            delay: self.delay,
            func: Rc::clone(&self.func),
            state: Rc::clone(&self.state),
        }
    }
}
