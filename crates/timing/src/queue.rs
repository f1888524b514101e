//! Single-threaded cooperative timer queue.
//!
//! The queue plays the role of a host event loop: wrapped callables schedule
//! work through the [`Scheduler`] trait and a driver runs due tasks with
//! [`TimerQueue::run_until`], [`TimerQueue::advance`] or
//! [`TimerQueue::run_until_idle`]. Tasks run one at a time, in deadline order,
//! with ties broken by scheduling order. A running task may schedule or clear
//! other timers.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::Duration;

use crate::clock::{Clock, ManualClock, SystemClock};

pub(crate) const LOG_TARGET: &str = "shortkit.timing";

/// Deferred unit of work.
pub type Task = Box<dyn FnOnce()>;

/// Handle of a scheduled task, unique per queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// The host timer facility seen by wrapped callables.
pub trait Scheduler {
    /// Current time of the host clock.
    fn now(&self) -> Duration;

    /// Schedules `task` to run once `delay` has elapsed from [`Scheduler::now`].
    fn set_timeout(&self, delay: Duration, task: Task) -> TimerId;

    /// Cancels a pending task. Unknown or already-run ids are ignored.
    fn clear_timeout(&self, id: TimerId);
}

#[derive(Default)]
struct QueueState {
    next_id: u64,
    tasks: BTreeMap<(Duration, TimerId), Task>,
    deadlines: HashMap<TimerId, Duration>,
}

/// Timer queue over a [`Clock`].
pub struct TimerQueue<C: Clock = ManualClock> {
    clock: C,
    state: RefCell<QueueState>,
}

impl TimerQueue<ManualClock> {
    /// Queue on virtual time starting at zero.
    pub fn manual() -> Self {
        Self::with_clock(ManualClock::new())
    }

    /// Runs every task due within the next `by` and leaves the clock at
    /// `now + by`. Returns the number of tasks run.
    pub fn advance(&self, by: Duration) -> usize {
        self.run_until(self.clock.now().saturating_add(by))
    }
}

impl Default for TimerQueue<ManualClock> {
    fn default() -> Self {
        Self::manual()
    }
}

impl TimerQueue<SystemClock> {
    /// Queue on wall-clock time; driving it sleeps between deadlines.
    pub fn system() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl<C: Clock> TimerQueue<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: RefCell::new(QueueState::default()),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.state.borrow().tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().tasks.is_empty()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.state
            .borrow()
            .tasks
            .keys()
            .next()
            .map(|(deadline, _)| *deadline)
    }

    fn pop_due(&self, until: Option<Duration>) -> Option<(Duration, TimerId, Task)> {
        let mut state = self.state.borrow_mut();
        let (deadline, id) = *state.tasks.keys().next()?;
        if until.is_some_and(|until| deadline > until) {
            return None;
        }
        let task = state.tasks.remove(&(deadline, id))?;
        state.deadlines.remove(&id);
        Some((deadline, id, task))
    }

    fn run_task(&self, deadline: Duration, id: TimerId, task: Task) {
        self.clock.wait_until(deadline);
        log::trace!(target: LOG_TARGET, "timer {id:?} fired at {deadline:?}");
        task();
    }

    /// Runs every task with a deadline at or before `until`, including tasks
    /// scheduled by earlier tasks within the window, then moves the clock to
    /// `until`. Returns the number of tasks run.
    pub fn run_until(&self, until: Duration) -> usize {
        let mut ran = 0;
        while let Some((deadline, id, task)) = self.pop_due(Some(until)) {
            self.run_task(deadline, id, task);
            ran += 1;
        }
        self.clock.wait_until(until);
        ran
    }

    /// Runs tasks until none are pending. A task that keeps rescheduling
    /// itself makes this loop forever.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        while let Some((deadline, id, task)) = self.pop_due(None) {
            self.run_task(deadline, id, task);
            ran += 1;
        }
        ran
    }
}

impl<C: Clock> Scheduler for TimerQueue<C> {
    fn now(&self) -> Duration {
        self.clock.now()
    }

    fn set_timeout(&self, delay: Duration, task: Task) -> TimerId {
        let deadline = self.clock.now().saturating_add(delay);
        let mut state = self.state.borrow_mut();
        let id = TimerId(state.next_id);
        state.next_id += 1;
        state.tasks.insert((deadline, id), task);
        state.deadlines.insert(id, deadline);
        log::trace!(target: LOG_TARGET, "timer {id:?} scheduled for {deadline:?}");
        id
    }

    fn clear_timeout(&self, id: TimerId) {
        let mut state = self.state.borrow_mut();
        if let Some(deadline) = state.deadlines.remove(&id) {
            state.tasks.remove(&(deadline, id));
            log::trace!(target: LOG_TARGET, "timer {id:?} cleared");
        }
    }
}

impl<C: Clock + fmt::Debug> fmt::Debug for TimerQueue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerQueue")
            .field("clock", &self.clock)
            .field("pending", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn runs_in_deadline_then_fifo_order() {
        let queue = TimerQueue::manual();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (delay, tag) in [(20, "c"), (10, "a"), (10, "b")] {
            let log = Rc::clone(&log);
            queue.set_timeout(ms(delay), Box::new(move || log.borrow_mut().push(tag)));
        }
        assert_eq!(queue.run_until_idle(), 3);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(queue.now(), ms(20));
    }

    #[test]
    fn clock_reads_deadline_inside_task() {
        let queue = Rc::new(TimerQueue::manual());
        let seen = Rc::new(RefCell::new(None));
        let (q, s) = (Rc::clone(&queue), Rc::clone(&seen));
        queue.set_timeout(ms(15), Box::new(move || *s.borrow_mut() = Some(q.now())));
        queue.advance(ms(100));
        assert_eq!(*seen.borrow(), Some(ms(15)));
        assert_eq!(queue.now(), ms(100));
    }

    #[test]
    fn cleared_timer_never_runs() {
        let queue = TimerQueue::manual();
        let hits = Rc::new(RefCell::new(0));
        let h = Rc::clone(&hits);
        let id = queue.set_timeout(ms(5), Box::new(move || *h.borrow_mut() += 1));
        queue.clear_timeout(id);
        queue.clear_timeout(id);
        assert!(queue.is_empty());
        assert_eq!(queue.advance(ms(10)), 0);
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn task_scheduled_inside_window_runs() {
        let queue = Rc::new(TimerQueue::manual());
        let hits = Rc::new(RefCell::new(Vec::new()));
        let (q, h) = (Rc::clone(&queue), Rc::clone(&hits));
        queue.set_timeout(
            ms(10),
            Box::new(move || {
                h.borrow_mut().push(q.now());
                let h = Rc::clone(&h);
                let inner = Rc::clone(&q);
                q.set_timeout(ms(10), Box::new(move || h.borrow_mut().push(inner.now())));
            }),
        );
        assert_eq!(queue.run_until(ms(25)), 2);
        assert_eq!(*hits.borrow(), vec![ms(10), ms(20)]);
    }

    #[test]
    fn run_until_leaves_later_tasks() {
        let queue = TimerQueue::manual();
        queue.set_timeout(ms(50), Box::new(|| {}));
        assert_eq!(queue.run_until(ms(49)), 0);
        assert_eq!(queue.next_deadline(), Some(ms(50)));
        assert_eq!(queue.run_until(ms(50)), 1);
        assert!(queue.is_empty());
    }
}
