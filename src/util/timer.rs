//! Cooperative timer queue for simulated network delays.
//!
//! Time is virtual: nothing fires until the owner advances the clock. Every scheduled completion
//! carries a [`LivenessToken`] from the [`Lifetime`] of whatever scheduled it. When that lifetime
//! ends (it is dropped or renewed) the completion is discarded instead of delivered, so a screen
//! that has been navigated away from never receives a late update.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::{Rc, Weak};
use std::time::Duration;
use tracing::debug;

/// Owner side of a liveness pair. Held by a screen for as long as it is mounted.
#[derive(Debug, Default)]
pub struct Lifetime {
    alive: Rc<()>,
}

/// Observer side of a liveness pair. Cheap to clone, never keeps the owner alive.
#[derive(Clone, Debug)]
pub struct LivenessToken(Weak<()>);

impl Lifetime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> LivenessToken {
        LivenessToken(Rc::downgrade(&self.alive))
    }

    /// End the current lifetime and start a new one, invalidating every token handed out so far.
    pub fn renew(&mut self) {
        self.alive = Rc::new(());
    }
}

impl LivenessToken {
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }
}

struct Scheduled<E> {
    deadline: Duration,
    seq: u64,
    token: LivenessToken,
    event: E,
}

// `BinaryHeap` is a max-heap; order so the earliest deadline (then earliest scheduled) is on top.
impl<E> Ord for Scheduled<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<E> PartialOrd for Scheduled<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> PartialEq for Scheduled<E> {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl<E> Eq for Scheduled<E> {}

/// Single-threaded queue of timed completions on a virtual clock.
pub struct Scheduler<E> {
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Scheduled<E>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BinaryHeap::new(),
        }
    }
}

impl<E> std::fmt::Debug for Scheduler<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("now", &self.now)
            .field("pending", &self.queue.len())
            .finish()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time, measured from scheduler creation.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of queued completions, including ones whose owner has already gone away.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.peek().map(|entry| entry.deadline)
    }

    /// Deliver `event` after `delay`, provided `token` is still alive at that point.
    pub fn schedule(&mut self, delay: Duration, token: LivenessToken, event: E) {
        let deadline = self.now + delay;
        debug!("Scheduling completion #{} at {deadline:?}", self.next_seq);

        self.queue.push(Scheduled {
            deadline,
            seq: self.next_seq,
            token,
            event,
        });
        self.next_seq += 1;
    }

    /// Pop the next live completion due at or before `until`, moving the clock to its deadline.
    ///
    /// Returns `None` once nothing live is due, leaving the clock at `until`. Completions whose
    /// token has died are dropped along the way.
    pub fn pop_due(&mut self, until: Duration) -> Option<E> {
        while self
            .queue
            .peek()
            .is_some_and(|entry| entry.deadline <= until)
        {
            let Some(entry) = self.queue.pop() else {
                break;
            };
            self.now = self.now.max(entry.deadline);

            if entry.token.is_alive() {
                return Some(entry.event);
            }
            debug!(
                "Discarding stale completion #{} due at {:?}",
                entry.seq, entry.deadline
            );
        }

        self.now = self.now.max(until);

        None
    }

    /// Advance the clock by `by` and collect every live completion that came due, in order.
    ///
    /// Completions scheduled while handling the returned events are not included; use
    /// [`Scheduler::pop_due`] in a loop when handlers schedule follow-up work.
    pub fn advance(&mut self, by: Duration) -> Vec<E> {
        let until = self.now + by;
        let mut fired = Vec::new();
        while let Some(event) = self.pop_due(until) {
            fired.push(event);
        }

        fired
    }
}
