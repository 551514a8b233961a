//! One-shot timers requested by screens
//!
//! Screens never sleep. A handler that wants to run again later returns a
//! [`TimerRequest`]; the shell arms it here and delivers the matching
//! [`AppEvent::Timer`](crate::app::AppEvent::Timer) once its deadline passes.
//! A single timer is never cancelled: one that outlives the state it was
//! meant for is delivered anyway and the screen ignores it. The shell clears
//! the whole queue when it swaps screens, so a timer only ever reaches the
//! screen instance that asked for it.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;
use tokio::time::Instant;

/// Kinds of timer a screen can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Advance the coin animation by one frame
    AnimationTick,
    /// Check whether the shown result has been held long enough to re-flip
    AutoReplayCheck,
}

/// Request to deliver `kind` after `delay`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub kind: TimerKind,
    pub delay: Duration,
}

impl TimerRequest {
    pub fn new(kind: TimerKind, delay: Duration) -> Self {
        Self { kind, delay }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ArmedTimer {
    deadline: Instant,
    seq: u64,
    kind: TimerKind,
}

// Min-heap on (deadline, seq) so equal deadlines fire in arming order
impl Ord for ArmedTimer {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for ArmedTimer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pending timers ordered by deadline
#[derive(Debug, Default)]
pub struct TimerQueue {
    heap: BinaryHeap<ArmedTimer>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a timer relative to `now`
    pub fn arm(&mut self, request: TimerRequest, now: Instant) {
        let timer = ArmedTimer {
            deadline: now + request.delay,
            seq: self.next_seq,
            kind: request.kind,
        };
        self.next_seq += 1;
        self.heap.push(timer);
    }

    /// Earliest pending deadline, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.heap.peek().map(|t| t.deadline)
    }

    /// Remove and return the earliest timer due at `now`
    pub fn pop_due(&mut self, now: Instant) -> Option<TimerKind> {
        if self.heap.peek()?.deadline > now {
            return None;
        }
        self.heap.pop().map(|t| t.kind)
    }

    /// Drop every pending timer
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
