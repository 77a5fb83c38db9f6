//! One-shot deferred events, owned by whoever scheduled them.
//!
//! Timers carry plain data instead of callbacks: the owner polls the queue
//! with the current time and handles whatever is due. Dropping or clearing
//! the queue cancels everything still pending, so nothing can fire into an
//! owner that no longer exists.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending<E> {
    seq: u64,
    due: Instant,
    event: E,
}

#[derive(Debug, Clone)]
pub struct TimerQueue<E> {
    next_seq: u64,
    pending: Vec<Pending<E>>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self {
            next_seq: 0,
            pending: Vec::new(),
        }
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: Instant, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending { seq, due, event });
    }

    pub fn after(&mut self, now: Instant, delay: Duration, event: E) {
        self.schedule(now + delay, event);
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return every event due at `now`, earliest first. Events
    /// with the same deadline come out in scheduling order.
    pub fn poll(&mut self, now: Instant) -> Vec<E> {
        let (mut ready, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = waiting;
        ready.sort_by_key(|p| (p.due, p.seq));
        ready.into_iter().map(|p| p.event).collect()
    }
}
