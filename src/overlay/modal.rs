//! Modal card for the selected memory.

use std::time::{Duration, Instant};

use crate::content::Memory;
use crate::overlay::fade;
use crate::shell::timer::TimerQueue;

pub const BUTTON: &str = "Back to the universe 🌌";
pub const SPARKLES: &str = "✨ 💫 ✨";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalEvent {
    FadeDone,
}

pub struct MemoryModal {
    memory: Memory,
    opened_at: Instant,
    fade: Duration,
    closing_since: Option<Instant>,
    closed: bool,
    timers: TimerQueue<ModalEvent>,
}

impl MemoryModal {
    pub fn new(memory: Memory, now: Instant, fade: Duration) -> Self {
        log::debug!("memory modal open: {}", memory.id);
        Self {
            memory,
            opened_at: now,
            fade,
            closing_since: None,
            closed: false,
            timers: TimerQueue::new(),
        }
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn formatted_date(&self) -> String {
        self.memory.formatted_date()
    }

    /// Swap in another memory. A pending close is abandoned; the same
    /// memory again changes nothing.
    pub fn replace(&mut self, memory: Memory) {
        if memory == self.memory {
            return;
        }
        self.memory = memory;
        self.closing_since = None;
        self.closed = false;
        self.timers.clear();
    }

    /// Start the fade-out. Ignored while already closing.
    pub fn close(&mut self, now: Instant) -> bool {
        if self.closing_since.is_some() || self.closed {
            return false;
        }
        self.closing_since = Some(now);
        self.timers.after(now, self.fade, ModalEvent::FadeDone);
        true
    }

    pub fn is_closing(&self) -> bool {
        self.closing_since.is_some()
    }

    /// True exactly once, when the fade-out has finished.
    pub fn poll(&mut self, now: Instant) -> bool {
        let done = self
            .timers
            .poll(now)
            .into_iter()
            .any(|e| e == ModalEvent::FadeDone);
        if done && !self.closed {
            self.closed = true;
            return true;
        }
        false
    }

    pub fn opacity(&self, now: Instant) -> f32 {
        match self.closing_since {
            Some(since) => 1.0 - fade(now, since, self.fade),
            None => fade(now, self.opened_at, self.fade),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MEMORIES;

    const FADE: Duration = Duration::from_millis(500);

    #[test]
    fn close_reports_once() {
        let now = Instant::now();
        let mut m = MemoryModal::new(MEMORIES[0], now, FADE);
        assert!(m.close(now));
        assert!(!m.close(now));
        assert!(!m.poll(now + Duration::from_millis(400)));
        assert!(m.poll(now + Duration::from_millis(500)));
        assert!(!m.poll(now + Duration::from_secs(5)));
    }

    #[test]
    fn replace_shows_only_the_new_memory() {
        let now = Instant::now();
        let mut m = MemoryModal::new(MEMORIES[0], now, FADE);
        m.replace(MEMORIES[6]);
        assert_eq!(m.memory().id, MEMORIES[6].id);
        assert_eq!(m.formatted_date(), MEMORIES[6].formatted_date());
    }

    #[test]
    fn replace_cancels_pending_close() {
        let now = Instant::now();
        let mut m = MemoryModal::new(MEMORIES[0], now, FADE);
        m.close(now);
        m.replace(MEMORIES[2]);
        assert!(!m.is_closing());
        assert!(!m.poll(now + Duration::from_secs(1)));
    }

    #[test]
    fn same_memory_keeps_the_fade_running() {
        let now = Instant::now();
        let mut m = MemoryModal::new(MEMORIES[0], now, FADE);
        m.close(now);
        m.replace(MEMORIES[0]);
        assert!(m.is_closing());
        assert!(m.poll(now + FADE));
    }
}
