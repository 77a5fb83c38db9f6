//! The secret reveal: a four-phase message sequence behind the portal.
//!
//! Phases advance 0 → 1 → 2 → 3 on fixed delays from the reveal's own
//! mount, one step at a time. Closing fades out and reports once.

use std::time::{Duration, Instant};

use crate::overlay::fade;
use crate::shell::timer::TimerQueue;

pub const LAST_PHASE: u8 = 3;

pub const QUESTION: &str = "Do you know why I made this universe, Ghufran?";
pub const HEADLINE: [&str; 2] = [
    "All of this universe…",
    "and I never found a truer friend than you",
];
pub const CLOSING: [&str; 2] = ["Ghufran… you are not just my friend", "you are the family I chose 💙"];
pub const SIGNATURE: &str = "from your friend Bilal ⭐";
pub const BUTTON: &str = "Friends forever ♾️⭐";

const FADE_IN: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RevealEvent {
    Phase(u8),
    FadeDone,
}

/// Something the owner should react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealSignal {
    Phase(u8),
    Closed,
}

pub struct SecretReveal {
    mounted_at: Instant,
    phase: u8,
    fade: Duration,
    closing_since: Option<Instant>,
    closed: bool,
    timers: TimerQueue<RevealEvent>,
}

impl SecretReveal {
    pub fn new(now: Instant, phases: [Duration; 3], fade: Duration) -> Self {
        let mut timers = TimerQueue::new();
        for (i, delay) in phases.iter().enumerate() {
            timers.after(now, *delay, RevealEvent::Phase(i as u8 + 1));
        }
        log::debug!("secret reveal mounted");
        Self {
            mounted_at: now,
            phase: 0,
            fade,
            closing_since: None,
            closed: false,
            timers,
        }
    }

    pub fn phase(&self) -> u8 {
        self.phase
    }

    /// The close button appears with the last phase.
    pub fn close_button_visible(&self) -> bool {
        self.phase >= LAST_PHASE && self.closing_since.is_none()
    }

    /// Start the fade-out. Accepted at any phase, once.
    pub fn close(&mut self, now: Instant) -> bool {
        if self.closing_since.is_some() || self.closed {
            return false;
        }
        self.closing_since = Some(now);
        self.timers.clear();
        self.timers.after(now, self.fade, RevealEvent::FadeDone);
        true
    }

    /// Apply due timers. Each phase step and the close are reported once,
    /// in order.
    pub fn poll(&mut self, now: Instant) -> Vec<RevealSignal> {
        let mut signals = Vec::new();
        for event in self.timers.poll(now) {
            match event {
                RevealEvent::Phase(p) if p == self.phase + 1 => {
                    self.phase = p;
                    signals.push(RevealSignal::Phase(p));
                }
                RevealEvent::Phase(p) => {
                    log::warn!("reveal phase {} out of order at {}", p, self.phase);
                }
                RevealEvent::FadeDone if !self.closed => {
                    self.closed = true;
                    signals.push(RevealSignal::Closed);
                }
                RevealEvent::FadeDone => {}
            }
        }
        signals
    }

    pub fn opacity(&self, now: Instant) -> f32 {
        match self.closing_since {
            Some(since) => 1.0 - fade(now, since, self.fade),
            None => fade(now, self.mounted_at, FADE_IN),
        }
    }
}
