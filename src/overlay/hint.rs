//! Usage hint shown once after entering, then gone for good.

use std::time::{Duration, Instant};

use crate::overlay::fade;
use crate::shell::timer::TimerQueue;

pub const PRIMARY: &str = "💫 Tap the stars to discover the memories 💫";
pub const SECONDARY: &str = "Drag to rotate • scroll or pinch to zoom";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintState {
    Visible,
    Fading(Instant),
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HintEvent {
    StartFade,
    Hide,
}

pub struct HintOverlay {
    state: HintState,
    fade: Duration,
    timers: TimerQueue<HintEvent>,
}

impl HintOverlay {
    pub fn new(now: Instant, visible: Duration, fade: Duration) -> Self {
        let mut timers = TimerQueue::new();
        timers.after(now, visible, HintEvent::StartFade);
        Self {
            state: HintState::Visible,
            fade,
            timers,
        }
    }

    pub fn state(&self) -> HintState {
        self.state
    }

    pub fn poll(&mut self, now: Instant) {
        for event in self.timers.poll(now) {
            match (event, self.state) {
                (HintEvent::StartFade, HintState::Visible) => {
                    self.state = HintState::Fading(now);
                    self.timers.after(now, self.fade, HintEvent::Hide);
                }
                (HintEvent::Hide, HintState::Fading(_)) => self.state = HintState::Hidden,
                _ => {}
            }
        }
    }

    pub fn opacity(&self, now: Instant) -> f32 {
        match self.state {
            HintState::Visible => 1.0,
            HintState::Fading(since) => 1.0 - fade(now, since, self.fade),
            HintState::Hidden => 0.0,
        }
    }
}
