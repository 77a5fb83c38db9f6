//! Welcome screen shown after loading, until the visitor enters.

use std::time::{Duration, Instant};

use crate::overlay::fade;
use crate::shell::timer::TimerQueue;

pub const TITLE: &str = "A Universe Made for You";
pub const SUBTITLE: &str = "a private world of friendship";
pub const BODY: &str = "A whole universe designed just for you.\n\
Every star tells a memory, and every planet turns around you ⭐";
pub const BUTTON: &str = "Enter the universe ✨";
pub const FOOTNOTE: &str = "TAP TO ENTER YOUR UNIVERSE";

const FADE_IN: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WelcomeEvent {
    ExitDone,
}

pub struct WelcomeScreen {
    mounted_at: Instant,
    exit: Duration,
    exiting_since: Option<Instant>,
    entered: bool,
    timers: TimerQueue<WelcomeEvent>,
}

impl WelcomeScreen {
    pub fn new(now: Instant, exit: Duration) -> Self {
        Self {
            mounted_at: now,
            exit,
            exiting_since: None,
            entered: false,
            timers: TimerQueue::new(),
        }
    }

    pub fn is_exiting(&self) -> bool {
        self.exiting_since.is_some()
    }

    /// Start the exit transition. Ignored once already exiting.
    pub fn begin_exit(&mut self, now: Instant) -> bool {
        if self.exiting_since.is_some() {
            return false;
        }
        self.exiting_since = Some(now);
        self.timers.after(now, self.exit, WelcomeEvent::ExitDone);
        true
    }

    /// True exactly once, when the exit transition has finished.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut fired = false;
        for event in self.timers.poll(now) {
            match event {
                WelcomeEvent::ExitDone if !self.entered => {
                    self.entered = true;
                    fired = true;
                }
                WelcomeEvent::ExitDone => {}
            }
        }
        fired
    }

    pub fn opacity(&self, now: Instant) -> f32 {
        match self.exiting_since {
            Some(since) => 1.0 - fade(now, since, self.exit),
            None => fade(now, self.mounted_at, FADE_IN),
        }
    }

    /// Zoom applied while fading: grows slightly on exit.
    pub fn scale(&self, now: Instant) -> f32 {
        match self.exiting_since {
            Some(since) => 1.0 + 0.1 * fade(now, since, self.exit),
            None => 0.95 + 0.05 * fade(now, self.mounted_at, FADE_IN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_reported_once_after_exit() {
        let now = Instant::now();
        let mut w = WelcomeScreen::new(now, Duration::from_millis(1500));
        assert!(!w.poll(now + Duration::from_secs(5)));
        assert!(w.begin_exit(now));
        assert!(!w.begin_exit(now));
        assert!(!w.poll(now + Duration::from_millis(1000)));
        assert!(w.poll(now + Duration::from_millis(1500)));
        assert!(!w.poll(now + Duration::from_secs(10)));
    }

    #[test]
    fn fades_in_then_out() {
        let now = Instant::now();
        let mut w = WelcomeScreen::new(now, Duration::from_millis(1500));
        assert_eq!(w.opacity(now), 0.0);
        assert_eq!(w.opacity(now + Duration::from_secs(2)), 1.0);
        let exit = now + Duration::from_secs(3);
        w.begin_exit(exit);
        assert_eq!(w.opacity(exit + Duration::from_millis(1500)), 0.0);
    }
}
