//! Application shell: the top-level mode machine.
//!
//! ```text
//! Loading ──(delay)──▶ Welcome ──enter()──▶ Entered
//! ```
//!
//! The memory modal and the secret reveal are independent flags that can
//! only be raised while `Entered`. Music starts on `enter()` and never
//! before.

pub mod timer;

use std::time::{Duration, Instant};

use crate::content::Memory;
use crate::scene::UniverseAction;

use timer::TimerQueue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Loading,
    Welcome,
    Entered,
}

/// Overlay state orthogonal to the mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlays {
    pub selected_memory: Option<Memory>,
    pub secret_shown: bool,
    pub music_started: bool,
}

/// Every delay and fade used by the shell and its overlays.
#[derive(Debug, Clone)]
pub struct ShellTimings {
    /// Post-mount delay before the welcome screen.
    pub loading: Duration,
    pub welcome_exit: Duration,
    pub modal_fade: Duration,
    /// Reveal phases 1, 2 and 3, measured from the reveal's own mount.
    pub reveal_phases: [Duration; 3],
    pub reveal_fade: Duration,
    pub day_counter_delay: Duration,
    pub hint_visible: Duration,
    pub hint_fade: Duration,
}

impl Default for ShellTimings {
    fn default() -> Self {
        Self {
            loading: Duration::from_millis(1500),
            welcome_exit: Duration::from_millis(1500),
            modal_fade: Duration::from_millis(500),
            reveal_phases: [
                Duration::from_millis(1500),
                Duration::from_millis(3500),
                Duration::from_millis(6500),
            ],
            reveal_fade: Duration::from_millis(800),
            day_counter_delay: Duration::from_millis(500),
            hint_visible: Duration::from_millis(7000),
            hint_fade: Duration::from_millis(1000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellEvent {
    LoadingDone,
}

pub struct AppShell {
    mode: Mode,
    overlays: Overlays,
    timings: ShellTimings,
    timers: TimerQueue<ShellEvent>,
}

impl AppShell {
    /// Mount the shell at `now`; the loading delay starts here.
    pub fn new(now: Instant, timings: ShellTimings) -> Self {
        let mut timers = TimerQueue::new();
        timers.after(now, timings.loading, ShellEvent::LoadingDone);
        Self {
            mode: Mode::Loading,
            overlays: Overlays::default(),
            timings,
            timers,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn overlays(&self) -> &Overlays {
        &self.overlays
    }

    pub fn timings(&self) -> &ShellTimings {
        &self.timings
    }

    /// Run due timers.
    pub fn poll(&mut self, now: Instant) {
        for event in self.timers.poll(now) {
            match event {
                ShellEvent::LoadingDone => {
                    if self.mode == Mode::Loading {
                        log::info!("loading finished");
                        self.mode = Mode::Welcome;
                    }
                }
            }
        }
    }

    /// Leave the welcome screen. Starts the music. No-op in other modes.
    pub fn enter(&mut self) -> bool {
        if self.mode != Mode::Welcome {
            log::debug!("enter() ignored in {:?}", self.mode);
            return false;
        }
        self.mode = Mode::Entered;
        self.overlays.music_started = true;
        log::info!("entered the universe");
        true
    }

    /// Open (or replace) the memory modal.
    pub fn select_memory(&mut self, memory: Memory) -> bool {
        if self.mode != Mode::Entered {
            return false;
        }
        if let Some(prev) = &self.overlays.selected_memory {
            log::debug!("memory {} replaced by {}", prev.id, memory.id);
        }
        self.overlays.selected_memory = Some(memory);
        true
    }

    pub fn close_memory(&mut self) {
        self.overlays.selected_memory = None;
    }

    pub fn show_secret(&mut self) -> bool {
        if self.mode != Mode::Entered {
            return false;
        }
        self.overlays.secret_shown = true;
        true
    }

    pub fn close_secret(&mut self) {
        self.overlays.secret_shown = false;
    }

    /// Route a scene action to the matching overlay.
    pub fn handle(&mut self, action: UniverseAction) -> bool {
        match action {
            UniverseAction::SelectMemory(memory) => self.select_memory(memory),
            UniverseAction::ActivateGateway => self.show_secret(),
        }
    }

    /// True when pointer input should reach the 3D scene.
    pub fn scene_interactive(&self) -> bool {
        self.mode == Mode::Entered
            && self.overlays.selected_memory.is_none()
            && !self.overlays.secret_shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    fn shell() -> (AppShell, Instant) {
        let now = Instant::now();
        (AppShell::new(now, ShellTimings::default()), now)
    }

    fn entered() -> AppShell {
        let (mut s, now) = shell();
        s.poll(now + Duration::from_millis(1500));
        s.enter();
        s
    }

    #[test]
    fn loading_then_welcome() {
        let (mut s, now) = shell();
        s.poll(now + Duration::from_millis(1499));
        assert_eq!(s.mode(), Mode::Loading);
        s.poll(now + Duration::from_millis(1500));
        assert_eq!(s.mode(), Mode::Welcome);
        s.poll(now + Duration::from_secs(10));
        assert_eq!(s.mode(), Mode::Welcome);
        assert!(!s.overlays().music_started);
    }

    #[test]
    fn enter_starts_music_only_from_welcome() {
        let (mut s, now) = shell();
        assert!(!s.enter());
        assert_eq!(s.mode(), Mode::Loading);
        assert!(!s.overlays().music_started);
        s.poll(now + Duration::from_secs(2));
        assert!(s.enter());
        assert_eq!(s.mode(), Mode::Entered);
        assert!(s.overlays().music_started);
    }

    #[test]
    fn overlays_require_entered() {
        let (mut s, _) = shell();
        let m = content::MEMORIES[0];
        assert!(!s.select_memory(m));
        assert!(!s.show_secret());
        assert_eq!(s.overlays(), &Overlays::default());
    }

    #[test]
    fn second_memory_replaces_first() {
        let mut s = entered();
        s.handle(UniverseAction::SelectMemory(content::MEMORIES[0]));
        s.handle(UniverseAction::SelectMemory(content::MEMORIES[4]));
        assert_eq!(s.overlays().selected_memory.map(|m| m.id), Some(content::MEMORIES[4].id));
        assert!(!s.scene_interactive());
        s.close_memory();
        assert!(s.scene_interactive());
    }

    #[test]
    fn modal_and_reveal_coexist() {
        let mut s = entered();
        s.handle(UniverseAction::ActivateGateway);
        s.handle(UniverseAction::SelectMemory(content::MEMORIES[1]));
        assert!(s.overlays().secret_shown);
        assert!(s.overlays().selected_memory.is_some());
        s.close_secret();
        assert!(!s.overlays().secret_shown);
    }
}
