//! 2D overlays drawn over the scene.
//!
//! Each overlay owns its own timers and is mounted or unmounted by
//! [`OverlayStack::sync`] following the shell state. Timers never outlive
//! the overlay that scheduled them.

pub mod day_counter;
pub mod hint;
pub mod modal;
pub mod music;
pub mod reveal;
pub mod welcome;

use std::time::{Duration, Instant};

use rand::Rng;

use crate::content::QUOTES;
use crate::shell::{AppShell, Mode, ShellTimings};

use day_counter::DayCounter;
use hint::HintOverlay;
use modal::MemoryModal;
use music::MusicPlayer;
use reveal::{RevealSignal, SecretReveal};
use welcome::WelcomeScreen;

/// Linear 0..1 progress of a fade that started at `since`.
pub fn fade(now: Instant, since: Instant, length: Duration) -> f32 {
    if length.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(since).as_secs_f32();
    (elapsed / length.as_secs_f32()).clamp(0.0, 1.0)
}

/// What the shell must do after an overlay finished a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlaySignal {
    /// Welcome exit finished; call `AppShell::enter`.
    Enter,
    ModalClosed,
    RevealPhase(u8),
    RevealClosed,
}

#[derive(Default)]
pub struct OverlayStack {
    pub welcome: Option<WelcomeScreen>,
    pub modal: Option<MemoryModal>,
    pub reveal: Option<SecretReveal>,
    pub day_counter: Option<DayCounter>,
    pub hint: Option<HintOverlay>,
    pub music: MusicPlayer,
}

impl OverlayStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount, replace or unmount overlays to match the shell.
    pub fn sync<R: Rng + ?Sized>(&mut self, shell: &AppShell, now: Instant, rng: &mut R) {
        let timings: &ShellTimings = shell.timings();
        match shell.mode() {
            Mode::Loading => {}
            Mode::Welcome => {
                if self.welcome.is_none() {
                    self.welcome = Some(WelcomeScreen::new(now, timings.welcome_exit));
                }
            }
            Mode::Entered => {
                self.welcome = None;
                if self.day_counter.is_none() {
                    self.day_counter = Some(DayCounter::new(rng, QUOTES, now, timings.day_counter_delay));
                }
                if self.hint.is_none() {
                    self.hint = Some(HintOverlay::new(now, timings.hint_visible, timings.hint_fade));
                }
            }
        }

        if shell.overlays().music_started {
            self.music.start();
        }

        match (shell.overlays().selected_memory, self.modal.as_mut()) {
            (Some(memory), None) => {
                self.modal = Some(MemoryModal::new(memory, now, timings.modal_fade));
            }
            (Some(memory), Some(modal)) if modal.memory().id != memory.id => {
                modal.replace(memory);
            }
            (None, Some(_)) => self.modal = None,
            _ => {}
        }

        match (shell.overlays().secret_shown, self.reveal.is_some()) {
            (true, false) => {
                self.reveal = Some(SecretReveal::new(now, timings.reveal_phases, timings.reveal_fade));
            }
            (false, true) => self.reveal = None,
            _ => {}
        }
    }

    /// Run every mounted overlay's timers.
    pub fn poll(&mut self, now: Instant) -> Vec<OverlaySignal> {
        let mut signals = Vec::new();
        if let Some(welcome) = self.welcome.as_mut() {
            if welcome.poll(now) {
                signals.push(OverlaySignal::Enter);
            }
        }
        if let Some(modal) = self.modal.as_mut() {
            if modal.poll(now) {
                signals.push(OverlaySignal::ModalClosed);
            }
        }
        if let Some(reveal) = self.reveal.as_mut() {
            signals.extend(reveal.poll(now).into_iter().map(|s| match s {
                RevealSignal::Phase(p) => OverlaySignal::RevealPhase(p),
                RevealSignal::Closed => OverlaySignal::RevealClosed,
            }));
        }
        if let Some(counter) = self.day_counter.as_mut() {
            counter.poll(now);
        }
        if let Some(hint) = self.hint.as_mut() {
            hint.poll(now);
        }
        signals
    }

    /// Apply signals to the shell, then re-sync.
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        shell: &mut AppShell,
        signals: &[OverlaySignal],
        now: Instant,
        rng: &mut R,
    ) {
        for signal in signals {
            match signal {
                OverlaySignal::Enter => {
                    shell.enter();
                }
                OverlaySignal::ModalClosed => shell.close_memory(),
                OverlaySignal::RevealClosed => shell.close_secret(),
                OverlaySignal::RevealPhase(p) => log::debug!("reveal phase {}", p),
            }
        }
        self.sync(shell, now, rng);
    }

    /// Full-screen overlays that block the scene from pointer input.
    pub fn captures_pointer(&self) -> bool {
        self.welcome.is_some() || self.modal.is_some() || self.reveal.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MEMORIES;
    use crate::scene::UniverseAction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Drive shell and stack together like the app does each frame.
    fn tick(shell: &mut AppShell, stack: &mut OverlayStack, now: Instant, rng: &mut StdRng) -> Vec<OverlaySignal> {
        shell.poll(now);
        stack.sync(shell, now, rng);
        let signals = stack.poll(now);
        stack.apply(shell, &signals, now, rng);
        signals
    }

    fn entered(start: Instant, rng: &mut StdRng) -> (AppShell, OverlayStack, Instant) {
        let mut shell = AppShell::new(start, ShellTimings::default());
        let mut stack = OverlayStack::new();
        let t1 = start + ms(1500);
        tick(&mut shell, &mut stack, t1, rng);
        if let Some(w) = stack.welcome.as_mut() {
            w.begin_exit(t1);
        }
        let t2 = t1 + ms(1500);
        let signals = tick(&mut shell, &mut stack, t2, rng);
        assert_eq!(signals, vec![OverlaySignal::Enter]);
        (shell, stack, t2)
    }

    #[test]
    fn fade_progress_is_clamped() {
        let now = Instant::now();
        assert_eq!(fade(now, now, ms(100)), 0.0);
        assert_eq!(fade(now + ms(50), now, ms(100)), 0.5);
        assert_eq!(fade(now + ms(500), now, ms(100)), 1.0);
        assert_eq!(fade(now, now + ms(10), ms(100)), 0.0);
        assert_eq!(fade(now, now, Duration::ZERO), 1.0);
    }

    #[test]
    fn welcome_flow_enters_and_starts_music() {
        let mut rng = StdRng::seed_from_u64(1);
        let (shell, stack, _) = entered(Instant::now(), &mut rng);
        assert_eq!(shell.mode(), Mode::Entered);
        assert!(stack.welcome.is_none());
        assert!(stack.music.is_started());
        assert!(stack.day_counter.is_some());
        assert!(stack.hint.is_some());
        assert!(!stack.captures_pointer());
    }

    #[test]
    fn modal_close_returns_scene_control() {
        let mut rng = StdRng::seed_from_u64(2);
        let (mut shell, mut stack, now) = entered(Instant::now(), &mut rng);
        shell.handle(UniverseAction::SelectMemory(MEMORIES[6]));
        tick(&mut shell, &mut stack, now, &mut rng);
        assert!(stack.captures_pointer());
        assert_eq!(stack.modal.as_ref().map(|m| m.memory().id), Some(7));

        if let Some(m) = stack.modal.as_mut() {
            m.close(now);
        }
        let signals = tick(&mut shell, &mut stack, now + ms(500), &mut rng);
        assert_eq!(signals, vec![OverlaySignal::ModalClosed]);
        assert!(stack.modal.is_none());
        assert!(shell.scene_interactive());
    }

    #[test]
    fn modal_fade_survives_intermediate_frames() {
        let mut rng = StdRng::seed_from_u64(4);
        let (mut shell, mut stack, now) = entered(Instant::now(), &mut rng);
        shell.handle(UniverseAction::SelectMemory(MEMORIES[3]));
        tick(&mut shell, &mut stack, now, &mut rng);

        if let Some(m) = stack.modal.as_mut() {
            m.close(now);
        }
        let signals = tick(&mut shell, &mut stack, now + ms(16), &mut rng);
        assert!(signals.is_empty());
        assert_eq!(stack.modal.as_ref().map(|m| m.is_closing()), Some(true));

        let signals = tick(&mut shell, &mut stack, now + ms(5000), &mut rng);
        assert_eq!(signals, vec![OverlaySignal::ModalClosed]);
        assert!(stack.modal.is_none());
        assert!(shell.scene_interactive());
    }

    #[test]
    fn reveal_closes_once_and_reopens_fresh() {
        let mut rng = StdRng::seed_from_u64(3);
        let (mut shell, mut stack, now) = entered(Instant::now(), &mut rng);
        shell.handle(UniverseAction::ActivateGateway);
        tick(&mut shell, &mut stack, now, &mut rng);
        let signals = tick(&mut shell, &mut stack, now + ms(1500), &mut rng);
        assert_eq!(signals, vec![OverlaySignal::RevealPhase(1)]);

        if let Some(r) = stack.reveal.as_mut() {
            r.close(now + ms(1600));
        }
        let signals = tick(&mut shell, &mut stack, now + ms(10_000), &mut rng);
        assert_eq!(signals, vec![OverlaySignal::RevealClosed]);
        assert!(!shell.overlays().secret_shown);
        assert!(stack.reveal.is_none());

        let later = now + ms(20_000);
        shell.handle(UniverseAction::ActivateGateway);
        tick(&mut shell, &mut stack, later, &mut rng);
        assert_eq!(stack.reveal.as_ref().map(|r| r.phase()), Some(0));
    }
}
