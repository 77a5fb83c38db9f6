//! Background music control.
//!
//! Playback itself is external: this tracks whether music has been started
//! by the shell and whether the visitor muted it.

pub const SOURCE_URL: &str = "https://www.youtube.com/embed/Zkm2_E1mfZQ?autoplay=1&loop=1&playlist=Zkm2_E1mfZQ&controls=0";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MusicPlayer {
    started: bool,
    muted: bool,
}

impl MusicPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin playback. Only the shell's `enter()` leads here.
    pub fn start(&mut self) {
        if !self.started {
            log::info!("music started: {}", SOURCE_URL);
            self.started = true;
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Toggle mute. No-op before the music started.
    pub fn toggle_mute(&mut self) -> bool {
        if self.started {
            self.muted = !self.muted;
            log::debug!("music muted: {}", self.muted);
        }
        self.muted
    }

    pub fn is_audible(&self) -> bool {
        self.started && !self.muted
    }

    /// Button glyph for the current state.
    pub fn icon(&self) -> &'static str {
        if self.muted {
            "🔇"
        } else {
            "🎵"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_until_started() {
        let mut m = MusicPlayer::new();
        assert!(!m.toggle_mute());
        assert!(!m.is_audible());
        m.start();
        assert!(m.is_audible());
        assert!(m.toggle_mute());
        assert!(!m.is_audible());
        assert_eq!(m.icon(), "🔇");
    }
}
