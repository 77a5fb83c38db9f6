//! Quote banner at the top of the screen.

use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::overlay::fade;
use crate::shell::timer::TimerQueue;

const FADE_IN: Duration = Duration::from_millis(1000);

pub struct DayCounter {
    quote: &'static str,
    shown_at: Option<Instant>,
    timers: TimerQueue<()>,
}

impl DayCounter {
    /// Pick a quote now; become visible after `delay`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, quotes: &[&'static str], now: Instant, delay: Duration) -> Self {
        let quote = quotes.choose(rng).copied().unwrap_or_default();
        let mut timers = TimerQueue::new();
        timers.after(now, delay, ());
        Self {
            quote,
            shown_at: None,
            timers,
        }
    }

    pub fn quote(&self) -> &'static str {
        self.quote
    }

    pub fn poll(&mut self, now: Instant) {
        if !self.timers.poll(now).is_empty() && self.shown_at.is_none() {
            self.shown_at = Some(now);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.shown_at.is_some()
    }

    pub fn opacity(&self, now: Instant) -> f32 {
        self.shown_at.map_or(0.0, |since| fade(now, since, FADE_IN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::QUOTES;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shows_after_delay_with_a_known_quote() {
        let now = Instant::now();
        let mut rng = StdRng::seed_from_u64(42);
        let mut d = DayCounter::new(&mut rng, QUOTES, now, Duration::from_millis(500));
        assert!(QUOTES.contains(&d.quote()));
        d.poll(now + Duration::from_millis(499));
        assert!(!d.is_visible());
        d.poll(now + Duration::from_millis(500));
        assert!(d.is_visible());
    }

    #[test]
    fn empty_quote_list_is_harmless() {
        let now = Instant::now();
        let d = DayCounter::new(&mut rand::thread_rng(), &[], now, Duration::ZERO);
        assert_eq!(d.quote(), "");
    }
}
