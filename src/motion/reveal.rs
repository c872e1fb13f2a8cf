//! One-shot reveal state machine.
//!
//! A `Reveal` starts `Idle`. The first visibility sample at or above the
//! threshold moves it to `Activated`, remembering when that happened; it is
//! considered revealed once the configured delay has passed since then.
//! Nothing moves it back.

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealPhase {
    Idle,
    Activated { visible_at: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    delay_ms: u32,
    threshold: f64,
    phase: RevealPhase,
    detached: bool,
}

impl Reveal {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            threshold: config::REVEAL_THRESHOLD,
            phase: RevealPhase::Idle,
            detached: false,
        }
    }

    pub fn is_activated(&self) -> bool {
        matches!(self.phase, RevealPhase::Activated { .. })
    }

    /// Feeds one visibility sample taken at `now` (milliseconds).
    ///
    /// Returns the delay to wait before showing the content, only for the
    /// sample that activates the reveal. Every later call returns `None`.
    pub fn observe(&mut self, visible_fraction: f64, now: f64) -> Option<u32> {
        if self.detached || self.is_activated() {
            return None;
        }
        if visible_fraction < self.threshold {
            return None;
        }
        self.phase = RevealPhase::Activated { visible_at: now };
        Some(self.delay_ms)
    }

    /// Whether the content should be in its shown state at `now`.
    pub fn is_revealed(&self, now: f64) -> bool {
        match self.phase {
            RevealPhase::Idle => false,
            RevealPhase::Activated { visible_at } => now - visible_at >= f64::from(self.delay_ms),
        }
    }

    /// Milliseconds left until the content is due at `now`: `Some(0)` once
    /// it is revealed, `None` while idle or after detaching.
    pub fn due_in(&self, now: f64) -> Option<u32> {
        if self.detached {
            return None;
        }
        match self.phase {
            RevealPhase::Idle => None,
            RevealPhase::Activated { .. } if self.is_revealed(now) => Some(0),
            RevealPhase::Activated { visible_at } => {
                let left = f64::from(self.delay_ms) - (now - visible_at);
                Some(left.ceil().max(1.0) as u32)
            }
        }
    }

    /// Skips observation entirely and shows the content right away.
    /// Used when the host cannot observe visibility.
    pub fn force(&mut self, now: f64) {
        if !self.detached && !self.is_activated() {
            self.delay_ms = 0;
            self.phase = RevealPhase::Activated { visible_at: now };
        }
    }

    /// Called on unmount. Freezes the machine in whatever phase it is in.
    pub fn detach(&mut self) {
        self.detached = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_idle_below_threshold() {
        let mut reveal = Reveal::new(0);
        assert_eq!(reveal.observe(0.05, 10.0), None);
        assert_eq!(reveal.observe(0.0, 20.0), None);
        assert_eq!(reveal.phase, RevealPhase::Idle);
        assert!(!reveal.is_revealed(1_000_000.0));
    }

    #[test]
    fn activates_at_threshold() {
        let mut reveal = Reveal::new(0);
        assert_eq!(reveal.observe(0.1, 42.0), Some(0));
        assert_eq!(reveal.phase, RevealPhase::Activated { visible_at: 42.0 });
        assert!(reveal.is_revealed(42.0));
    }

    #[test]
    fn waits_for_delay_after_crossing() {
        for delay in [0u32, 1, 100, 250, 1500] {
            let mut reveal = Reveal::new(delay);
            let crossed_at = 500.0;
            assert_eq!(reveal.observe(0.6, crossed_at), Some(delay));

            if delay > 0 {
                assert!(!reveal.is_revealed(crossed_at));
                assert!(!reveal.is_revealed(crossed_at + f64::from(delay) - 0.5));
            }
            assert!(reveal.is_revealed(crossed_at + f64::from(delay)));
        }
    }

    #[test]
    fn activation_is_one_shot() {
        let mut reveal = Reveal::new(200);
        assert_eq!(reveal.observe(1.0, 100.0), Some(200));

        // Scrolled away and back again
        assert_eq!(reveal.observe(0.0, 400.0), None);
        assert_eq!(reveal.observe(1.0, 900.0), None);

        assert_eq!(reveal.phase, RevealPhase::Activated { visible_at: 100.0 });
        assert!(reveal.is_revealed(900.0));
    }

    #[test]
    fn detach_before_activation_freezes_state() {
        let mut reveal = Reveal::new(0);
        reveal.detach();

        assert_eq!(reveal.observe(1.0, 10.0), None);
        reveal.force(10.0);

        assert!(reveal.detached);
        assert_eq!(reveal.phase, RevealPhase::Idle);
        assert_eq!(reveal.due_in(10.0), None);
    }

    #[test]
    fn detach_after_activation_cancels_pending_show() {
        let mut reveal = Reveal::new(400);
        assert_eq!(reveal.observe(1.0, 0.0), Some(400));
        assert_eq!(reveal.due_in(100.0), Some(300));

        reveal.detach();
        assert_eq!(reveal.due_in(100.0), None);
        assert_eq!(reveal.due_in(1000.0), None);
    }

    #[test]
    fn due_in_never_reports_ready_before_delay() {
        for delay in [0u32, 1, 100, 250, 1500] {
            let mut reveal = Reveal::new(delay);
            assert_eq!(reveal.due_in(0.0), None);
            reveal.observe(0.5, 1000.25);

            let mut now = 1000.25;
            loop {
                match reveal.due_in(now) {
                    Some(0) => break,
                    Some(wait) => {
                        assert!(now - 1000.25 < f64::from(delay));
                        // A timer never fires early, so step by exactly the wait
                        now += f64::from(wait);
                    }
                    None => panic!("activated reveal reported idle"),
                }
            }
            assert!(now - 1000.25 >= f64::from(delay));
            assert!(reveal.is_revealed(now));
        }
    }

    #[test]
    fn due_in_rounds_partial_milliseconds_up() {
        let mut reveal = Reveal::new(100);
        reveal.observe(1.0, 0.0);
        assert_eq!(reveal.due_in(99.5), Some(1));
        assert_eq!(reveal.due_in(100.0), Some(0));
    }

    #[test]
    fn just_below_threshold_stays_idle() {
        let mut reveal = Reveal::new(0);
        assert_eq!(reveal.observe(config::REVEAL_THRESHOLD - 0.001, 0.0), None);
        assert_eq!(reveal.observe(config::REVEAL_THRESHOLD, 1.0), Some(0));
    }

    #[test]
    fn force_shows_immediately() {
        let mut reveal = Reveal::new(300);
        reveal.force(5.0);
        assert!(reveal.is_revealed(5.0));
        assert_eq!(reveal.due_in(5.0), Some(0));
        assert_eq!(reveal.observe(1.0, 6.0), None);
    }
}
