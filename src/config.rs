use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Fraction of a Reveal container that must be on screen before it activates.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Length of the fade/slide transition once a Reveal activates.
pub const REVEAL_TRANSITION_MS: u32 = 1000;
/// Downward offset a Reveal starts from.
pub const REVEAL_OFFSET: &str = "3rem";

/// Fraction of a CountUp number that must be on screen before it starts.
pub const COUNT_UP_THRESHOLD: f64 = 0.5;
pub const COUNT_UP_DURATION_MS: u32 = 2000;

// Stagger between consecutive items of a revealed list.
pub const TACTIC_STAGGER_MS: u32 = 100;
pub const ROADMAP_STAGGER_MS: u32 = 150;
