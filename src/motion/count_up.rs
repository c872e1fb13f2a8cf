use thiserror::Error;

use crate::config;

#[derive(Debug, Error, PartialEq)]
pub enum MotionError {
    #[error("count-up duration must be greater than zero")]
    ZeroDuration,
}

/// Exponential ease-out. `progress` is clamped to `[0, 1]` and the end point
/// is exact, since `1 - 2^-10` alone would stop just short of it.
pub fn ease_out_expo(progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    if progress >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * progress)
    }
}

/// Value shown `elapsed_ms` into an animation towards `target`.
pub fn value_at(target: u64, elapsed_ms: f64, duration_ms: u32) -> u64 {
    let progress = (elapsed_ms / f64::from(duration_ms.max(1))).min(1.0);
    if progress >= 1.0 {
        return target;
    }
    let value = (ease_out_expo(progress) * target as f64).floor() as u64;
    value.min(target)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CountPhase {
    Idle,
    /// `origin` is the timestamp of the first frame, unknown until it runs.
    Running { origin: Option<f64> },
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStep {
    pub value: u64,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: u64,
    duration_ms: u32,
    threshold: f64,
    current: u64,
    phase: CountPhase,
    cancelled: bool,
}

impl CountUp {
    pub fn new(target: u64, duration_ms: u32) -> Result<Self, MotionError> {
        if duration_ms == 0 {
            return Err(MotionError::ZeroDuration);
        }
        Ok(Self {
            target,
            duration_ms,
            threshold: config::COUNT_UP_THRESHOLD,
            current: 0,
            phase: CountPhase::Idle,
            cancelled: false,
        })
    }

    /// A counter that already shows `target` and never animates. Stands in
    /// when no valid animation can be built.
    pub fn finished(target: u64) -> Self {
        Self {
            target,
            duration_ms: config::COUNT_UP_DURATION_MS,
            threshold: config::COUNT_UP_THRESHOLD,
            current: target,
            phase: CountPhase::Settled,
            cancelled: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn has_started(&self) -> bool {
        !matches!(self.phase, CountPhase::Idle)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Feeds one visibility sample. Returns `true` only when this sample
    /// starts the animation and frames need to be scheduled for it.
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        if self.cancelled || self.has_started() || visible_fraction < self.threshold {
            return false;
        }
        if self.target == 0 {
            self.phase = CountPhase::Settled;
            return false;
        }
        self.phase = CountPhase::Running { origin: None };
        true
    }

    /// Advances to the frame at `timestamp` (ms, monotonic).
    pub fn advance(&mut self, timestamp: f64) -> FrameStep {
        let origin = match self.phase {
            _ if self.cancelled => return self.step(true),
            CountPhase::Idle | CountPhase::Settled => return self.step(true),
            CountPhase::Running { origin: Some(origin) } => origin,
            CountPhase::Running { origin: None } => {
                self.phase = CountPhase::Running { origin: Some(timestamp) };
                timestamp
            }
        };

        let elapsed = (timestamp - origin).max(0.0);
        // Frames never move the number backwards
        self.current = self.current.max(value_at(self.target, elapsed, self.duration_ms));

        let done = elapsed >= f64::from(self.duration_ms);
        if done {
            self.current = self.target;
            self.phase = CountPhase::Settled;
        }
        self.step(done)
    }

    /// Jumps straight to the target. Used when the host cannot observe
    /// visibility.
    pub fn settle(&mut self) {
        if !self.cancelled {
            self.current = self.target;
            self.phase = CountPhase::Settled;
        }
    }

    /// Called on unmount; a frame that is still queued becomes a no-op.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn display(&self, suffix: &str) -> String {
        format!("{}{}", self.current, suffix)
    }

    fn step(&self, done: bool) -> FrameStep {
        FrameStep {
            value: self.current,
            done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(target: u64, duration_ms: u32) -> CountUp {
        let mut count = CountUp::new(target, duration_ms).unwrap();
        assert!(count.observe(1.0));
        count
    }

    #[test]
    fn rejects_zero_duration() {
        assert_eq!(CountUp::new(10, 0), Err(MotionError::ZeroDuration));
    }

    #[test]
    fn easing_end_points() {
        assert_eq!(ease_out_expo(0.0), 0.0);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert_eq!(ease_out_expo(3.0), 1.0);
        assert!(ease_out_expo(0.999) < 1.0);
    }

    #[test]
    fn zero_target_shows_zero_immediately() {
        for duration in [1u32, 2000, 60_000] {
            let mut count = CountUp::new(0, duration).unwrap();
            assert_eq!(count.display("%"), "0%");
            assert!(!count.observe(1.0));
            assert_eq!(count.phase, CountPhase::Settled);
            assert_eq!(count.display(""), "0");
        }
    }

    #[test]
    fn starts_only_at_half_visibility() {
        let mut count = CountUp::new(300, 2000).unwrap();
        assert!(!count.observe(0.49));
        assert!(!count.has_started());
        assert!(count.observe(0.5));
        assert!(count.has_started());
    }

    #[test]
    fn reaches_exact_target_at_duration() {
        let mut count = started(300, 2000);

        let first = count.advance(1000.0);
        assert_eq!(first, FrameStep { value: 0, done: false });

        let last = count.advance(3000.0);
        assert_eq!(last, FrameStep { value: 300, done: true });
        assert_eq!(count.display(""), "300");
    }

    #[test]
    fn midway_value_follows_easing() {
        let mut count = started(300, 2000);
        count.advance(0.0);
        // p = 0.5 -> 1 - 2^-5 = 0.96875 -> 290.625
        assert_eq!(count.advance(1000.0).value, 290);
        assert_eq!(value_at(300, 1000.0, 2000), 290);
    }

    #[test]
    fn values_never_decrease() {
        for target in [0u64, 1, 7, 60, 250, 300, 1_000_000] {
            let mut count = CountUp::new(target, 2000).unwrap();
            count.observe(1.0);

            let mut last = 0;
            let mut ts = 16.0;
            loop {
                let step = count.advance(ts);
                assert!(step.value >= last, "target {target} went from {last} to {}", step.value);
                assert!(step.value <= target);
                last = step.value;
                if step.done {
                    break;
                }
                ts += 16.7;
            }
            assert_eq!(last, target);
        }
    }

    #[test]
    fn replay_is_ignored() {
        let mut count = started(60, 500);
        count.advance(0.0);
        count.advance(600.0);
        assert_eq!(count.current(), 60);

        assert!(!count.observe(0.0));
        assert!(!count.observe(1.0));
        assert_eq!(count.current(), 60);
        assert_eq!(count.phase, CountPhase::Settled);
    }

    #[test]
    fn cancel_before_start_freezes_state() {
        let mut count = CountUp::new(250, 2000).unwrap();
        count.cancel();

        assert!(!count.observe(1.0));
        assert_eq!(count.advance(5000.0), FrameStep { value: 0, done: true });
        count.settle();

        assert_eq!(count.current(), 0);
        assert_eq!(count.phase, CountPhase::Idle);
    }

    #[test]
    fn cancel_mid_animation_stops_frames() {
        let mut count = started(250, 2000);
        count.advance(0.0);
        let mid = count.advance(500.0).value;
        count.cancel();

        assert_eq!(count.advance(2500.0), FrameStep { value: mid, done: true });
    }

    #[test]
    fn settle_jumps_to_target() {
        let mut count = CountUp::new(15, 2000).unwrap();
        count.settle();
        assert_eq!(count.display(" replies"), "15 replies");
    }

    #[test]
    fn fresh_counter_displays_zero_with_suffix() {
        let count = CountUp::new(250, 2000).unwrap();
        assert_eq!(count.display(" contacts"), "0 contacts");
    }

    #[test]
    fn finished_counter_shows_target_and_ignores_frames() {
        let mut count = CountUp::finished(10);
        assert_eq!(count.display(" meetings"), "10 meetings");
        assert!(count.has_started());

        assert!(!count.observe(1.0));
        assert_eq!(count.advance(50.0), FrameStep { value: 10, done: true });
        assert_eq!(count.display(""), "10");
    }
}
