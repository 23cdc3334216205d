//! A single animated move between two adjacent positions.

use web_time::{Duration, Instant};

use crate::easing::EasingFunction;
use crate::frame::Frame;

/// Executes one transition from a source frame to a target frame.
///
/// The runner holds defensive clones of both frames, so external
/// mutation of the sequence (or of a past frame a caller kept a handle
/// to) cannot retroactively corrupt an in-flight animation. The start
/// timestamp is stamped lazily by the first tick that observes the
/// runner, which keeps tests fully deterministic: progress is a pure
/// function of the timestamps the host passes in.
#[derive(Debug, Clone)]
pub struct TransitionRunner {
    /// Cloned source frame.
    from: Frame,
    /// Cloned target frame.
    to: Frame,
    /// Index the sequence settles at when this transition completes.
    target_idx: usize,
    /// Wall-clock duration of the transition.
    duration: Duration,
    /// Curve applied to raw progress before it reaches the sink.
    easing: EasingFunction,
    /// Stamped on the first tick.
    started: Option<Instant>,
}

impl TransitionRunner {
    /// Arm a transition toward `target_idx`.
    #[must_use]
    pub fn new(
        from: Frame,
        to: Frame,
        target_idx: usize,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            from,
            to,
            target_idx,
            duration,
            easing,
            started: None,
        }
    }

    /// The index this transition settles at.
    #[inline]
    #[must_use]
    pub const fn target_idx(&self) -> usize {
        self.target_idx
    }

    /// Cloned source frame.
    #[inline]
    #[must_use]
    pub const fn source(&self) -> &Frame {
        &self.from
    }

    /// Cloned target frame.
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Frame {
        &self.to
    }

    /// Stamp the start time if this is the first tick, then return raw
    /// progress in [0, 1]. A zero duration counts as already complete.
    pub fn progress(&mut self, now: Instant) -> f32 {
        let started = *self.started.get_or_insert(now);
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Map raw progress through this transition's easing curve.
    #[inline]
    #[must_use]
    pub fn eased(&self, raw_t: f32) -> f32 {
        self.easing.evaluate(raw_t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_runner(duration_ms: u64) -> TransitionRunner {
        TransitionRunner::new(
            Frame::default(),
            Frame::default(),
            1,
            Duration::from_millis(duration_ms),
            EasingFunction::Linear,
        )
    }

    #[test]
    fn test_progress_is_wall_clock_based() {
        let mut runner = make_runner(100);
        let start = Instant::now();

        assert!((runner.progress(start) - 0.0).abs() < 0.01);
        let mid = start + Duration::from_millis(50);
        assert!((runner.progress(mid) - 0.5).abs() < 0.01);
        let end = start + Duration::from_millis(100);
        assert!((runner.progress(end) - 1.0).abs() < 0.01);
        let past = start + Duration::from_millis(250);
        assert!((runner.progress(past) - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_first_tick_stamps_start() {
        let mut runner = make_runner(100);
        let armed_at = Instant::now();

        // The first observed tick is t=0 even if arming happened earlier.
        let first_tick = armed_at + Duration::from_millis(500);
        assert!((runner.progress(first_tick) - 0.0).abs() < 0.01);
        let later = first_tick + Duration::from_millis(50);
        assert!((runner.progress(later) - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut runner = make_runner(0);
        assert_eq!(runner.progress(Instant::now()), 1.0);
    }

    #[test]
    fn test_time_going_backwards_saturates() {
        let mut runner = make_runner(100);
        let start = Instant::now() + Duration::from_millis(100);
        let _ = runner.progress(start);

        let earlier = start - Duration::from_millis(50);
        assert_eq!(runner.progress(earlier), 0.0);
    }

    #[test]
    fn test_eased_applies_curve() {
        let runner = TransitionRunner::new(
            Frame::default(),
            Frame::default(),
            1,
            Duration::from_millis(100),
            EasingFunction::QuadraticIn,
        );
        assert_eq!(runner.eased(0.5), 0.25);
    }
}
