//! The frame sequencer: sequence + position + playback state machine.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use web_time::{Duration, Instant};

use crate::easing::EasingFunction;
use crate::frame::Frame;

use super::sink::FrameSink;
use super::transition::TransitionRunner;

/// Floor for the per-transition duration. Guarantees a visible,
/// non-degenerate animation and keeps `t` well-defined.
pub const MIN_TRANSITION: Duration = Duration::from_millis(60);

/// Playback configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Wall-clock duration of one transition. Clamped to
    /// [`MIN_TRANSITION`] when applied.
    pub duration: Duration,
    /// Curve applied to raw progress before it reaches the sink.
    /// Linear hands the sink the raw wall-clock `t`.
    pub easing: EasingFunction,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(600),
            easing: EasingFunction::Linear,
        }
    }
}

/// Where `set_frames` positions the sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Goto {
    /// Jump to index 0.
    Start,
    /// Jump to the last index (0 when the sequence is empty).
    #[default]
    End,
}

/// A run of consecutive forward (or a single backward) transitions.
#[derive(Debug)]
struct Chain {
    runner: TransitionRunner,
    /// Last index this chain settles at.
    end_idx: usize,
    /// Whether ticks check the playing flag and stop early on pause.
    /// True only for `play`-driven chains; `next`/`prev`/`append` chains
    /// always run to completion.
    respect_pause: bool,
}

/// Explicit driver state. At most one chain is ever in flight; new
/// navigation while Animating is rejected and appends are queued, so
/// two chains can never race.
#[derive(Debug)]
enum Driver {
    Idle,
    Animating(Chain),
}

/// Frame sequencer and animation driver.
///
/// Owns an ordered sequence of [`Frame`]s, the current index, and the
/// playback state, and drives a [`FrameSink`] with settled frames and
/// interpolated in-between states. All progress happens cooperatively:
/// the host calls [`tick`](Self::tick) once per display refresh, and
/// every operation returns immediately after arming the driver.
pub struct Timeline<S: FrameSink> {
    sink: S,
    frames: Vec<Frame>,
    idx: usize,
    playing: bool,
    config: TimelineConfig,
    driver: Driver,
    /// Append batches received while a chain was in flight, processed in
    /// arrival order when the driver returns to Idle.
    pending_appends: VecDeque<Vec<Frame>>,
}

impl<S: FrameSink> Timeline<S> {
    /// Timeline with default playback configuration (600ms, linear).
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, TimelineConfig::default())
    }

    /// Timeline with a custom configuration. The duration is clamped to
    /// [`MIN_TRANSITION`].
    pub fn with_config(sink: S, mut config: TimelineConfig) -> Self {
        config.duration = config.duration.max(MIN_TRANSITION);
        Self {
            sink,
            frames: Vec::new(),
            idx: 0,
            playing: false,
            config,
            driver: Driver::Idle,
            pending_appends: VecDeque::new(),
        }
    }

    /// Number of frames in the sequence.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the sequence holds no frames.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Current position (0 when the sequence is empty).
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.idx
    }

    /// Whether a `play` run is in progress.
    #[inline]
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether a transition chain is in flight.
    #[inline]
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        matches!(self.driver, Driver::Animating(_))
    }

    /// Effective per-transition duration (after the floor clamp).
    #[inline]
    #[must_use]
    pub const fn transition_duration(&self) -> Duration {
        self.config.duration
    }

    /// Borrow the sink.
    #[inline]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutably borrow the sink.
    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Re-render the current position. Side effect only; renders the
    /// empty placeholder frame when the index has no frame.
    pub fn render(&mut self) {
        self.render_current();
    }

    /// Replace the entire sequence and jump to `goto` with an immediate
    /// render. This is the entry point for a fresh session: any in-flight
    /// chain is torn down and queued appends are dropped.
    pub fn set_frames(&mut self, frames: Vec<Frame>, goto: Goto) {
        self.driver = Driver::Idle;
        self.pending_appends.clear();
        self.playing = false;
        self.frames = frames;
        self.idx = match goto {
            Goto::Start => 0,
            Goto::End => self.frames.len().saturating_sub(1),
        };
        self.render_current();
    }

    /// Extend the sequence with one operation's steps and animate through
    /// every newly added position.
    ///
    /// When the sequence is non-empty, the batch's first element is the
    /// duplicate "before" snapshot and is dropped; into an empty sequence
    /// the whole batch is kept. The resulting chain ignores the pause
    /// flag — append-driven animation always plays to completion. While
    /// another chain is in flight the batch is queued and processed when
    /// the driver settles.
    pub fn append(&mut self, frames: Vec<Frame>) {
        if self.is_animating() {
            log::debug!(
                "append of {} frame(s) queued behind in-flight animation",
                frames.len()
            );
            self.pending_appends.push_back(frames);
            return;
        }
        self.process_append(frames);
    }

    /// Animate one step forward. Returns false at the last index, on an
    /// empty sequence, or while another animation is in flight.
    pub fn next(&mut self) -> bool {
        if self.is_animating() {
            log::debug!("next rejected: animation in flight");
            return false;
        }
        if self.idx + 1 >= self.frames.len() {
            return false;
        }
        self.start_chain(self.idx + 1, self.idx + 1, false);
        true
    }

    /// Animate one step backward. Returns false at index 0 or while
    /// another animation is in flight.
    pub fn prev(&mut self) -> bool {
        if self.is_animating() {
            log::debug!("prev rejected: animation in flight");
            return false;
        }
        if self.idx == 0 || self.frames.is_empty() {
            return false;
        }
        self.start_chain(self.idx - 1, self.idx - 1, false);
        true
    }

    /// Play forward one step at a time until the last index or `pause`.
    /// Returns false with fewer than 2 frames, at the last index, or
    /// while another animation is in flight.
    pub fn play(&mut self) -> bool {
        if self.is_animating() {
            log::debug!("play rejected: animation in flight");
            return false;
        }
        let Some(last) = self.frames.len().checked_sub(1) else {
            return false;
        };
        if self.frames.len() < 2 || self.idx >= last {
            return false;
        }
        self.playing = true;
        self.start_chain(self.idx + 1, last, true);
        if !self.is_animating() {
            self.playing = false;
        }
        true
    }

    /// Clear the playing flag. Takes effect on the next tick of a
    /// play-driven transition: `t` stops advancing, the index settles at
    /// the in-flight target, and the chain stops there.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Set the per-transition duration in milliseconds, floored to
    /// [`MIN_TRANSITION`].
    pub fn set_speed_ms(&mut self, ms: u64) {
        self.config.duration = Duration::from_millis(ms).max(MIN_TRANSITION);
    }

    /// Easing curve for subsequent transitions.
    pub fn set_easing(&mut self, easing: EasingFunction) {
        self.config.easing = easing;
    }

    /// Advance the driver. The host calls this once per display refresh;
    /// progress is derived from `now`, not from the call count.
    ///
    /// Returns whether an animation is still in flight.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Driver::Animating(mut chain) =
            std::mem::replace(&mut self.driver, Driver::Idle)
        else {
            return false;
        };

        let raw_t = chain.runner.progress(now);
        let eased = chain.runner.eased(raw_t);
        self.sink
            .render_lerp(chain.runner.source(), chain.runner.target(), eased);

        let allow = !chain.respect_pause || self.playing;
        if raw_t < 1.0 && allow {
            self.driver = Driver::Animating(chain);
            return true;
        }

        // Settle at the target and render the full frame.
        let mut settled = chain.runner.target_idx();
        self.idx = settled;
        self.render_current();

        if allow && settled < chain.end_idx {
            self.start_chain(settled + 1, chain.end_idx, chain.respect_pause);
            if self.is_animating() {
                return true;
            }
            // Missing frames degraded the rest of the chain to jumps.
            settled = chain.end_idx;
        }

        if chain.respect_pause && settled >= chain.end_idx {
            self.playing = false;
        }
        self.drain_pending();
        self.is_animating()
    }

    fn render_current(&mut self) {
        let total = self.frames.len();
        match self.frames.get(self.idx) {
            Some(f) => self.sink.render(f, self.idx, total),
            None => self.sink.render(&Frame::default(), self.idx, total),
        }
    }

    fn process_append(&mut self, mut frames: Vec<Frame>) {
        if !self.frames.is_empty() && !frames.is_empty() {
            // First element duplicates our current last frame: a "before"
            // snapshot kept by generators for continuity.
            let _ = frames.remove(0);
        }
        if frames.is_empty() {
            self.render_current();
            return;
        }

        let was_empty = self.frames.is_empty();
        let old_len = self.frames.len();
        self.frames.append(&mut frames);

        let first_target = if was_empty { 1 } else { old_len };
        let last = self.frames.len() - 1;
        if first_target > last {
            // Single frame into an empty sequence: nothing to animate.
            self.render_current();
            return;
        }
        self.start_chain(first_target, last, false);
    }

    /// Arm a transition toward `first_target`. Missing frames degrade to
    /// instant jumps, walking forward until a real transition can start
    /// or the chain end is reached (driver stays Idle in that case).
    fn start_chain(&mut self, first_target: usize, end_idx: usize, respect_pause: bool) {
        let mut target = first_target;
        loop {
            let pair = (
                self.frames.get(self.idx).cloned(),
                self.frames.get(target).cloned(),
            );
            if let (Some(from), Some(to)) = pair {
                let runner = TransitionRunner::new(
                    from,
                    to,
                    target,
                    self.config.duration,
                    self.config.easing,
                );
                self.driver = Driver::Animating(Chain {
                    runner,
                    end_idx,
                    respect_pause,
                });
                return;
            }
            // Out-of-range frame: jump, render, keep walking the chain.
            self.idx = target;
            self.render_current();
            if target >= end_idx {
                return;
            }
            target += 1;
        }
    }

    fn drain_pending(&mut self) {
        while !self.is_animating() {
            let Some(batch) = self.pending_appends.pop_front() else {
                return;
            };
            self.process_append(batch);
        }
    }
}

impl<S: FrameSink> std::fmt::Debug for Timeline<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timeline")
            .field("frames", &self.frames.len())
            .field("index", &self.idx)
            .field("playing", &self.playing)
            .field("animating", &self.is_animating())
            .field("pending_appends", &self.pending_appends.len())
            .finish_non_exhaustive()
    }
}
