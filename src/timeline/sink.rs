//! Callback seam between the engine and a concrete renderer.

use crate::frame::Frame;

/// Consumer of engine output: settled frames and interpolated states.
///
/// Implementations must not panic; they may freely mutate external
/// render state (DOM, canvas, terminal). The engine updates its own
/// index and playing flag around these calls, never inside them, so a
/// misbehaving sink cannot corrupt sequencing state.
pub trait FrameSink {
    /// Called whenever the current position settles: after `set_frames`,
    /// an explicit `render`, and at the end of every transition.
    fn render(&mut self, frame: &Frame, index: usize, total: usize);

    /// Called repeatedly during an animated transition with `t` sweeping
    /// from 0 toward 1, possibly many times per transition.
    ///
    /// The default implementation ignores interpolation, which gives
    /// discrete stepping for sinks that only care about settled frames.
    fn render_lerp(&mut self, from: &Frame, to: &Frame, t: f32) {
        let _ = (from, to, t);
    }
}
