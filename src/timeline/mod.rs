//! Frame sequencer and animation driver.
//!
//! [`Timeline`] owns the ordered frame sequence, the current position,
//! and the playback state. The host calls [`Timeline::tick`] once per
//! display refresh; the driver computes wall-clock transition progress
//! and invokes the caller-supplied [`FrameSink`] with settled frames and
//! interpolated in-between states.

mod engine;
mod sink;
mod transition;

pub use engine::{Goto, Timeline, TimelineConfig, MIN_TRANSITION};
pub use sink::FrameSink;
pub use transition::TransitionRunner;
