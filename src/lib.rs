// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Float comparison: animation math compares against 0.0, 1.0, etc.
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]

//! Frame-sequencing animation engine for step-by-step data structure
//! visualizations.
//!
//! A generator (linked list, tree, heap — outside this crate) emits an
//! ordered sequence of [`frame::Frame`] snapshots describing one operation
//! step each. [`timeline::Timeline`] owns that sequence and exposes
//! step/play/pause/scrub/append controls, driving a caller-supplied
//! [`timeline::FrameSink`] with both settled frames and continuously
//! interpolated in-between states.
//!
//! # Key entry points
//!
//! - [`timeline::Timeline`] - the frame sequencer and animation driver
//! - [`frame::Frame`] - one immutable structural snapshot
//! - [`interpolation::interpolate`] - union-of-ids frame blending for
//!   renderers
//!
//! # Architecture
//!
//! The engine is single-threaded and cooperatively scheduled: the host
//! calls [`timeline::Timeline::tick`] once per display refresh and the
//! driver advances wall-clock-based transition progress, settling the
//! index and chaining the next transition when a step completes. There is
//! no internal thread and no locking; [`util::frame_timing::FrameTiming`]
//! helps the host pace that loop.

pub mod easing;
pub mod frame;
pub mod interpolation;
pub mod timeline;
pub mod util;
