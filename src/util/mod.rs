//! Host-side helpers around the engine.
//!
//! The engine itself never schedules anything; the host owns the loop
//! that calls [`crate::timeline::Timeline::tick`]. These utilities help
//! pace that loop.

pub mod frame_timing;
