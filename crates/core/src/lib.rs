//! shiftboard_core - the scheduling state machine behind the shiftboard widget.
//!
//! Everything in this crate is synchronous and free of I/O: the host feeds
//! commands in and gets a new [`schedule::Scheduler`] value back, which it can
//! render through the [`schedule::Render`] seam.

pub mod schedule;
pub mod serde;
