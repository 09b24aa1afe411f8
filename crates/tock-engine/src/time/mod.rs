//! Frame pacing.
//!
//! `TickClock` decides when the next frame is due; the runtime turns that
//! deadline into an event-loop wake-up instead of sleeping.

mod tick_clock;

pub use tick_clock::{FrameTime, TickClock};
