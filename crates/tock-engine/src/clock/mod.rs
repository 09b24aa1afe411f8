//! Wall-clock reading and display formatting.

mod format;

pub use format::{format_clock, format_time, now_local, ClockFormatError, TIME_BUF_LEN, TIME_FORMAT};
