//! tock engine crate.
//!
//! Platform, GPU, and text plumbing for the tock wall clock: one window, one
//! surface, one text image per frame.

pub mod clock;
pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod resource;
pub mod text;
pub mod time;
pub mod window;
