//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the app, the
//! per-frame context, and the loop's run state.

mod app;
mod ctx;
mod run_state;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
pub use run_state::RunState;
