use anyhow::Result;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by the runtime.
///
/// Input never reaches the app: the runtime applies the quit policy itself
/// (see `RunState`). The app only produces frames.
pub trait App {
    /// Called once per due frame while the loop is running.
    ///
    /// An `Err` is fatal: the runtime stops the loop, releases the window and
    /// GPU context, and returns the error from `Runtime::run`.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl>;
}
