use crate::input::InputEvent;

/// Render loop state.
///
/// Starts `Running`; `Quit` is terminal. The runtime feeds every pending
/// event through [`observe`](Self::observe) and only acts on the state once
/// the queue is drained, so a quit event never cuts a polling pass short.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum RunState {
    #[default]
    Running,
    Quit,
}

impl RunState {
    /// Applies one input event. Returns `true` if this event requested quit.
    pub fn observe(&mut self, event: &InputEvent) -> bool {
        if event.requests_quit() {
            *self = RunState::Quit;
            true
        } else {
            false
        }
    }

    /// Marks the loop finished without an input event (e.g. the window went away).
    #[inline]
    pub fn quit(&mut self) {
        *self = RunState::Quit;
    }

    #[inline]
    pub fn is_running(self) -> bool {
        self == RunState::Running
    }
}
