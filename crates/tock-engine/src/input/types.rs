/// Key transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Platform-agnostic input event.
///
/// Keys are not identified: every key behaves the same.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InputEvent {
    /// The user asked the window to close.
    CloseRequested,

    Key {
        state: KeyState,
        /// OS auto-repeat of a held key.
        repeat: bool,
    },

    PointerButton {
        button: MouseButton,
        state: MouseButtonState,
    },
}

impl InputEvent {
    /// Whether this event ends the program: a close request, any key press
    /// (auto-repeat included), or any mouse button press.
    pub fn requests_quit(&self) -> bool {
        matches!(
            self,
            InputEvent::CloseRequested
                | InputEvent::Key { state: KeyState::Pressed, .. }
                | InputEvent::PointerButton { state: MouseButtonState::Pressed, .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presses_and_close_request_quit() {
        let quitting = [
            InputEvent::CloseRequested,
            InputEvent::Key { state: KeyState::Pressed, repeat: false },
            InputEvent::Key { state: KeyState::Pressed, repeat: true },
            InputEvent::PointerButton { button: MouseButton::Left, state: MouseButtonState::Pressed },
            InputEvent::PointerButton { button: MouseButton::Other(9), state: MouseButtonState::Pressed },
        ];
        for ev in quitting {
            assert!(ev.requests_quit(), "{ev:?}");
        }
    }

    #[test]
    fn releases_do_not_quit() {
        let benign = [
            InputEvent::Key { state: KeyState::Released, repeat: false },
            InputEvent::Key { state: KeyState::Released, repeat: true },
            InputEvent::PointerButton { button: MouseButton::Right, state: MouseButtonState::Released },
        ];
        for ev in benign {
            assert!(!ev.requests_quit(), "{ev:?}");
        }
    }
}
