//! TUI message types (Elm Messages).

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiMessage {
    /// Key press forwarded from the event loop.
    KeyPress(KeyAction),
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Quit the application.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_variants() {
        let msg = TuiMessage::KeyPress(KeyAction::Submit);
        assert!(matches!(msg, TuiMessage::KeyPress(KeyAction::Submit)));

        let msg = TuiMessage::Resize {
            width: 80,
            height: 24,
        };
        assert!(matches!(msg, TuiMessage::Resize { .. }));

        assert_eq!(TuiMessage::Quit, TuiMessage::Quit);
    }
}
