//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextField,
    PrevField,
    NextOption,
    PrevOption,
    Input(char),
    Backspace,
    Submit,
    ToggleHistory,
    ClearHistory,
    None,
}

/// Characters accepted by the value field.
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Tab | KeyCode::Down => KeyAction::NextField,
        KeyCode::BackTab | KeyCode::Up => KeyAction::PrevField,
        KeyCode::Right => KeyAction::NextOption,
        KeyCode::Left => KeyAction::PrevOption,
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Char('h') => KeyAction::ToggleHistory,
        KeyCode::Char('c') => KeyAction::ClearHistory,
        KeyCode::Char(c) if is_number_char(c) => KeyAction::Input(c),
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(map_key(key(KeyCode::Esc)), KeyAction::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn focus_keys() {
        assert_eq!(map_key(key(KeyCode::Tab)), KeyAction::NextField);
        assert_eq!(map_key(key(KeyCode::Down)), KeyAction::NextField);
        assert_eq!(map_key(key(KeyCode::BackTab)), KeyAction::PrevField);
        assert_eq!(map_key(key(KeyCode::Up)), KeyAction::PrevField);
    }

    #[test]
    fn option_keys() {
        assert_eq!(map_key(key(KeyCode::Right)), KeyAction::NextOption);
        assert_eq!(map_key(key(KeyCode::Left)), KeyAction::PrevOption);
    }

    #[test]
    fn number_input() {
        for c in ['0', '9', '.', '-', '+', 'e', 'E'] {
            assert_eq!(map_key(key(KeyCode::Char(c))), KeyAction::Input(c));
        }
        assert_eq!(map_key(key(KeyCode::Backspace)), KeyAction::Backspace);
    }

    #[test]
    fn history_keys() {
        assert_eq!(map_key(key(KeyCode::Char('h'))), KeyAction::ToggleHistory);
        assert_eq!(map_key(key(KeyCode::Char('c'))), KeyAction::ClearHistory);
    }

    #[test]
    fn submit_key() {
        assert_eq!(map_key(key(KeyCode::Enter)), KeyAction::Submit);
    }

    #[test]
    fn unknown_key() {
        assert_eq!(map_key(key(KeyCode::Char('z'))), KeyAction::None);
        assert_eq!(map_key(key(KeyCode::F(1))), KeyAction::None);
    }
}
