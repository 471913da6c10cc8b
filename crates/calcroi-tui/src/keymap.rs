//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Cancel,
    FocusNext,
    FocusPrev,
    Left,
    Right,
    /// A character accepted by a numeric input.
    Input(char),
    Backspace,
    /// Activate the focused control.
    Submit,
    ComputeReturn,
    LookupRates,
    ToggleLogs,
    PageUp,
    PageDown,
    Home,
    End,
    None,
}

/// Characters a numeric input accepts.
#[must_use]
pub fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Cancel,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('l') => KeyAction::ToggleLogs,
        KeyCode::Char(c) if is_numeric_char(c) => KeyAction::Input(c),
        KeyCode::Tab | KeyCode::Down => KeyAction::FocusNext,
        KeyCode::BackTab | KeyCode::Up => KeyAction::FocusPrev,
        KeyCode::Left => KeyAction::Left,
        KeyCode::Right => KeyAction::Right,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::F(2) => KeyAction::ComputeReturn,
        KeyCode::F(3) => KeyAction::LookupRates,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Home => KeyAction::Home,
        KeyCode::End => KeyAction::End,
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
    }

    #[test]
    fn ctrl_c_cancels() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::Cancel);
    }

    #[test]
    fn numeric_input() {
        assert_eq!(map_key(key(KeyCode::Char('7'))), KeyAction::Input('7'));
        assert_eq!(map_key(key(KeyCode::Char('.'))), KeyAction::Input('.'));
        assert_eq!(map_key(key(KeyCode::Char('e'))), KeyAction::Input('e'));
        assert_eq!(map_key(key(KeyCode::Char('x'))), KeyAction::None);
    }

    #[test]
    fn focus_keys() {
        assert_eq!(map_key(key(KeyCode::Tab)), KeyAction::FocusNext);
        assert_eq!(map_key(key(KeyCode::Down)), KeyAction::FocusNext);
        assert_eq!(map_key(key(KeyCode::BackTab)), KeyAction::FocusPrev);
        assert_eq!(map_key(key(KeyCode::Up)), KeyAction::FocusPrev);
    }

    #[test]
    fn action_keys() {
        assert_eq!(map_key(key(KeyCode::Enter)), KeyAction::Submit);
        assert_eq!(map_key(key(KeyCode::F(2))), KeyAction::ComputeReturn);
        assert_eq!(map_key(key(KeyCode::F(3))), KeyAction::LookupRates);
        assert_eq!(map_key(key(KeyCode::Char('l'))), KeyAction::ToggleLogs);
    }

    #[test]
    fn editing_keys() {
        assert_eq!(map_key(key(KeyCode::Backspace)), KeyAction::Backspace);
        assert_eq!(map_key(key(KeyCode::Left)), KeyAction::Left);
        assert_eq!(map_key(key(KeyCode::Right)), KeyAction::Right);
    }

    #[test]
    fn scroll_keys() {
        assert_eq!(map_key(key(KeyCode::PageUp)), KeyAction::PageUp);
        assert_eq!(map_key(key(KeyCode::PageDown)), KeyAction::PageDown);
        assert_eq!(map_key(key(KeyCode::Home)), KeyAction::Home);
        assert_eq!(map_key(key(KeyCode::End)), KeyAction::End);
    }
}
