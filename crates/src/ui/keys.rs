use crossterm::event::{KeyCode, KeyModifiers};

/// Key presses the session understands. Everything else is dropped before
/// it reaches the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Enter,
    Esc,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
}

impl Key {
    pub fn from_crossterm(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
        let key = match code {
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Esc,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            // some terminals deliver control keys as raw bytes
            KeyCode::Char('\u{1b}') => Key::Esc,
            KeyCode::Char('\u{7f}') | KeyCode::Char('\u{08}') => Key::Backspace,
            KeyCode::Char(c @ '\u{01}'..='\u{1a}') => {
                Key::Ctrl(char::from(b'a' + (c as u8 - 1)))
            }
            KeyCode::Char(c) if modifiers.contains(KeyModifiers::CONTROL) => {
                Key::Ctrl(c.to_ascii_lowercase())
            }
            KeyCode::Char(c) => Key::Char(c),
            _ => return None,
        };
        Some(key)
    }

    pub fn is_cancel(self) -> bool {
        matches!(self, Key::Esc | Key::Ctrl('c'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_bytes_map_to_ctrl_keys() {
        let none = KeyModifiers::NONE;
        assert_eq!(Key::from_crossterm(KeyCode::Char('\u{03}'), none), Some(Key::Ctrl('c')));
        assert_eq!(Key::from_crossterm(KeyCode::Char('\u{01}'), none), Some(Key::Ctrl('a')));
        assert_eq!(Key::from_crossterm(KeyCode::Char('\u{15}'), none), Some(Key::Ctrl('u')));
        assert_eq!(Key::from_crossterm(KeyCode::Char('\u{1b}'), none), Some(Key::Esc));
        assert_eq!(Key::from_crossterm(KeyCode::Char('\u{7f}'), none), Some(Key::Backspace));
    }

    #[test]
    fn test_control_modifier_and_plain_chars() {
        assert_eq!(
            Key::from_crossterm(KeyCode::Char('C'), KeyModifiers::CONTROL),
            Some(Key::Ctrl('c'))
        );
        assert_eq!(
            Key::from_crossterm(KeyCode::Char('J'), KeyModifiers::SHIFT),
            Some(Key::Char('J'))
        );
        assert_eq!(Key::from_crossterm(KeyCode::F(5), KeyModifiers::NONE), None);
        assert!(Key::Ctrl('c').is_cancel());
        assert!(!Key::Char('q').is_cancel());
    }
}
