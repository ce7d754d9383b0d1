use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Command;

/// Maps raw key events to logical commands. The core only ever sees
/// `Command` values, never key codes.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Translate one key event; keys with no binding return None
    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Command> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Quit);
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Some(Command::MoveUp),
            KeyCode::Down => Some(Command::MoveDown),
            KeyCode::Left => Some(Command::MoveLeft),
            KeyCode::Right => Some(Command::MoveRight),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::MoveUp),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::MoveDown),
            KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
            KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),

            // Controls
            KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::TogglePause),
            KeyCode::Esc => Some(Command::Back),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Confirm),

            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(up), Some(Command::MoveUp));

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(down), Some(Command::MoveDown));

        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(left), Some(Command::MoveLeft));

        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(right), Some(Command::MoveRight));
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        let w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(w), Some(Command::MoveUp));

        let a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(a), Some(Command::MoveLeft));

        let s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(s), Some(Command::MoveDown));

        let d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(d), Some(Command::MoveRight));
    }

    #[test]
    fn test_wasd_uppercase() {
        let handler = InputHandler::new();

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(w_upper), Some(Command::MoveUp));
    }

    #[test]
    fn test_pause_key() {
        let handler = InputHandler::new();

        let p = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(p), Some(Command::TogglePause));

        let p_upper = KeyEvent::new(KeyCode::Char('P'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(p_upper), Some(Command::TogglePause));
    }

    #[test]
    fn test_back_key() {
        let handler = InputHandler::new();

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(esc), Some(Command::Back));
    }

    #[test]
    fn test_confirm_keys() {
        let handler = InputHandler::new();

        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(enter), Some(Command::Confirm));

        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(space), Some(Command::Confirm));
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), Some(Command::Quit));
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();

        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(x), None);
    }
}
