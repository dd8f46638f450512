//! Input handling - convert key events to commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use warren_core::player::Command;

/// Convert a key event to a player command.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Command::MoveForward),
        KeyCode::Char('s') | KeyCode::Down => Some(Command::MoveBackward),
        KeyCode::Char('a') | KeyCode::Left => Some(Command::RotateLeft),
        KeyCode::Char('d') | KeyCode::Right => Some(Command::RotateRight),
        KeyCode::Char('e') => Some(Command::ToggleMap),
        _ => None,
    }
}

/// Quit keys: q, Esc or Ctrl+C.
pub fn is_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn movement_keys_map_to_commands() {
        assert_eq!(key_to_command(key(KeyCode::Char('w'))), Some(Command::MoveForward));
        assert_eq!(key_to_command(key(KeyCode::Char('s'))), Some(Command::MoveBackward));
        assert_eq!(key_to_command(key(KeyCode::Char('a'))), Some(Command::RotateLeft));
        assert_eq!(key_to_command(key(KeyCode::Char('d'))), Some(Command::RotateRight));
        assert_eq!(key_to_command(key(KeyCode::Char('e'))), Some(Command::ToggleMap));
        assert_eq!(key_to_command(key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn arrow_keys_mirror_wasd() {
        assert_eq!(key_to_command(key(KeyCode::Up)), Some(Command::MoveForward));
        assert_eq!(key_to_command(key(KeyCode::Left)), Some(Command::RotateLeft));
    }

    #[test]
    fn quit_keys() {
        assert!(is_quit(key(KeyCode::Char('q'))));
        assert!(is_quit(key(KeyCode::Esc)));
        assert!(is_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(key(KeyCode::Char('c'))));
        assert!(!is_quit(key(KeyCode::Char('w'))));
    }
}
