//! Key mapping from terminal events to directions.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a movement direction.
pub fn direction_for_key(key: KeyEvent) -> Option<Direction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key restarts the session from a cold start.
pub fn should_restart(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            direction_for_key(KeyEvent::from(KeyCode::Up)),
            Some(Direction::Up)
        );
        assert_eq!(
            direction_for_key(KeyEvent::from(KeyCode::Down)),
            Some(Direction::Down)
        );
        assert_eq!(
            direction_for_key(KeyEvent::from(KeyCode::Left)),
            Some(Direction::Left)
        );
        assert_eq!(
            direction_for_key(KeyEvent::from(KeyCode::Right)),
            Some(Direction::Right)
        );
    }

    #[test]
    fn test_letter_aliases() {
        assert_eq!(
            direction_for_key(KeyEvent::from(KeyCode::Char('w'))),
            Some(Direction::Up)
        );
        assert_eq!(
            direction_for_key(KeyEvent::from(KeyCode::Char('A'))),
            Some(Direction::Left)
        );
        assert_eq!(
            direction_for_key(KeyEvent::from(KeyCode::Char('s'))),
            Some(Direction::Down)
        );
        assert_eq!(
            direction_for_key(KeyEvent::from(KeyCode::Char('D'))),
            Some(Direction::Right)
        );
    }

    #[test]
    fn test_unrelated_keys_are_ignored() {
        assert_eq!(direction_for_key(KeyEvent::from(KeyCode::Enter)), None);
        assert_eq!(direction_for_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(direction_for_key(KeyEvent::from(KeyCode::Esc)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_restart_keys() {
        assert!(should_restart(KeyEvent::from(KeyCode::Char('r'))));
        assert!(should_restart(KeyEvent::from(KeyCode::Char('R'))));
        assert!(!should_restart(KeyEvent::from(KeyCode::Char('q'))));
    }
}
