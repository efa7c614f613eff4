//! Key mapping from terminal events to scene actions.

use crate::types::SceneAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to scene actions.
pub fn handle_key_event(key: KeyEvent) -> Option<SceneAction> {
    if should_quit(key) {
        return Some(SceneAction::Quit);
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(SceneAction::TogglePause)
        }
        KeyCode::Char('o') | KeyCode::Char('O') => Some(SceneAction::ToggleOrbits),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(SceneAction::ToggleHints),

        // Speed
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Some(SceneAction::SpeedUp),
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => Some(SceneAction::SlowDown),

        _ => None,
    }
}

/// Check if key should stop the render loop.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_toggle_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(SceneAction::TogglePause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('o'))),
            Some(SceneAction::ToggleOrbits)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('H'))),
            Some(SceneAction::ToggleHints)
        );
    }

    #[test]
    fn test_speed_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('+'))),
            Some(SceneAction::SpeedUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('='))),
            Some(SceneAction::SpeedUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(SceneAction::SlowDown)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(SceneAction::Quit)
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), None);
    }
}
