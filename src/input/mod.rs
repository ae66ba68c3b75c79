//! Keyboard handling for the driver loop.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// Driver-level commands produced from key presses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    TogglePause,
    Randomize,
    Clear,
    SpeedUp,
    SpeedDown,
    SaveSnapshot,
    LoadSnapshot,
    Quit,
}

/// Wait up to `timeout` for a key press and translate it.
///
/// Doubles as the frame-interval sleep: when no key arrives the call
/// returns `None` after the timeout elapses.
pub fn poll_action(timeout: Duration) -> io::Result<Option<Action>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) => Ok(translate(key)),
        _ => Ok(None),
    }
}

fn translate(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Up => Some(Action::SpeedUp),
        KeyCode::Down => Some(Action::SpeedDown),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'q' => Some(Action::Quit),
            ' ' | 'p' => Some(Action::TogglePause),
            'r' => Some(Action::Randomize),
            'c' => Some(Action::Clear),
            's' => Some(Action::SaveSnapshot),
            'l' => Some(Action::LoadSnapshot),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(translate(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(translate(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            translate(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_plain_c_clears() {
        assert_eq!(translate(key(KeyCode::Char('c'))), Some(Action::Clear));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(translate(key(KeyCode::Char('R'))), Some(Action::Randomize));
        assert_eq!(translate(key(KeyCode::Char('P'))), Some(Action::TogglePause));
    }

    #[test]
    fn test_speed_and_snapshot_keys() {
        assert_eq!(translate(key(KeyCode::Up)), Some(Action::SpeedUp));
        assert_eq!(translate(key(KeyCode::Down)), Some(Action::SpeedDown));
        assert_eq!(translate(key(KeyCode::Char('s'))), Some(Action::SaveSnapshot));
        assert_eq!(translate(key(KeyCode::Char('l'))), Some(Action::LoadSnapshot));
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        assert_eq!(translate(key(KeyCode::Char('x'))), None);
        assert_eq!(translate(key(KeyCode::Tab)), None);
    }
}
