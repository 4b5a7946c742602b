//! Key mapping from terminal events to game keys and actions.

use crate::types::{GameAction, Key};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Resolve a terminal key code to one of the four game keys.
///
/// Letters are matched exactly: shifted `A` is not `a`.
pub fn key_from_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Char(c) => {
            let mut buf = [0u8; 4];
            Key::from_name(c.encode_utf8(&mut buf))
        }
        _ => None,
    }
}

/// Map a key code to the action it triggers, if any.
pub fn action_for(code: KeyCode) -> Option<GameAction> {
    match code {
        KeyCode::Char('r') => Some(GameAction::Restart),
        _ => key_from_code(code).map(Key::action),
    }
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    action_for(key.code)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
