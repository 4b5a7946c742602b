//! Debouncing input handler.
//!
//! A key that is already held produces no further actions until it is
//! released, so device auto-repeat never moves a piece twice. Any release
//! clears the held key.
//!
//! Terminals that never emit key releases can enable an idle timeout that
//! releases the held key automatically.

use crossterm::event::KeyCode;

use crate::map::action_for;
use crate::types::GameAction;

/// Tracks the currently held key.
#[derive(Debug, Clone)]
pub struct InputHandler {
    current: Option<KeyCode>,
    idle_ms: u32,
    key_release_timeout_ms: Option<u32>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            current: None,
            idle_ms: 0,
            key_release_timeout_ms: None,
        }
    }

    /// Release the held key after `timeout_ms` without a press.
    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = Some(timeout_ms);
        self
    }

    pub fn key_release_timeout_ms(&self) -> Option<u32> {
        self.key_release_timeout_ms
    }

    pub fn current(&self) -> Option<KeyCode> {
        self.current
    }

    /// Handle a key-down event.
    ///
    /// Returns the action to apply, or `None` when the key is already held or
    /// does not map to anything. Unmapped keys still become the held key.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        self.idle_ms = 0;
        if self.current == Some(code) {
            return None;
        }
        self.current = Some(code);
        action_for(code)
    }

    /// Handle a key-up event. Any release clears the held key.
    pub fn handle_key_release(&mut self, _code: KeyCode) {
        self.current = None;
        self.idle_ms = 0;
    }

    /// Advance the idle clock by `elapsed_ms`.
    pub fn update(&mut self, elapsed_ms: u32) {
        let Some(timeout) = self.key_release_timeout_ms else {
            return;
        };
        if self.current.is_none() {
            return;
        }
        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
        if self.idle_ms > timeout {
            self.current = None;
            self.idle_ms = 0;
        }
    }

    pub fn reset(&mut self) {
        self.current = None;
        self.idle_ms = 0;
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
    fn test_held_key_fires_once() {
        let mut ih = InputHandler::new();

        assert_eq!(ih.handle_key_press(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(ih.handle_key_press(KeyCode::Left), None);
        assert_eq!(ih.handle_key_press(KeyCode::Left), None);

        ih.handle_key_release(KeyCode::Left);
        assert_eq!(ih.handle_key_press(KeyCode::Left), Some(GameAction::MoveLeft));
    }

    #[test]
    fn test_different_key_fires_while_another_is_held() {
        let mut ih = InputHandler::new();

        assert_eq!(ih.handle_key_press(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(ih.handle_key_press(KeyCode::Up), Some(GameAction::Rotate));
        // Left is no longer the held key, so it fires again.
        assert_eq!(ih.handle_key_press(KeyCode::Left), Some(GameAction::MoveLeft));
    }

    #[test]
    fn test_unmapped_key_becomes_current() {
        let mut ih = InputHandler::new();

        assert_eq!(ih.handle_key_press(KeyCode::Char('x')), None);
        assert_eq!(ih.current(), Some(KeyCode::Char('x')));
        assert_eq!(ih.handle_key_press(KeyCode::Char('d')), Some(GameAction::MoveRight));
    }

    #[test]
    fn test_any_release_clears_current() {
        let mut ih = InputHandler::new();

        ih.handle_key_press(KeyCode::Down);
        ih.handle_key_release(KeyCode::Char('x'));
        assert_eq!(ih.current(), None);
        assert_eq!(ih.handle_key_press(KeyCode::Down), Some(GameAction::MoveDown));
    }

    #[test]
    fn test_no_timeout_by_default() {
        let mut ih = InputHandler::new();
        assert_eq!(ih.key_release_timeout_ms(), None);

        ih.handle_key_press(KeyCode::Left);
        ih.update(10_000);
        assert_eq!(ih.handle_key_press(KeyCode::Left), None);
    }

    #[test]
    fn test_auto_release_after_idle_timeout() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(150);

        ih.handle_key_press(KeyCode::Left);
        ih.update(100);
        assert_eq!(ih.current(), Some(KeyCode::Left));

        ih.update(51);
        assert_eq!(ih.current(), None);
        assert_eq!(ih.handle_key_press(KeyCode::Left), Some(GameAction::MoveLeft));
    }

    #[test]
    fn test_repeat_presses_keep_key_held() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(150);

        ih.handle_key_press(KeyCode::Left);
        for _ in 0..10 {
            ih.update(100);
            // Device auto-repeat arrives faster than the timeout.
            assert_eq!(ih.handle_key_press(KeyCode::Left), None);
        }
    }

    #[test]
    fn test_reset_clears_held_state() {
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Right);
        ih.reset();
        assert_eq!(ih.handle_key_press(KeyCode::Right), Some(GameAction::MoveRight));
    }
}
