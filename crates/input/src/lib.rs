//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and provides a
//! debouncing input handler: one action per physical key press.

pub mod handler;
pub mod map;

pub use offline_tetris_types as types;

pub use handler::InputHandler;
pub use map::{action_for, handle_key_event, key_from_code, should_quit};
