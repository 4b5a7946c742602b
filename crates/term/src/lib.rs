//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! widget toolkits and renders board snapshots into a framebuffer that is
//! flushed to the terminal with crossterm.
//!
//! - [`GameView`] is pure: snapshot in, framebuffer out
//! - [`TerminalRenderer`] owns the terminal session and writes only changed cells
//! - [`RenderThrottle`] skips redraws of unchanged frames

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use offline_tetris_core as core;
pub use offline_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tag_color, AnchorY, GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
