//! Offline Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and adds the host-side
//! pieces that sit around the engine: environment configuration, logging
//! setup and the [`Session`] that feeds keys and gravity into the engine.

pub use offline_tetris_core as core;
pub use offline_tetris_input as input;
pub use offline_tetris_term as term;
pub use offline_tetris_types as types;

pub mod config;
pub mod logging;
pub mod session;

pub use config::{Config, RandomizerKind};
pub use session::Session;
