//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the Tetris rules and the falling-piece state machine.
//! It has **no dependencies** on UI, input devices or I/O, making it:
//!
//! - **Deterministic**: same seed produces identical piece sequences
//! - **Testable**: every rule is reachable through the public API
//! - **Portable**: any host can poll [`GameState::draw_board`] and paint it
//! - **Allocation-free**: moves, rotation, line clears and projection use fixed arrays
//!
//! # Module Structure
//!
//! - [`board`]: 20x10 grid with collision, merging and line removal
//! - [`pieces`]: tetromino shape matrices and the single-direction rotation
//! - [`rng`]: uniform (default) and 7-bag piece selection
//! - [`game_state`]: the `Spawning → Falling → Placing` state machine
//! - [`snapshot`]: the renderable grid produced by `draw_board`
//!
//! # Game Rules
//!
//! - Pieces spawn at `(4, 0)` and only fall when the host asks (`move_tetromino(0, 1)`)
//! - A downward move that collides places the piece where it is
//! - Full rows are removed and replaced by empty rows at the top
//! - Rotation is checked at the current position only; there are no wall kicks
//! - A piece that cannot spawn ends the game
//!
//! # Example
//!
//! ```
//! use offline_tetris_core::{GameState, MoveOutcome};
//! use offline_tetris_types::{GameAction, PieceKind};
//!
//! let mut game = GameState::new(12345);
//! game.spawn_kind(PieceKind::O);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//!
//! // Drop to the floor; the 19th step lands the piece.
//! let mut outcome = MoveOutcome::Moved;
//! while outcome == MoveOutcome::Moved {
//!     outcome = game.move_tetromino(0, 1);
//! }
//! assert_eq!(outcome, MoveOutcome::Placed { lines: 0 });
//! assert_eq!(game.pieces_placed(), 1);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use offline_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, MoveOutcome, Phase, Tetromino};
pub use pieces::{get_shape, try_rotate, Shape};
pub use rng::{PieceBag, PieceSource, SimpleRng};
pub use snapshot::BoardSnapshot;
