//! Game state module - the falling-piece state machine
//!
//! Ties the board, the shape catalog and the randomizer together. A session
//! is always in one of two resting phases: `Falling` (a piece is active) or
//! `GameOver`. `Placing` and `Spawning` are passed through inside a single
//! downward move that lands.
//!
//! Gravity is not part of the engine: the host calls
//! [`GameState::move_tetromino`] with `(0, 1)` on its own schedule.

use tracing::{debug, info};

use crate::board::Board;
use crate::pieces::{get_shape, try_rotate, Shape};
use crate::rng::PieceSource;
use crate::snapshot::BoardSnapshot;
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    /// Current rotation of the piece's matrix
    pub shape: Shape,
    /// Column of the shape's top-left corner
    pub x: i8,
    /// Row of the shape's top-left corner (negative while entering)
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: get_shape(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn color(&self) -> ColorTag {
        self.kind.color()
    }

    /// Board coordinates of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Check whether the piece overlaps walls, floor or placed blocks
    pub fn collides(&self, board: &Board) -> bool {
        board.collides(&self.shape, self.x, self.y)
    }
}

/// Where the state machine rests between operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Choosing and positioning a new piece (transient)
    Spawning,
    /// A piece is active and not yet resting
    Falling,
    /// The landed piece is merged and full lines removed (transient)
    Placing,
    /// A new piece could not enter the board
    GameOver,
}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// The piece moved to the requested position
    Moved,
    /// The move was rejected; nothing changed
    Blocked,
    /// A downward move landed the piece; it was merged and a new one spawned
    Placed { lines: u8 },
}

impl MoveOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, MoveOutcome::Blocked)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Tetromino,
    phase: Phase,
    source: PieceSource,
    /// Total rows removed this session
    lines_removed: u32,
    /// Pieces merged into the board this session
    pieces_placed: u32,
}

impl GameState {
    /// Create a new game with a uniform randomizer and the given seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(PieceSource::uniform(seed))
    }

    /// Create a new game drawing pieces from `source`
    pub fn with_source(mut source: PieceSource) -> Self {
        let first = source.draw();
        let mut state = Self {
            board: Board::new(),
            active: Tetromino::new(first),
            phase: Phase::Spawning,
            source,
            lines_removed: 0,
            pieces_placed: 0,
        };
        state.spawn_kind(first);
        state
    }

    /// Replace the board, keeping the active piece.
    ///
    /// If the active piece now overlaps the new board the game is over.
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self.settle_spawn();
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn active(&self) -> Tetromino {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn lines_removed(&self) -> u32 {
        self.lines_removed
    }

    pub fn pieces_placed(&self) -> u32 {
        self.pieces_placed
    }

    pub fn source(&self) -> &PieceSource {
        &self.source
    }

    /// Put a fresh `kind` piece at the spawn position.
    ///
    /// Normal play spawns through the randomizer; this is for scripted
    /// sessions and fixtures.
    pub fn spawn_kind(&mut self, kind: PieceKind) {
        self.phase = Phase::Spawning;
        self.active = Tetromino::new(kind);
        self.settle_spawn();
    }

    fn spawn_next(&mut self) {
        self.phase = Phase::Spawning;
        let kind = self.source.draw();
        self.active = Tetromino::new(kind);
        self.settle_spawn();
    }

    fn settle_spawn(&mut self) {
        if self.active.collides(&self.board) {
            self.phase = Phase::GameOver;
            info!(
                kind = self.active.kind.as_str(),
                pieces = self.pieces_placed,
                lines = self.lines_removed,
                "spawn blocked, game over"
            );
        } else {
            self.phase = Phase::Falling;
            debug!(kind = self.active.kind.as_str(), "piece spawned");
        }
    }

    /// Try to move the active piece by (dx, dy).
    ///
    /// A blocked downward move lands the piece: it is merged at its current
    /// position, full lines are removed and the next piece spawns. Any other
    /// blocked move is a no-op.
    pub fn move_tetromino(&mut self, dx: i8, dy: i8) -> MoveOutcome {
        if self.phase != Phase::Falling {
            return MoveOutcome::Blocked;
        }

        let nx = self.active.x.saturating_add(dx);
        let ny = self.active.y.saturating_add(dy);

        if !self.board.collides(&self.active.shape, nx, ny) {
            self.active.x = nx;
            self.active.y = ny;
            return MoveOutcome::Moved;
        }

        if dy > 0 {
            let lines = self.place();
            return MoveOutcome::Placed { lines };
        }

        MoveOutcome::Blocked
    }

    /// Merge the active piece, clear lines and spawn the next piece.
    fn place(&mut self) -> u8 {
        self.phase = Phase::Placing;

        let piece = self.active;
        self.board
            .merge(&piece.shape, piece.x, piece.y, piece.color());
        self.pieces_placed = self.pieces_placed.wrapping_add(1);

        let removed = self.board.remove_full_lines();
        let lines = removed.len() as u8;
        self.lines_removed = self.lines_removed.wrapping_add(lines as u32);

        debug!(
            kind = piece.kind.as_str(),
            x = piece.x,
            y = piece.y,
            lines,
            "piece placed"
        );

        self.spawn_next();
        lines
    }

    /// Rotate the active piece in place.
    ///
    /// Rejected silently when the rotated shape would collide at the current
    /// position; no offsets are tried.
    pub fn rotate_tetromino(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }

        let piece = self.active;
        match try_rotate(&piece.shape, piece.x, piece.y, |s, x, y| {
            self.board.collides(s, x, y)
        }) {
            Some(rotated) => {
                self.active.shape = rotated;
                true
            }
            None => false,
        }
    }

    /// Start over on an empty board. Only valid once the game is over.
    pub fn restart(&mut self) -> bool {
        if self.phase != Phase::GameOver {
            return false;
        }
        self.board.clear();
        self.lines_removed = 0;
        self.pieces_placed = 0;
        info!(randomizer = self.source.name(), "game restarted");
        self.spawn_next();
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_tetromino(-1, 0).changed(),
            GameAction::MoveRight => self.move_tetromino(1, 0).changed(),
            GameAction::MoveDown => self.move_tetromino(0, 1).changed(),
            GameAction::Rotate => self.rotate_tetromino(),
            GameAction::Restart => self.restart(),
        }
    }

    /// Project the board with the active piece painted on top.
    ///
    /// This is the allocation-free variant of [`GameState::draw_board`].
    pub fn draw_board_into(&self, out: &mut BoardSnapshot) {
        self.board.write_grid(&mut out.cells);

        let tag = self.active.color();
        for (x, y) in self.active.cells() {
            if x >= 0 && x < BOARD_COLS as i8 && y >= 0 && y < BOARD_ROWS as i8 {
                out.cells[y as usize][x as usize] = Some(tag);
            }
        }

        out.active = Some(self.active.kind);
        out.lines_removed = self.lines_removed;
        out.pieces_placed = self.pieces_placed;
        out.game_over = self.is_game_over();
    }

    pub fn draw_board(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.draw_board_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
