//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, so they
//! can be shared by the engine, the input layer and the terminal renderer.
//!
//! # Board Dimensions
//!
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Spawn position**: `(COLS / 2 - 1, 0)` = `(4, 0)`
//!
//! # Examples
//!
//! ```
//! use offline_tetris_types::{ColorTag, GameAction, Key, PieceKind, BOARD_COLS, BOARD_ROWS};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.color(), ColorTag::TBlock);
//! assert_eq!(piece.color().as_str(), "tBlock");
//!
//! assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
//! assert_eq!(Key::from_name("w").map(Key::action), Some(GameAction::Rotate));
//!
//! assert_eq!(BOARD_ROWS, 20);
//! assert_eq!(BOARD_COLS, 10);
//! ```

/// Board height in cells (20 rows)
pub const BOARD_ROWS: u8 = 20;

/// Board width in cells (10 columns)
pub const BOARD_COLS: u8 = 10;

/// Horizontal spawn coordinate of a new piece's top-left corner.
pub const SPAWN_X: i8 = (BOARD_COLS / 2) as i8 - 1;

/// Vertical spawn coordinate of a new piece's top-left corner.
pub const SPAWN_Y: i8 = 0;

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in catalog order. Random selection indexes into this.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use offline_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to uppercase letter
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Colour tag carried by every cell this piece leaves on the board.
    pub fn color(&self) -> ColorTag {
        match self {
            PieceKind::I => ColorTag::IBlock,
            PieceKind::O => ColorTag::OBlock,
            PieceKind::T => ColorTag::TBlock,
            PieceKind::S => ColorTag::SBlock,
            PieceKind::Z => ColorTag::ZBlock,
            PieceKind::J => ColorTag::JBlock,
            PieceKind::L => ColorTag::LBlock,
        }
    }
}

/// Colour class of an occupied cell.
///
/// One tag per piece kind. The string form matches the class names a host
/// stylesheet uses to paint filled cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    IBlock,
    OBlock,
    TBlock,
    SBlock,
    ZBlock,
    JBlock,
    LBlock,
}

impl ColorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::IBlock => "iBlock",
            ColorTag::OBlock => "oBlock",
            ColorTag::TBlock => "tBlock",
            ColorTag::SBlock => "sBlock",
            ColorTag::ZBlock => "zBlock",
            ColorTag::JBlock => "jBlock",
            ColorTag::LBlock => "lBlock",
        }
    }

    /// Piece kind this tag belongs to.
    pub fn kind(&self) -> PieceKind {
        match self {
            ColorTag::IBlock => PieceKind::I,
            ColorTag::OBlock => PieceKind::O,
            ColorTag::TBlock => PieceKind::T,
            ColorTag::SBlock => PieceKind::S,
            ColorTag::ZBlock => PieceKind::Z,
            ColorTag::JBlock => PieceKind::J,
            ColorTag::LBlock => PieceKind::L,
        }
    }
}

/// A cell on the game board
///
/// - `None`: empty cell
/// - `Some(ColorTag)`: occupied, painted with exactly one colour tag
pub type Cell = Option<ColorTag>;

/// Logical keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Down,
    Up,
}

impl Key {
    /// Resolve a host key identifier.
    ///
    /// Matching is exact: `"A"` (shifted) is not the same key as `"a"`.
    ///
    /// ```
    /// use offline_tetris_types::Key;
    ///
    /// assert_eq!(Key::from_name("ArrowDown"), Some(Key::Down));
    /// assert_eq!(Key::from_name("s"), Some(Key::Down));
    /// assert_eq!(Key::from_name("S"), None);
    /// assert_eq!(Key::from_name("Enter"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "a" => Some(Key::Left),
            "ArrowRight" | "d" => Some(Key::Right),
            "ArrowDown" | "s" => Some(Key::Down),
            "ArrowUp" | "w" => Some(Key::Up),
            _ => None,
        }
    }

    pub fn action(self) -> GameAction {
        match self {
            Key::Left => GameAction::MoveLeft,
            Key::Right => GameAction::MoveRight,
            Key::Down => GameAction::MoveDown,
            Key::Up => GameAction::Rotate,
        }
    }
}

/// Game actions that can be applied to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move the active piece one column left
    MoveLeft,
    /// Move the active piece one column right
    MoveRight,
    /// Move the active piece one row down, placing it if it has landed
    MoveDown,
    /// Rotate the active piece in place (no wall kicks)
    Rotate,
    /// Start over after game over
    Restart,
}

impl GameAction {
    /// Parse game action from camelCase string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "moveLeft" => Some(GameAction::MoveLeft),
            "moveRight" => Some(GameAction::MoveRight),
            "moveDown" => Some(GameAction::MoveDown),
            "rotate" => Some(GameAction::Rotate),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Rotate => "rotate",
            GameAction::Restart => "restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_is_left_of_center() {
        assert_eq!(SPAWN_X, 4);
        assert_eq!(SPAWN_Y, 0);
    }

    #[test]
    fn color_tags_map_back_to_kinds() {
        for kind in PieceKind::ALL {
            assert_eq!(kind.color().kind(), kind);
        }
    }

    #[test]
    fn key_names_cover_arrows_and_wasd() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_name("a"), Some(Key::Left));
        assert_eq!(Key::from_name("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_name("d"), Some(Key::Right));
        assert_eq!(Key::from_name("ArrowUp"), Some(Key::Up));
        assert_eq!(Key::from_name("w"), Some(Key::Up));
        assert_eq!(Key::from_name("x"), None);
    }

    #[test]
    fn game_action_string_forms_agree() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::MoveDown,
            GameAction::Rotate,
            GameAction::Restart,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}
