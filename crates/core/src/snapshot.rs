use crate::types::{Cell, ColorTag, PieceKind, BOARD_COLS, BOARD_ROWS};

/// Renderable grid: the placed blocks with the falling piece painted on top.
///
/// Produced by [`GameState::draw_board`](crate::GameState::draw_board). The
/// host paints `cells` as fixed-size squares; nothing here feeds back into the
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    pub cells: [[Cell; BOARD_COLS as usize]; BOARD_ROWS as usize],
    pub active: Option<PieceKind>,
    pub lines_removed: u32,
    pub pieces_placed: u32,
    pub game_over: bool,
}

impl BoardSnapshot {
    pub fn clear(&mut self) {
        self.cells = [[None; BOARD_COLS as usize]; BOARD_ROWS as usize];
        self.active = None;
        self.lines_removed = 0;
        self.pieces_placed = 0;
        self.game_over = false;
    }

    /// Cell at (x, y), `None` when out of range.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn color_at(&self, x: usize, y: usize) -> Option<ColorTag> {
        self.get(x, y).flatten()
    }

    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|c| c.is_some())
            .count()
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            cells: [[None; BOARD_COLS as usize]; BOARD_ROWS as usize],
            active: None,
            lines_removed: 0,
            pieces_placed: 0,
            game_over: false,
        }
    }
}
