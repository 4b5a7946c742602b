//! Board module - manages the game grid
//!
//! The board is a 20x10 grid where each cell is either empty or holds the
//! colour tag of the piece that was merged into it.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the board (negative y) exist only while a piece is entering.

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, ColorTag, BOARD_COLS, BOARD_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_ROWS as usize) * (BOARD_COLS as usize);

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * COLS + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_COLS as i8 || y < 0 || y >= BOARD_ROWS as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_COLS as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_COLS
    }

    pub fn height(&self) -> u8 {
        BOARD_ROWS
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether a single cell would collide with a piece mino.
    ///
    /// Columns outside the board and rows at or below the floor collide.
    /// Rows above the board never do.
    #[inline]
    pub fn blocks(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_COLS as i8 || y >= BOARD_ROWS as i8 {
            return true;
        }
        y >= 0 && self.is_occupied(x, y)
    }

    /// Check whether `shape` with its top-left corner at (x, y) collides.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape
            .filled()
            .any(|(dx, dy)| self.blocks(x.saturating_add(dx), y.saturating_add(dy)))
    }

    /// Write every filled cell of `shape` at (x, y) into the board.
    ///
    /// Cells above the top edge are dropped; nothing else is checked.
    pub fn merge(&mut self, shape: &Shape, x: i8, y: i8, tag: ColorTag) {
        for (dx, dy) in shape.filled() {
            let py = y.saturating_add(dy);
            if py >= 0 {
                self.set(x.saturating_add(dx), py, Some(tag));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Borrow one row
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_ROWS as usize {
            return None;
        }
        let start = y * BOARD_COLS as usize;
        Some(&self.cells[start..start + BOARD_COLS as usize])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_COLS as usize)
    }

    /// Remove all full rows and return their original indices (bottom to top).
    ///
    /// Surviving rows keep their relative order and settle at the bottom; the
    /// board is padded at the top with as many empty rows as were removed.
    /// Uses a two-pointer compaction with zero allocation.
    pub fn remove_full_lines(&mut self) -> ArrayVec<u8, { BOARD_ROWS as usize }> {
        let mut removed = ArrayVec::new();
        let width = BOARD_COLS as usize;
        let mut write_y = BOARD_ROWS as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_ROWS as usize).rev() {
            if self.is_row_full(read_y) {
                removed.push(read_y as u8);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Everything above the last written row is new, empty space
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        removed
    }

    /// Copy the board into a row-major 2D grid.
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_COLS as usize]; BOARD_ROWS as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from text rows, bottom-aligned.
    ///
    /// `.` or space is empty; any other character is occupied with `tag`.
    /// Rows beyond the board size are ignored. Handy for fixtures.
    pub fn from_ascii(rows: &[&str], tag: ColorTag) -> Self {
        let mut board = Self::new();
        let skip = rows.len().saturating_sub(BOARD_ROWS as usize);
        let offset = BOARD_ROWS as usize - (rows.len() - skip);
        for (i, line) in rows.iter().skip(skip).enumerate() {
            let y = (offset + i) as i8;
            for (x, ch) in line.chars().take(BOARD_COLS as usize).enumerate() {
                if ch != '.' && ch != ' ' {
                    board.set(x as i8, y, Some(tag));
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
