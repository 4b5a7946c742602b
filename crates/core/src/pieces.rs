//! Pieces module - tetromino shape matrices and rotation
//!
//! Shapes are small boolean matrices anchored at their top-left corner with a
//! tight bounding box (no empty border rows or columns). Rotation is a single
//! fixed transform: transpose columns into rows, then reverse the row order.
//! There is no second direction and no wall-kick table.

use crate::types::PieceKind;

/// Largest side of any shape matrix.
pub const MAX_SHAPE: usize = 4;

/// A shape matrix of up to 4x4 cells.
///
/// Only the `rows x cols` top-left region is meaningful; cells outside it are
/// always `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE]; MAX_SHAPE],
}

impl Shape {
    /// Build a shape from 0/1 rows.
    ///
    /// Rows shorter than the widest row are padded with empty cells. Input
    /// larger than 4x4 is truncated.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len().min(MAX_SHAPE);
        let width = rows
            .iter()
            .take(height)
            .map(|r| r.len())
            .max()
            .unwrap_or(0)
            .min(MAX_SHAPE);

        let mut cells = [[false; MAX_SHAPE]; MAX_SHAPE];
        for (r, row) in rows.iter().take(height).enumerate() {
            for (c, &v) in row.iter().take(width).enumerate() {
                cells[r][c] = v != 0;
            }
        }

        Self {
            rows: height as u8,
            cols: width as u8,
            cells,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at (`row`, `col`) is filled. Out of range is empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Offsets `(dx, dy)` of every filled cell, row by row.
    pub fn filled(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (c as i8, r as i8))
        })
    }

    /// Rotate by 90 degrees: transpose, then reverse the row order.
    ///
    /// `rotated[i][j] = shape[j][cols - 1 - i]`. Dimensions swap, so a
    /// `1x4` bar becomes `4x1`.
    pub fn rotated(&self) -> Self {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut cells = [[false; MAX_SHAPE]; MAX_SHAPE];
        for (i, out_row) in cells.iter_mut().enumerate().take(cols) {
            for (j, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[j][cols - 1 - i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// Spawn shape for a piece kind.
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::J => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
    }
}

/// Try to rotate a shape in place.
///
/// Returns the rotated shape if it fits at (`x`, `y`) according to
/// `collides`, `None` otherwise. No alternative offsets are tried.
pub fn try_rotate(
    shape: &Shape,
    x: i8,
    y: i8,
    collides: impl Fn(&Shape, i8, i8) -> bool,
) -> Option<Shape> {
    let rotated = shape.rotated();
    if collides(&rotated, x, y) {
        None
    } else {
        Some(rotated)
    }
}
