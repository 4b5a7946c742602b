//! Pieces tests - shape catalog and rotation

use offline_tetris::core::{get_shape, try_rotate, Board, Shape};
use offline_tetris::types::{ColorTag, PieceKind};

fn cells(shape: &Shape) -> Vec<(i8, i8)> {
    shape.filled().collect()
}

#[test]
fn test_catalog_dimensions() {
    let dims: Vec<(u8, u8)> = PieceKind::ALL
        .iter()
        .map(|&k| {
            let s = get_shape(k);
            (s.rows(), s.cols())
        })
        .collect();

    assert_eq!(
        dims,
        vec![(1, 4), (2, 2), (2, 3), (2, 3), (2, 3), (2, 3), (2, 3)]
    );
}

#[test]
fn test_shapes_have_tight_bounding_boxes() {
    for kind in PieceKind::ALL {
        let s = get_shape(kind);
        for r in 0..s.rows() as usize {
            assert!((0..s.cols() as usize).any(|c| s.is_filled(r, c)), "{:?} row {}", kind, r);
        }
        for c in 0..s.cols() as usize {
            assert!((0..s.rows() as usize).any(|r| s.is_filled(r, c)), "{:?} col {}", kind, c);
        }
    }
}

#[test]
fn test_t_shape_cells() {
    let t = get_shape(PieceKind::T);
    assert_eq!(cells(&t), vec![(1, 0), (0, 1), (1, 1), (2, 1)]);
}

#[test]
fn test_rotation_formula() {
    // rotated[i][j] = shape[j][cols - 1 - i]
    let j = get_shape(PieceKind::J);
    let r = j.rotated();

    assert_eq!((r.rows(), r.cols()), (3, 2));
    assert_eq!(r, Shape::from_rows(&[&[0, 1], &[0, 1], &[1, 1]]));

    let l = get_shape(PieceKind::L).rotated();
    assert_eq!(l, Shape::from_rows(&[&[1, 1], &[0, 1], &[0, 1]]));
}

#[test]
fn test_four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let s = get_shape(kind);
        assert_eq!(s.rotated().rotated().rotated().rotated(), s, "{:?}", kind);
    }
}

#[test]
fn test_o_rotation_is_identity() {
    let o = get_shape(PieceKind::O);
    assert_eq!(o.rotated(), o);
}

#[test]
fn test_try_rotate_checks_rotated_shape() {
    // A block directly below the bar's left end. The horizontal bar does not
    // touch it, the vertical bar does.
    let mut board = Board::new();
    board.set(4, 2, Some(ColorTag::ZBlock));
    let bar = get_shape(PieceKind::I);
    assert!(!board.collides(&bar, 4, 0));

    let result = try_rotate(&bar, 4, 0, |s, x, y| board.collides(s, x, y));
    assert_eq!(result, None);

    let result = try_rotate(&bar, 5, 0, |s, x, y| board.collides(s, x, y));
    assert_eq!(result, Some(bar.rotated()));
}
