use criterion::{black_box, criterion_group, criterion_main, Criterion};
use offline_tetris::core::{Board, BoardSnapshot, GameState};
use offline_tetris::types::{ColorTag, PieceKind};
use offline_tetris::Session;

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("remove_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(ColorTag::IBlock));
                }
            }
            black_box(board.remove_full_lines());
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.spawn_kind(PieceKind::T);

    c.bench_function("move_tetromino", |b| {
        b.iter(|| {
            state.move_tetromino(black_box(1), 0);
            state.move_tetromino(black_box(-1), 0);
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.spawn_kind(PieceKind::T);
    state.move_tetromino(0, 5);

    c.bench_function("rotate_tetromino", |b| {
        b.iter(|| {
            black_box(state.rotate_tetromino());
        })
    });
}

fn bench_drop(c: &mut Criterion) {
    c.bench_function("drop_to_placement", |b| {
        let mut state = GameState::new(12345);
        b.iter(|| {
            if state.is_game_over() {
                state.restart();
            }
            while state.move_tetromino(0, 1).changed() {
                if state.active().y == 0 {
                    break;
                }
            }
        })
    });
}

fn bench_draw_board(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.spawn_kind(PieceKind::L);
    state.move_tetromino(0, 8);
    let mut snap = BoardSnapshot::default();

    c.bench_function("draw_board_into", |b| {
        b.iter(|| {
            state.draw_board_into(black_box(&mut snap));
        })
    });
}

fn bench_session_tick(c: &mut Criterion) {
    let mut session = Session::new(Default::default(), 16);
    session.start();

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            if session.game().is_game_over() {
                session.game_mut().restart();
            }
            session.tick(black_box(16));
        })
    });
}

criterion_group!(
    benches,
    bench_line_clear,
    bench_move,
    bench_rotate,
    bench_drop,
    bench_draw_board,
    bench_session_tick
);
criterion_main!(benches);
