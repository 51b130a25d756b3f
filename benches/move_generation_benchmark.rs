//! Benchmarks for legal move generation, the dominant cost of both search and
//! terminal-state detection.

use minimax_chess::board::{castle_rights::CastleRights, color::Color, Board};
use minimax_chess::chess_position;
use minimax_chess::move_generator::{count_positions, generate_moves};
use minimax_chess::rules;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Test positions representing different game phases and move complexity.
fn benchmark_positions() -> Vec<(&'static str, Board)> {
    vec![
        ("starting", Board::starting_position()),
        (
            "tactical",
            chess_position! {
                ....r..k
                ....q...
                ........
                ........
                ........
                ........
                .....PPP
                R.....K.
            },
        ),
        ("middlegame", {
            let mut board = chess_position! {
                r...k..r
                ppp..ppp
                ..n..q..
                ...pp...
                ..B.P.b.
                ..NP.N..
                PPP..PPP
                R..QK..R
            };
            board.set_castle_rights(CastleRights::all());
            board
        }),
    ]
}

fn bench_generate_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_moves");
    for (name, board) in benchmark_positions() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &board, |b, board| {
            let mut board = board.clone();
            b.iter(|| black_box(generate_moves(&mut board, Color::White)));
        });
    }
    group.finish();
}

fn bench_game_ending(c: &mut Criterion) {
    let mut group = c.benchmark_group("game_ending");
    for (name, board) in benchmark_positions() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &board, |b, board| {
            b.iter(|| black_box(rules::game_ending(board, Color::Black)));
        });
    }
    group.finish();
}

fn bench_count_positions(c: &mut Criterion) {
    c.bench_function("count positions depth 3", |b| {
        b.iter(|| {
            let mut board = Board::starting_position();
            black_box(count_positions(3, &mut board, Color::White))
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_generate_moves, bench_game_ending, bench_count_positions
}
criterion_main!(benches);
