use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use reversi::board::side::Side;
use reversi::board::Board;
use reversi::evaluate::{Evaluator, HonoEvaluator, WolfEvaluator};
use reversi::moves::{apply_move, legal_moves};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Positions from seeded random games, one per ply.
fn sample_positions() -> Vec<(Board, Side)> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut positions = Vec::new();
    let mut board = Board::starting_position();
    let mut side = Side::Black;

    for _ in 0..32 {
        positions.push((board, side));
        let moves = legal_moves(&board, side);
        let square = match moves.choose(&mut rng) {
            Some(&square) => square,
            None => break,
        };
        board = match apply_move(&board, side, square) {
            Ok(next) => next,
            Err(_) => break,
        };
        side = side.opposite();
    }

    positions
}

fn criterion_benchmark(c: &mut Criterion) {
    let positions = sample_positions();

    c.bench_function("legal moves", |b| {
        b.iter(|| {
            positions
                .iter()
                .map(|(board, side)| legal_moves(black_box(board), *side).len())
                .sum::<usize>()
        })
    });

    c.bench_function("apply every legal move", |b| {
        b.iter(|| {
            let mut stones = 0;
            for (board, side) in &positions {
                for &square in legal_moves(board, *side).iter() {
                    if let Ok(next) = apply_move(black_box(board), *side, square) {
                        stones += next.stone_count();
                    }
                }
            }
            stones
        })
    });

    let wolf = WolfEvaluator::default();
    let hono = HonoEvaluator::default();
    c.bench_function("evaluate", |b| {
        b.iter(|| {
            positions
                .iter()
                .map(|(board, side)| {
                    wolf.evaluate(black_box(board), *side) + hono.evaluate(black_box(board), *side)
                })
                .sum::<i32>()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
