//! Alpha-beta search in negamax form.
//!
//! Every node scores the position for its own side to move, and a child's
//! score is negated on the way up. A node that has no legal move before the
//! depth runs out returns the alpha bound it was given, so a stuck opponent
//! looks as good as the window allows.

use std::time::Instant;

use log::debug;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::{SearchContext, SearchError, SearchResult, SCORE_INFINITY};
use crate::board::side::Side;
use crate::board::square::Square;
use crate::board::Board;
use crate::evaluate::Evaluator;
use crate::moves;

struct Negamax<'a, E: Evaluator> {
    context: &'a mut SearchContext,
    evaluator: &'a E,
}

impl<'a, E: Evaluator> Negamax<'a, E> {
    fn evaluate_future(
        &mut self,
        board: &Board,
        side: Side,
        depth: u8,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        self.context.increment_position_count();

        if depth == 0 {
            self.context.increment_evaluation_count();
            return self.evaluator.evaluate(board, side);
        }

        for square in Square::all() {
            if !moves::is_legal_move(board, side, square) {
                continue;
            }

            let child = moves::play(board, side, square);
            let score = -self.evaluate_future(&child, side.opposite(), depth - 1, -beta, -alpha);
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                self.context.increment_cutoff_count();
                return alpha;
            }
        }

        alpha
    }
}

/// Tries every legal move for `side` and scores each reply tree `depth` plies
/// deep with a full window. The root is not pruned. Ties go to the earliest
/// move in row-major order.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn negamax_search<E: Evaluator>(
    context: &mut SearchContext,
    board: &Board,
    side: Side,
    depth: u8,
    evaluator: &E,
) -> Result<SearchResult, SearchError> {
    let started = Instant::now();
    let mut negamax = Negamax { context, evaluator };
    negamax.context.increment_position_count();

    let mut best: Option<SearchResult> = None;
    for &square in moves::legal_moves(board, side).iter() {
        let child = moves::play(board, side, square);
        let score = -negamax.evaluate_future(
            &child,
            side.opposite(),
            depth,
            -SCORE_INFINITY,
            SCORE_INFINITY,
        );
        debug!("negamax: {} on {} scores {}", side, square, score);

        if best.map_or(true, |current| score > current.score) {
            best = Some(SearchResult {
                score,
                best_move: Some(square),
            });
        }
    }

    let result = best.ok_or(SearchError::NoAvailableMoves)?;
    negamax.context.record_result(result.score, started);
    Ok(result)
}
