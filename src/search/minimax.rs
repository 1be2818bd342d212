//! Fixed-depth minimax with alpha-beta pruning.

use std::time::Instant;

use log::debug;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::{SearchContext, SearchResult, SCORE_INFINITY};
use crate::board::side::Side;
use crate::board::Board;
use crate::evaluate::Evaluator;
use crate::moves;

/// Whose point of view leaf positions are evaluated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeafPerspective {
    /// The side to move at the leaf. With an odd depth, or at a leaf where
    /// the side to move is stuck, this is the minimizing side.
    SideToMove,
    /// The side to move at the root, i.e. the maximizing side.
    Root,
}

impl Default for LeafPerspective {
    fn default() -> Self {
        LeafPerspective::SideToMove
    }
}

struct Minimax<'a, E: Evaluator> {
    context: &'a mut SearchContext,
    evaluator: &'a E,
    root_side: Side,
    perspective: LeafPerspective,
    pruning: bool,
}

impl<'a, E: Evaluator> Minimax<'a, E> {
    fn evaluate_leaf(&mut self, board: &Board, side: Side) -> i32 {
        self.context.increment_evaluation_count();
        let perspective = match self.perspective {
            LeafPerspective::SideToMove => side,
            LeafPerspective::Root => self.root_side,
        };
        self.evaluator.evaluate(board, perspective)
    }

    fn search(
        &mut self,
        board: &Board,
        side: Side,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.context.increment_position_count();

        if depth == 0 {
            return SearchResult {
                score: self.evaluate_leaf(board, side),
                best_move: None,
            };
        }

        let candidates = moves::legal_moves(board, side);
        if candidates.is_empty() {
            return SearchResult {
                score: self.evaluate_leaf(board, side),
                best_move: None,
            };
        }

        let mut best = SearchResult {
            score: if maximizing {
                -SCORE_INFINITY
            } else {
                SCORE_INFINITY
            },
            best_move: None,
        };

        for &square in candidates.iter() {
            let child = moves::play(board, side, square);
            let score = self
                .search(&child, side.opposite(), depth - 1, alpha, beta, !maximizing)
                .score;

            if maximizing {
                if score > best.score {
                    best = SearchResult {
                        score,
                        best_move: Some(square),
                    };
                }
                alpha = alpha.max(score);
            } else {
                if score < best.score {
                    best = SearchResult {
                        score,
                        best_move: Some(square),
                    };
                }
                beta = beta.min(score);
            }

            if self.pruning && beta <= alpha {
                self.context.increment_cutoff_count();
                break;
            }
        }

        best
    }
}

fn run<E: Evaluator>(
    context: &mut SearchContext,
    board: &Board,
    side: Side,
    depth: u8,
    evaluator: &E,
    perspective: LeafPerspective,
    pruning: bool,
) -> SearchResult {
    let started = Instant::now();
    let mut minimax = Minimax {
        context,
        evaluator,
        root_side: side,
        perspective,
        pruning,
    };
    let result = minimax.search(board, side, depth, -SCORE_INFINITY, SCORE_INFINITY, true);
    minimax.context.record_result(result.score, started);

    debug!(
        "minimax depth {} for {}: best move {:?}, score {}",
        depth, side, result.best_move, result.score
    );
    result
}

/// Searches `depth` plies ahead for `side` and returns the best move found, or
/// no move when `side` cannot play (or `depth` is zero).
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn alpha_beta_search<E: Evaluator>(
    context: &mut SearchContext,
    board: &Board,
    side: Side,
    depth: u8,
    evaluator: &E,
    perspective: LeafPerspective,
) -> SearchResult {
    run(context, board, side, depth, evaluator, perspective, true)
}

/// Plain minimax over the full tree. Returns the same move and score as
/// `alpha_beta_search`; useful as a reference and for counting the nodes that
/// pruning saves.
pub fn minimax_without_pruning<E: Evaluator>(
    context: &mut SearchContext,
    board: &Board,
    side: Side,
    depth: u8,
    evaluator: &E,
    perspective: LeafPerspective,
) -> SearchResult {
    run(context, board, side, depth, evaluator, perspective, false)
}
