//! Search tests.
//!
//! Test coverage:
//! - Alpha-beta agrees with pruning-free minimax on random positions
//! - Tie breaking keeps the first move in row-major order
//! - Leaf perspective and positions where the side to move is stuck
//! - Negamax root behaviour and statistics

use std::cell::Cell;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::*;
use crate::board::side::Side;
use crate::board::square::*;
use crate::board::Board;
use crate::evaluate::{disc_difference, Evaluator, HonoEvaluator, WolfEvaluator};
use crate::moves::{apply_move, legal_moves};
use crate::othello_position;

struct DiscEvaluator;

impl Evaluator for DiscEvaluator {
    fn evaluate(&self, board: &Board, side: Side) -> i32 {
        disc_difference(board, side)
    }
}

#[derive(Default)]
struct ConstantEvaluator {
    calls: Cell<usize>,
}

impl Evaluator for ConstantEvaluator {
    fn evaluate(&self, _board: &Board, _side: Side) -> i32 {
        self.calls.set(self.calls.get() + 1);
        7
    }
}

/// Plays `plies` random legal moves from the starting position, passing
/// when stuck.
fn random_position(rng: &mut StdRng, plies: usize) -> (Board, Side) {
    let mut board = Board::starting_position();
    let mut side = Side::Black;
    for _ in 0..plies {
        let moves = legal_moves(&board, side);
        if let Some(&square) = moves.choose(rng) {
            board = apply_move(&board, side, square).unwrap();
        } else if legal_moves(&board, side.opposite()).is_empty() {
            break;
        }
        side = side.opposite();
    }
    (board, side)
}

fn assert_pruning_agrees<E: Evaluator>(evaluator: &E, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);

    for plies in (0..30).step_by(3) {
        let (board, side) = random_position(&mut rng, plies);
        for depth in 1..=3 {
            for &perspective in &[LeafPerspective::SideToMove, LeafPerspective::Root] {
                let mut pruned_context = SearchContext::new();
                let mut full_context = SearchContext::new();
                let pruned =
                    alpha_beta_search(&mut pruned_context, &board, side, depth, evaluator, perspective);
                let full = minimax_without_pruning(
                    &mut full_context,
                    &board,
                    side,
                    depth,
                    evaluator,
                    perspective,
                );
                assert_eq!(
                    full, pruned,
                    "depth {} {:?} for {} on\n{}",
                    depth, perspective, side, board
                );
                assert!(
                    pruned_context.searched_position_count()
                        <= full_context.searched_position_count()
                );
                assert_eq!(0, full_context.cutoff_count());
            }
        }
    }
}

#[test]
fn test_alpha_beta_matches_minimax_with_wolf_evaluator() {
    assert_pruning_agrees(&WolfEvaluator::default(), 1);
}

#[test]
fn test_alpha_beta_matches_minimax_with_hono_evaluator() {
    assert_pruning_agrees(&HonoEvaluator::default(), 2);
}

#[test]
fn test_alpha_beta_matches_minimax_with_disc_evaluator() {
    assert_pruning_agrees(&DiscEvaluator, 3);
}

#[test]
fn test_pruning_saves_nodes_at_depth_three() {
    let board = Board::starting_position();
    let evaluator = WolfEvaluator::default();
    let mut pruned = SearchContext::new();
    let mut full = SearchContext::new();
    alpha_beta_search(
        &mut pruned,
        &board,
        Side::Black,
        3,
        &evaluator,
        LeafPerspective::Root,
    );
    minimax_without_pruning(
        &mut full,
        &board,
        Side::Black,
        3,
        &evaluator,
        LeafPerspective::Root,
    );
    assert!(pruned.cutoff_count() > 0);
    assert!(pruned.searched_position_count() < full.searched_position_count());
}

#[test]
fn test_ties_keep_first_move() {
    let board = Board::starting_position();
    let evaluator = ConstantEvaluator::default();
    let mut context = SearchContext::new();

    let result = alpha_beta_search(
        &mut context,
        &board,
        Side::Black,
        2,
        &evaluator,
        LeafPerspective::default(),
    );
    assert_eq!(Some(D2), result.best_move);
    assert_eq!(7, result.score);

    let result = negamax_search(&mut context, &board, Side::White, 2, &evaluator).unwrap();
    assert_eq!(Some(C2), result.best_move);
}

#[test]
fn test_leaf_perspective() {
    let board = othello_position! {
        BWWW..
        ......
        ..BW..
        ..WB..
        ......
        ......
    };
    let mut context = SearchContext::new();

    let root = alpha_beta_search(
        &mut context,
        &board,
        Side::Black,
        1,
        &DiscEvaluator,
        LeafPerspective::Root,
    );
    assert_eq!(Some(E1), root.best_move);
    assert_eq!(5, root.score);

    // at depth one the leaves belong to white, so black maximizes white's view
    let side_to_move = alpha_beta_search(
        &mut context,
        &board,
        Side::Black,
        1,
        &DiscEvaluator,
        LeafPerspective::SideToMove,
    );
    assert_eq!(-1, side_to_move.score);
    assert_ne!(Some(E1), side_to_move.best_move);
}

#[test]
fn test_depth_zero_and_stuck_positions_are_leaves() {
    let evaluator = ConstantEvaluator::default();
    let mut context = SearchContext::new();

    let result = alpha_beta_search(
        &mut context,
        &Board::starting_position(),
        Side::Black,
        0,
        &evaluator,
        LeafPerspective::default(),
    );
    assert_eq!(None, result.best_move);
    assert_eq!(1, context.searched_position_count());

    let stuck = othello_position! {
        BBBBBB
        BBBBBB
        BBBBBB
        BBBBBB
        BBBBBB
        BBBBB.
    };
    context.reset_stats();
    let result = alpha_beta_search(
        &mut context,
        &stuck,
        Side::White,
        6,
        &evaluator,
        LeafPerspective::default(),
    );
    assert_eq!(SearchResult { score: 7, best_move: None }, result);
    assert_eq!(1, context.searched_position_count());
    assert_eq!(1, context.evaluation_count());
    assert_eq!(2, evaluator.calls.get());
}

#[test]
fn test_negamax_without_moves_is_an_error() {
    let stuck = othello_position! {
        WWWWWW
        WWWWWW
        WWWWWW
        WWWWWW
        WWWWWW
        WWWWW.
    };
    let mut context = SearchContext::new();
    assert_eq!(
        Err(SearchError::NoAvailableMoves),
        negamax_search(&mut context, &stuck, Side::Black, 5, &HonoEvaluator::default())
    );
}

#[test]
fn test_negamax_picks_a_legal_move_and_records_stats() {
    let board = Board::starting_position();
    let mut context = SearchContext::new();
    let result =
        negamax_search(&mut context, &board, Side::Black, 3, &HonoEvaluator::default()).unwrap();

    let moves = legal_moves(&board, Side::Black);
    assert!(moves.contains(&result.best_move.unwrap()));
    assert_eq!(Some(result.score), context.last_score());
    assert!(context.last_search_duration().is_some());
    assert!(context.searched_position_count() > moves.len());
}

#[test]
fn test_negamax_takes_a_winning_capture() {
    // e1 captures the whole top row and leaves white with no stones to reply
    let board = othello_position! {
        BWWW..
        ......
        ......
        ......
        ......
        ......
    };
    let mut context = SearchContext::new();
    let result = negamax_search(&mut context, &board, Side::Black, 2, &DiscEvaluator).unwrap();
    assert_eq!(Some(E1), result.best_move);
}

#[test]
fn test_negamax_stuck_node_returns_its_alpha() {
    // after e1 white has no stones left; its node gets a full window and
    // hands back -SCORE_INFINITY instead of evaluating the board
    let board = othello_position! {
        BWWW..
        ......
        ......
        ......
        ......
        ......
    };
    let mut context = SearchContext::new();
    let result = negamax_search(&mut context, &board, Side::Black, 2, &DiscEvaluator).unwrap();
    assert_eq!(SCORE_INFINITY, result.score);
    assert_eq!(Some(SCORE_INFINITY), context.last_score());
    assert_eq!(0, context.evaluation_count());
}
