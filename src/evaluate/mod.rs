//! Static evaluation of positions.
//!
//! The building blocks here (game phase, positional tables, stable stones,
//! mobility, stone counts) are combined by the two evaluators in `wolf` and
//! `hono`. Scores are always relative: positive favours the side the board is
//! evaluated for.

pub mod hono;
pub mod score_maps;
pub mod wolf;

use std::fmt;

use crate::board::side::Side;
use crate::board::square::Square;
use crate::board::Board;
use crate::moves::{self, DIRECTIONS};

pub use hono::{HonoEvaluator, HonoStage};
pub use score_maps::ScoreMap;
pub use wolf::WolfEvaluator;

/// Scores a board for one side.
pub trait Evaluator {
    /// Evaluates `board` from `side`'s point of view.
    fn evaluate(&self, board: &Board, side: Side) -> i32;
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn evaluate(&self, board: &Board, side: Side) -> i32 {
        (**self).evaluate(board, side)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Early,
    Mid,
    Late,
}

/// Stone counts at which the game moves into the mid and late phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseThresholds {
    pub mid: usize,
    pub late: usize,
}

impl Default for PhaseThresholds {
    fn default() -> Self {
        Self { mid: 20, late: 40 }
    }
}

impl GamePhase {
    pub fn from_stone_count(stone_count: usize, thresholds: PhaseThresholds) -> Self {
        if stone_count < thresholds.mid {
            GamePhase::Early
        } else if stone_count < thresholds.late {
            GamePhase::Mid
        } else {
            GamePhase::Late
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self {
            GamePhase::Early => "early",
            GamePhase::Mid => "mid",
            GamePhase::Late => "late",
        };
        write!(f, "{}", phase)
    }
}

/// Phase of `board` under the default thresholds.
pub fn game_phase(board: &Board) -> GamePhase {
    game_phase_with(board, PhaseThresholds::default())
}

pub fn game_phase_with(board: &Board, thresholds: PhaseThresholds) -> GamePhase {
    GamePhase::from_stone_count(board.stone_count(), thresholds)
}

/// Sum of `map` over `side`'s stones minus the sum over the opponent's.
pub fn positional_score(board: &Board, side: Side, map: &ScoreMap) -> i32 {
    let mut score = 0;
    for (y, row) in board.rows().iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            match cell {
                Some(stone) if *stone == side => score += map[y][x],
                Some(_) => score -= map[y][x],
                None => {}
            }
        }
    }
    score
}

/// How `count_stable` decides whether a stone is settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StabilityRule {
    /// No line out of the stone reaches an empty square before the edge.
    NoEmptyInLine,
    /// Every square on every line out of the stone belongs to its owner.
    OwnedLines,
}

impl Default for StabilityRule {
    fn default() -> Self {
        StabilityRule::NoEmptyInLine
    }
}

/// Counts the stones of `side` that `rule` considers stable. This is a
/// coarse approximation: it never checks whether the flanking stones can
/// themselves be flipped.
pub fn count_stable(board: &Board, side: Side, rule: StabilityRule) -> i32 {
    Square::all()
        .filter(|&square| board.get(square) == Some(side))
        .filter(|&square| is_stable(board, side, square, rule))
        .count() as i32
}

fn is_stable(board: &Board, side: Side, square: Square, rule: StabilityRule) -> bool {
    DIRECTIONS.iter().all(|&(dx, dy)| {
        let mut current = square.offset(dx, dy);
        while let Some(next) = current {
            let settled = match rule {
                StabilityRule::NoEmptyInLine => board.get(next).is_some(),
                StabilityRule::OwnedLines => board.get(next) == Some(side),
            };
            if !settled {
                return false;
            }
            current = next.offset(dx, dy);
        }
        true
    })
}

/// Number of legal moves available to `side`.
pub fn mobility(board: &Board, side: Side) -> i32 {
    moves::count_legal_moves(board, side) as i32
}

/// `side`'s stone count minus the opponent's.
pub fn disc_difference(board: &Board, side: Side) -> i32 {
    board.count(side) as i32 - board.count(side.opposite()) as i32
}
