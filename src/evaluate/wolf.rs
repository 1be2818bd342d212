//! The Wolf evaluator: phase-weighted positional tables plus stone count,
//! stable stone and mobility terms.

#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::score_maps::{ScoreMap, WOLF_EARLY, WOLF_LATE, WOLF_MID};
use super::{
    count_stable, disc_difference, game_phase_with, mobility, positional_score, Evaluator,
    GamePhase, PhaseThresholds, StabilityRule,
};
use crate::board::side::Side;
use crate::board::Board;

const DISC_WEIGHT: i32 = 5;
const STABLE_WEIGHT: i32 = 11;
const MOBILITY_WEIGHT: i32 = 6;
const EARLY_MOBILITY_BONUS: i32 = 6;
const LATE_DISC_BONUS: i32 = 10;

pub fn score_map(phase: GamePhase) -> &'static ScoreMap {
    match phase {
        GamePhase::Early => &WOLF_EARLY,
        GamePhase::Mid => &WOLF_MID,
        GamePhase::Late => &WOLF_LATE,
    }
}

/// Scores `board` for `side`. The early mobility bonus and the late disc
/// bonus are layered on top of the base terms, so both terms are counted
/// twice in their phase.
pub fn score(board: &Board, side: Side, thresholds: PhaseThresholds) -> i32 {
    let phase = game_phase_with(board, thresholds);
    let discs = disc_difference(board, side);
    let stable = count_stable(board, side, StabilityRule::NoEmptyInLine)
        - count_stable(board, side.opposite(), StabilityRule::NoEmptyInLine);
    let mobility = mobility(board, side);

    let mut score = positional_score(board, side, score_map(phase))
        + DISC_WEIGHT * discs
        + STABLE_WEIGHT * stable
        + MOBILITY_WEIGHT * mobility;

    match phase {
        GamePhase::Early => score += EARLY_MOBILITY_BONUS * mobility,
        GamePhase::Late => score += LATE_DISC_BONUS * discs,
        GamePhase::Mid => {}
    }

    score
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WolfEvaluator {
    thresholds: PhaseThresholds,
}

impl WolfEvaluator {
    pub fn new(thresholds: PhaseThresholds) -> Self {
        Self { thresholds }
    }
}

impl Evaluator for WolfEvaluator {
    #[inline]
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    fn evaluate(&self, board: &Board, side: Side) -> i32 {
        score(board, side, self.thresholds)
    }
}
