//! The Hono evaluator. It has two stages: a positional stage that weighs the
//! square table and mobility, and an endgame stage that only looks at the
//! evaluated side's stable stones and stone count.

#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::score_maps::HONO;
use super::{count_stable, mobility, positional_score, Evaluator, GamePhase, StabilityRule};
use crate::board::side::Side;
use crate::board::Board;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HonoStage {
    Early,
    Late,
}

/// The evaluator has no mid-game stage of its own. Mid-game positions still
/// have open lines almost everywhere, so the stable stone count says little
/// about them and they are scored with the positional stage.
impl From<GamePhase> for HonoStage {
    fn from(phase: GamePhase) -> Self {
        match phase {
            GamePhase::Early | GamePhase::Mid => HonoStage::Early,
            GamePhase::Late => HonoStage::Late,
        }
    }
}

pub fn score(board: &Board, side: Side, stage: HonoStage, rule: StabilityRule) -> i32 {
    match stage {
        HonoStage::Early => 10 * positional_score(board, side, &HONO) + 5 * mobility(board, side),
        HonoStage::Late => 10 * count_stable(board, side, rule) + 5 * board.count(side) as i32,
    }
}

/// Scores `board` with the stage that belongs to `phase`.
pub fn score_for_phase(board: &Board, side: Side, phase: GamePhase, rule: StabilityRule) -> i32 {
    score(board, side, HonoStage::from(phase), rule)
}

#[derive(Clone, Copy, Debug)]
pub struct HonoEvaluator {
    stage: HonoStage,
    stability: StabilityRule,
}

impl Default for HonoEvaluator {
    /// The stage used at the leaves of the negamax search.
    fn default() -> Self {
        Self::new(HonoStage::Late, StabilityRule::default())
    }
}

impl HonoEvaluator {
    pub fn new(stage: HonoStage, stability: StabilityRule) -> Self {
        Self { stage, stability }
    }

    pub fn stage(&self) -> HonoStage {
        self.stage
    }

    pub fn stability(&self) -> StabilityRule {
        self.stability
    }
}

impl Evaluator for HonoEvaluator {
    #[inline]
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    fn evaluate(&self, board: &Board, side: Side) -> i32 {
        score(board, side, self.stage, self.stability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::othello_position;

    #[test]
    fn test_mid_phase_uses_positional_stage() {
        assert_eq!(HonoStage::Early, HonoStage::from(GamePhase::Early));
        assert_eq!(HonoStage::Early, HonoStage::from(GamePhase::Mid));
        assert_eq!(HonoStage::Late, HonoStage::from(GamePhase::Late));

        let board = Board::starting_position();
        let rule = StabilityRule::default();
        assert_eq!(
            score(&board, Side::Black, HonoStage::Early, rule),
            score_for_phase(&board, Side::Black, GamePhase::Mid, rule)
        );
    }

    #[test]
    fn test_early_stage() {
        let board = Board::starting_position();
        // centre squares cancel, four moves each
        let rule = StabilityRule::default();
        assert_eq!(20, score(&board, Side::Black, HonoStage::Early, rule));

        let board = othello_position! {
            B.....
            ......
            ..BW..
            ..WB..
            ......
            ......
        };
        assert_eq!(
            10 * 100 + 5 * crate::evaluate::mobility(&board, Side::Black),
            score(&board, Side::Black, HonoStage::Early, rule)
        );
    }

    #[test]
    fn test_late_stage_only_counts_own_stones() {
        let board = othello_position! {
            BBBBBB
            BBBBBB
            BBBWWW
            WWWWWW
            WWWWWW
            WWWWWW
        };
        let evaluator = HonoEvaluator::default();
        assert_eq!(10 * 15 + 5 * 15, evaluator.evaluate(&board, Side::Black));
        assert_eq!(10 * 21 + 5 * 21, evaluator.evaluate(&board, Side::White));

        let strict = HonoEvaluator::new(HonoStage::Late, StabilityRule::OwnedLines);
        assert_eq!(5 * 15, strict.evaluate(&board, Side::Black));
    }
}
