//! Wolf: alpha-beta minimax with a search depth that grows in the late game.

use log::debug;

use super::{Agent, Placement};
use crate::board::side::Side;
use crate::board::Board;
use crate::evaluate::{game_phase_with, GamePhase, PhaseThresholds, WolfEvaluator};
use crate::search::{alpha_beta_search, LeafPerspective, SearchContext};

#[derive(Clone, Copy, Debug)]
pub struct WolfConfig {
    pub early_depth: u8,
    pub mid_depth: u8,
    pub late_depth: u8,
    /// Overrides the per-phase depths when set.
    pub fixed_depth: Option<u8>,
    pub thresholds: PhaseThresholds,
    pub perspective: LeafPerspective,
}

impl Default for WolfConfig {
    fn default() -> Self {
        Self {
            early_depth: 6,
            mid_depth: 6,
            late_depth: 7,
            fixed_depth: None,
            thresholds: PhaseThresholds::default(),
            perspective: LeafPerspective::default(),
        }
    }
}

impl WolfConfig {
    pub fn with_fixed_depth(depth: u8) -> Self {
        Self {
            fixed_depth: Some(depth),
            ..Self::default()
        }
    }

    /// Search depth for `board`. Never less than one ply: a depth-zero
    /// search never tries a move and would pass with moves on the board.
    pub fn depth_for(&self, board: &Board) -> u8 {
        let depth = match self.fixed_depth {
            Some(depth) => depth,
            None => match game_phase_with(board, self.thresholds) {
                GamePhase::Early => self.early_depth,
                GamePhase::Mid => self.mid_depth,
                GamePhase::Late => self.late_depth,
            },
        };
        depth.max(1)
    }
}

#[derive(Default)]
pub struct WolfAgent {
    config: WolfConfig,
    evaluator: WolfEvaluator,
    context: SearchContext,
}

impl WolfAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: WolfConfig) -> Self {
        Self {
            config,
            evaluator: WolfEvaluator::new(config.thresholds),
            context: SearchContext::new(),
        }
    }

    pub fn config(&self) -> &WolfConfig {
        &self.config
    }
}

impl Agent for WolfAgent {
    fn name(&self) -> &'static str {
        "wolf"
    }

    fn face(&self) -> &'static str {
        "🐺"
    }

    /// Always runs the search, even when `side` has no legal move; a search
    /// that finds no move becomes a pass.
    fn place(&mut self, board: &Board, side: Side) -> Placement {
        self.context.reset_stats();
        let depth = self.config.depth_for(board);
        let result = alpha_beta_search(
            &mut self.context,
            board,
            side,
            depth,
            &self.evaluator,
            self.config.perspective,
        );
        debug!(
            "wolf searched {} positions at depth {}",
            self.context.searched_position_count(),
            depth
        );
        Placement::from(result.best_move)
    }

    fn context(&self) -> &SearchContext {
        &self.context
    }
}
