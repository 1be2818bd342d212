//! Hono: negamax alpha-beta at a fixed depth, scoring every leaf with the
//! endgame stage of the Hono evaluator.

use log::{debug, info};

use super::{Agent, Placement};
use crate::board::side::Side;
use crate::board::Board;
use crate::evaluate::{Evaluator, HonoEvaluator, HonoStage, StabilityRule};
use crate::moves::has_any_legal_move;
use crate::search::{negamax_search, SearchContext};

#[derive(Clone, Copy, Debug)]
pub struct HonoConfig {
    /// Plies searched below each root move.
    pub depth: u8,
    /// Rule used to count stable stones at the leaves. `OwnedLines` is the
    /// stricter count Hono was first tuned with; the default is the rule
    /// Wolf uses.
    pub stability: StabilityRule,
}

impl Default for HonoConfig {
    fn default() -> Self {
        Self {
            depth: 5,
            stability: StabilityRule::default(),
        }
    }
}

pub struct HonoAgent<E: Evaluator = HonoEvaluator> {
    config: HonoConfig,
    evaluator: E,
    context: SearchContext,
}

impl Default for HonoAgent {
    fn default() -> Self {
        Self::with_config(HonoConfig::default())
    }
}

impl HonoAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HonoConfig) -> Self {
        let evaluator = HonoEvaluator::new(HonoStage::Late, config.stability);
        Self::with_evaluator(config, evaluator)
    }
}

impl<E: Evaluator> HonoAgent<E> {
    pub fn with_evaluator(config: HonoConfig, evaluator: E) -> Self {
        Self {
            config,
            evaluator,
            context: SearchContext::new(),
        }
    }

    pub fn config(&self) -> &HonoConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }
}

impl<E: Evaluator> Agent for HonoAgent<E> {
    fn name(&self) -> &'static str {
        "hono"
    }

    fn face(&self) -> &'static str {
        "🐼"
    }

    /// Passes without searching when `side` has no legal move. Otherwise
    /// always returns one of the legal moves.
    fn place(&mut self, board: &Board, side: Side) -> Placement {
        self.context.reset_stats();
        if !has_any_legal_move(board, side) {
            info!("hono: no valid moves for {}, passing", side);
            return Placement::Pass;
        }

        match negamax_search(
            &mut self.context,
            board,
            side,
            self.config.depth,
            &self.evaluator,
        ) {
            Ok(result) => {
                debug!(
                    "hono searched {} positions, best score {}",
                    self.context.searched_position_count(),
                    result.score
                );
                Placement::from(result.best_move)
            }
            Err(error) => {
                debug!("hono search failed: {}", error);
                Placement::Pass
            }
        }
    }

    fn context(&self) -> &SearchContext {
        &self.context
    }
}
