//! Game tree search.
//!
//! Two searches share this module:
//!
//! - `minimax`: minimax with alpha-beta pruning, always maximizing for the
//!   side to move at the root. A side with no legal move ends the line and is
//!   evaluated on the spot (there is no pass inside the tree). A pruning-free
//!   variant with identical leaf and ordering rules is kept as a reference.
//! - `negamax`: alpha-beta in negamax form. The root tries every move with a
//!   full window; pruning only happens below it.
//!
//! Moves are always tried in row-major order and a later move only replaces
//! the current best when it scores strictly better, so the first of several
//! equally good moves wins.
//!
//! Both searches work on board values: every child is a fresh copy of its
//! parent, so nothing is undone on the way back up.

pub mod minimax;
pub mod negamax;

#[cfg(test)]
mod tests;

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::board::square::Square;

pub use minimax::{alpha_beta_search, minimax_without_pruning, LeafPerspective};
pub use negamax::negamax_search;

/// Bound used for the initial search window. It is symmetric so that scores
/// can be negated without overflow.
pub const SCORE_INFINITY: i32 = i32::MAX;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
}

/// Outcome of a search: the backed-up score and the move that achieves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<Square>,
}

/// Statistics collected during search.
#[derive(Clone, Copy, Debug, Default)]
struct SearchStats {
    position_count: usize,
    evaluation_count: usize,
    cutoff_count: usize,
    last_score: Option<i32>,
    last_duration: Option<Duration>,
}

/// Per-agent search bookkeeping. Nothing in here influences which move is
/// chosen.
#[derive(Clone, Debug, Default)]
pub struct SearchContext {
    stats: SearchStats,
}

impl SearchContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Number of nodes visited, the root included.
    pub fn searched_position_count(&self) -> usize {
        self.stats.position_count
    }

    pub fn evaluation_count(&self) -> usize {
        self.stats.evaluation_count
    }

    pub fn cutoff_count(&self) -> usize {
        self.stats.cutoff_count
    }

    pub fn last_score(&self) -> Option<i32> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }

    #[inline(always)]
    fn increment_position_count(&mut self) {
        self.stats.position_count += 1;
    }

    #[inline(always)]
    fn increment_evaluation_count(&mut self) {
        self.stats.evaluation_count += 1;
    }

    #[inline(always)]
    fn increment_cutoff_count(&mut self) {
        self.stats.cutoff_count += 1;
    }

    fn record_result(&mut self, score: i32, started: Instant) {
        self.stats.last_score = Some(score);
        self.stats.last_duration = Some(started.elapsed());
    }
}
