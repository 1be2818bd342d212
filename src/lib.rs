//! A move-selection engine for 6x6 Reversi.
//!
//! The engine is a set of pure functions over board values: legal move
//! generation and placement (`moves`), static evaluation (`evaluate`) and
//! game tree search (`search`). The `agent` module packages a search and an
//! evaluator behind `Agent::place`.

pub mod agent;
pub mod board;
pub mod evaluate;
#[cfg(feature = "instrumentation")]
pub mod instrumentation;
pub mod moves;
pub mod prelude;
pub mod search;
