//! Count positions command - compare the nodes visited with and without
//! alpha-beta pruning.

use std::str::FromStr;
use std::time::{Duration, Instant};

use reversi::board::side::Side;
use reversi::board::Board;
use reversi::evaluate::WolfEvaluator;
use reversi::search::{
    alpha_beta_search, minimax_without_pruning, LeafPerspective, SearchContext,
};
use structopt::StructOpt;

use super::Command;

#[derive(Debug)]
pub enum CountPositionsStrategy {
    All,
    AlphaBeta,
}

impl FromStr for CountPositionsStrategy {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CountPositionsStrategy::All),
            "alpha-beta" => Ok(CountPositionsStrategy::AlphaBeta),
            _ => Err("invalid strategy; options are: all, alpha-beta"),
        }
    }
}

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short, long, default_value = "all")]
    pub strategy: CountPositionsStrategy,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        let board = Board::starting_position();
        let evaluator = WolfEvaluator::default();

        let mut total_positions = 0;
        let mut total_duration = Duration::from_secs(0);

        for depth in 1..=self.depth {
            let mut context = SearchContext::new();
            let started = Instant::now();
            match self.strategy {
                CountPositionsStrategy::All => minimax_without_pruning(
                    &mut context,
                    &board,
                    Side::Black,
                    depth,
                    &evaluator,
                    LeafPerspective::default(),
                ),
                CountPositionsStrategy::AlphaBeta => alpha_beta_search(
                    &mut context,
                    &board,
                    Side::Black,
                    depth,
                    &evaluator,
                    LeafPerspective::default(),
                ),
            };
            let duration = started.elapsed();
            let count = context.searched_position_count();
            let positions_per_second = count as f64 / duration.as_secs_f64();

            total_positions += count;
            total_duration += duration;

            println!(
                "depth: {}, positions: {}, cutoffs: {}, positions per second: {:.0}",
                depth,
                count,
                context.cutoff_count(),
                positions_per_second
            );
        }

        println!(
            "total positions: {}, total duration: {:?}, positions per second: {:.0}",
            total_positions,
            total_duration,
            total_positions as f64 / total_duration.as_secs_f64()
        );
    }
}
