//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_move::BestMoveArgs, count_positions::CountPositionsArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(name = "reversi", about = "A 6x6 Reversi engine implemented in Rust ⚫⚪")]
pub enum Reversi {
    #[structopt(
        name = "best-move",
        about = "Ask an agent (`--agent wolf|hono`, default: wolf) for its move for `--side` in the position given with `--board` (default: starting position). Prints the square, e.g. `d2`, or `pass`. `--depth` replaces the agent's search depth."
    )]
    BestMove(BestMoveArgs),
    #[structopt(
        name = "watch",
        about = "Watch two agents play one game against each other. `--black` and `--white` pick the agents (default: wolf vs hono); the game starts from `--board` (default: starting position)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the positions searched from the starting position for each depth up to `--depth` (default: 4), with plain minimax (`--strategy all`, default) or with alpha-beta pruning (`--strategy alpha-beta`)."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for Reversi {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            BestMove(cmd),
            Watch(cmd),
            CountPositions(cmd),
        }
    }
}
