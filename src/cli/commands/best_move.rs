//! Best move command - ask an agent for its move in a given position.

use log::info;
use reversi::agent::{Agent, AgentKind};
use reversi::board::side::Side;
use reversi::board::{Board, STARTING_POSITION_LAYOUT};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(long = "board", default_value = STARTING_POSITION_LAYOUT)]
    pub board: Board,
    #[structopt(short, long, default_value = "black")]
    pub side: Side,
    #[structopt(short, long, default_value = "wolf")]
    pub agent: AgentKind,
    #[structopt(short, long)]
    pub depth: Option<u8>,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let mut agent = self.agent.build(self.depth);
        let placement = agent.place(&self.board, self.side);

        let context = agent.context();
        info!(
            "{} {} searched {} positions in {:?}",
            agent.face(),
            agent.name(),
            context.searched_position_count(),
            context.last_search_duration().unwrap_or_default()
        );

        println!("{}", placement);
    }
}
