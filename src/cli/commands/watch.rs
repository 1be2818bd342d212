//! Watch command - watch two agents play one game against each other.

use std::thread;
use std::time::Duration;

use log::info;
use reversi::agent::{Agent, AgentKind, Placement, Strategy};
use reversi::board::side::Side;
use reversi::board::{Board, STARTING_POSITION_LAYOUT};
use reversi::moves::{apply_move, flips};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(long, default_value = "wolf")]
    pub black: AgentKind,
    #[structopt(long, default_value = "hono")]
    pub white: AgentKind,
    #[structopt(short, long, help = "Search depth for both agents")]
    pub depth: Option<u8>,
    #[structopt(long = "board", default_value = STARTING_POSITION_LAYOUT)]
    pub starting_position: Board,
    #[structopt(long, default_value = "black", help = "Side to move first")]
    pub first: Side,
    #[structopt(
        long = "delay",
        default_value = "0",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let mut agents = [self.black.build(self.depth), self.white.build(self.depth)];
        let mut board = self.starting_position;
        let mut side = self.first;
        let mut consecutive_passes = 0;

        println!("{}", board);

        while consecutive_passes < 2 {
            let agent: &mut Strategy = &mut agents[side as usize];
            let placement = agent.place(&board, side);

            match placement {
                Placement::Move(square) => {
                    let flipped = flips(&board, side, square).len();
                    board = match apply_move(&board, side, square) {
                        Ok(next) => next,
                        Err(error) => {
                            eprintln!("{} {} made an illegal move: {}", agent.face(), side, error);
                            std::process::exit(1);
                        }
                    };
                    consecutive_passes = 0;
                    println!(
                        "{} {} plays {} (flips {})",
                        agent.face(),
                        side,
                        square,
                        flipped
                    );
                }
                Placement::Pass => {
                    consecutive_passes += 1;
                    println!("{} {} passes", agent.face(), side);
                }
            }
            info!(
                "{} searched {} positions",
                agent.name(),
                agent.context().searched_position_count()
            );

            println!("{}", board);
            side = side.opposite();

            if self.delay_ms > 0 {
                thread::sleep(Duration::from_millis(self.delay_ms));
            }
        }

        report_result(&board);
    }
}

fn report_result(board: &Board) {
    let black = board.count(Side::Black);
    let white = board.count(Side::White);
    println!("game over: black {} - white {}", black, white);
    if black > white {
        println!("{} wins", Side::Black);
    } else if white > black {
        println!("{} wins", Side::White);
    } else {
        println!("draw");
    }
}
