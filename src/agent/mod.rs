//! Agents wrap a search and an evaluator behind a single "pick a move"
//! call.

pub mod hono;
pub mod wolf;


use std::fmt;
use std::str::FromStr;

use crate::board::side::Side;
use crate::board::square::Square;
use crate::board::Board;
use crate::search::SearchContext;

pub use hono::{HonoAgent, HonoConfig};
pub use wolf::{WolfAgent, WolfConfig};

/// What an agent decided to do. `Pass` means the side has no legal move and
/// the turn goes to the opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Move(Square),
    Pass,
}

impl Placement {
    pub fn square(&self) -> Option<Square> {
        match self {
            Placement::Move(square) => Some(*square),
            Placement::Pass => None,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Placement::Pass)
    }
}

impl From<Option<Square>> for Placement {
    fn from(square: Option<Square>) -> Self {
        square.map_or(Placement::Pass, Placement::Move)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::Move(square) => write!(f, "{}", square),
            Placement::Pass => write!(f, "pass"),
        }
    }
}

pub trait Agent {
    fn name(&self) -> &'static str;

    fn face(&self) -> &'static str;

    /// Chooses a placement for `side` on `board`.
    fn place(&mut self, board: &Board, side: Side) -> Placement;

    /// Statistics from the most recent search.
    fn context(&self) -> &SearchContext;
}

/// The available agents behind one type.
pub enum Strategy {
    Wolf(WolfAgent),
    Hono(HonoAgent),
}

impl Strategy {
    fn agent(&self) -> &dyn Agent {
        match self {
            Strategy::Wolf(agent) => agent,
            Strategy::Hono(agent) => agent,
        }
    }

    fn agent_mut(&mut self) -> &mut dyn Agent {
        match self {
            Strategy::Wolf(agent) => agent,
            Strategy::Hono(agent) => agent,
        }
    }
}

impl Agent for Strategy {
    fn name(&self) -> &'static str {
        self.agent().name()
    }

    fn face(&self) -> &'static str {
        self.agent().face()
    }

    fn place(&mut self, board: &Board, side: Side) -> Placement {
        self.agent_mut().place(board, side)
    }

    fn context(&self) -> &SearchContext {
        self.agent().context()
    }
}

/// Agent names as accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentKind {
    Wolf,
    Hono,
}

impl AgentKind {
    /// Builds the agent with its default tuning, or with every search
    /// depth replaced by `depth` when one is given.
    pub fn build(self, depth: Option<u8>) -> Strategy {
        match self {
            AgentKind::Wolf => {
                let config = WolfConfig {
                    fixed_depth: depth,
                    ..WolfConfig::default()
                };
                Strategy::Wolf(WolfAgent::with_config(config))
            }
            AgentKind::Hono => {
                let mut config = HonoConfig::default();
                if let Some(depth) = depth {
                    config.depth = depth;
                }
                Strategy::Hono(HonoAgent::with_config(config))
            }
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentKind::Wolf => "wolf",
            AgentKind::Hono => "hono",
        };
        write!(f, "{}", name)
    }
}

// used for parsing cli args
impl FromStr for AgentKind {
    type Err = &'static str;
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "wolf" => Ok(AgentKind::Wolf),
            "hono" => Ok(AgentKind::Hono),
            _ => Err("invalid agent; options are: wolf, hono"),
        }
    }
}

impl FromStr for Strategy {
    type Err = &'static str;
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        AgentKind::from_str(name).map(|kind| kind.build(None))
    }
}
