//! Common types re-exported for convenience.

pub use crate::agent::{Agent, AgentKind, HonoAgent, Placement, Strategy, WolfAgent};
pub use crate::board::error::BoardError;
pub use crate::board::side::Side;
pub use crate::board::square::Square;
pub use crate::board::{create_initial_board, Board, BOARD_SIZE};
pub use crate::moves::{apply_move, has_any_legal_move, is_legal, legal_moves};
