use thiserror::Error;

use super::side::Side;
use super::square::Square;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Square ({x}, {y}) is outside the {size}x{size} board")]
    OutOfBoundsError { x: usize, y: usize, size: usize },
    #[error("Cannot place a stone on {square}, the square is already occupied")]
    SquareOccupiedMoveError { square: Square },
    #[error("Cannot place a {side} stone on {square}, it does not flip any stones")]
    NoCaptureMoveError { square: Square, side: Side },
    #[error("Invalid board dimensions: expected {expected}x{expected}, got {rows} rows with a {columns} column row")]
    InvalidDimensionsError {
        expected: usize,
        rows: usize,
        columns: usize,
    },
    #[error("Invalid cell character: {character:?}")]
    InvalidCellCharacterError { character: char },
    #[error("Invalid square notation: {notation:?}")]
    InvalidSquareNotationError { notation: String },
}

impl BoardError {
    /// True for the errors raised when a placement is rejected: off the
    /// board, on an occupied square, or flipping nothing.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            BoardError::OutOfBoundsError { .. }
                | BoardError::SquareOccupiedMoveError { .. }
                | BoardError::NoCaptureMoveError { .. }
        )
    }
}
