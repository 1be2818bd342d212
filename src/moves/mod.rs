//! Move legality and application.
//!
//! A placement is legal when the target square is empty and, in at least one
//! of the eight compass directions, the squares next to it hold one or more
//! opponent stones followed by a stone of the mover. Every such run is flipped
//! when the move is applied; runs that end on an empty square or the edge of
//! the board are left alone.


use smallvec::SmallVec;

use crate::board::error::BoardError;
use crate::board::side::Side;
use crate::board::square::Square;
use crate::board::Board;

/// The eight compass directions as `(dx, dy)`.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A 6x6 board never has more than 32 empty squares.
pub type MoveList = SmallVec<[Square; 32]>;

/// Number of opponent stones that `side` would flip from `square` in the
/// direction `(dx, dy)`. Zero unless the run is closed by a `side` stone.
#[inline(always)]
fn run_length(board: &Board, side: Side, square: Square, dx: i8, dy: i8) -> usize {
    let opponent = side.opposite();
    let mut length = 0;
    let mut current = square.offset(dx, dy);

    while let Some(next) = current {
        match board.get(next) {
            Some(stone) if stone == opponent => {
                length += 1;
                current = next.offset(dx, dy);
            }
            Some(_) => return length,
            None => return 0,
        }
    }

    0
}

/// Returns true if `side` may place a stone on `square`.
#[inline(always)]
pub fn is_legal_move(board: &Board, side: Side, square: Square) -> bool {
    board.is_empty_at(square)
        && DIRECTIONS
            .iter()
            .any(|&(dx, dy)| run_length(board, side, square, dx, dy) > 0)
}

/// Coordinate form of `is_legal_move`. Coordinates off the board are never
/// legal.
pub fn is_legal(board: &Board, side: Side, x: usize, y: usize) -> bool {
    Square::new(x, y).map_or(false, |square| is_legal_move(board, side, square))
}

/// All legal placements for `side`, in row-major order.
pub fn legal_moves(board: &Board, side: Side) -> MoveList {
    Square::all()
        .filter(|&square| is_legal_move(board, side, square))
        .collect()
}

/// Number of legal placements for `side`, without collecting them.
pub fn count_legal_moves(board: &Board, side: Side) -> usize {
    Square::all()
        .filter(|&square| is_legal_move(board, side, square))
        .count()
}

/// Returns true as soon as any legal placement for `side` is found. A side
/// without one must pass.
pub fn has_any_legal_move(board: &Board, side: Side) -> bool {
    Square::all().any(|square| is_legal_move(board, side, square))
}

/// The opponent stones a placement by `side` on `square` would flip, grouped
/// by direction and ordered outward from `square`.
pub fn flips(board: &Board, side: Side, square: Square) -> Vec<Square> {
    let mut flipped = Vec::new();
    if !board.is_empty_at(square) {
        return flipped;
    }

    for &(dx, dy) in DIRECTIONS.iter() {
        let length = run_length(board, side, square, dx, dy);
        let mut current = square;
        for _ in 0..length {
            match current.offset(dx, dy) {
                Some(next) => {
                    flipped.push(next);
                    current = next;
                }
                None => break,
            }
        }
    }

    flipped
}

/// Plays `side` on `square` and returns the resulting board. The input board
/// is left untouched. Fails if the square is occupied or the placement would
/// not flip anything.
pub fn apply_move(board: &Board, side: Side, square: Square) -> Result<Board, BoardError> {
    if !board.is_empty_at(square) {
        return Err(BoardError::SquareOccupiedMoveError { square });
    }

    if !is_legal_move(board, side, square) {
        return Err(BoardError::NoCaptureMoveError { square, side });
    }

    Ok(play(board, side, square))
}

/// Places `side` on `square` and flips every closed run, without checking
/// that the placement is legal. The search only calls this with squares taken
/// from `legal_moves`.
#[inline]
pub(crate) fn play(board: &Board, side: Side, square: Square) -> Board {
    let mut next = *board;
    next.put(square, side);

    for &(dx, dy) in DIRECTIONS.iter() {
        let length = run_length(board, side, square, dx, dy);
        let mut current = square;
        for _ in 0..length {
            match current.offset(dx, dy) {
                Some(stone) => {
                    next.put(stone, side);
                    current = stone;
                }
                None => break,
            }
        }
    }

    next
}

/// Coordinate form of `apply_move`; out-of-range coordinates are rejected
/// before the board is read.
pub fn apply_move_at(board: &Board, side: Side, x: usize, y: usize) -> Result<Board, BoardError> {
    apply_move(board, side, Square::new(x, y)?)
}
