//! The 6x6 board. A `Board` is a plain `Copy` value: nothing outside of
//! construction writes to one, and every move produces a fresh board.

pub mod error;
pub mod side;
pub mod square;

mod display;

#[cfg(test)]
mod tests;

pub use display::STARTING_POSITION_LAYOUT;
use error::BoardError;
use side::Side;
use square::Square;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 6;

pub type Cell = Option<Side>;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    // indexed as cells[y][x]
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

/// Returns a fresh board in the standard starting layout.
pub fn create_initial_board() -> Board {
    Board::starting_position()
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The four centre squares filled in the diagonal pattern: black on c3
    /// and d4, white on d3 and c4.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        let mid = BOARD_SIZE / 2;
        board.cells[mid - 1][mid - 1] = Some(Side::Black);
        board.cells[mid - 1][mid] = Some(Side::White);
        board.cells[mid][mid - 1] = Some(Side::White);
        board.cells[mid][mid] = Some(Side::Black);
        board
    }

    /// Builds a board from rows of cells (`rows[y][x]`). Anything other than
    /// a `BOARD_SIZE` x `BOARD_SIZE` grid is rejected.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, BoardError> {
        let dimensions_error = |columns: usize| BoardError::InvalidDimensionsError {
            expected: BOARD_SIZE,
            rows: rows.len(),
            columns,
        };

        if rows.len() != BOARD_SIZE {
            let columns = rows.first().map_or(0, |row| row.as_ref().len());
            return Err(dimensions_error(columns));
        }

        let mut board = Self::empty();
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != BOARD_SIZE {
                return Err(dimensions_error(row.len()));
            }
            board.cells[y].copy_from_slice(row);
        }
        Ok(board)
    }

    #[inline(always)]
    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.y()][square.x()]
    }

    /// Looks up a cell by raw coordinates, rejecting anything off the board.
    pub fn cell(&self, x: usize, y: usize) -> Result<Cell, BoardError> {
        Square::new(x, y).map(|square| self.get(square))
    }

    pub fn is_empty_at(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Returns a copy of this board with `square` set to `side`. No flipping
    /// happens here; use `moves::apply_move` to play a move.
    pub fn with_stone(&self, square: Square, side: Side) -> Self {
        let mut board = *self;
        board.put(square, side);
        board
    }

    #[inline(always)]
    pub(crate) fn put(&mut self, square: Square, side: Side) {
        self.cells[square.y()][square.x()] = Some(side);
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(side))
            .count()
    }

    /// Number of non-empty cells.
    pub fn stone_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    pub fn empty_count(&self) -> usize {
        BOARD_SIZE * BOARD_SIZE - self.stone_count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }
}
