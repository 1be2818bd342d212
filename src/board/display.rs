use std::fmt;
use std::str::FromStr;

use super::error::BoardError;
use super::side::Side;
use super::{Board, Cell, BOARD_SIZE};

const EMPTY_CHARACTERS: [char; 3] = ['.', '-', '_'];

/// `Board::starting_position` in the layout format read by `FromStr`.
pub const STARTING_POSITION_LAYOUT: &str = "....../....../..BW../..WB../....../......";

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, " ")?;
        for x in 0..BOARD_SIZE {
            write!(f, " {}", (b'a' + x as u8) as char)?;
        }
        writeln!(f)?;

        for (y, row) in self.rows().iter().enumerate() {
            write!(f, "{}", y + 1)?;
            for cell in row {
                write!(f, " {}", cell.map_or('.', Side::to_char))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Board {
    /// Compact layout: rows joined by `/`, `.` for empty cells. This is the
    /// format accepted by `FromStr`.
    pub fn to_layout(&self) -> String {
        self.rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', Side::to_char))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

pub(crate) fn parse_cell(character: char) -> Result<Cell, BoardError> {
    if EMPTY_CHARACTERS.contains(&character) {
        return Ok(None);
    }
    Side::from_char(character)
        .map(Some)
        .ok_or(BoardError::InvalidCellCharacterError { character })
}

/// Parses a layout of `BOARD_SIZE` rows separated by `/`, newlines or spaces.
/// Each row holds one character per cell: `.` (or `-`, `_`) for empty, `B`/`X`
/// for black and `W`/`O` for white.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(layout: &str) -> Result<Self, Self::Err> {
        let rows = layout
            .split(|c: char| c == '/' || c.is_whitespace())
            .filter(|row| !row.is_empty())
            .map(|row| row.chars().map(parse_cell).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;

        Board::from_rows(&rows)
    }
}

/// Builds a board from a literal grid, top row first:
///
/// ```
/// use reversi::othello_position;
///
/// let board = othello_position! {
///     ......
///     ......
///     ..BW..
///     ..WB..
///     ......
///     ......
/// };
/// assert_eq!(board, reversi::board::create_initial_board());
/// ```
#[macro_export]
macro_rules! othello_position {
    ($($cell:tt)*) => {{
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<char> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        let size = $crate::board::BOARD_SIZE;
        assert_eq!(
            cells.len(),
            size * size,
            "Invalid number of cells. Expected {}, got {}",
            size * size,
            cells.len()
        );
        let layout: Vec<String> = cells
            .chunks(size)
            .map(|row| row.iter().collect())
            .collect();
        layout
            .join("/")
            .parse::<$crate::board::Board>()
            .expect("Invalid character in othello position")
    }};
}
