use std::fmt;
use std::str::FromStr;

use super::error::BoardError;
use super::BOARD_SIZE;

/// A coordinate on the board. `x` is the column (`a`..`f`), `y` is the row
/// (`1`..`6`). A `Square` is always in bounds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Square {
    // field order gives row-major `Ord`
    y: u8,
    x: u8,
}

impl Square {
    /// Returns the square at column `x`, row `y`, or an error if either
    /// coordinate is off the board.
    pub fn new(x: usize, y: usize) -> Result<Self, BoardError> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return Err(BoardError::OutOfBoundsError {
                x,
                y,
                size: BOARD_SIZE,
            });
        }
        Ok(Self::from_coords(x as u8, y as u8))
    }

    pub(crate) const fn from_coords(x: u8, y: u8) -> Self {
        Self { y, x }
    }

    /// Steps `(dx, dy)` away from this square, or `None` past the edge.
    #[inline(always)]
    pub(crate) fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x as i8 + dx;
        let y = self.y as i8 + dy;
        if x < 0 || y < 0 || x >= BOARD_SIZE as i8 || y >= BOARD_SIZE as i8 {
            return None;
        }
        Some(Self::from_coords(x as u8, y as u8))
    }

    pub fn x(&self) -> usize {
        self.x as usize
    }

    pub fn y(&self) -> usize {
        self.y as usize
    }

    /// Every square in row-major order: y ascending, then x ascending.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|y| (0..BOARD_SIZE as u8).map(move |x| Square::from_coords(x, y)))
    }

    pub fn to_algebraic(&self) -> String {
        format!("{}{}", (b'a' + self.x) as char, self.y + 1)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl FromStr for Square {
    type Err = BoardError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || BoardError::InvalidSquareNotationError {
            notation: input.to_string(),
        };
        let mut chars = input.trim().chars();
        let column = chars.next().ok_or_else(invalid)?.to_ascii_lowercase();
        let row: usize = chars.as_str().parse().map_err(|_| invalid())?;
        if !column.is_ascii_lowercase() || row == 0 {
            return Err(invalid());
        }
        Square::new((column as u8 - b'a') as usize, row - 1)
    }
}

pub const A1: Square = Square::from_coords(0, 0);
pub const B1: Square = Square::from_coords(1, 0);
pub const C1: Square = Square::from_coords(2, 0);
pub const D1: Square = Square::from_coords(3, 0);
pub const E1: Square = Square::from_coords(4, 0);
pub const F1: Square = Square::from_coords(5, 0);
pub const A2: Square = Square::from_coords(0, 1);
pub const B2: Square = Square::from_coords(1, 1);
pub const C2: Square = Square::from_coords(2, 1);
pub const D2: Square = Square::from_coords(3, 1);
pub const E2: Square = Square::from_coords(4, 1);
pub const F2: Square = Square::from_coords(5, 1);
pub const A3: Square = Square::from_coords(0, 2);
pub const B3: Square = Square::from_coords(1, 2);
pub const C3: Square = Square::from_coords(2, 2);
pub const D3: Square = Square::from_coords(3, 2);
pub const E3: Square = Square::from_coords(4, 2);
pub const F3: Square = Square::from_coords(5, 2);
pub const A4: Square = Square::from_coords(0, 3);
pub const B4: Square = Square::from_coords(1, 3);
pub const C4: Square = Square::from_coords(2, 3);
pub const D4: Square = Square::from_coords(3, 3);
pub const E4: Square = Square::from_coords(4, 3);
pub const F4: Square = Square::from_coords(5, 3);
pub const A5: Square = Square::from_coords(0, 4);
pub const B5: Square = Square::from_coords(1, 4);
pub const C5: Square = Square::from_coords(2, 4);
pub const D5: Square = Square::from_coords(3, 4);
pub const E5: Square = Square::from_coords(4, 4);
pub const F5: Square = Square::from_coords(5, 4);
pub const A6: Square = Square::from_coords(0, 5);
pub const B6: Square = Square::from_coords(1, 5);
pub const C6: Square = Square::from_coords(2, 5);
pub const D6: Square = Square::from_coords(3, 5);
pub const E6: Square = Square::from_coords(4, 5);
pub const F6: Square = Square::from_coords(5, 5);
