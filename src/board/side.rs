use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// One of the two players. `Black` is the side that owns c3 and d4 in the
/// starting position.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Black = 0,
    White = 1,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Black, Side::White];

    pub fn opposite(&self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Side::Black)
    }

    pub fn to_char(self) -> char {
        match self {
            Side::Black => 'B',
            Side::White => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'B' | 'b' | 'X' | 'x' => Some(Side::Black),
            'W' | 'w' | 'O' | 'o' => Some(Side::White),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side_str = match self {
            Side::Black => "black",
            Side::White => "white",
        };
        write!(f, "{}", side_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Side {
    type Err = ParseError;
    fn from_str(side: &str) -> Result<Self, Self::Err> {
        match side {
            "black" => Ok(Side::Black),
            "white" => Ok(Side::White),
            "random" => Ok(Side::random()),
            _ => Err("invalid side; options are: black, white, random"),
        }
    }
}
