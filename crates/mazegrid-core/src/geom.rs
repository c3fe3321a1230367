//! Geometry primitives: [`Coord`] and [`Move`].
//!
//! A maze is addressed in screen order: row 0 is the top row and rows grow
//! downward, column 0 is the leftmost column and columns grow rightward.

use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A zero-indexed `(row, column)` cell address.
///
/// Coordinates are plain values: copied freely, compared and hashed by value.
/// Negative components are representable so that move arithmetic can step off
/// the grid; [`GridWorld::contains`](crate::GridWorld::contains) is the
/// bounds filter.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// The top-left cell (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The coordinate one step in the direction of `mv`.
    ///
    /// Pure arithmetic, no bounds check.
    #[inline]
    pub const fn apply(self, mv: Move) -> Self {
        let (drow, dcol) = mv.delta();
        self.shift(drow, dcol)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Move
// ---------------------------------------------------------------------------

/// One of the four unit moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    Up,
    Down,
    Right,
    Left,
}

impl Move {
    /// All moves, in the fixed order used for search expansion.
    ///
    /// The order determines which of several equally short paths a search
    /// returns; it is stable but not part of any contract.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Right, Move::Left];

    /// The move that undoes this one.
    #[inline]
    pub const fn opposite(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Right => Move::Left,
            Move::Left => Move::Right,
        }
    }

    /// The (drow, dcol) delta of this move.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Right => (0, 1),
            Move::Left => (0, -1),
        }
    }

    /// Lowercase name, matching the [`Display`](fmt::Display) and
    /// [`FromStr`] forms.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Right => "right",
            Move::Left => "left",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a [`Move`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMoveError(String);

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid move: {:?}", self.0)
    }
}

impl std::error::Error for ParseMoveError {}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Move::Up),
            "down" => Ok(Move::Down),
            "right" => Ok(Move::Right),
            "left" => Ok(Move::Left),
            other => Err(ParseMoveError(other.to_string())),
        }
    }
}
