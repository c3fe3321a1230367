//! The [`GridWorld`] type — the static maze model.
//!
//! A world is built once from text rows and never mutated afterwards, so it
//! can be shared freely between any number of concurrent searches; all
//! mutable search state lives with the searcher.

use std::fmt;

use crate::geom::{Coord, Move};

// ---------------------------------------------------------------------------
// WorldError
// ---------------------------------------------------------------------------

/// Error produced when constructing a [`GridWorld`] from text rows.
///
/// These are caller-input errors: construction aborts and no partial world
/// is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// The input contained no rows at all.
    EmptyInput,
    /// The first row was empty, so the column count is undefined.
    EmptyFirstRow,
    /// A row's length differed from the first row's length.
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        expected: usize,
        got: usize,
    },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldError::EmptyInput => write!(f, "no input rows provided"),
            WorldError::EmptyFirstRow => write!(f, "first row is empty"),
            WorldError::RaggedRow { row, expected, got } => write!(
                f,
                "row {row} has length {got}, expected {expected} (all rows must have the same length)"
            ),
        }
    }
}

impl std::error::Error for WorldError {}

// ---------------------------------------------------------------------------
// GridWorld
// ---------------------------------------------------------------------------

/// Character that marks a blocked cell in puzzle text.
pub const BLOCKED: char = '#';

/// Character conventionally used for open cells in puzzle text.
///
/// Parsing is permissive: *any* character other than [`BLOCKED`] is read as
/// open, so this constant only matters for output.
pub const OPEN: char = '.';

/// The static maze model: fixed dimensions plus an immutable obstacle map.
///
/// The starting point is `(0, 0)` and the ending point is
/// `(rows - 1, cols - 1)`. The world does not require either to be open; a
/// world whose start or end is blocked is simply unsolvable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawWorld"))]
pub struct GridWorld {
    rows: i32,
    cols: i32,
    /// Flat row-major obstacle map, `rows * cols` entries.
    blocked: Vec<bool>,
}

/// Unvalidated mirror of [`GridWorld`] for deserialization.
///
/// Deserialized input is untrusted: the obstacle map length must match the
/// dimensions or the indexing queries would go out of bounds.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawWorld {
    rows: i32,
    cols: i32,
    blocked: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawWorld> for GridWorld {
    type Error = String;

    fn try_from(raw: RawWorld) -> Result<Self, Self::Error> {
        if raw.rows <= 0 || raw.cols <= 0 {
            return Err(format!(
                "rows and cols must be positive, got {}x{}",
                raw.rows, raw.cols
            ));
        }
        let expected = (raw.rows as usize) * (raw.cols as usize);
        if raw.blocked.len() != expected {
            return Err(format!(
                "obstacle map has {} entries, expected {} for a {}x{} grid",
                raw.blocked.len(),
                expected,
                raw.rows,
                raw.cols
            ));
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            blocked: raw.blocked,
        })
    }
}

impl GridWorld {
    /// Build a world from text rows, one string per maze row.
    ///
    /// Every occurrence of [`BLOCKED`] (`#`) marks a blocked cell; every
    /// other character is open. Fails if the input is empty, the first row
    /// is empty, or any row's length differs from the first row's.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, WorldError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut blocked = Vec::new();
        let mut rows = 0usize;
        let mut cols = 0usize;

        for line in lines {
            let line = line.as_ref();
            if rows == 0 {
                cols = line.chars().count();
                if cols == 0 {
                    return Err(WorldError::EmptyFirstRow);
                }
            }
            let got = line.chars().count();
            if got != cols {
                return Err(WorldError::RaggedRow {
                    row: rows,
                    expected: cols,
                    got,
                });
            }
            blocked.extend(line.chars().map(|c| c == BLOCKED));
            rows += 1;
        }

        if rows == 0 {
            return Err(WorldError::EmptyInput);
        }

        Ok(Self {
            rows: rows as i32,
            cols: cols as i32,
            blocked,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    /// Whether the world has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    /// Flat index of `c`, or `None` if `c` is outside the grid.
    #[inline]
    pub fn index_of(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some((c.row as usize) * (self.cols as usize) + c.col as usize)
        } else {
            None
        }
    }

    /// Whether `c` is inside the grid (it may still be blocked).
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && c.row < self.rows && c.col < self.cols
    }

    /// Whether the cell at `c` is blocked.
    ///
    /// Coordinates outside the grid report as blocked: off-grid cells are as
    /// good as walls.
    #[inline]
    pub fn is_blocked(&self, c: Coord) -> bool {
        match self.index_of(c) {
            Some(i) => self.blocked[i],
            None => true,
        }
    }

    /// Apply `mv` to `c`, keeping the result only if it stays inside the
    /// grid.
    ///
    /// This is a pure bounds filter: the destination may still be blocked.
    #[inline]
    pub fn try_move(&self, c: Coord, mv: Move) -> Option<Coord> {
        let next = c.apply(mv);
        self.contains(next).then_some(next)
    }

    /// Apply the opposite of `mv` to `c`, keeping the result only if it
    /// stays inside the grid.
    #[inline]
    pub fn try_undo_move(&self, c: Coord, mv: Move) -> Option<Coord> {
        self.try_move(c, mv.opposite())
    }

    /// The starting point, (0, 0).
    #[inline]
    pub fn starting_point(&self) -> Coord {
        Coord::ZERO
    }

    /// The ending point, (rows - 1, cols - 1).
    #[inline]
    pub fn ending_point(&self) -> Coord {
        Coord::new(self.rows - 1, self.cols - 1)
    }

    /// Whether `c` is the starting point.
    #[inline]
    pub fn is_starting_point(&self, c: Coord) -> bool {
        c == self.starting_point()
    }

    /// Whether `c` is the ending point.
    #[inline]
    pub fn is_ending_point(&self, c: Coord) -> bool {
        c == self.ending_point()
    }

    /// Row-major iterator over every coordinate in the grid.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let cols = self.cols;
        let rows = self.rows;
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Coord::new(row, col)))
    }
}

impl fmt::Display for GridWorld {
    /// Text form using [`OPEN`] and [`BLOCKED`] markers, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let c = Coord::new(row, col);
                f.write_str(if self.is_blocked(c) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn world_round_trip() {
        let w = GridWorld::from_lines(["..#", "#.."]).unwrap();
        let json = serde_json::to_string(&w).unwrap();
        let back: GridWorld = serde_json::from_str(&json).unwrap();
        assert_eq!(w, back);
    }

    #[test]
    fn mismatched_obstacle_map_is_rejected() {
        // 2x3 grid with only five obstacle entries.
        let json = r#"{"rows":2,"cols":3,"blocked":[false,false,false,false,false]}"#;
        let err = serde_json::from_str::<GridWorld>(json).unwrap_err();
        assert!(err.to_string().contains("expected 6"));
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        let json = r#"{"rows":0,"cols":3,"blocked":[]}"#;
        assert!(serde_json::from_str::<GridWorld>(json).is_err());
        let json = r#"{"rows":2,"cols":-1,"blocked":[]}"#;
        assert!(serde_json::from_str::<GridWorld>(json).is_err());
    }
}
