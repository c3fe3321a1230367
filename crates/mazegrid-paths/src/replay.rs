//! Independent solution validation by replaying moves against a world.
//!
//! The replay trusts nothing but the [`GridWorld`] and the move sequence, so
//! it can check externally supplied solutions as well as search output.

use std::fmt;

use mazegrid_core::{Coord, GridWorld, Move};

// ---------------------------------------------------------------------------
// WalkFailure
// ---------------------------------------------------------------------------

/// Why a replayed move sequence is not a valid solution.
///
/// The three categories are distinct so a caller can explain the failure,
/// and the first two carry the exact offending move index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WalkFailure {
    /// A move stepped outside the grid bounds.
    OutOfBounds { step: usize, mv: Move },
    /// A move stepped into a blocked cell.
    BlockedCell { step: usize, mv: Move, at: Coord },
    /// All moves were legal but the walk did not end at the ending point.
    NotAtGoal { at: Coord },
}

impl fmt::Display for WalkFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkFailure::OutOfBounds { step, mv } => {
                write!(f, "move {step} ({mv}): left the grid")
            }
            WalkFailure::BlockedCell { step, mv, at } => {
                write!(f, "move {step} ({mv}): walked into blocked cell {at}")
            }
            WalkFailure::NotAtGoal { at } => {
                write!(f, "walk ended at {at} without reaching the goal")
            }
        }
    }
}

impl std::error::Error for WalkFailure {}

// ---------------------------------------------------------------------------
// WalkTrace
// ---------------------------------------------------------------------------

/// Which cells a replayed walk visited, for display purposes.
///
/// Produced for failed walks too, covering the legal prefix of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkTrace {
    rows: i32,
    cols: i32,
    /// Flat row-major visited map, same layout as the world's obstacle map.
    visited: Vec<bool>,
    /// Where the walk stood when it ended (or failed).
    end: Coord,
}

impl WalkTrace {
    fn new(world: &GridWorld) -> Self {
        let mut trace = Self {
            rows: world.rows(),
            cols: world.cols(),
            visited: vec![false; world.len()],
            end: world.starting_point(),
        };
        trace.mark(world, world.starting_point());
        trace
    }

    #[inline]
    fn mark(&mut self, world: &GridWorld, c: Coord) {
        if let Some(i) = world.index_of(c) {
            self.visited[i] = true;
        }
        self.end = c;
    }

    /// Whether the walk passed through `c`.
    #[inline]
    pub fn visited(&self, c: Coord) -> bool {
        if c.row < 0 || c.col < 0 || c.row >= self.rows || c.col >= self.cols {
            return false;
        }
        self.visited[(c.row as usize) * (self.cols as usize) + c.col as usize]
    }

    /// The coordinate the walk ended on.
    #[inline]
    pub fn end(&self) -> Coord {
        self.end
    }
}

// ---------------------------------------------------------------------------
// Replay
// ---------------------------------------------------------------------------

/// Outcome of replaying a move sequence: the visited trace plus an optional
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkReport {
    pub trace: WalkTrace,
    pub failure: Option<WalkFailure>,
}

impl WalkReport {
    /// Whether the replayed sequence is a valid solution.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.failure.is_none()
    }
}

/// Replay `moves` against `world` from the starting point.
///
/// Legal prefix cells are marked in the returned trace even when the walk
/// fails, so callers can render how far it got. An empty sequence is valid
/// exactly when the starting point is also the ending point.
pub fn replay(world: &GridWorld, moves: &[Move]) -> WalkReport {
    let mut trace = WalkTrace::new(world);
    let mut current = world.starting_point();

    for (step, &mv) in moves.iter().enumerate() {
        let Some(next) = world.try_move(current, mv) else {
            return WalkReport {
                trace,
                failure: Some(WalkFailure::OutOfBounds { step, mv }),
            };
        };
        if world.is_blocked(next) {
            return WalkReport {
                trace,
                failure: Some(WalkFailure::BlockedCell { step, mv, at: next }),
            };
        }
        trace.mark(world, next);
        current = next;
    }

    let failure =
        (!world.is_ending_point(current)).then_some(WalkFailure::NotAtGoal { at: current });
    WalkReport { trace, failure }
}

/// Boolean form of [`replay`].
#[inline]
pub fn validate(world: &GridWorld, moves: &[Move]) -> bool {
    replay(world, moves).is_valid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazegrid_core::Move::{Down, Right, Up};

    fn world(lines: &[&str]) -> GridWorld {
        GridWorld::from_lines(lines).unwrap()
    }

    #[test]
    fn straight_walk_succeeds() {
        let w = world(&["...", "...", "..."]);
        let report = replay(&w, &[Right, Right, Down, Down]);
        assert!(report.is_valid());
        assert_eq!(report.trace.end(), Coord::new(2, 2));
        assert!(report.trace.visited(Coord::new(0, 1)));
        assert!(!report.trace.visited(Coord::new(1, 1)));
    }

    #[test]
    fn empty_sequence_is_valid_only_on_single_cell() {
        assert!(validate(&world(&["."]), &[]));
        assert_eq!(
            replay(&world(&["..", ".."]), &[]).failure,
            Some(WalkFailure::NotAtGoal { at: Coord::ZERO })
        );
    }

    #[test]
    fn stepping_off_the_grid_reports_the_move_index() {
        let w = world(&["..", ".."]);
        let report = replay(&w, &[Right, Up, Down]);
        assert_eq!(
            report.failure,
            Some(WalkFailure::OutOfBounds { step: 1, mv: Up })
        );
        // The legal prefix is still traced.
        assert!(report.trace.visited(Coord::new(0, 1)));
    }

    #[test]
    fn walking_into_an_obstacle_reports_the_cell() {
        let w = world(&[".#", ".."]);
        let report = replay(&w, &[Right, Down]);
        assert_eq!(
            report.failure,
            Some(WalkFailure::BlockedCell {
                step: 0,
                mv: Right,
                at: Coord::new(0, 1)
            })
        );
    }

    #[test]
    fn stopping_short_of_the_goal_fails() {
        let w = world(&["...", "...", "..."]);
        let report = replay(&w, &[Right, Down]);
        assert_eq!(
            report.failure,
            Some(WalkFailure::NotAtGoal {
                at: Coord::new(1, 1)
            })
        );
    }

    #[test]
    fn revisiting_cells_is_legal() {
        let w = world(&["..", ".."]);
        assert!(validate(&w, &[Down, Up, Down, Right]));
    }

    #[test]
    fn failure_messages_name_the_category() {
        let oob = WalkFailure::OutOfBounds { step: 3, mv: Up };
        assert_eq!(oob.to_string(), "move 3 (up): left the grid");
        let blocked = WalkFailure::BlockedCell {
            step: 0,
            mv: Right,
            at: Coord::new(0, 1),
        };
        assert!(blocked.to_string().contains("blocked cell (0, 1)"));
        let short = WalkFailure::NotAtGoal { at: Coord::ZERO };
        assert!(short.to_string().contains("without reaching the goal"));
    }
}
