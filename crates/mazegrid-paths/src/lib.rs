//! Shortest-path search and solution validation for grid mazes.
//!
//! Two operations over an immutable [`mazegrid_core::GridWorld`]:
//!
//! - [`find_shortest_path`] — breadth-first search from the starting point
//!   to the ending point, returning a minimum-length move sequence or `None`
//!   when the goal is unreachable.
//! - [`replay`] / [`validate`] — independently re-check any move sequence
//!   against the world, producing a visited-cell trace for display and a
//!   categorized [`WalkFailure`] when the sequence is not a solution.
//!
//! Each search owns its own queue and move-history arena, so a single world
//! can serve any number of concurrent searches and replays.

mod bfs;
mod replay;

pub use bfs::find_shortest_path;
pub use replay::{WalkFailure, WalkReport, WalkTrace, replay, validate};
