//! Breadth-first shortest-path search over a [`GridWorld`].

use std::collections::VecDeque;

use mazegrid_core::{Coord, GridWorld, Move};

/// Per-cell move history for one search.
///
/// Each visited cell records the move that first reached it; the start cell
/// (the search root) is never recorded. Applying the opposite of a cell's
/// recorded move yields its predecessor, which was enqueued strictly
/// earlier, so the recorded structure is acyclic.
struct MoveHistory {
    entries: Vec<Option<Move>>,
}

impl MoveHistory {
    fn new(world: &GridWorld) -> Self {
        Self {
            entries: vec![None; world.len()],
        }
    }

    #[inline]
    fn get(&self, world: &GridWorld, c: Coord) -> Option<Move> {
        world.index_of(c).and_then(|i| self.entries[i])
    }

    #[inline]
    fn record(&mut self, world: &GridWorld, c: Coord, mv: Move) {
        if let Some(i) = world.index_of(c) {
            self.entries[i] = Some(mv);
        }
    }
}

/// Compute a shortest move sequence from the world's starting point to its
/// ending point.
///
/// Returns `None` if the ending point is unreachable; that is a normal
/// outcome, not an error. When start == end the result is the empty
/// sequence, regardless of whether the single cell is blocked (the world
/// does not enforce open endpoints).
///
/// Among several equally short paths, the one returned is fixed by the
/// [`Move::ALL`] expansion order and FIFO queue order; callers should rely
/// on length and validity only.
pub fn find_shortest_path(world: &GridWorld) -> Option<Vec<Move>> {
    let start = world.starting_point();
    let end = world.ending_point();

    let mut history = MoveHistory::new(world);
    let mut queue: VecDeque<Coord> = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            return Some(reconstruct(world, &history, end));
        }

        // Only the start can be dequeued blocked (neighbors are filtered
        // below); a blocked start never expands, making the world
        // unsolvable.
        if world.is_blocked(current) {
            continue;
        }

        for mv in Move::ALL {
            let Some(next) = world.try_move(current, mv) else {
                continue;
            };
            // The start is the search root and must keep its empty history
            // entry (reconstruction stops there), so it is excluded from
            // expansion explicitly; every other visited cell is excluded by
            // its recorded entry.
            if next == start || world.is_blocked(next) || history.get(world, next).is_some() {
                continue;
            }
            history.record(world, next, mv);
            queue.push_back(next);
        }
    }

    None
}

/// Walk the recorded moves backwards from `end` to the start cell.
///
/// The start cell is the only path cell with no recorded move, so it
/// terminates the walk; every step goes to a strictly earlier BFS layer.
fn reconstruct(world: &GridWorld, history: &MoveHistory, end: Coord) -> Vec<Move> {
    let mut path = Vec::new();
    let mut current = end;

    while let Some(mv) = history.get(world, current) {
        path.push(mv);
        current = current.apply(mv.opposite());
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::validate;

    fn world(lines: &[&str]) -> GridWorld {
        GridWorld::from_lines(lines).unwrap()
    }

    fn solve(lines: &[&str]) -> Option<Vec<Move>> {
        find_shortest_path(&world(lines))
    }

    #[test]
    fn open_3x3_takes_four_moves() {
        let w = world(&["...", "...", "..."]);
        let path = find_shortest_path(&w).unwrap();
        assert_eq!(path.len(), 4);
        assert!(validate(&w, &path));
    }

    #[test]
    fn detour_adds_to_manhattan_distance() {
        // Crossing row 1 forces column 4, crossing row 3 forces column 2:
        // Manhattan distance 8 plus a 4-move detour.
        let w = world(&[".....", "####.", ".....", "##.##", "....."]);
        let path = find_shortest_path(&w).unwrap();
        assert_eq!(path.len(), 12);
        assert!(validate(&w, &path));
    }

    #[test]
    fn serpentine_corridor_has_unique_path() {
        let w = world(&[".....", "####.", ".....", ".####", "....."]);
        let path = find_shortest_path(&w).unwrap();
        assert_eq!(path.len(), 16);
        assert!(validate(&w, &path));
    }

    #[test]
    fn separating_wall_means_no_path() {
        assert_eq!(solve(&["...", "###", "..."]), None);
        assert_eq!(solve(&["..#", "..#", "###"]), None);
    }

    #[test]
    fn blocked_start_or_end_means_no_path() {
        assert_eq!(solve(&["#..", "...", "..."]), None);
        assert_eq!(solve(&["...", "...", "..#"]), None);
    }

    #[test]
    fn single_cell_yields_empty_path() {
        assert_eq!(solve(&["."]), Some(vec![]));
        // Start == end short-circuits even a blocked cell: the world does
        // not enforce open endpoints.
        assert_eq!(solve(&["#"]), Some(vec![]));
    }

    #[test]
    fn single_row_goes_straight_right() {
        assert_eq!(
            solve(&["...."]),
            Some(vec![Move::Right, Move::Right, Move::Right])
        );
    }

    #[test]
    fn single_column_goes_straight_down() {
        assert_eq!(solve(&[".", ".", "."]), Some(vec![Move::Down, Move::Down]));
    }

    #[test]
    fn expansion_never_walks_back_into_the_start() {
        // A recorded entry on the start cell would make reconstruction
        // ping-pong between the start and a neighbor instead of stopping,
        // growing the path without bound. Pin the invariant through the
        // result: the search returns, and a shortest path never contains a
        // move immediately undone by its opposite.
        let grids: &[&[&str]] = &[
            &["..", ".."],
            &["...", "...", "..."],
            &[".....", "####.", ".....", "##.##", "....."],
        ];
        for lines in grids {
            let w = world(lines);
            let path = find_shortest_path(&w).expect("grid is solvable");
            for pair in path.windows(2) {
                assert_ne!(pair[1], pair[0].opposite(), "backtracking step in {path:?}");
            }
            assert!(validate(&w, &path));
        }
    }

    #[test]
    fn search_is_idempotent() {
        let w = world(&[".....", "####.", ".....", "##.##", "....."]);
        let a = find_shortest_path(&w).unwrap();
        let b = find_shortest_path(&w).unwrap();
        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn found_paths_replay_successfully() {
        let grids: &[&[&str]] = &[
            &["...", "...", "..."],
            &[".....", "####.", ".....", "##.##", "....."],
            &["..#..", ".#...", "...#.", "#....", "....."],
            &["."],
        ];
        for lines in grids {
            let w = world(lines);
            let path = find_shortest_path(&w).unwrap();
            assert!(validate(&w, &path), "path through:\n{w}");
        }
    }
}
