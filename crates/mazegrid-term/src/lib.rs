//! Colored terminal rendering for grid mazes via crossterm.
//!
//! Each cell is drawn as a two-column colored block: cyan for open cells,
//! red for blocked cells, and yellow for cells a replayed walk passed
//! through. Output goes to any [`io::Write`], so the same functions serve
//! stdout and capture buffers in tests.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
};

use mazegrid_core::{Coord, GridWorld};
use mazegrid_paths::WalkTrace;

/// Background color for open cells.
pub const OPEN_COLOR: Color = Color::Cyan;
/// Background color for blocked cells.
pub const BLOCKED_COLOR: Color = Color::Red;
/// Background color for cells visited by a walk.
pub const NAVIGATED_COLOR: Color = Color::Yellow;

/// Width of one rendered cell in terminal columns.
const CELL: &str = "  ";

fn color_at(world: &GridWorld, trace: Option<&WalkTrace>, c: Coord) -> Color {
    if trace.is_some_and(|t| t.visited(c)) {
        NAVIGATED_COLOR
    } else if world.is_blocked(c) {
        BLOCKED_COLOR
    } else {
        OPEN_COLOR
    }
}

fn render(out: &mut impl Write, world: &GridWorld, trace: Option<&WalkTrace>) -> io::Result<()> {
    for row in 0..world.rows() {
        for col in 0..world.cols() {
            let color = color_at(world, trace, Coord::new(row, col));
            queue!(out, SetBackgroundColor(color), Print(CELL))?;
        }
        queue!(out, ResetColor, Print("\n"))?;
    }
    out.flush()
}

/// Draw the maze: open cells cyan, blocked cells red.
pub fn render_world(out: &mut impl Write, world: &GridWorld) -> io::Result<()> {
    render(out, world, None)
}

/// Draw the maze with a replayed walk overlaid in yellow.
///
/// Works for partial traces too (a failed walk's legal prefix).
pub fn render_walk(out: &mut impl Write, world: &GridWorld, trace: &WalkTrace) -> io::Result<()> {
    render(out, world, Some(trace))
}
