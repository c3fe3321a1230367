//! Wayout — solve, generate, and check grid maze puzzles.

use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use mazegrid_core::{GridWorld, Move};
use mazegrid_paths::{find_shortest_path, replay};
use mazegrid_term::{render_walk, render_world};

use wayout::generate::PuzzleGenerator;
use wayout::puzzle;

const USAGE: &str = "usage:
  wayout solve [FILE]             solve a puzzle (stdin if FILE is omitted)
  wayout gen ROWS COLS DENSITY [SEED]
                                  print a random puzzle
  wayout check PUZZLE MOVES       validate a solution file against a puzzle";

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        Some("solve") => cmd_solve(args.get(1).map(String::as_str)),
        Some("gen") => cmd_gen(&args[1..]),
        Some("check") => cmd_check(&args[1..]),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_solve(file: Option<&str>) -> Result<ExitCode, Box<dyn Error>> {
    let rows = match file {
        Some(path) => puzzle::load_puzzle(path)?,
        None => puzzle::read_puzzle(io::stdin().lock())?,
    };
    let world = GridWorld::from_lines(&rows)?;
    debug!("loaded {}x{} puzzle", world.rows(), world.cols());

    let mut out = io::stdout();
    writeln!(out, "=== Puzzle ===")?;
    render_world(&mut out, &world)?;

    writeln!(out, "=== Solving ===")?;
    let Some(path) = find_shortest_path(&world) else {
        writeln!(out, "No solution found.")?;
        return Ok(ExitCode::FAILURE);
    };

    writeln!(out, "Solution found in {} moves!", path.len())?;
    writeln!(out, "{}", format_moves(&path))?;

    // Independent re-check of the search output, with a visual trace.
    let report = replay(&world, &path);
    render_walk(&mut out, &world, &report.trace)?;
    match report.failure {
        None => Ok(ExitCode::SUCCESS),
        Some(failure) => Err(failure.into()),
    }
}

fn cmd_gen(args: &[String]) -> Result<ExitCode, Box<dyn Error>> {
    let [rows, cols, density, rest @ ..] = args else {
        return Err(USAGE.into());
    };
    let generator = PuzzleGenerator::new(rows.parse()?, cols.parse()?, density.parse()?)?;

    let maze = match rest {
        [] => generator.generate(&mut rand::rng()),
        [seed] => generator.generate(&mut StdRng::seed_from_u64(seed.parse()?)),
        _ => return Err(USAGE.into()),
    };

    let mut out = io::stdout();
    for row in maze {
        writeln!(out, "{row}")?;
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(args: &[String]) -> Result<ExitCode, Box<dyn Error>> {
    let [puzzle_path, moves_path] = args else {
        return Err(USAGE.into());
    };
    let world = GridWorld::from_lines(puzzle::load_puzzle(puzzle_path)?)?;
    let moves = parse_moves(&fs::read_to_string(moves_path)?)?;
    debug!("replaying {} moves", moves.len());

    let mut out = io::stdout();
    let report = replay(&world, &moves);
    render_walk(&mut out, &world, &report.trace)?;
    match report.failure {
        None => {
            writeln!(out, "Valid solution ({} moves).", moves.len())?;
            Ok(ExitCode::SUCCESS)
        }
        Some(failure) => {
            writeln!(out, "Invalid solution: {failure}")?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Parse a whitespace-separated list of move names.
fn parse_moves(text: &str) -> Result<Vec<Move>, Box<dyn Error>> {
    text.split_whitespace()
        .map(|word| word.parse::<Move>().map_err(Into::into))
        .collect()
}

fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|mv| mv.name())
        .collect::<Vec<_>>()
        .join(" ")
}
