//! Random puzzle generation.
//!
//! Fills a grid with blocked cells at a given density, then forces the
//! start and end corners open. Generated puzzles are not guaranteed to be
//! solvable; at high densities most are not.

use std::fmt;

use mazegrid_core::world::{BLOCKED, OPEN};
use rand::{Rng, RngExt};

/// Error produced by [`PuzzleGenerator::new`] for out-of-range parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// Rows and columns must both be positive.
    NonPositiveDimensions { rows: i32, cols: i32 },
    /// Block density must lie in `[0.0, 1.0]`.
    DensityOutOfRange(f64),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::NonPositiveDimensions { rows, cols } => {
                write!(f, "rows and cols must be positive, got {rows}x{cols}")
            }
            GenerateError::DensityOutOfRange(d) => {
                write!(f, "block density must be between 0 and 1, got {d}")
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// Generator for random rectangular puzzles.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator {
    rows: i32,
    cols: i32,
    block_density: f64,
}

impl PuzzleGenerator {
    /// Create a generator, validating dimensions and density.
    pub fn new(rows: i32, cols: i32, block_density: f64) -> Result<Self, GenerateError> {
        if rows <= 0 || cols <= 0 {
            return Err(GenerateError::NonPositiveDimensions { rows, cols });
        }
        if !(0.0..=1.0).contains(&block_density) {
            return Err(GenerateError::DensityOutOfRange(block_density));
        }
        Ok(Self {
            rows,
            cols,
            block_density,
        })
    }

    /// Generate puzzle text rows using `rng`.
    ///
    /// Each cell is blocked with probability `block_density`, except the
    /// start and end corners which are always open. Deterministic for a
    /// seeded rng.
    pub fn generate(&self, rng: &mut impl Rng) -> Vec<String> {
        let mut grid: Vec<Vec<char>> = (0..self.rows)
            .map(|_| {
                (0..self.cols)
                    .map(|_| {
                        if rng.random_bool(self.block_density) {
                            BLOCKED
                        } else {
                            OPEN
                        }
                    })
                    .collect()
            })
            .collect();

        grid[0][0] = OPEN;
        grid[(self.rows - 1) as usize][(self.cols - 1) as usize] = OPEN;

        grid.into_iter().map(|row| row.into_iter().collect()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazegrid_core::{Coord, GridWorld};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rejects_bad_parameters() {
        assert!(matches!(
            PuzzleGenerator::new(0, 5, 0.3),
            Err(GenerateError::NonPositiveDimensions { .. })
        ));
        assert!(matches!(
            PuzzleGenerator::new(5, -1, 0.3),
            Err(GenerateError::NonPositiveDimensions { .. })
        ));
        assert!(matches!(
            PuzzleGenerator::new(5, 5, 1.5),
            Err(GenerateError::DensityOutOfRange(_))
        ));
    }

    #[test]
    fn generated_puzzles_parse_with_open_corners() {
        let generator = PuzzleGenerator::new(8, 12, 0.9).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let rows = generator.generate(&mut rng);
        let world = GridWorld::from_lines(&rows).unwrap();
        assert_eq!(world.rows(), 8);
        assert_eq!(world.cols(), 12);
        assert!(!world.is_blocked(world.starting_point()));
        assert!(!world.is_blocked(world.ending_point()));
    }

    #[test]
    fn density_extremes() {
        let mut rng = StdRng::seed_from_u64(1);

        let all_open = PuzzleGenerator::new(4, 4, 0.0).unwrap().generate(&mut rng);
        let world = GridWorld::from_lines(&all_open).unwrap();
        assert!(world.coords().all(|c| !world.is_blocked(c)));

        let walled = PuzzleGenerator::new(4, 4, 1.0).unwrap().generate(&mut rng);
        let world = GridWorld::from_lines(&walled).unwrap();
        // Everything blocked except the forced-open corners.
        assert!(
            world
                .coords()
                .filter(|&c| world.is_blocked(c))
                .count()
                == 14
        );
        assert!(!world.is_blocked(Coord::ZERO));
    }

    #[test]
    fn same_seed_same_puzzle() {
        let generator = PuzzleGenerator::new(6, 6, 0.4).unwrap();
        let a = generator.generate(&mut StdRng::seed_from_u64(42));
        let b = generator.generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
