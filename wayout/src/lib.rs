//! Wayout — a maze puzzle CLI built on the mazegrid crates.
//!
//! The library half holds the I/O collaborators around the core solver:
//! puzzle-file reading and the random puzzle generator. The binary wires
//! them to the search, validation, and rendering crates.

pub mod generate;
pub mod puzzle;
