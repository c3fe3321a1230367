//! **mazegrid-core** — Grid maze puzzle solver (core types).
//!
//! This crate provides the foundational types used across the *mazegrid*
//! ecosystem: the [`Coord`]/[`Move`] geometry primitives and the immutable
//! [`GridWorld`] maze model that searches and validators query.

pub mod geom;
pub mod world;

pub use geom::{Coord, Move, ParseMoveError};
pub use world::{BLOCKED, GridWorld, OPEN, WorldError};
