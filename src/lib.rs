//! Greedy rotation solver for gas-tank and pipe grid puzzles
//!
//! A board is a 7 by 10 torus of tanks, pipes and houses. Solving rotates
//! tiles outward from every tank in breadth-first layers so that gas reaches
//! the houses, using a local best-of-rotation search with no backtracking.

#![forbid(unsafe_code)]

/// Greedy connection search and breadth-first propagation
pub mod algorithm;
/// Board, tile and direction model
pub mod board;
/// Input/output operations and error handling
pub mod io;

pub use algorithm::SolveSummary;
pub use board::{Board, Direction, Position, Tile, TileKind};
pub use io::error::{PuzzleError, Result};
