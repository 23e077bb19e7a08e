//! Fixed-size board with toroidal adjacency
//!
//! Tiles live in a row-major `Array2` indexed `[row, column]`. Every cell is
//! always populated; blanks use [`TileKind::Empty`]. Neighbor lookup wraps
//! around both edges, so the grid behaves like a torus.

use ndarray::Array2;
use std::fmt;

use crate::board::{Direction, Tile, TileKind};
use crate::io::configuration::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::io::error::{PuzzleError, Result};

/// Column/row coordinates of a cell, `(0, 0)` being the top left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Position {
    /// Create a position from column and row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Array index in `(row, column)` order
    pub const fn index(self) -> (usize, usize) {
        (self.y, self.x)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The puzzle grid and owner of every tile
///
/// Tiles refer back to the board only through their [`Position`], so the
/// board is the single owner and all neighbor lookups go through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Array2<Tile>,
}

impl Board {
    /// Create a board of the standard size filled with empty tiles
    pub fn new() -> Self {
        let tiles = Array2::from_shape_fn((BOARD_HEIGHT, BOARD_WIDTH), |(y, x)| {
            Tile::new(Position::new(x, y), TileKind::Empty)
        });
        Self { tiles }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.tiles.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.tiles.nrows()
    }

    /// Look up the tile at a position
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.tiles.get(position.index())
    }

    /// Look up the tile at column `x`, row `y`
    pub fn get_tile(&self, x: usize, y: usize) -> Option<&Tile> {
        self.tile(Position::new(x, y))
    }

    pub(crate) fn tile_mut(&mut self, position: Position) -> Option<&mut Tile> {
        self.tiles.get_mut(position.index())
    }

    /// All tiles in row-major order (top to bottom, left to right)
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// The adjacent position in `direction`, wrapping past the edges
    pub fn neighbor(&self, position: Position, direction: Direction) -> Position {
        let (width, height) = (self.width(), self.height());
        let Position { x, y } = position;
        match direction {
            Direction::North => Position::new(x, (y + height - 1) % height),
            Direction::East => Position::new((x + 1) % width, y),
            Direction::South => Position::new(x, (y + 1) % height),
            Direction::West => Position::new((x + width - 1) % width, y),
        }
    }

    /// The four adjacent positions in North, East, South, West order
    pub fn neighbors(&self, position: Position) -> [Position; 4] {
        [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ]
        .map(|direction| self.neighbor(position, direction))
    }

    /// Replace the kind printed at a position
    ///
    /// # Errors
    ///
    /// Returns an error if the position is outside the board
    pub fn set_kind(&mut self, position: Position, kind: TileKind) -> Result<()> {
        let tile = self
            .tile_mut(position)
            .ok_or(PuzzleError::OutOfBounds {
                x: position.x,
                y: position.y,
            })?;
        tile.set_kind(kind);
        Ok(())
    }

    /// Set the orientation of an unlocked tile
    ///
    /// # Errors
    ///
    /// Returns an error if the position is outside the board or the tile is
    /// locked facing another direction
    pub fn set_orientation(&mut self, position: Position, orientation: Direction) -> Result<()> {
        let tile = self
            .tile_mut(position)
            .ok_or(PuzzleError::OutOfBounds {
                x: position.x,
                y: position.y,
            })?;
        if tile.face(orientation) {
            Ok(())
        } else {
            Err(PuzzleError::TileLocked {
                x: position.x,
                y: position.y,
            })
        }
    }

    pub(crate) fn orientation_of(&self, position: Position) -> Option<Direction> {
        self.tile(position).map(Tile::orientation)
    }

    pub(crate) fn is_visited(&self, position: Position) -> bool {
        self.tile(position).is_some_and(Tile::is_visited)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
