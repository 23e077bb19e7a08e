//! Tile kinds and the mutable per-tile state touched by the solver
//!
//! A tile's endpoints are derived from its kind and current orientation and
//! never stored. Rotation always turns clockwise and is refused once the tile
//! has been locked.

use strum::VariantArray;

use crate::board::{Direction, EndpointSet, Position};

/// The shape printed in a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, VariantArray)]
pub enum TileKind {
    /// Blank cell, never connects (`_`)
    Empty,
    /// Terminal sink with a single exit (`H`)
    House,
    /// Pipe joining two opposite sides (`I`)
    PipeStraight,
    /// Pipe joining two adjacent sides (`L`)
    PipeElbow,
    /// Pipe joining three sides (`T`)
    PipeTee,
    /// Single-exit gas tank (`1`)
    TankStraight,
    /// Gas tank with two adjacent exits (`2`)
    TankElbow,
    /// Gas tank with three exits (`3`)
    TankTee,
}

/// Coarse behavior class of a [`TileKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileRole {
    /// Blank cell
    Empty,
    /// Flow sink
    House,
    /// Flow connector
    Pipe,
    /// Flow source
    Tank,
}

impl TileKind {
    /// Board-file symbol for this kind
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '_',
            Self::House => 'H',
            Self::PipeStraight => 'I',
            Self::PipeElbow => 'L',
            Self::PipeTee => 'T',
            Self::TankStraight => '1',
            Self::TankElbow => '2',
            Self::TankTee => '3',
        }
    }

    /// Parse a board-file symbol
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|kind| kind.symbol() == symbol)
    }

    /// Behavior class used to decide which pairs may be connected
    pub const fn role(self) -> TileRole {
        match self {
            Self::Empty => TileRole::Empty,
            Self::House => TileRole::House,
            Self::PipeStraight | Self::PipeElbow | Self::PipeTee => TileRole::Pipe,
            Self::TankStraight | Self::TankElbow | Self::TankTee => TileRole::Tank,
        }
    }

    /// Whether this is the blank kind
    pub const fn is_empty(self) -> bool {
        matches!(self.role(), TileRole::Empty)
    }

    /// Whether this is a house
    pub const fn is_house(self) -> bool {
        matches!(self.role(), TileRole::House)
    }

    /// Whether this is one of the pipe kinds
    pub const fn is_pipe(self) -> bool {
        matches!(self.role(), TileRole::Pipe)
    }

    /// Whether this is one of the gas tank kinds
    pub const fn is_tank(self) -> bool {
        matches!(self.role(), TileRole::Tank)
    }

    /// Whether a tile of this kind may rotate `neighbor` to join it
    ///
    /// Flow only leaves tanks and pipes, and only enters pipes and houses.
    pub const fn can_feed(self, neighbor: Self) -> bool {
        matches!(
            (self.role(), neighbor.role()),
            (TileRole::Tank | TileRole::Pipe, TileRole::Pipe | TileRole::House)
        )
    }

    /// Directions a tile of this kind exposes when facing `orientation`
    pub fn endpoints(self, orientation: Direction) -> EndpointSet {
        match self {
            Self::Empty => EndpointSet::empty(),
            Self::House | Self::TankStraight => [orientation].into_iter().collect(),
            Self::PipeStraight => [orientation, orientation.opposite()].into_iter().collect(),
            Self::PipeElbow | Self::TankElbow => {
                [orientation, orientation.clockwise()].into_iter().collect()
            }
            Self::PipeTee | Self::TankTee => Direction::VARIANTS
                .iter()
                .copied()
                .filter(|&direction| direction != orientation.opposite())
                .collect(),
        }
    }
}

/// One board cell and its solver state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    position: Position,
    kind: TileKind,
    orientation: Direction,
    locked: bool,
    visited: bool,
    connected_neighbors: Vec<Position>,
}

impl Tile {
    /// Create an unlocked, unvisited tile facing North
    pub const fn new(position: Position, kind: TileKind) -> Self {
        Self {
            position,
            kind,
            orientation: Direction::North,
            locked: false,
            visited: false,
            connected_neighbors: Vec::new(),
        }
    }

    /// Grid position of this tile
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Printed shape of this tile
    pub const fn kind(&self) -> TileKind {
        self.kind
    }

    /// Current orientation
    pub const fn orientation(&self) -> Direction {
        self.orientation
    }

    /// Whether the orientation is permanently fixed
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether propagation has expanded from this tile
    pub const fn is_visited(&self) -> bool {
        self.visited
    }

    /// Directions this tile currently exposes
    pub fn endpoints(&self) -> EndpointSet {
        self.kind.endpoints(self.orientation)
    }

    /// Neighbors found connected at the last cache refresh
    ///
    /// Derived data; see `Board::connected_neighbors` for the live value.
    pub fn cached_neighbors(&self) -> &[Position] {
        &self.connected_neighbors
    }

    pub(crate) const fn set_kind(&mut self, kind: TileKind) {
        self.kind = kind;
    }

    /// Turn a quarter clockwise unless locked, returning whether it turned
    pub(crate) const fn rotate(&mut self) -> bool {
        if self.locked {
            return false;
        }
        self.orientation = self.orientation.clockwise();
        true
    }

    /// Face `orientation` unless locked, returning whether it was applied
    pub(crate) fn face(&mut self, orientation: Direction) -> bool {
        if self.locked {
            return self.orientation == orientation;
        }
        self.orientation = orientation;
        true
    }

    pub(crate) const fn lock(&mut self) {
        self.locked = true;
    }

    pub(crate) const fn mark_visited(&mut self) {
        self.visited = true;
    }

    pub(crate) fn set_cached_neighbors(&mut self, neighbors: Vec<Position>) {
        self.connected_neighbors = neighbors;
    }
}
