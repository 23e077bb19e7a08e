//! Board data model
//!
//! This module contains the static description of a puzzle board:
//! - Directions and their clockwise cycle
//! - Endpoint sets derived from a tile's kind and orientation
//! - Tiles and the toroidal grid that owns them

/// Compass directions and the fixed letter mapping
pub mod direction;
/// Compact direction sets for tile endpoints
pub mod endpoints;
/// Fixed-size toroidal board and grid positions
pub mod grid;
/// Tile kinds and per-tile solver state
pub mod tile;

pub use direction::Direction;
pub use endpoints::EndpointSet;
pub use grid::{Board, Position};
pub use tile::{Tile, TileKind, TileRole};
