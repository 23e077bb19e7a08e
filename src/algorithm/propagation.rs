//! Layered breadth-first propagation of gas flow from the tanks
//!
//! Each layer processes its frontier in the order given, trying the four
//! neighbors of every tile in North, East, South, West order. Newly connected
//! tiles that have not been visited form the next layer. There is no early
//! exit when a house is reached and no backtracking.

use tracing::debug;

use crate::board::{Board, Position, Tile};

/// Outcome of a full solve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolveSummary {
    /// Number of gas tanks seeding the first layer
    pub tanks: usize,
    /// Number of frontier layers expanded
    pub layers: usize,
    /// Tiles marked visited during the run
    pub visited: usize,
    /// Houses on the board
    pub houses: usize,
    /// Houses locked by a connection
    pub houses_connected: usize,
}

impl SolveSummary {
    /// Check if every house on the board received a connection
    pub const fn all_houses_connected(&self) -> bool {
        self.houses_connected == self.houses
    }
}

impl Board {
    /// Positions of all gas tanks in row-major scan order
    pub fn find_starting_points(&self) -> Vec<Position> {
        self.tiles()
            .filter(|tile| tile.kind().is_tank())
            .map(Tile::position)
            .collect()
    }

    /// Expand the frontier layer by layer until no tile advances
    ///
    /// Returns the number of layers processed.
    pub fn find_path(&mut self, frontier: Vec<Position>) -> usize {
        let mut frontier = frontier;
        let mut layers = 0;

        while !frontier.is_empty() {
            layers += 1;
            let mut next = Vec::new();

            for &current in &frontier {
                if let Some(tile) = self.tile_mut(current) {
                    tile.mark_visited();
                }
                for neighbor in self.neighbors(current) {
                    if self.connect(current, neighbor)
                        && !self.is_visited(neighbor)
                        && !next.contains(&neighbor)
                    {
                        next.push(neighbor);
                    }
                }
            }

            debug!(
                layer = layers,
                frontier = frontier.len(),
                advanced = next.len(),
                "expanded frontier layer"
            );
            frontier = next;
        }

        layers
    }

    /// Rotate tiles so gas flows from every tank toward the houses
    ///
    /// Does nothing on a board without tanks.
    pub fn solve(&mut self) -> SolveSummary {
        let starting_points = self.find_starting_points();
        let tanks = starting_points.len();
        let layers = if starting_points.is_empty() {
            0
        } else {
            self.find_path(starting_points)
        };

        let summary = SolveSummary {
            tanks,
            layers,
            visited: self.tiles().filter(|tile| tile.is_visited()).count(),
            houses: self.tiles().filter(|tile| tile.kind().is_house()).count(),
            houses_connected: self
                .tiles()
                .filter(|tile| tile.kind().is_house() && tile.is_locked())
                .count(),
        };
        debug!(?summary, "solve finished");
        summary
    }
}
