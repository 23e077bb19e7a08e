//! Endpoint alignment between neighboring tiles and the local rotation search
//!
//! Connecting two tiles never backtracks: a failed search leaves both tiles in
//! whatever orientation the search ended on, and a successful one commits the
//! last rotation that raised the initiating tile's connection count.

use tracing::trace;

use crate::board::{Board, Direction, Position, Tile};
use crate::io::configuration::ROTATION_STEPS;

/// Orientation pair to commit once the search ends
///
/// An alignment that raised the initiating tile's connected-neighbor count
/// always replaces the pair, so the last such alignment wins. Until one is
/// seen, the first alignment of any kind is held as a fallback.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    pair: (Direction, Direction),
    aligned: bool,
    improved: bool,
}

impl Candidate {
    const fn fallback(pair: (Direction, Direction)) -> Self {
        Self {
            pair,
            aligned: false,
            improved: false,
        }
    }

    const fn consider(&mut self, pair: (Direction, Direction), improved: bool) {
        if improved || !self.aligned {
            self.pair = pair;
            self.aligned = true;
            self.improved |= improved;
        }
    }
}

impl Board {
    /// Check if `from` exposes an endpoint that reaches `to` and is met by one of
    /// `to`'s endpoints
    ///
    /// Only `from`'s endpoints are walked; `to` is consulted for the reciprocal
    /// direction alone.
    pub fn tiles_are_connected(&self, from: Position, to: Position) -> bool {
        let (Some(source), Some(target)) = (self.tile(from), self.tile(to)) else {
            return false;
        };
        let target_endpoints = target.endpoints();
        source.endpoints().iter().any(|direction| {
            self.neighbor(from, direction) == to && target_endpoints.contains(direction.opposite())
        })
    }

    /// Grid neighbors currently connected to `position`, in N/E/S/W order
    pub fn connected_neighbors(&self, position: Position) -> Vec<Position> {
        self.neighbors(position)
            .into_iter()
            .filter(|&neighbor| self.tiles_are_connected(position, neighbor))
            .collect()
    }

    /// Recompute the connected neighbors of `position` and store them on the tile
    pub fn refresh_connected_neighbors(&mut self, position: Position) -> &[Position] {
        let neighbors = self.connected_neighbors(position);
        match self.tile_mut(position) {
            Some(tile) => {
                tile.set_cached_neighbors(neighbors);
                tile.cached_neighbors()
            }
            None => &[],
        }
    }

    /// Rotate `to` (and `from` when allowed) until their endpoints meet
    ///
    /// Returns `true` without touching either tile if they already meet. Only
    /// tank-to-pipe, tank-to-house, pipe-to-pipe and pipe-to-house pairs are
    /// searched; every other pairing, and anything involving an empty tile,
    /// returns `false`.
    pub fn connect(&mut self, from: Position, to: Position) -> bool {
        let (Some(source), Some(target)) = (self.tile(from), self.tile(to)) else {
            return false;
        };
        let (source_kind, target_kind) = (source.kind(), target.kind());
        if source_kind.is_empty() || target_kind.is_empty() {
            return false;
        }
        if self.tiles_are_connected(from, to) {
            return true;
        }
        if !source_kind.can_feed(target_kind) {
            return false;
        }
        self.resolve_rotation(from, to)
    }

    fn resolve_rotation(&mut self, from: Position, to: Position) -> bool {
        let Some(start) = self.orientation_pair(from, to) else {
            return false;
        };
        let mut best = Candidate::fallback(start);

        for _ in 0..ROTATION_STEPS {
            if self.tiles_are_connected(from, to) {
                self.record_alignment(&mut best, from, to, false);
                break;
            }

            // Locked tiles refuse to turn
            self.rotate(to);

            if self.tile(from).is_some_and(|tile| !tile.is_locked()) {
                for _ in 0..ROTATION_STEPS {
                    let before = self.connected_neighbors(from).len();
                    self.rotate(from);
                    if self.tiles_are_connected(from, to) {
                        let improved = self.connected_neighbors(from).len() > before;
                        self.record_alignment(&mut best, from, to, improved);
                    }
                }
            }
        }

        if !best.aligned && self.tiles_are_connected(from, to) {
            self.record_alignment(&mut best, from, to, false);
        }

        if !best.aligned {
            return false;
        }

        self.commit(from, to, best);
        true
    }

    fn record_alignment(
        &self,
        best: &mut Candidate,
        from: Position,
        to: Position,
        improved: bool,
    ) {
        if let Some(pair) = self.orientation_pair(from, to) {
            best.consider(pair, improved);
        }
    }

    fn commit(&mut self, from: Position, to: Position, best: Candidate) {
        let pair = best.pair;
        for (position, orientation) in [(from, pair.0), (to, pair.1)] {
            if let Some(tile) = self.tile_mut(position) {
                tile.face(orientation);
                if tile.kind().is_house() {
                    tile.lock();
                }
            }
        }
        trace!(
            %from,
            %to,
            from_orientation = ?pair.0,
            to_orientation = ?pair.1,
            improved = best.improved,
            "committed rotation"
        );
        self.refresh_connected_neighbors(from);
    }

    fn rotate(&mut self, position: Position) -> bool {
        self.tile_mut(position).is_some_and(Tile::rotate)
    }

    fn orientation_pair(&self, from: Position, to: Position) -> Option<(Direction, Direction)> {
        Some((self.orientation_of(from)?, self.orientation_of(to)?))
    }
}
