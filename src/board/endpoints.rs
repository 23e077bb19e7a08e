use bitvec::prelude::*;
use std::fmt;

use crate::board::Direction;

type DirectionBits = BitArr!(for 4, in u8, Lsb0);

/// Set of directions in which a tile can join a neighbor
///
/// Bits are indexed by [`Direction::index`], so iteration always yields
/// directions in North, East, South, West order.
#[derive(Clone, Copy, Debug)]
pub struct EndpointSet {
    bits: DirectionBits,
}

impl EndpointSet {
    /// Create a set with no endpoints
    pub const fn empty() -> Self {
        Self {
            bits: DirectionBits::ZERO,
        }
    }

    /// Add a direction
    pub fn insert(&mut self, direction: Direction) {
        self.bits.set(direction.index(), true);
    }

    /// Test direction membership
    pub fn contains(&self, direction: Direction) -> bool {
        self.bits.get(direction.index()).as_deref() == Some(&true)
    }

    /// Test if the set has no endpoints
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count endpoints in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate endpoints in clockwise order from North
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.bits.iter_ones().filter_map(Direction::from_index)
    }
}

impl Default for EndpointSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for EndpointSet {
    fn eq(&self, other: &Self) -> bool {
        self.bits.as_raw_slice() == other.bits.as_raw_slice()
    }
}

impl Eq for EndpointSet {}

impl FromIterator<Direction> for EndpointSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::empty();
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

impl fmt::Display for EndpointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.iter().map(Direction::letter).collect();
        write!(f, "{{{letters}}}")
    }
}
