//! Compass directions arranged in a clockwise cycle

use strum::VariantArray;

/// One of the four grid directions
///
/// Declaration order is the clockwise cycle and also the fixed order in which
/// neighbors are visited during propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, VariantArray)]
pub enum Direction {
    /// Toward row 0
    North,
    /// Toward the last column
    East,
    /// Toward the last row
    South,
    /// Toward column 0
    West,
}

impl Direction {
    /// The next direction when turning a quarter clockwise
    #[must_use]
    pub const fn clockwise(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// The direction pointing the other way
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Position in the clockwise cycle, starting at North = 0
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Inverse of [`Direction::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::VARIANTS.get(index).copied()
    }

    /// Letter written to solution files
    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// Parse a solution-file letter
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }
}
