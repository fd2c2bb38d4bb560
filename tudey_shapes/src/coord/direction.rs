#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The eight compass directions, with north along `+y` and east along `+x`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions, clockwise starting from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The four cardinal directions, clockwise starting from north.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    /// Step along x, one of `-1`, `0`, `1`.
    #[inline]
    pub fn dx(self) -> i32 {
        match self {
            Direction::North | Direction::South => 0,
            Direction::NorthEast | Direction::East | Direction::SouthEast => 1,
            Direction::SouthWest | Direction::West | Direction::NorthWest => -1,
        }
    }

    /// Step along y, one of `-1`, `0`, `1`.
    #[inline]
    pub fn dy(self) -> i32 {
        match self {
            Direction::East | Direction::West => 0,
            Direction::NorthWest | Direction::North | Direction::NorthEast => 1,
            Direction::SouthEast | Direction::South | Direction::SouthWest => -1,
        }
    }

    #[inline]
    pub fn is_cardinal(self) -> bool {
        self.index() % 2 == 0
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        Self::ALL[(self.index() + 4) % 8]
    }

    /// Next direction clockwise (45 degrees).
    #[inline]
    pub fn rotate_cw(self) -> Direction {
        Self::ALL[(self.index() + 1) % 8]
    }

    /// Next direction counter clockwise (45 degrees).
    #[inline]
    pub fn rotate_ccw(self) -> Direction {
        Self::ALL[(self.index() + 7) % 8]
    }

    /// Direction with the given step, `None` unless both components are in `-1..=1` and not
    /// both zero.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.dx() == dx && d.dy() == dy)
    }
}
