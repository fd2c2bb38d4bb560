use super::Direction;
use crate::error::CoordError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point on the integer grid.
///
/// # Examples
///
/// ```
/// # use tudey_shapes::coord::*;
/// let key = Coord::encode(-3, 7);
/// assert_eq!(key, 0xFFFD_0007);
/// assert_eq!(Coord::decode(key), Coord::new(-3, 7));
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Smallest representable value of either component.
    pub const MIN: i32 = i16::MIN as i32;
    /// Largest representable value of either component.
    pub const MAX: i32 = i16::MAX as i32;

    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }

    /// Returns true if both components fit in the packed key.
    #[inline]
    pub fn in_range(x: i32, y: i32) -> bool {
        (Self::MIN..=Self::MAX).contains(&x) && (Self::MIN..=Self::MAX).contains(&y)
    }

    /// Packs `(x, y)` into a key as `(x & 0xFFFF) << 16 | (y & 0xFFFF)`.
    ///
    /// # Panics
    ///
    /// Panics if either component is outside `i16::MIN..=i16::MAX`, use [Coord::try_encode] to
    /// handle that case.
    #[inline]
    pub fn encode(x: i32, y: i32) -> u32 {
        assert!(
            Self::in_range(x, y),
            "coordinate ({x}, {y}) is outside the packable range"
        );
        Self::pack(x, y)
    }

    /// Same as [Coord::encode] but returns an error for out of range components.
    #[inline]
    pub fn try_encode(x: i32, y: i32) -> Result<u32, CoordError> {
        if Self::in_range(x, y) {
            Ok(Self::pack(x, y))
        } else {
            Err(CoordError::OutOfRange { x, y })
        }
    }

    /// Inverse of [Coord::encode].
    #[inline]
    pub fn decode(key: u32) -> Self {
        Coord {
            x: (key >> 16) as u16 as i16 as i32,
            y: key as u16 as i16 as i32,
        }
    }

    #[inline]
    fn pack(x: i32, y: i32) -> u32 {
        ((x as u32 & 0xFFFF) << 16) | (y as u32 & 0xFFFF)
    }

    /// Packed key of this coordinate, see [Coord::encode].
    #[inline]
    pub fn key(&self) -> u32 {
        Self::encode(self.x, self.y)
    }

    /// The neighboring coordinate one step in `direction`.
    #[inline]
    pub fn step(&self, direction: Direction) -> Coord {
        Coord::new(self.x + direction.dx(), self.y + direction.dy())
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Coord::new(x, y)
    }
}

/// An axis aligned rectangle of grid cells, `width` cells wide starting at `x` and `height` cells
/// tall starting at `y`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    #[inline]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Region {
            x,
            y,
            width,
            height,
        }
    }

    /// Number of cells covered, zero if either dimension is not positive.
    #[inline]
    pub fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.width as i64 * self.height as i64
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Returns true if cell `(x, y)` is covered. Offsets are taken in `i64` so regions near the
    /// ends of the `i32` range do not overflow.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let dx = i64::from(x) - i64::from(self.x);
        let dy = i64::from(y) - i64::from(self.y);
        dx >= 0 && dy >= 0 && dx < i64::from(self.width) && dy < i64::from(self.height)
    }

    /// Iterate the covered cells row by row. Cells past `i32::MAX` are skipped.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let xs = axis_cells(self.x, self.width);
        axis_cells(self.y, self.height)
            .flat_map(move |y| xs.clone().map(move |x| Coord::new(x as i32, y as i32)))
    }
}

/// Cells `start..start + len` that fit in `i32`, empty for a non positive `len`.
#[inline]
fn axis_cells(start: i32, len: i32) -> std::ops::Range<i64> {
    let start = i64::from(start);
    let end = (start + i64::from(len.max(0))).min(i64::from(i32::MAX) + 1);
    start..end
}
