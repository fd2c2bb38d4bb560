//! Integer grid coordinates and sets of them.
//!
//! Coordinates are packed into `u32` keys (see [Coord::encode]) so a [CoordSet] is a sorted list
//! of integers. Both axes are limited to the `i16` range.
mod coord_set;
mod direction;
mod grid;

pub use coord_set::{CoordSet, Iter};
pub use direction::Direction;
pub use grid::{Coord, Region};
