//! 2D collision shapes and integer coordinate sets.
//!
//! [shape] holds the shape kinds ([shape::Point], [shape::Segment], [shape::Circle],
//! [shape::Capsule], [shape::Polygon], [shape::Compound]) unified by the [shape::Shape] enum,
//! with a pairwise intersection test for every combination of kinds. [coord] holds
//! [coord::CoordSet], a set of packed integer grid coordinates with region, border, and random
//! pick queries.
//!
//! All geometry is generic over [core::traits::Real] (`f32` or `f64`, defaulting to `f64`).
extern crate static_aabb2d_index;

#[macro_use]
mod macros;

pub mod config;
pub mod coord;
pub mod core;
pub mod error;
pub mod shape;

pub use static_aabb2d_index::AABB;

pub use crate::config::{ShapeConfig, TransformedShapeConfig};
pub use crate::coord::{Coord, CoordSet, Direction, Region};
pub use crate::error::{CoordError, ShapeConfigError};
pub use crate::shape::{IntersectionType, Shape, ShapeKind};
