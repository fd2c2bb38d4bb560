//! 2D math used by the shapes: vectors, bounds, rigid transforms, rays, and segment tests.
mod aabb;
mod base_math;
mod line_line_intersect;
mod ray;
mod transform;
mod vector2;

pub use aabb::*;
pub use base_math::*;
pub use line_line_intersect::{line_line_intr, LineLineIntr};
pub use ray::Ray2;
pub use transform::Transform2D;
pub use vector2::{vec2, Vector2};
