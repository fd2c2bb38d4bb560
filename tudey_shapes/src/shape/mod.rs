//! Collision shapes and the pairwise intersection tests between them.
//!
//! [Shape] is a closed set of shape kinds. Every kind supports the same queries (bounds, center,
//! transform, ray intersection, rectangle classification) and every pair of kinds has a
//! dedicated intersection test, selected by [shapes_intersect].
//!
//! Bounds are cached on each shape. Constructors and the transform methods leave the bounds
//! current; after editing geometry through a `*_mut` accessor call `update_bounds` before
//! querying the shape.
mod capsule;
mod circle;
mod compound;
mod intersect;
mod point;
mod polygon;
mod segment;

pub use capsule::Capsule;
pub use circle::Circle;
pub use compound::Compound;
pub use intersect::*;
pub use point::Point;
pub use polygon::Polygon;
pub use segment::Segment;

use crate::core::{
    math::{Ray2, Transform2D, Vector2},
    traits::Real,
};
use static_aabb2d_index::AABB;

/// How a shape relates to an axis aligned rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IntersectionType {
    /// The shape and the rectangle do not touch.
    None,
    /// The shape and the rectangle overlap but the shape does not contain the rectangle.
    Intersects,
    /// The shape fully contains the rectangle.
    Contains,
}

/// Discriminant of a [Shape], used when reporting on shapes without borrowing them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Segment,
    Circle,
    Capsule,
    Polygon,
    Compound,
}

/// A collision shape of any kind.
///
/// # Examples
///
/// ```
/// # use tudey_shapes::core::math::*;
/// # use tudey_shapes::shape::*;
/// # use tudey_shapes::polygon;
/// let square: Shape = polygon![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)].into();
/// let circle: Shape = Circle::new(Vector2::new(3.0, 1.0), 1.5).into();
/// assert!(square.intersects(&circle));
/// assert!(circle.intersects(&square));
///
/// // move the circle away and test again
/// let moved = circle.transform(&Transform2D::from_translation(Vector2::new(5.0, 0.0)));
/// assert!(!square.intersects(&moved));
/// ```
#[derive(Debug, Clone)]
pub enum Shape<T = f64>
where
    T: Real,
{
    Point(Point<T>),
    Segment(Segment<T>),
    Circle(Circle<T>),
    Capsule(Capsule<T>),
    Polygon(Polygon<T>),
    Compound(Compound<T>),
}

macro_rules! dispatch {
    ($shape:expr, $s:ident => $body:expr) => {
        match $shape {
            Shape::Point($s) => $body,
            Shape::Segment($s) => $body,
            Shape::Circle($s) => $body,
            Shape::Capsule($s) => $body,
            Shape::Polygon($s) => $body,
            Shape::Compound($s) => $body,
        }
    };
}

impl<T> Shape<T>
where
    T: Real,
{
    /// The kind of this shape.
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Segment(_) => ShapeKind::Segment,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Capsule(_) => ShapeKind::Capsule,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Compound(_) => ShapeKind::Compound,
        }
    }

    /// Cached bounds of the shape.
    #[inline]
    pub fn bounds(&self) -> &AABB<T> {
        dispatch!(self, s => s.bounds())
    }

    /// Recomputes the cached bounds from the current geometry.
    #[inline]
    pub fn update_bounds(&mut self) {
        dispatch!(self, s => s.update_bounds())
    }

    /// Representative center of the shape.
    #[inline]
    pub fn center(&self) -> Vector2<T> {
        dispatch!(self, s => s.center())
    }

    /// Returns a transformed copy of this shape.
    pub fn transform(&self, transform: &Transform2D<T>) -> Self {
        dispatch!(self, s => Shape::from(s.transform(transform)))
    }

    /// Writes this shape transformed by `transform` into `result`.
    ///
    /// When `result` is the same kind of shape its storage is reused (polygon vertex buffers and
    /// compound children included), otherwise `result` is replaced. Either way the bounds of
    /// `result` are current on return.
    pub fn transform_into(&self, transform: &Transform2D<T>, result: &mut Shape<T>) {
        match (self, result) {
            (Shape::Point(s), Shape::Point(r)) => s.transform_into(transform, r),
            (Shape::Segment(s), Shape::Segment(r)) => s.transform_into(transform, r),
            (Shape::Circle(s), Shape::Circle(r)) => s.transform_into(transform, r),
            (Shape::Capsule(s), Shape::Capsule(r)) => s.transform_into(transform, r),
            (Shape::Polygon(s), Shape::Polygon(r)) => s.transform_into(transform, r),
            (Shape::Compound(s), Shape::Compound(r)) => s.transform_into(transform, r),
            (s, r) => {
                log::debug!(
                    "replacing {:?} transform result with new {:?}",
                    r.kind(),
                    s.kind()
                );
                *r = s.transform(transform);
            }
        }
    }

    /// Transforms this shape in place.
    #[inline]
    pub fn transform_local(&mut self, transform: &Transform2D<T>) {
        dispatch!(self, s => s.transform_local(transform))
    }

    /// First point where `ray` meets this shape, or the ray origin if it starts inside.
    #[inline]
    pub fn intersection(&self, ray: &Ray2<T>) -> Option<Vector2<T>> {
        dispatch!(self, s => s.intersection(ray))
    }

    /// Classifies this shape against the rectangle `rect`.
    #[inline]
    pub fn intersection_type(&self, rect: &AABB<T>) -> IntersectionType {
        dispatch!(self, s => s.intersection_type(rect))
    }

    /// Returns true if this shape and `other` touch or overlap. See [shapes_intersect].
    #[inline]
    pub fn intersects(&self, other: &Shape<T>) -> bool {
        shapes_intersect(self, other)
    }
}

macro_rules! impl_from_shape {
    ($kind:ident) => {
        impl<T> From<$kind<T>> for Shape<T>
        where
            T: Real,
        {
            #[inline]
            fn from(shape: $kind<T>) -> Self {
                Shape::$kind(shape)
            }
        }
    };
}

impl_from_shape!(Point);
impl_from_shape!(Segment);
impl_from_shape!(Circle);
impl_from_shape!(Capsule);
impl_from_shape!(Polygon);
impl_from_shape!(Compound);

/// Returns whichever candidate hit is nearest to `origin`.
pub(crate) fn nearest_hit<T, I>(origin: Vector2<T>, hits: I) -> Option<Vector2<T>>
where
    T: Real,
    I: IntoIterator<Item = Option<Vector2<T>>>,
{
    let mut closest: Option<(T, Vector2<T>)> = None;
    for hit in hits.into_iter().flatten() {
        let dist = origin.distance_squared(hit);
        match closest {
            Some((closest_dist, _)) if closest_dist <= dist => {}
            _ => closest = Some((dist, hit)),
        }
    }

    closest.map(|(_, hit)| hit)
}
