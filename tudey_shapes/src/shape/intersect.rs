//! Pairwise intersection tests.
//!
//! Each unordered pair of shape kinds has exactly one test function here; [shapes_intersect]
//! dispatches on both kinds and calls it with the arguments in the right order, so
//! `shapes_intersect(a, b) == shapes_intersect(b, a)` for every pair. Touching counts as
//! intersecting.
use super::{Capsule, Circle, Point, Polygon, Segment, Shape};
use crate::core::{
    math::{aabb_overlaps_eps, point_seg_dist_squared, seg_seg_dist_squared, segments_intersect},
    traits::Real,
};

/// Returns true if shapes `a` and `b` touch or overlap.
///
/// Shapes whose bounds are apart are rejected before any exact test runs.
pub fn shapes_intersect<T>(a: &Shape<T>, b: &Shape<T>) -> bool
where
    T: Real,
{
    if !aabb_overlaps_eps(a.bounds(), b.bounds(), T::fuzzy_epsilon()) {
        return false;
    }

    use Shape as S;
    match (a, b) {
        (S::Compound(compound), other) | (other, S::Compound(compound)) => {
            compound.intersects_shape(other)
        }

        (S::Point(a), S::Point(b)) => point_point(a, b),
        (S::Point(p), S::Segment(s)) | (S::Segment(s), S::Point(p)) => point_segment(p, s),
        (S::Point(p), S::Circle(c)) | (S::Circle(c), S::Point(p)) => point_circle(p, c),
        (S::Point(p), S::Capsule(c)) | (S::Capsule(c), S::Point(p)) => point_capsule(p, c),
        (S::Point(p), S::Polygon(poly)) | (S::Polygon(poly), S::Point(p)) => point_polygon(p, poly),

        (S::Segment(a), S::Segment(b)) => segment_segment(a, b),
        (S::Segment(s), S::Circle(c)) | (S::Circle(c), S::Segment(s)) => segment_circle(s, c),
        (S::Segment(s), S::Capsule(c)) | (S::Capsule(c), S::Segment(s)) => segment_capsule(s, c),
        (S::Segment(s), S::Polygon(poly)) | (S::Polygon(poly), S::Segment(s)) => {
            segment_polygon(s, poly)
        }

        (S::Circle(a), S::Circle(b)) => circle_circle(a, b),
        (S::Circle(c), S::Capsule(cap)) | (S::Capsule(cap), S::Circle(c)) => circle_capsule(c, cap),
        (S::Circle(c), S::Polygon(poly)) | (S::Polygon(poly), S::Circle(c)) => {
            circle_polygon(c, poly)
        }

        (S::Capsule(a), S::Capsule(b)) => capsule_capsule(a, b),
        (S::Capsule(c), S::Polygon(poly)) | (S::Polygon(poly), S::Capsule(c)) => {
            capsule_polygon(c, poly)
        }

        (S::Polygon(a), S::Polygon(b)) => polygon_polygon(a, b),
    }
}

#[inline]
pub fn point_point<T>(a: &Point<T>, b: &Point<T>) -> bool
where
    T: Real,
{
    a.location().fuzzy_eq(b.location())
}

#[inline]
pub fn point_segment<T>(point: &Point<T>, segment: &Segment<T>) -> bool
where
    T: Real,
{
    point_seg_dist_squared(segment.start(), segment.end(), point.location())
        .sqrt()
        .fuzzy_eq_zero()
}

#[inline]
pub fn point_circle<T>(point: &Point<T>, circle: &Circle<T>) -> bool
where
    T: Real,
{
    circle.contains_point(point.location())
}

#[inline]
pub fn point_capsule<T>(point: &Point<T>, capsule: &Capsule<T>) -> bool
where
    T: Real,
{
    capsule.contains_point(point.location())
}

#[inline]
pub fn point_polygon<T>(point: &Point<T>, polygon: &Polygon<T>) -> bool
where
    T: Real,
{
    polygon.contains_point(point.location())
}

#[inline]
pub fn segment_segment<T>(a: &Segment<T>, b: &Segment<T>) -> bool
where
    T: Real,
{
    segments_intersect(a.start(), a.end(), b.start(), b.end())
}

#[inline]
pub fn segment_circle<T>(segment: &Segment<T>, circle: &Circle<T>) -> bool
where
    T: Real,
{
    let r = circle.radius();
    point_seg_dist_squared(segment.start(), segment.end(), circle.center()) <= r * r
}

#[inline]
pub fn segment_capsule<T>(segment: &Segment<T>, capsule: &Capsule<T>) -> bool
where
    T: Real,
{
    let r = capsule.radius();
    seg_seg_dist_squared(segment.start(), segment.end(), capsule.start(), capsule.end()) <= r * r
}

#[inline]
pub fn segment_polygon<T>(segment: &Segment<T>, polygon: &Polygon<T>) -> bool
where
    T: Real,
{
    polygon.intersects_segment(segment.start(), segment.end())
}

#[inline]
pub fn circle_circle<T>(a: &Circle<T>, b: &Circle<T>) -> bool
where
    T: Real,
{
    let r = a.radius() + b.radius();
    a.center().distance_squared(b.center()) <= r * r
}

#[inline]
pub fn circle_capsule<T>(circle: &Circle<T>, capsule: &Capsule<T>) -> bool
where
    T: Real,
{
    let r = circle.radius() + capsule.radius();
    point_seg_dist_squared(capsule.start(), capsule.end(), circle.center()) <= r * r
}

#[inline]
pub fn circle_polygon<T>(circle: &Circle<T>, polygon: &Polygon<T>) -> bool
where
    T: Real,
{
    polygon.intersects_circle(circle)
}

#[inline]
pub fn capsule_capsule<T>(a: &Capsule<T>, b: &Capsule<T>) -> bool
where
    T: Real,
{
    let r = a.radius() + b.radius();
    seg_seg_dist_squared(a.start(), a.end(), b.start(), b.end()) <= r * r
}

#[inline]
pub fn capsule_polygon<T>(capsule: &Capsule<T>, polygon: &Polygon<T>) -> bool
where
    T: Real,
{
    polygon.intersects_capsule(capsule)
}

#[inline]
pub fn polygon_polygon<T>(a: &Polygon<T>, b: &Polygon<T>) -> bool
where
    T: Real,
{
    a.intersects_polygon(b)
}
