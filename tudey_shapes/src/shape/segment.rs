use super::IntersectionType;
use crate::core::{
    math::{
        aabb_closest_point, aabb_contains_point, aabb_corners, aabb_from_points, aabb_overlaps,
        midpoint, perp_dot_test_value, point_seg_dist_squared, Ray2, Transform2D, Vector2,
    },
    traits::Real,
};
use static_aabb2d_index::AABB;

/// A line segment from `start` to `end`.
#[derive(Debug, Clone)]
pub struct Segment<T = f64> {
    start: Vector2<T>,
    end: Vector2<T>,
    bounds: AABB<T>,
}

impl<T> Segment<T>
where
    T: Real,
{
    #[inline]
    pub fn new(start: Vector2<T>, end: Vector2<T>) -> Self {
        Segment {
            start,
            end,
            bounds: aabb_from_points([start, end]),
        }
    }

    #[inline]
    pub fn start(&self) -> Vector2<T> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Vector2<T> {
        self.end
    }

    /// Mutable access to the start point, call [Segment::update_bounds] after changing it.
    #[inline]
    pub fn start_mut(&mut self) -> &mut Vector2<T> {
        &mut self.start
    }

    /// Mutable access to the end point, call [Segment::update_bounds] after changing it.
    #[inline]
    pub fn end_mut(&mut self) -> &mut Vector2<T> {
        &mut self.end
    }

    #[inline]
    pub fn length(&self) -> T {
        self.start.distance(self.end)
    }

    #[inline]
    pub fn bounds(&self) -> &AABB<T> {
        &self.bounds
    }

    #[inline]
    pub fn update_bounds(&mut self) {
        self.bounds = aabb_from_points([self.start, self.end]);
    }

    #[inline]
    pub fn center(&self) -> Vector2<T> {
        midpoint(self.start, self.end)
    }

    pub fn transform(&self, transform: &Transform2D<T>) -> Self {
        Segment::new(
            transform.transform_point(self.start),
            transform.transform_point(self.end),
        )
    }

    pub fn transform_into(&self, transform: &Transform2D<T>, result: &mut Segment<T>) {
        result.start = transform.transform_point(self.start);
        result.end = transform.transform_point(self.end);
        result.update_bounds();
    }

    pub fn transform_local(&mut self, transform: &Transform2D<T>) {
        self.start = transform.transform_point(self.start);
        self.end = transform.transform_point(self.end);
        self.update_bounds();
    }

    pub fn intersection(&self, ray: &Ray2<T>) -> Option<Vector2<T>> {
        ray.intersection_with_segment(self.start, self.end)
    }

    /// Segments never contain a rectangle, this only distinguishes touching from separated.
    pub fn intersection_type(&self, rect: &AABB<T>) -> IntersectionType {
        if seg_touches_aabb(self.start, self.end, rect, &self.bounds) {
            IntersectionType::Intersects
        } else {
            IntersectionType::None
        }
    }
}

/// Separating axis test between the segment `start -> end` (with precomputed `seg_bounds`) and
/// `rect`. The rectangle axes are covered by the bounds check, leaving the segment normal.
pub(crate) fn seg_touches_aabb<T>(
    start: Vector2<T>,
    end: Vector2<T>,
    rect: &AABB<T>,
    seg_bounds: &AABB<T>,
) -> bool
where
    T: Real,
{
    if !aabb_overlaps(seg_bounds, rect) {
        return false;
    }

    let mut any_left = false;
    let mut any_right = false;
    for corner in aabb_corners(rect) {
        let side = perp_dot_test_value(start, end, corner);
        any_left |= side >= T::zero();
        any_right |= side <= T::zero();
    }

    any_left && any_right
}

/// Squared distance between the segment `start -> end` and the rectangle `rect` (zero if they
/// touch).
pub(crate) fn seg_aabb_dist_squared<T>(start: Vector2<T>, end: Vector2<T>, rect: &AABB<T>) -> T
where
    T: Real,
{
    if aabb_contains_point(rect, start)
        || seg_touches_aabb(start, end, rect, &aabb_from_points([start, end]))
    {
        return T::zero();
    }

    let end_point_dist = |p: Vector2<T>| aabb_closest_point(rect, p).distance_squared(p);
    aabb_corners(rect)
        .into_iter()
        .map(|corner| point_seg_dist_squared(start, end, corner))
        .chain([end_point_dist(start), end_point_dist(end)])
        .fold(<T as Real>::max_value(), num_traits::real::Real::min)
}
