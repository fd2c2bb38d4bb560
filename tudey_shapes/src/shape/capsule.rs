use super::{nearest_hit, segment::seg_aabb_dist_squared, IntersectionType};
use crate::core::{
    math::{
        aabb_corners, aabb_expand, aabb_from_points, aabb_overlaps, midpoint,
        point_seg_dist_squared, Ray2, Transform2D, Vector2,
    },
    traits::Real,
};
use static_aabb2d_index::AABB;

/// A line segment swept by a circle (a "stadium"): every point within `radius` of the segment
/// `start -> end`.
#[derive(Debug, Clone)]
pub struct Capsule<T = f64> {
    start: Vector2<T>,
    end: Vector2<T>,
    radius: T,
    bounds: AABB<T>,
}

impl<T> Capsule<T>
where
    T: Real,
{
    pub fn new(start: Vector2<T>, end: Vector2<T>, radius: T) -> Self {
        debug_assert!(radius >= T::zero(), "capsule radius must not be negative");
        Capsule {
            start,
            end,
            radius,
            bounds: capsule_bounds(start, end, radius),
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

    #[inline]
    pub fn radius(&self) -> T {
        self.radius
    }

    /// Mutable access to the start point, call [Capsule::update_bounds] after changing it.
    #[inline]
    pub fn start_mut(&mut self) -> &mut Vector2<T> {
        &mut self.start
    }

    /// Mutable access to the end point, call [Capsule::update_bounds] after changing it.
    #[inline]
    pub fn end_mut(&mut self) -> &mut Vector2<T> {
        &mut self.end
    }

    /// Mutable access to the radius, call [Capsule::update_bounds] after changing it.
    #[inline]
    pub fn radius_mut(&mut self) -> &mut T {
        &mut self.radius
    }

    #[inline]
    pub fn bounds(&self) -> &AABB<T> {
        &self.bounds
    }

    #[inline]
    pub fn update_bounds(&mut self) {
        self.bounds = capsule_bounds(self.start, self.end, self.radius);
    }

    #[inline]
    pub fn center(&self) -> Vector2<T> {
        midpoint(self.start, self.end)
    }

    /// Returns true if `point` is inside or on the capsule.
    #[inline]
    pub fn contains_point(&self, point: Vector2<T>) -> bool {
        point_seg_dist_squared(self.start, self.end, point) <= self.radius * self.radius
    }

    pub fn transform(&self, transform: &Transform2D<T>) -> Self {
        Capsule::new(
            transform.transform_point(self.start),
            transform.transform_point(self.end),
            self.radius * transform.scale.abs(),
        )
    }

    pub fn transform_into(&self, transform: &Transform2D<T>, result: &mut Capsule<T>) {
        result.start = transform.transform_point(self.start);
        result.end = transform.transform_point(self.end);
        result.radius = self.radius * transform.scale.abs();
        result.update_bounds();
    }

    pub fn transform_local(&mut self, transform: &Transform2D<T>) {
        self.start = transform.transform_point(self.start);
        self.end = transform.transform_point(self.end);
        self.radius = self.radius * transform.scale.abs();
        self.update_bounds();
    }

    pub fn intersection(&self, ray: &Ray2<T>) -> Option<Vector2<T>> {
        if self.contains_point(ray.origin) {
            return Some(ray.origin);
        }

        let start_cap = ray.intersection_with_circle(self.start, self.radius);
        let end_cap = ray.intersection_with_circle(self.end, self.radius);
        let axis = self.end - self.start;
        if axis.length_squared().fuzzy_eq_zero() {
            return nearest_hit(ray.origin, [start_cap, end_cap]);
        }

        let offset = axis.perp().normalize().scale(self.radius);
        let left = ray.intersection_with_segment(self.start + offset, self.end + offset);
        let right = ray.intersection_with_segment(self.start - offset, self.end - offset);
        nearest_hit(ray.origin, [start_cap, end_cap, left, right])
    }

    pub fn intersection_type(&self, rect: &AABB<T>) -> IntersectionType {
        let r2 = self.radius * self.radius;
        if !aabb_overlaps(&self.bounds, rect)
            || seg_aabb_dist_squared(self.start, self.end, rect) > r2
        {
            return IntersectionType::None;
        }

        if aabb_corners(rect).into_iter().all(|c| self.contains_point(c)) {
            IntersectionType::Contains
        } else {
            IntersectionType::Intersects
        }
    }
}

#[inline]
fn capsule_bounds<T>(start: Vector2<T>, end: Vector2<T>, radius: T) -> AABB<T>
where
    T: Real,
{
    aabb_expand(&aabb_from_points([start, end]), radius)
}
