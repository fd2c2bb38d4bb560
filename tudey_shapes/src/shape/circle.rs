use super::IntersectionType;
use crate::core::{
    math::{aabb_closest_point, aabb_corners, aabb_overlaps, Ray2, Transform2D, Vector2},
    traits::Real,
};
use static_aabb2d_index::AABB;

/// A solid circle.
#[derive(Debug, Clone)]
pub struct Circle<T = f64> {
    center: Vector2<T>,
    radius: T,
    bounds: AABB<T>,
}

impl<T> Circle<T>
where
    T: Real,
{
    pub fn new(center: Vector2<T>, radius: T) -> Self {
        debug_assert!(radius >= T::zero(), "circle radius must not be negative");
        Circle {
            center,
            radius,
            bounds: circle_bounds(center, radius),
        }
    }

    #[inline]
    pub fn radius(&self) -> T {
        self.radius
    }

    /// Mutable access to the center, call [Circle::update_bounds] after changing it.
    #[inline]
    pub fn center_mut(&mut self) -> &mut Vector2<T> {
        &mut self.center
    }

    /// Mutable access to the radius, call [Circle::update_bounds] after changing it.
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
        self.bounds = circle_bounds(self.center, self.radius);
    }

    #[inline]
    pub fn center(&self) -> Vector2<T> {
        self.center
    }

    /// Returns true if `point` is inside or on the circle.
    #[inline]
    pub fn contains_point(&self, point: Vector2<T>) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    pub fn transform(&self, transform: &Transform2D<T>) -> Self {
        Circle::new(
            transform.transform_point(self.center),
            self.radius * transform.scale.abs(),
        )
    }

    pub fn transform_into(&self, transform: &Transform2D<T>, result: &mut Circle<T>) {
        result.center = transform.transform_point(self.center);
        result.radius = self.radius * transform.scale.abs();
        result.update_bounds();
    }

    pub fn transform_local(&mut self, transform: &Transform2D<T>) {
        self.center = transform.transform_point(self.center);
        self.radius = self.radius * transform.scale.abs();
        self.update_bounds();
    }

    pub fn intersection(&self, ray: &Ray2<T>) -> Option<Vector2<T>> {
        if self.contains_point(ray.origin) {
            return Some(ray.origin);
        }
        ray.intersection_with_circle(self.center, self.radius)
    }

    pub fn intersection_type(&self, rect: &AABB<T>) -> IntersectionType {
        if !aabb_overlaps(&self.bounds, rect)
            || !self.contains_point(aabb_closest_point(rect, self.center))
        {
            return IntersectionType::None;
        }

        // the circle is convex so containing every corner means containing the rect
        if aabb_corners(rect).into_iter().all(|c| self.contains_point(c)) {
            IntersectionType::Contains
        } else {
            IntersectionType::Intersects
        }
    }
}

#[inline]
fn circle_bounds<T>(center: Vector2<T>, radius: T) -> AABB<T>
where
    T: Real,
{
    AABB::new(
        center.x - radius,
        center.y - radius,
        center.x + radius,
        center.y + radius,
    )
}
