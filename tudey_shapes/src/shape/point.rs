use super::IntersectionType;
use crate::core::{
    math::{aabb_contains_point, Ray2, Transform2D, Vector2},
    traits::Real,
};
use static_aabb2d_index::AABB;

/// A single point.
#[derive(Debug, Clone)]
pub struct Point<T = f64> {
    location: Vector2<T>,
    bounds: AABB<T>,
}

impl<T> Point<T>
where
    T: Real,
{
    #[inline]
    pub fn new(location: Vector2<T>) -> Self {
        Point {
            location,
            bounds: AABB::new(location.x, location.y, location.x, location.y),
        }
    }

    #[inline]
    pub fn location(&self) -> Vector2<T> {
        self.location
    }

    /// Mutable access to the location, call [Point::update_bounds] after changing it.
    #[inline]
    pub fn location_mut(&mut self) -> &mut Vector2<T> {
        &mut self.location
    }

    #[inline]
    pub fn bounds(&self) -> &AABB<T> {
        &self.bounds
    }

    #[inline]
    pub fn update_bounds(&mut self) {
        self.bounds = AABB::new(
            self.location.x,
            self.location.y,
            self.location.x,
            self.location.y,
        );
    }

    #[inline]
    pub fn center(&self) -> Vector2<T> {
        self.location
    }

    pub fn transform(&self, transform: &Transform2D<T>) -> Self {
        Point::new(transform.transform_point(self.location))
    }

    pub fn transform_into(&self, transform: &Transform2D<T>, result: &mut Point<T>) {
        result.location = transform.transform_point(self.location);
        result.update_bounds();
    }

    pub fn transform_local(&mut self, transform: &Transform2D<T>) {
        self.location = transform.transform_point(self.location);
        self.update_bounds();
    }

    /// The point itself if it lies on `ray`.
    pub fn intersection(&self, ray: &Ray2<T>) -> Option<Vector2<T>> {
        if ray.contains_point(self.location) {
            Some(self.location)
        } else {
            None
        }
    }

    /// A point can touch a rectangle but never contain one.
    pub fn intersection_type(&self, rect: &AABB<T>) -> IntersectionType {
        if aabb_contains_point(rect, self.location) {
            IntersectionType::Intersects
        } else {
            IntersectionType::None
        }
    }
}
