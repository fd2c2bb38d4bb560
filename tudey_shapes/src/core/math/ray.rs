use super::{line_line_intr, LineLineIntr, Vector2};
use crate::core::traits::Real;

/// Half-infinite line starting at `origin` and heading along `direction`.
///
/// `direction` does not need to be normalized but must be non zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray2<T = f64> {
    pub origin: Vector2<T>,
    pub direction: Vector2<T>,
}

impl<T> Ray2<T>
where
    T: Real,
{
    #[inline]
    pub fn new(origin: Vector2<T>, direction: Vector2<T>) -> Self {
        Ray2 { origin, direction }
    }

    /// Point at parametric distance `t` (in units of `direction`) along the ray.
    #[inline]
    pub fn point_at(&self, t: T) -> Vector2<T> {
        self.origin + self.direction.scale(t)
    }

    /// Parametric value of the point on the ray's line nearest to `point`.
    #[inline]
    pub fn parametric_of(&self, point: Vector2<T>) -> T {
        (point - self.origin).dot(self.direction) / self.direction.length_squared()
    }

    /// Returns true if `point` lies on the ray (fuzzy).
    pub fn contains_point(&self, point: Vector2<T>) -> bool {
        let t = self.parametric_of(point);
        if t < T::zero() {
            return point.fuzzy_eq(self.origin);
        }
        self.point_at(t).fuzzy_eq(point)
    }

    /// Finds the first point where the ray meets the line segment `start -> end`.
    ///
    /// For a segment lying along the ray the nearest point of the segment is returned (the
    /// origin if the origin is on the segment).
    ///
    /// # Examples
    ///
    /// ```
    /// # use tudey_shapes::core::math::*;
    /// let ray = Ray2::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
    /// let hit = ray.intersection_with_segment(Vector2::new(3.0, -1.0), Vector2::new(3.0, 1.0));
    /// assert!(hit.unwrap().fuzzy_eq(Vector2::new(3.0, 0.0)));
    /// // behind the origin
    /// let miss = ray.intersection_with_segment(Vector2::new(-3.0, -1.0), Vector2::new(-3.0, 1.0));
    /// assert!(miss.is_none());
    /// ```
    pub fn intersection_with_segment(
        &self,
        start: Vector2<T>,
        end: Vector2<T>,
    ) -> Option<Vector2<T>> {
        let eps = T::fuzzy_epsilon();
        let ray_end = self.origin + self.direction;
        match line_line_intr(self.origin, ray_end, start, end, eps) {
            LineLineIntr::TrueIntersect { seg1_t, seg2_t }
            | LineLineIntr::FalseIntersect { seg1_t, seg2_t } => {
                let ray_length = self.direction.length();
                let seg_length = (end - start).length();
                if (seg1_t * ray_length).fuzzy_gt_eps(T::zero(), eps)
                    && (seg2_t * seg_length).fuzzy_in_range_eps(T::zero(), seg_length, eps)
                {
                    Some(self.point_at(num_traits::real::Real::max(seg1_t, T::zero())))
                } else {
                    None
                }
            }
            LineLineIntr::Overlapping { .. } | LineLineIntr::NoIntersect => {
                self.collinear_segment_hit(start, end)
            }
        }
    }

    fn collinear_segment_hit(&self, start: Vector2<T>, end: Vector2<T>) -> Option<Vector2<T>> {
        let t_start = self.parametric_of(start);
        let t_end = self.parametric_of(end);
        if !self.point_at(t_start).fuzzy_eq(start) || !self.point_at(t_end).fuzzy_eq(end) {
            // parallel but not on the ray's line
            return None;
        }

        let (t_min, t_max) = super::min_max(t_start, t_end);
        if t_max < T::zero() {
            return None;
        }

        Some(self.point_at(num_traits::real::Real::max(t_min, T::zero())))
    }

    /// Finds the first point where the ray meets the circle boundary, ahead of the origin.
    ///
    /// If the origin is inside the circle this is the exit point.
    pub fn intersection_with_circle(&self, center: Vector2<T>, radius: T) -> Option<Vector2<T>> {
        let offset = self.origin - center;
        let a = self.direction.length_squared();
        let b = T::two() * self.direction.dot(offset);
        let c = offset.length_squared() - radius * radius;
        let discriminant = b * b - T::two() * T::two() * a * c;
        if discriminant < T::zero() {
            return None;
        }

        let sqrt_discriminant = discriminant.sqrt();
        let t0 = (-b - sqrt_discriminant) / (T::two() * a);
        let t1 = (-b + sqrt_discriminant) / (T::two() * a);
        if t0 >= T::zero() {
            Some(self.point_at(t0))
        } else if t1 >= T::zero() {
            Some(self.point_at(t1))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_hit_from_outside() {
        let ray = Ray2::new(Vector2::new(-5.0, 0.0), Vector2::new(2.0, 0.0));
        let hit = ray.intersection_with_circle(Vector2::zero(), 1.0).unwrap();
        assert!(hit.fuzzy_eq(Vector2::new(-1.0, 0.0)));
    }

    #[test]
    fn circle_miss() {
        let ray = Ray2::new(Vector2::new(-5.0, 2.0), Vector2::new(1.0, 0.0));
        assert!(ray.intersection_with_circle(Vector2::zero(), 1.0).is_none());
        let away = Ray2::new(Vector2::new(-5.0, 0.0), Vector2::new(-1.0, 0.0));
        assert!(away.intersection_with_circle(Vector2::zero(), 1.0).is_none());
    }

    #[test]
    fn collinear_segment() {
        let ray = Ray2::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
        let hit = ray
            .intersection_with_segment(Vector2::new(5.0, 0.0), Vector2::new(2.0, 0.0))
            .unwrap();
        assert!(hit.fuzzy_eq(Vector2::new(2.0, 0.0)));
        let inside = ray
            .intersection_with_segment(Vector2::new(-1.0, 0.0), Vector2::new(2.0, 0.0))
            .unwrap();
        assert!(inside.fuzzy_eq(Vector2::new(0.0, 0.0)));
    }

    #[test]
    fn contains_point() {
        let ray = Ray2::new(Vector2::new(1.0, 1.0), Vector2::new(1.0, 1.0));
        assert!(ray.contains_point(Vector2::new(3.0, 3.0)));
        assert!(ray.contains_point(Vector2::new(1.0, 1.0)));
        assert!(!ray.contains_point(Vector2::new(0.0, 0.0)));
        assert!(!ray.contains_point(Vector2::new(3.0, 2.0)));
    }
}
