use super::{line_line_intr, LineLineIntr, Vector2};
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use tudey_shapes::core::math::*;
/// assert_eq!(min_max(8, 4), (4, 8));
/// assert_eq!(min_max(-1.5, 2.0), (-1.5, 2.0));
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Midpoint of a line segment defined by `p0` to `p1`.
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    (p0 + p1).scale(T::half())
}

/// Returns the point on the line segment going from `p0` to `p1` at parametric value `t`.
#[inline]
pub fn point_from_parametric<T>(p0: Vector2<T>, p1: Vector2<T>, t: T) -> Vector2<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Returns the closest point on the line segment from `p0` to `p1` to the `point` given.
///
/// # Examples
///
/// ```
/// # use tudey_shapes::core::math::*;
/// let p0 = Vector2::new(0.0, 0.0);
/// let p1 = Vector2::new(4.0, 0.0);
/// let closest = line_seg_closest_point(p0, p1, Vector2::new(1.0, 3.0));
/// assert!(closest.fuzzy_eq(Vector2::new(1.0, 0.0)));
/// // clamps to the end points
/// assert!(line_seg_closest_point(p0, p1, Vector2::new(-2.0, 1.0)).fuzzy_eq(p0));
/// assert!(line_seg_closest_point(p0, p1, Vector2::new(9.0, 1.0)).fuzzy_eq(p1));
/// ```
#[inline]
pub fn line_seg_closest_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    // project onto the segment direction and clamp
    // See: http://geomalgorithms.com/a02-_lines.html
    let v = p1 - p0;
    let w = point - p0;
    let c1 = w.dot(v);
    if c1 <= T::zero() {
        return p0;
    }

    let c2 = v.length_squared();
    if c2 <= c1 {
        return p1;
    }

    point_from_parametric(p0, p1, c1 / c2)
}

/// Squared distance from `point` to the line segment `p0` to `p1`.
#[inline]
pub fn point_seg_dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    line_seg_closest_point(p0, p1, point).distance_squared(point)
}

/// Returns true if the line segments `a0 -> a1` and `b0 -> b1` touch or cross.
///
/// Collinear segments that overlap and segments that meet end to end count as intersecting.
#[inline]
pub fn segments_intersect<T>(a0: Vector2<T>, a1: Vector2<T>, b0: Vector2<T>, b1: Vector2<T>) -> bool
where
    T: Real,
{
    matches!(
        line_line_intr(a0, a1, b0, b1, T::fuzzy_epsilon()),
        LineLineIntr::TrueIntersect { .. } | LineLineIntr::Overlapping { .. }
    )
}

/// Squared minimum distance between the line segments `a0 -> a1` and `b0 -> b1`.
///
/// # Examples
///
/// ```
/// # use tudey_shapes::core::math::*;
/// # use tudey_shapes::core::traits::*;
/// let a0 = Vector2::new(0.0, 0.0);
/// let a1 = Vector2::new(2.0, 0.0);
/// // parallel, two units above
/// let d = seg_seg_dist_squared(a0, a1, Vector2::new(0.0, 2.0), Vector2::new(2.0, 2.0));
/// assert!(d.fuzzy_eq(4.0));
/// // crossing
/// let d = seg_seg_dist_squared(a0, a1, Vector2::new(1.0, -1.0), Vector2::new(1.0, 1.0));
/// assert!(d.fuzzy_eq(0.0));
/// ```
pub fn seg_seg_dist_squared<T>(a0: Vector2<T>, a1: Vector2<T>, b0: Vector2<T>, b1: Vector2<T>) -> T
where
    T: Real,
{
    if segments_intersect(a0, a1, b0, b1) {
        return T::zero();
    }

    // for non crossing segments the minimum is always attained at one of the end points
    [
        point_seg_dist_squared(b0, b1, a0),
        point_seg_dist_squared(b0, b1, a1),
        point_seg_dist_squared(a0, a1, b0),
        point_seg_dist_squared(a0, a1, b1),
    ]
    .into_iter()
    .fold(<T as Real>::max_value(), num_traits::real::Real::min)
}

/// Value of the perpendicular dot product used for side-of-line tests.
///
/// Positive if `point` is left of the direction `p0 -> p1`, negative if right, zero if on the
/// line.
#[inline]
pub fn perp_dot_test_value<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    (p1.x - p0.x) * (point.y - p0.y) - (p1.y - p0.y) * (point.x - p0.x)
}

/// Signed area of the closed loop of `points` (positive for counter clockwise winding).
pub fn signed_area<T>(points: &[Vector2<T>]) -> T
where
    T: Real,
{
    let n = points.len();
    if n < 3 {
        return T::zero();
    }

    let mut double_area = T::zero();
    for i in 0..n {
        let p0 = points[i];
        let p1 = points[(i + 1) % n];
        double_area = double_area + p0.perp_dot(p1);
    }

    double_area * T::half()
}
