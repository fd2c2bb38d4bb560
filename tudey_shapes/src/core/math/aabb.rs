//! Helpers for working with [AABB] values as shape bounds and query rectangles.
//!
//! An [AABB] whose min is greater than its max is treated as empty; it overlaps nothing and
//! contains nothing, and is the identity for [aabb_union].
use super::Vector2;
use crate::core::traits::Real;
use static_aabb2d_index::AABB;

/// Returns the empty bounds (inverted extents).
#[inline]
pub fn empty_aabb<T>() -> AABB<T>
where
    T: Real,
{
    AABB::new(
        <T as Real>::max_value(),
        <T as Real>::max_value(),
        <T as Real>::min_value(),
        <T as Real>::min_value(),
    )
}

/// Returns true if `aabb` has inverted extents.
#[inline]
pub fn aabb_is_empty<T>(aabb: &AABB<T>) -> bool
where
    T: Real,
{
    aabb.min_x > aabb.max_x || aabb.min_y > aabb.max_y
}

/// Grows `aabb` to include `point`.
#[inline]
pub fn aabb_add_point<T>(aabb: &mut AABB<T>, point: Vector2<T>)
where
    T: Real,
{
    if point.x < aabb.min_x {
        aabb.min_x = point.x;
    }
    if point.x > aabb.max_x {
        aabb.max_x = point.x;
    }
    if point.y < aabb.min_y {
        aabb.min_y = point.y;
    }
    if point.y > aabb.max_y {
        aabb.max_y = point.y;
    }
}

/// Bounds of all the `points` given, empty if there are none.
///
/// # Examples
///
/// ```
/// # use tudey_shapes::core::math::*;
/// let bounds = aabb_from_points([Vector2::new(1.0, 3.0), Vector2::new(-2.0, 0.5)]);
/// assert_eq!((bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y), (-2.0, 0.5, 1.0, 3.0));
/// assert!(aabb_is_empty(&aabb_from_points(Vec::<Vector2>::new())));
/// ```
pub fn aabb_from_points<T, I>(points: I) -> AABB<T>
where
    T: Real,
    I: IntoIterator<Item = Vector2<T>>,
{
    let mut result = empty_aabb();
    for p in points {
        aabb_add_point(&mut result, p);
    }
    result
}

/// Smallest bounds containing both `a` and `b`.
#[inline]
pub fn aabb_union<T>(a: &AABB<T>, b: &AABB<T>) -> AABB<T>
where
    T: Real,
{
    use num_traits::real::Real as R;
    AABB::new(
        R::min(a.min_x, b.min_x),
        R::min(a.min_y, b.min_y),
        R::max(a.max_x, b.max_x),
        R::max(a.max_y, b.max_y),
    )
}

/// Returns `aabb` grown outward by `amount` on every side.
#[inline]
pub fn aabb_expand<T>(aabb: &AABB<T>, amount: T) -> AABB<T>
where
    T: Real,
{
    AABB::new(
        aabb.min_x - amount,
        aabb.min_y - amount,
        aabb.max_x + amount,
        aabb.max_y + amount,
    )
}

/// Returns true if `a` and `b` overlap (touching edges count as overlapping).
#[inline]
pub fn aabb_overlaps<T>(a: &AABB<T>, b: &AABB<T>) -> bool
where
    T: Real,
{
    a.min_x <= b.max_x && b.min_x <= a.max_x && a.min_y <= b.max_y && b.min_y <= a.max_y
}

/// Returns true if `point` lies within `aabb` (inclusive).
#[inline]
pub fn aabb_contains_point<T>(aabb: &AABB<T>, point: Vector2<T>) -> bool
where
    T: Real,
{
    point.x >= aabb.min_x && point.x <= aabb.max_x && point.y >= aabb.min_y && point.y <= aabb.max_y
}

/// Center point of `aabb`.
#[inline]
pub fn aabb_center<T>(aabb: &AABB<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(
        (aabb.min_x + aabb.max_x) / T::two(),
        (aabb.min_y + aabb.max_y) / T::two(),
    )
}

/// Corners of `aabb` in counter clockwise order starting at the minimum extent.
#[inline]
pub fn aabb_corners<T>(aabb: &AABB<T>) -> [Vector2<T>; 4]
where
    T: Real,
{
    [
        Vector2::new(aabb.min_x, aabb.min_y),
        Vector2::new(aabb.max_x, aabb.min_y),
        Vector2::new(aabb.max_x, aabb.max_y),
        Vector2::new(aabb.min_x, aabb.max_y),
    ]
}

/// Point within `aabb` closest to `point` (`point` itself if inside).
#[inline]
pub fn aabb_closest_point<T>(aabb: &AABB<T>, point: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(
        clamp(point.x, aabb.min_x, aabb.max_x),
        clamp(point.y, aabb.min_y, aabb.max_y),
    )
}

#[inline]
fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: Real,
{
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Same as [aabb_overlaps] but treats boxes within `epsilon` of each other as overlapping.
#[inline]
pub fn aabb_overlaps_eps<T>(a: &AABB<T>, b: &AABB<T>, epsilon: T) -> bool
where
    T: Real,
{
    a.min_x.fuzzy_lt_eps(b.max_x, epsilon)
        && b.min_x.fuzzy_lt_eps(a.max_x, epsilon)
        && a.min_y.fuzzy_lt_eps(b.max_y, epsilon)
        && b.min_y.fuzzy_lt_eps(a.max_y, epsilon)
}
