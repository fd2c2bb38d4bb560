use super::{Capsule, Circle, IntersectionType};
use crate::core::{
    math::{
        aabb_corners, aabb_from_points, aabb_overlaps, seg_seg_dist_squared, segments_intersect,
        Ray2, Transform2D, Vector2,
    },
    traits::Real,
};
use static_aabb2d_index::AABB;

/// A convex polygon with counter clockwise winding.
///
/// Convexity and winding are not checked. Every edge `start -> end` defines the inside
/// half-plane `a * x + b * y >= a * start.x + b * start.y` with `a = start.y - end.y` and
/// `b = end.x - start.x`; clockwise or concave input gives meaningless results.
///
/// # Examples
///
/// ```
/// # use tudey_shapes::core::math::*;
/// # use tudey_shapes::shape::*;
/// # use tudey_shapes::polygon;
/// # use tudey_shapes::AABB;
/// let square = polygon![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
/// assert!(square.contains_point(Vector2::new(2.0, 2.0)));
/// assert!(!square.contains_point(Vector2::new(5.0, 5.0)));
/// assert_eq!(
///     square.intersection_type(&AABB::new(1.0, 1.0, 3.0, 3.0)),
///     IntersectionType::Contains
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Polygon<T = f64> {
    vertices: Vec<Vector2<T>>,
    bounds: AABB<T>,
}

/// Half-plane of the edge `start -> end` as `(a, b, c)`, inside where `a * x + b * y >= c`.
#[inline]
fn edge_half_plane<T>(start: Vector2<T>, end: Vector2<T>) -> (T, T, T)
where
    T: Real,
{
    let a = start.y - end.y;
    let b = end.x - start.x;
    (a, b, a * start.x + b * start.y)
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Create a polygon from counter clockwise `vertices`.
    pub fn new(vertices: Vec<Vector2<T>>) -> Self {
        debug_assert!(vertices.len() >= 3, "polygon requires at least 3 vertices");
        let bounds = aabb_from_points(vertices.iter().copied());
        Polygon { vertices, bounds }
    }

    /// Create a polygon with `vertex_count` vertices all at the origin, to be filled in later
    /// (e.g. as the target of [Polygon::transform_into]).
    pub fn with_vertex_count(vertex_count: usize) -> Self {
        let vertices = vec![Vector2::zero(); vertex_count];
        let bounds = aabb_from_points(vertices.iter().copied());
        Polygon { vertices, bounds }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn vertex(&self, index: usize) -> Vector2<T> {
        self.vertices[index]
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<T>] {
        &self.vertices
    }

    /// Mutable access to the vertices, call [Polygon::update_bounds] after changing them.
    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [Vector2<T>] {
        &mut self.vertices
    }

    /// Iterate the edges as `(start, end)` pairs, wrapping from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<T>, Vector2<T>)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    #[inline]
    pub fn bounds(&self) -> &AABB<T> {
        &self.bounds
    }

    #[inline]
    pub fn update_bounds(&mut self) {
        self.bounds = aabb_from_points(self.vertices.iter().copied());
    }

    /// Average of the vertices.
    pub fn center(&self) -> Vector2<T> {
        if self.vertices.is_empty() {
            return Vector2::zero();
        }
        let sum = self
            .vertices
            .iter()
            .fold(Vector2::zero(), |acc: Vector2<T>, v| acc + *v);
        // vertex counts are tiny, the cast cannot fail
        sum.scale(T::one() / T::from(self.vertices.len()).unwrap())
    }

    /// Returns true if `point` is inside or on the polygon.
    pub fn contains_point(&self, point: Vector2<T>) -> bool {
        self.edges().all(|(start, end)| {
            let (a, b, c) = edge_half_plane(start, end);
            a * point.x + b * point.y >= c
        })
    }

    pub fn transform(&self, transform: &Transform2D<T>) -> Self {
        let mut result = Polygon::with_vertex_count(self.vertices.len());
        self.transform_into(transform, &mut result);
        result
    }

    /// Writes the transformed vertices into `result`, resizing its vertex buffer if the counts
    /// differ.
    pub fn transform_into(&self, transform: &Transform2D<T>, result: &mut Polygon<T>) {
        result.vertices.clear();
        result
            .vertices
            .extend(self.vertices.iter().map(|v| transform.transform_point(*v)));
        result.update_bounds();
    }

    pub fn transform_local(&mut self, transform: &Transform2D<T>) {
        for v in self.vertices.iter_mut() {
            *v = transform.transform_point(*v);
        }
        self.update_bounds();
    }

    /// Ray origin if it starts inside, otherwise the first hit on an edge facing the origin.
    ///
    /// Edges are tried in vertex order and the first hit is returned; for a convex polygon
    /// entered from outside only one facing edge can be hit first.
    pub fn intersection(&self, ray: &Ray2<T>) -> Option<Vector2<T>> {
        let origin = ray.origin;
        if self.contains_point(origin) {
            return Some(origin);
        }

        self.edges()
            .filter(|&(start, end)| {
                let (a, b, c) = edge_half_plane(start, end);
                a * origin.x + b * origin.y <= c
            })
            .find_map(|(start, end)| ray.intersection_with_segment(start, end))
    }

    /// Classifies `rect` using each polygon edge as a potential separating axis. The rectangle
    /// axes are covered by the bounds check.
    pub fn intersection_type(&self, rect: &AABB<T>) -> IntersectionType {
        if !aabb_overlaps(&self.bounds, rect) {
            return IntersectionType::None;
        }

        let corners = aabb_corners(rect);
        let mut contained_count = 0;
        for (start, end) in self.edges() {
            let (a, b, c) = edge_half_plane(start, end);
            let inside = corners
                .iter()
                .filter(|corner| a * corner.x + b * corner.y >= c)
                .count();
            if inside == 0 {
                return IntersectionType::None;
            }
            if inside == corners.len() {
                contained_count += 1;
            }
        }

        if contained_count == self.vertices.len() {
            IntersectionType::Contains
        } else {
            IntersectionType::Intersects
        }
    }

    /// Tests this polygon's edges as separating axes against `other`.
    ///
    /// Returns false if some edge has every vertex of `other` strictly outside it. Polygons
    /// only intersect if this holds in both directions.
    pub fn intersects_on_axes(&self, other: &Polygon<T>) -> bool {
        self.edges().all(|(start, end)| {
            let (a, b, c) = edge_half_plane(start, end);
            other.vertices.iter().any(|v| a * v.x + b * v.y >= c)
        })
    }

    pub fn intersects_polygon(&self, other: &Polygon<T>) -> bool {
        self.intersects_on_axes(other) && other.intersects_on_axes(self)
    }

    /// Returns true if the line segment `seg_start -> seg_end` touches the polygon.
    pub fn intersects_segment(&self, seg_start: Vector2<T>, seg_end: Vector2<T>) -> bool {
        if self.contains_point(seg_start) {
            return true;
        }

        // only edges the segment start is outside of can be crossed on the way in
        self.edges().any(|(start, end)| {
            let (a, b, c) = edge_half_plane(start, end);
            a * seg_start.x + b * seg_start.y <= c
                && segments_intersect(start, end, seg_start, seg_end)
        })
    }

    /// Returns true if the circle touches the polygon.
    ///
    /// The first edge whose half-plane excludes the circle center picks the closest feature:
    /// its start vertex if the center is outside the previous edge as well, the edge itself if
    /// the center is inside the next edge, otherwise its end vertex. If no edge excludes the
    /// center the center is inside.
    pub fn intersects_circle(&self, circle: &Circle<T>) -> bool {
        let center = circle.center();
        let r2 = circle.radius() * circle.radius();
        let n = self.vertices.len();
        for i in 0..n {
            let start = self.vertices[i];
            let end = self.vertices[(i + 1) % n];
            let (a, b, c) = edge_half_plane(start, end);
            let d = a * center.x + b * center.y - c;
            if d >= T::zero() {
                continue;
            }

            let previous = self.vertices[(i + n - 1) % n];
            let (a, b, c) = edge_half_plane(previous, start);
            if a * center.x + b * center.y <= c {
                return start.distance_squared(center) <= r2;
            }

            let next = self.vertices[(i + 2) % n];
            let (a, b, c) = edge_half_plane(end, next);
            if a * center.x + b * center.y > c {
                // d is scaled by the edge length
                let l2 = (end - start).length_squared();
                return d * d <= l2 * r2;
            }

            return end.distance_squared(center) <= r2;
        }

        true
    }

    /// Returns true if the capsule touches the polygon: its segment enters the polygon or some
    /// edge passes within the capsule radius.
    pub fn intersects_capsule(&self, capsule: &Capsule<T>) -> bool {
        if self.intersects_segment(capsule.start(), capsule.end()) {
            return true;
        }

        let r2 = capsule.radius() * capsule.radius();
        self.edges().any(|(start, end)| {
            seg_seg_dist_squared(start, end, capsule.start(), capsule.end()) <= r2
        })
    }
}
