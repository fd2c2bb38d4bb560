#![allow(dead_code)]

use tudey_shapes::{
    core::{math::Vector2, traits::FuzzyEq},
    shape::*,
    AABB,
};

/// Fuzzy compare AABB values
pub fn aabb_fuzzy_eq_eps(a: &AABB<f64>, b: &AABB<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

/// Counter clockwise axis aligned rectangle polygon.
pub fn rect_polygon(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Polygon {
    Polygon::new(vec![
        Vector2::new(min_x, min_y),
        Vector2::new(max_x, min_y),
        Vector2::new(max_x, max_y),
        Vector2::new(min_x, max_y),
    ])
}

/// Counter clockwise regular polygon with `sides` vertices on the circle of `radius`.
pub fn regular_polygon(center: Vector2, radius: f64, sides: usize) -> Polygon {
    let step = std::f64::consts::TAU / sides as f64;
    Polygon::new(
        (0..sides)
            .map(|i| center + Vector2::new(radius, 0.0).rotate(step * i as f64))
            .collect(),
    )
}

/// A mix of every shape kind spread over roughly `(-6, -6)` to `(8, 8)`, some touching and some
/// apart.
pub fn sample_shapes() -> Vec<Shape> {
    vec![
        Point::new(Vector2::new(0.0, 0.0)).into(),
        Point::new(Vector2::new(5.0, 5.0)).into(),
        Point::new(Vector2::new(1.0, 0.0)).into(),
        Segment::new(Vector2::new(-2.0, 0.0), Vector2::new(2.0, 0.0)).into(),
        Segment::new(Vector2::new(4.0, 4.0), Vector2::new(6.0, 6.0)).into(),
        Segment::new(Vector2::new(0.5, -3.0), Vector2::new(0.5, 3.0)).into(),
        Circle::new(Vector2::new(0.0, 0.0), 1.0).into(),
        Circle::new(Vector2::new(5.0, 4.0), 0.75).into(),
        Circle::new(Vector2::new(-4.0, -4.0), 2.0).into(),
        Capsule::new(Vector2::new(-3.0, 2.0), Vector2::new(3.0, 2.0), 0.5).into(),
        Capsule::new(Vector2::new(6.0, -1.0), Vector2::new(6.0, 3.0), 1.0).into(),
        rect_polygon(-1.0, -1.0, 1.0, 1.0).into(),
        rect_polygon(3.0, 3.0, 7.0, 4.5).into(),
        regular_polygon(Vector2::new(-4.0, 1.0), 1.5, 6).into(),
        Compound::new(vec![
            Circle::new(Vector2::new(-2.0, -5.0), 1.0).into(),
            Segment::new(Vector2::new(-2.0, -5.0), Vector2::new(2.0, -5.0)).into(),
            Circle::new(Vector2::new(2.0, -5.0), 1.0).into(),
        ])
        .into(),
        Compound::new(vec![
            rect_polygon(7.0, 7.0, 8.0, 8.0).into(),
            Point::new(Vector2::new(4.0, 6.0)).into(),
        ])
        .into(),
        Compound::new(Vec::new()).into(),
    ]
}
