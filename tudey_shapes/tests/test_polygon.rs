mod test_utils;

use rand::{rngs::StdRng, Rng, SeedableRng};
use test_utils::{rect_polygon, regular_polygon};
use tudey_shapes::{
    core::math::{aabb_corners, Ray2, Transform2D, Vector2},
    polygon,
    shape::*,
    AABB,
};

#[test]
fn square_contains_and_classifies_rects() {
    let square = polygon![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
    assert!(square.contains_point(Vector2::new(2.0, 2.0)));
    assert!(!square.contains_point(Vector2::new(5.0, 5.0)));
    // boundary counts as inside
    assert!(square.contains_point(Vector2::new(4.0, 2.0)));

    // 2x2 rect at (1, 1)
    assert_eq!(
        square.intersection_type(&AABB::new(1.0, 1.0, 3.0, 3.0)),
        IntersectionType::Contains
    );
    // 1x1 rect at (-5, -5)
    assert_eq!(
        square.intersection_type(&AABB::new(-5.0, -5.0, -4.0, -4.0)),
        IntersectionType::None
    );
    assert_eq!(
        square.intersection_type(&AABB::new(3.0, 3.0, 6.0, 6.0)),
        IntersectionType::Intersects
    );
}

#[test]
fn diamond_rect_in_bounds_corner_is_separated() {
    let diamond = polygon![(0.0, -2.0), (2.0, 0.0), (0.0, 2.0), (-2.0, 0.0)];
    // inside the diamond bounds but past the upper right edge
    let rect = AABB::new(1.5, 1.5, 2.0, 2.0);
    assert_eq!(diamond.intersection_type(&rect), IntersectionType::None);
    let straddling = AABB::new(0.5, 0.5, 2.0, 2.0);
    assert_eq!(diamond.intersection_type(&straddling), IntersectionType::Intersects);
}

#[test]
fn overlapping_squares_intersect() {
    let a: Shape = rect_polygon(0.0, 0.0, 2.0, 2.0).into();
    let b: Shape = rect_polygon(1.0, 1.0, 3.0, 3.0).into();
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));

    let c: Shape = rect_polygon(0.0, 0.0, 1.0, 1.0).into();
    let d: Shape = rect_polygon(5.0, 5.0, 6.0, 6.0).into();
    assert!(!c.intersects(&d));
    assert!(!d.intersects(&c));
}

#[test]
fn polygons_separated_by_diagonal_edge() {
    let square = rect_polygon(0.0, 0.0, 2.0, 2.0);
    let triangle = polygon![(3.0, 1.5), (3.0, 3.0), (1.5, 3.0)];
    // bounds overlap but the triangle's long edge separates them
    assert!(!square.intersects_polygon(&triangle));
    assert!(!triangle.intersects_polygon(&square));
    assert!(!triangle.intersects_on_axes(&square));
    assert!(square.intersects_on_axes(&triangle));

    let nudged = polygon![(2.5, 1.0), (2.5, 2.5), (1.0, 2.5)];
    assert!(square.intersects_polygon(&nudged));
}

#[test]
fn circle_short_of_square() {
    let square = polygon![(2.0, 2.0), (4.0, 2.0), (4.0, 4.0), (2.0, 4.0)];
    let circle = Circle::new(Vector2::new(0.0, 0.0), 1.0);
    assert!(!square.intersects_circle(&circle));
    let square_shape: Shape = square.clone().into();
    let circle_shape: Shape = circle.clone().into();
    assert!(!shapes_intersect(&square_shape, &circle_shape));

    // reaching past the nearest corner
    let big = Circle::new(Vector2::new(0.0, 0.0), 3.0);
    assert!(square.intersects_circle(&big));
}

#[test]
fn circle_near_corner() {
    let square = rect_polygon(0.0, 0.0, 2.0, 2.0);
    // the corner (2, 2) is sqrt(2) away from the center
    assert!(square.intersects_circle(&Circle::new(Vector2::new(3.0, 3.0), 1.5)));
    assert!(!square.intersects_circle(&Circle::new(Vector2::new(3.0, 3.0), 1.4)));
    // near an edge
    assert!(square.intersects_circle(&Circle::new(Vector2::new(1.0, 2.5), 0.5)));
    assert!(!square.intersects_circle(&Circle::new(Vector2::new(1.0, 2.5), 0.4)));
    // center inside
    assert!(square.intersects_circle(&Circle::new(Vector2::new(1.0, 1.0), 0.1)));
}

#[test]
fn circle_classified_by_adjacent_edges() {
    let triangle = polygon![(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)];
    // outside the hypotenuse and inside the next edge, so the hypotenuse line decides even
    // though the corner (4, 0) is about 0.539 away
    let center = Vector2::new(4.5, 0.2);
    assert!(triangle.intersects_circle(&Circle::new(center, 0.52)));
    assert!(!triangle.intersects_circle(&Circle::new(center, 0.49)));
    let triangle_shape: Shape = triangle.clone().into();
    let circle_shape: Shape = Circle::new(center, 0.52).into();
    assert!(shapes_intersect(&circle_shape, &triangle_shape));

    // outside the first edge and its previous edge, the start vertex decides
    let below_left = Vector2::new(-1.0, -1.0);
    assert!(triangle.intersects_circle(&Circle::new(below_left, 1.5)));
    assert!(!triangle.intersects_circle(&Circle::new(below_left, 1.4)));

    // outside the first edge only, past its end, the end vertex decides
    let below_right = Vector2::new(5.0, -1.0);
    assert!(triangle.intersects_circle(&Circle::new(below_right, 1.5)));
    assert!(!triangle.intersects_circle(&Circle::new(below_right, 1.4)));
}

#[test]
fn segment_against_square() {
    let square = rect_polygon(0.0, 0.0, 2.0, 2.0);
    // crossing
    assert!(square.intersects_segment(Vector2::new(-1.0, 1.0), Vector2::new(3.0, 1.0)));
    // entering from outside, ending inside
    assert!(square.intersects_segment(Vector2::new(-1.0, 1.0), Vector2::new(1.0, 1.0)));
    // fully inside
    assert!(square.intersects_segment(Vector2::new(0.5, 0.5), Vector2::new(1.5, 1.5)));
    // starting inside, leaving
    assert!(square.intersects_segment(Vector2::new(1.0, 1.0), Vector2::new(5.0, 1.0)));
    // passing by
    assert!(!square.intersects_segment(Vector2::new(-1.0, 3.0), Vector2::new(3.0, 3.0)));
    assert!(!square.intersects_segment(Vector2::new(3.0, -1.0), Vector2::new(4.0, 5.0)));
}

#[test]
fn capsule_against_square() {
    let square = rect_polygon(0.0, 0.0, 2.0, 2.0);
    // axis above the square, radius reaching down to the top edge
    let touching = Capsule::new(Vector2::new(-1.0, 2.5), Vector2::new(3.0, 2.5), 0.5);
    assert!(square.intersects_capsule(&touching));
    let short = Capsule::new(Vector2::new(-1.0, 2.5), Vector2::new(3.0, 2.5), 0.4);
    assert!(!square.intersects_capsule(&short));
    // entirely inside
    let inside = Capsule::new(Vector2::new(0.5, 1.0), Vector2::new(1.5, 1.0), 0.2);
    assert!(square.intersects_capsule(&inside));
    // end cap reaching a corner
    let cap = Capsule::new(Vector2::new(5.0, 5.0), Vector2::new(3.0, 3.0), 1.5);
    assert!(square.intersects_capsule(&cap));
    let cap_short = Capsule::new(Vector2::new(5.0, 5.0), Vector2::new(3.0, 3.0), 1.4);
    assert!(!square.intersects_capsule(&cap_short));
}

#[test]
fn ray_hits_facing_edge() {
    let square = rect_polygon(0.0, 0.0, 4.0, 4.0);
    let ray = Ray2::new(Vector2::new(-2.0, 2.0), Vector2::new(1.0, 0.0));
    let hit = square.intersection(&ray).unwrap();
    assert!(hit.fuzzy_eq(Vector2::new(0.0, 2.0)));

    let from_above = Ray2::new(Vector2::new(1.0, 10.0), Vector2::new(0.0, -3.0));
    let hit = square.intersection(&from_above).unwrap();
    assert!(hit.fuzzy_eq(Vector2::new(1.0, 4.0)));

    let inside = Ray2::new(Vector2::new(1.0, 1.0), Vector2::new(0.0, 1.0));
    assert_eq!(square.intersection(&inside), Some(Vector2::new(1.0, 1.0)));

    let away = Ray2::new(Vector2::new(-2.0, 2.0), Vector2::new(-1.0, 0.0));
    assert!(square.intersection(&away).is_none());
    let past = Ray2::new(Vector2::new(-2.0, 5.0), Vector2::new(1.0, 0.0));
    assert!(square.intersection(&past).is_none());
}

#[test]
fn center_is_vertex_average() {
    let square = rect_polygon(0.0, 0.0, 4.0, 2.0);
    assert!(square.center().fuzzy_eq(Vector2::new(2.0, 1.0)));
}

#[test]
fn contains_invariant_under_rigid_transforms() {
    let hexagon = regular_polygon(Vector2::new(1.0, -1.0), 3.0, 6);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let transform = Transform2D::new(
            Vector2::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0)),
            rng.gen_range(-std::f64::consts::PI..std::f64::consts::PI),
        );
        let moved = hexagon.transform(&transform);
        for _ in 0..20 {
            let p = Vector2::new(rng.gen_range(-5.0..7.0), rng.gen_range(-7.0..5.0));
            // keep clear of the boundary where rounding decides
            let near_boundary = hexagon.edges().any(|(s, e)| {
                tudey_shapes::core::math::point_seg_dist_squared(s, e, p) < 1e-6
            });
            if near_boundary {
                continue;
            }
            assert_eq!(
                hexagon.contains_point(p),
                moved.contains_point(transform.transform_point(p)),
                "point {p:?} transform {transform:?}"
            );
        }
    }
}

#[test]
fn contains_classification_implies_corners_inside() {
    let polygon = regular_polygon(Vector2::new(0.0, 0.0), 5.0, 7);
    let mut rng = StdRng::seed_from_u64(42);
    let mut contains_count = 0;
    for _ in 0..500 {
        let x = rng.gen_range(-6.0..6.0);
        let y = rng.gen_range(-6.0..6.0);
        let rect = AABB::new(x, y, x + rng.gen_range(0.0..3.0), y + rng.gen_range(0.0..3.0));
        let classification = polygon.intersection_type(&rect);
        if classification == IntersectionType::Contains {
            contains_count += 1;
            assert!(aabb_corners(&rect)
                .into_iter()
                .all(|c| polygon.contains_point(c)));
        }
        let far = AABB::new(x + 20.0, y + 20.0, x + 21.0, y + 21.0);
        assert_eq!(polygon.intersection_type(&far), IntersectionType::None);
    }
    assert!(contains_count > 0);
}

#[test]
fn transform_into_reuses_or_resizes_vertices() {
    let triangle = polygon![(0.0, 0.0), (2.0, 0.0), (1.0, 1.0)];
    let transform = Transform2D::new(Vector2::new(3.0, -1.0), std::f64::consts::FRAC_PI_2);
    let expected = triangle.transform(&transform);

    let mut same_size = Polygon::with_vertex_count(3);
    triangle.transform_into(&transform, &mut same_size);
    assert_eq!(same_size.vertex_count(), 3);

    let mut wrong_size = Polygon::with_vertex_count(5);
    triangle.transform_into(&transform, &mut wrong_size);
    assert_eq!(wrong_size.vertex_count(), 3);

    for result in [&same_size, &wrong_size] {
        for i in 0..3 {
            assert!(result.vertex(i).fuzzy_eq(expected.vertex(i)));
        }
        assert_eq!(result.bounds().min_x, expected.bounds().min_x);
        assert_eq!(result.bounds().max_y, expected.bounds().max_y);
    }
}

#[test]
fn bounds_follow_explicit_update() {
    let mut square = rect_polygon(0.0, 0.0, 1.0, 1.0);
    square.vertices_mut()[2] = Vector2::new(3.0, 3.0);
    // stale until updated
    assert_eq!(square.bounds().max_x, 1.0);
    square.update_bounds();
    assert_eq!(square.bounds().max_x, 3.0);
    assert_eq!(square.bounds().max_y, 3.0);
}
