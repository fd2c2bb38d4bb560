use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
use tudey_shapes::{
    coord::{CoordSet, Region},
    core::math::{Transform2D, Vector2},
    shape::*,
};

fn regular_polygon(center: Vector2, radius: f64, sides: usize) -> Polygon {
    let step = std::f64::consts::TAU / sides as f64;
    Polygon::new(
        (0..sides)
            .map(|i| center + Vector2::new(radius, 0.0).rotate(step * i as f64))
            .collect(),
    )
}

/// Compound of `count` small circles and squares laid out on a grid.
fn grid_compound(count: usize) -> Shape {
    let side = (count as f64).sqrt().ceil() as usize;
    let shapes: Vec<Shape> = (0..count)
        .map(|i| {
            let center = Vector2::new((i % side) as f64 * 3.0, (i / side) as f64 * 3.0);
            if i % 2 == 0 {
                Circle::new(center, 1.0).into()
            } else {
                regular_polygon(center, 1.0, 4).into()
            }
        })
        .collect();
    Compound::new(shapes).into()
}

fn bench_polygon_intersects(b: &mut Bencher, sides: usize) {
    let a: Shape = regular_polygon(Vector2::new(0.0, 0.0), 5.0, sides).into();
    let c: Shape = regular_polygon(Vector2::new(7.0, 1.0), 3.0, sides).into();
    b.iter(|| a.intersects(&c))
}

fn polygon_intersects_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_intersects");
    for &sides in &[4, 8, 32, 128] {
        group.bench_with_input(BenchmarkId::new("regular", sides), &sides, |b, &sides| {
            bench_polygon_intersects(b, sides)
        });
    }

    group.finish();
}

fn bench_compound_intersects(b: &mut Bencher, count: usize) {
    let compound = grid_compound(count);
    let sweep: Shape =
        Capsule::new(Vector2::new(-1.0, 4.5), Vector2::new(30.0, 4.5), 0.75).into();
    b.iter(|| compound.intersects(&sweep))
}

fn compound_intersects_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("compound_intersects");
    for &count in &[16, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("grid", count), &count, |b, &count| {
            bench_compound_intersects(b, count)
        });
    }

    group.finish();
}

fn bench_transform_into(b: &mut Bencher, count: usize) {
    let compound = grid_compound(count);
    let mut result = compound.clone();
    let transform = Transform2D::new(Vector2::new(3.0, -2.0), 0.7);
    b.iter(|| compound.transform_into(&transform, &mut result))
}

fn transform_into_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_into");
    for &count in &[16, 256] {
        group.bench_with_input(BenchmarkId::new("grid", count), &count, |b, &count| {
            bench_transform_into(b, count)
        });
    }

    group.finish();
}

fn holed_block(size: i32) -> CoordSet {
    let mut set = CoordSet::from_region(Region::new(0, 0, size, size));
    for i in (0..size).step_by(7) {
        set.remove(i, (i * 3) % size);
    }
    set
}

fn coord_set_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("coord_set");
    for &size in &[8, 32, 64] {
        let set = holed_block(size);
        group.bench_with_input(BenchmarkId::new("largest_region", size), &set, |b, set| {
            b.iter(|| set.largest_region())
        });
        group.bench_with_input(BenchmarkId::new("border", size), &set, |b, set| {
            b.iter(|| set.border())
        });
    }

    group.finish();
}

criterion_group!(
    shapes,
    polygon_intersects_group,
    compound_intersects_group,
    transform_into_group,
);
criterion_group!(coords, coord_set_group);
criterion_main!(shapes, coords);
