//! Benchmarks for the collision tests.
//!
//! Per-pixel scans run on sprite-sized masks from best case (first pixel hits)
//! to worst case (transparent interior, every pixel visited).

use collide2d::{
    per_pixel_intersect_with, polygon_collision, sprite_matrix, transformed_per_pixel_intersect_with,
    CollisionConfig, PixelMask, Polygon, Rectangle,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use macroquad::math::Vec2;

// ============================================================================
// Mask Generators
// ============================================================================

/// Every pixel opaque - best case, first pixel hits.
fn solid_mask(size: usize) -> Vec<bool> {
    vec![true; size * size]
}

/// Opaque one-pixel frame around a transparent interior.
fn ring_mask(size: usize) -> Vec<bool> {
    (0..size * size)
        .map(|i| {
            let (x, y) = (i % size, i / size);
            x == 0 || y == 0 || x == size - 1 || y == size - 1
        })
        .collect()
}

/// Every pixel transparent - worst case, the whole overlap is scanned.
fn empty_mask(size: usize) -> Vec<bool> {
    vec![false; size * size]
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_per_pixel(c: &mut Criterion) {
    let mut group = c.benchmark_group("per_pixel");

    for size in [32usize, 128, 512] {
        group.throughput(Throughput::Elements((size * size) as u64));
        let a = Rectangle::new(0, 0, size as i32, size as i32);
        let b = Rectangle::new(size as i32 / 4, size as i32 / 4, size as i32, size as i32);
        let solid = solid_mask(size);
        let empty = empty_mask(size);

        for (name, config) in [
            ("sequential", CollisionConfig { parallel: false, ..Default::default() }),
            ("parallel", CollisionConfig::default()),
        ] {
            group.bench_with_input(BenchmarkId::new(format!("miss_{name}"), size), &size, |bench, _| {
                bench.iter(|| per_pixel_intersect_with(&config, black_box(a), &solid, black_box(b), &empty))
            });
        }

        group.bench_with_input(BenchmarkId::new("hit", size), &size, |bench, _| {
            bench.iter(|| per_pixel_intersect_with(&CollisionConfig::default(), black_box(a), &solid, black_box(b), &solid))
        });
    }

    group.finish();
}

fn bench_transformed(c: &mut Criterion) {
    let mut group = c.benchmark_group("transformed_per_pixel");

    for size in [32usize, 128] {
        group.throughput(Throughput::Elements((size * size) as u64));
        let ring = PixelMask::from_pixels(size, size, &ring_mask(size)).unwrap();
        let half = size as f32 / 2.0;
        let transform_a = sprite_matrix(Vec2::splat(100.0), Vec2::splat(half), Vec2::ONE, 0.0);
        // Same spot, turned 45 degrees: the rings cross
        let transform_b = sprite_matrix(Vec2::splat(100.0), Vec2::splat(half), Vec2::ONE, std::f32::consts::FRAC_PI_4);

        for skip in [1usize, 2, 4] {
            let config = CollisionConfig { skip_pixels: skip, parallel: false };
            group.bench_with_input(BenchmarkId::new(format!("ring_skip_{skip}"), size), &size, |bench, _| {
                bench.iter(|| {
                    transformed_per_pixel_intersect_with(
                        &config,
                        black_box(&transform_a),
                        size,
                        size,
                        &ring,
                        black_box(&transform_b),
                        size,
                        size,
                        &ring,
                    )
                })
            });
        }
    }

    group.finish();
}

fn bench_sat(c: &mut Criterion) {
    let mut group = c.benchmark_group("sat");

    let square = Polygon::from_rect(Rectangle::new(0, 0, 10, 10)).unwrap();
    let mut overlapping = square.clone();
    overlapping.offset(Vec2::new(5.0, 3.0));
    let mut far = square.clone();
    far.offset(Vec2::new(100.0, 100.0));

    let octagon = Polygon::new(
        (0..8)
            .map(|i| Vec2::from_angle(i as f32 * std::f32::consts::FRAC_PI_4) * 20.0)
            .collect(),
    )
    .unwrap();

    group.bench_function("squares_overlapping", |b| {
        b.iter(|| polygon_collision(black_box(&square), black_box(&overlapping), Vec2::new(3.0, 0.0)))
    });
    group.bench_function("squares_far_apart", |b| {
        b.iter(|| polygon_collision(black_box(&square), black_box(&far), Vec2::ZERO))
    });
    group.bench_function("octagon_vs_square", |b| {
        b.iter(|| polygon_collision(black_box(&octagon), black_box(&overlapping), Vec2::new(-2.0, 1.0)))
    });

    group.finish();
}

criterion_group!(benches, bench_per_pixel, bench_transformed, bench_sat);
criterion_main!(benches);
