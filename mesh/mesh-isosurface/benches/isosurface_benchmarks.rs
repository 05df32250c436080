//! Benchmarks for mesh-isosurface extraction.
//!
//! Run with: cargo bench -p mesh-isosurface

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mesh_isosurface::{IsosurfaceConfig, ScalarGrid, extract_isosurface};
use nalgebra::Point3;

// =============================================================================
// Test Field Generation
// =============================================================================

/// Binary ball of radius `n / 3` centered in an `n^3` grid.
fn binary_ball(n: usize) -> ScalarGrid {
    #[allow(clippy::cast_precision_loss)]
    let (center, radius) = (n as f64 / 2.0, n as f64 / 3.0);
    ScalarGrid::from_fn([n, n, n], Point3::origin(), 1.0, |p| {
        let d = (p - Point3::new(center, center, center)).norm();
        if d <= radius { 1.0 } else { 0.0 }
    })
}

/// Smooth signed field of a sphere, inside positive.
fn smooth_ball(n: usize) -> ScalarGrid {
    #[allow(clippy::cast_precision_loss)]
    let (center, radius) = (n as f64 / 2.0, n as f64 / 3.0);
    ScalarGrid::from_fn([n, n, n], Point3::origin(), 1.0, |p| {
        radius - (p - Point3::new(center, center, center)).norm()
    })
}

// =============================================================================
// Extraction Benchmarks
// =============================================================================

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("Extraction");

    for n in [16_usize, 32, 64] {
        let binary = binary_ball(n);
        let smooth = smooth_ball(n);
        group.throughput(Throughput::Elements((n * n * n) as u64));

        group.bench_with_input(BenchmarkId::new("binary_ball", n), &binary, |b, grid| {
            let config = IsosurfaceConfig::default();
            b.iter(|| extract_isosurface(black_box(grid), black_box(&config)));
        });

        group.bench_with_input(BenchmarkId::new("smooth_ball", n), &smooth, |b, grid| {
            let config = IsosurfaceConfig::default().with_iso_level(0.0);
            b.iter(|| extract_isosurface(black_box(grid), black_box(&config)));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_extraction);
criterion_main!(benches);
