//! Benchmarks for field sampling and isosurface extraction

use blobmesh::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");

    let scene = Scene::scatter(100, 0.05, 0.1, 42).unwrap();

    for &n in &[16usize, 32, 64] {
        let grid = Grid::covering(Vec3::splat(-0.2), 1.4, n).unwrap();
        group.throughput(Throughput::Elements(grid.sample_count() as u64));

        group.bench_with_input(BenchmarkId::new("serial", n), &grid, |b, grid| {
            b.iter(|| sample(black_box(&scene), black_box(grid)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &grid, |b, grid| {
            b.iter(|| sample_parallel(black_box(&scene), black_box(grid)))
        });
    }

    group.finish();
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    let scene = Scene::scatter(100, 0.05, 0.1, 42).unwrap();

    for &n in &[16usize, 32, 64] {
        let grid = Grid::covering(Vec3::splat(-0.2), 1.4, n).unwrap();
        let field = sample_parallel(&scene, &grid);

        group.bench_with_input(BenchmarkId::new("serial", n), &field, |b, field| {
            b.iter(|| extract(black_box(field), black_box(&grid), 0.0))
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &field, |b, field| {
            b.iter(|| extract_parallel(black_box(field), black_box(&grid), 0.0))
        });
    }

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let scene = Scene::scatter(1000, 0.01, 0.1, 1).unwrap();
    let grid = Grid::covering(Vec3::splat(-0.11), 1.22, 64).unwrap();

    group.sample_size(10);
    group.bench_function("scatter_1000_spheres_n64", |b| {
        b.iter(|| polygonize(black_box(&scene), black_box(&grid)))
    });

    group.finish();
}

criterion_group!(benches, bench_sampling, bench_extraction, bench_full_pipeline);
criterion_main!(benches);
