//! Benchmarks for merged buffer construction.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pmesh::{ParticleGeometry, ParticleMesh};

fn bench_fixed_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_geometry");

    for count in [1_000u32, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("octahedron", count),
            &count,
            |b, &count| {
                b.iter(|| {
                    let buffer = ParticleMesh::new()
                        .with_count(count)
                        .with_geometry(ParticleGeometry::octahedron())
                        .with_seed(1)
                        .build()
                        .unwrap();
                    black_box(buffer)
                })
            },
        );
    }

    group.finish();
}

fn bench_shape_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape_set");

    group.bench_function("all_polyhedra_10k", |b| {
        b.iter(|| {
            let buffer = ParticleMesh::new()
                .with_count(10_000)
                .with_geometry(vec![
                    ParticleGeometry::tetrahedron(),
                    ParticleGeometry::octahedron(),
                    ParticleGeometry::icosahedron(),
                    ParticleGeometry::dodecahedron(),
                ])
                .with_seed(1)
                .build()
                .unwrap();
            black_box(buffer)
        })
    });

    group.finish();
}

fn bench_generator(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator");

    group.bench_function("fanned_circle_10k", |b| {
        b.iter(|| {
            let buffer = ParticleMesh::new()
                .with_count(10_000)
                .with_generator(|| ParticleGeometry::fanned_circle(8))
                .with_seed(1)
                .build()
                .unwrap();
            black_box(buffer)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_fixed_geometry, bench_shape_set, bench_generator);
criterion_main!(benches);
