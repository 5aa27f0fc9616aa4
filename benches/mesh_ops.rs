//! Benchmarks for mesh operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use hewn::io::off;
use hewn::mesh::{grid, update_all, HalfEdgeMesh};

fn bench_mesh_construction(c: &mut Criterion) {
    c.bench_function("build_grid_32x32", |b| {
        b.iter(|| {
            let mesh: HalfEdgeMesh = grid(black_box(32)).unwrap();
            mesh
        })
    });
}

fn bench_attribute_update(c: &mut Criterion) {
    let mut mesh: HalfEdgeMesh = grid(32).unwrap();
    c.bench_function("update_all_grid_32x32", |b| {
        b.iter(|| {
            update_all(&mut mesh);
        })
    });
}

fn bench_off_round_trip(c: &mut Criterion) {
    let mesh: HalfEdgeMesh = grid(16).unwrap();
    let mut encoded = Vec::new();
    off::write(&mesh, &mut encoded).unwrap();

    c.bench_function("off_write_grid_16x16", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            off::write(&mesh, &mut out).unwrap();
            out
        })
    });

    c.bench_function("off_read_grid_16x16", |b| {
        b.iter(|| {
            let mesh: HalfEdgeMesh = off::read(encoded.as_slice()).unwrap();
            mesh
        })
    });
}

criterion_group!(
    benches,
    bench_mesh_construction,
    bench_attribute_update,
    bench_off_round_trip
);
criterion_main!(benches);
