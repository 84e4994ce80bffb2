//! Benchmarks for the per-frame CPU work.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nbe::config::Viewport;
use nbe::graph;
use nbe::render::{Rgba, Surface};
use nbe::simulation::Simulation;
use nbe::Vec2;

/// Surface that swallows draw calls; the benchmarks measure the math.
struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self) {}
    fn fill_circle(&mut self, _: Vec2, _: f32, _: Rgba) {}
    fn stroke_circle(&mut self, _: Vec2, _: f32, _: Rgba, _: f32) {}
    fn line(&mut self, _: Vec2, _: Vec2, _: Rgba, _: f32) {}
}

fn bench_build_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_edges");

    for &(width, height) in &[
        (640.0, 480.0),
        (1280.0, 720.0),
        (1920.0, 1080.0),
        (2560.0, 1440.0),
    ] {
        let viewport = Viewport::new(width, height);
        let sim = Simulation::seeded(viewport, 42);

        group.bench_with_input(
            BenchmarkId::from_parameter(sim.neurons().len()),
            &sim,
            |b, sim| {
                b.iter(|| {
                    black_box(graph::build_edges(
                        sim.neurons(),
                        sim.config(),
                        sim.viewport(),
                        120,
                    ))
                })
            },
        );
    }

    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for &(width, height) in &[(1280.0, 720.0), (2560.0, 1440.0)] {
        let viewport = Viewport::new(width, height);
        let mut sim = Simulation::seeded(viewport, 42);
        let pointer = Vec2::new(width * 0.5, height * 0.5);

        group.bench_function(
            BenchmarkId::from_parameter(sim.neurons().len()),
            |b| {
                let mut surface = NullSurface;
                b.iter(|| sim.tick(black_box(pointer), &mut surface))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_build_edges, bench_tick);
criterion_main!(benches);
