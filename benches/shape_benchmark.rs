//! Benchmark for shape rasterization.

#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use trueno_sketch::prelude::*;

fn canvas() -> Framebuffer {
    let mut fb = Framebuffer::new(800, 600).unwrap();
    fb.clear(Rgba::WHITE);
    fb
}

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("stroke_line");
    let mut fb = canvas();
    let line = Shape::line(10.0, 20.0, 790.0, 580.0);

    for weight in [1.0, 4.0, 16.0] {
        let paint = PaintState::default().with_stroke_weight(weight);
        group.bench_with_input(BenchmarkId::from_parameter(weight), &paint, |b, paint| {
            b.iter(|| draw(&mut fb, black_box(&line), paint));
        });
    }

    group.finish();
}

fn fill_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");
    let mut fb = canvas();
    let paint = PaintState::default().no_stroke();

    let shapes = [
        Shape::rect(100.0, 100.0, 400.0, 300.0),
        Shape::ellipse(400.0, 300.0, 200.0, 150.0),
        Shape::triangle(100.0, 500.0, 400.0, 100.0, 700.0, 500.0),
    ];
    for shape in &shapes {
        group.bench_with_input(BenchmarkId::from_parameter(shape.kind()), shape, |b, shape| {
            b.iter(|| draw(&mut fb, black_box(shape), &paint));
        });
    }

    group.finish();
}

fn sketch_scene_benchmark(c: &mut Criterion) {
    c.bench_function("sketch_scene_800x600", |b| {
        b.iter(|| {
            let mut s = Sketch::new();
            s.create_canvas(800, 600).unwrap();
            s.background(Rgba::WHITE).unwrap();
            s.stroke_weight(3.0).unwrap();
            s.rect(50.0, 50.0, 300.0, 200.0).unwrap();
            s.circle(600.0, 150.0, 100.0).unwrap();
            s.triangle(100.0, 550.0, 300.0, 350.0, 500.0, 550.0).unwrap();
            s.line(0.0, 0.0, 799.0, 599.0).unwrap();
            black_box(s.into_canvas())
        });
    });
}

criterion_group!(benches, line_benchmark, fill_benchmark, sketch_scene_benchmark);
criterion_main!(benches);
