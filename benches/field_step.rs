//! Benchmarks for the CPU field update.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use driftfield::{Field, Mode, Vec2};

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_step");

    for count in [80, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("rising_smoke", count),
            &count,
            |b, &count| {
                let mut field = Field::new(1280.0, 720.0, count, Mode::RisingSmoke, 42);
                b.iter(|| {
                    field.step(black_box(Some(Vec2::new(640.0, 360.0))));
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("drifting_haze", count),
            &count,
            |b, &count| {
                let mut field = Field::new(1280.0, 720.0, count, Mode::DriftingHaze, 42);
                b.iter(|| {
                    field.step(black_box(Some(Vec2::new(640.0, 360.0))));
                });
            },
        );
    }

    group.bench_function("rising_smoke_no_pointer", |b| {
        let mut field = Field::new(1280.0, 720.0, 100, Mode::RisingSmoke, 42);
        b.iter(|| {
            field.step(black_box(None));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
