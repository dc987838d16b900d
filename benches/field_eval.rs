//! Potential Field Evaluation Benchmarks
//!
//! Measures per-query cost of the jet accumulation as the obstacle count
//! grows, plus the directional-derivative entry points.
//!
//! Run with: `cargo bench`
//! View HTML reports in: `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kavach_field::{PotentialField, Vec3};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Build a field with obstacles laid out on a horizontal grid.
fn create_field(n_obstacles: usize) -> PotentialField {
    let mut field = PotentialField::new();
    let side = (n_obstacles as f64).sqrt().ceil() as usize;

    for i in 0..n_obstacles {
        let north = (i % side) as f64 * 4.0;
        let east = (i / side) as f64 * 4.0;
        let radius = 0.5 + (i % 3) as f64;
        let height = 1.0 + (i % 5) as f64;
        field
            .add_obstacle(north, east, 0.0, radius, height)
            .expect("valid obstacle");
    }

    field
}

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");

    for n in [1, 8, 32, 128] {
        let field = create_field(n);
        let x = Vec3::new(5.0, 5.0, 1.0);

        group.bench_function(format!("{}_obstacles", n), |b| {
            b.iter(|| field.sample(black_box(&x)).unwrap())
        });
    }

    group.finish();
}

fn bench_directional(c: &mut Criterion) {
    let field = create_field(32);
    let x = Vec3::new(5.0, 5.0, 1.0);
    let s = Vec3::new(1.0, 1.0, 0.0);

    c.bench_function("directional_derivative_32_obstacles", |b| {
        b.iter(|| {
            field
                .directional_derivative(black_box(&x), black_box(&s))
                .unwrap()
        })
    });

    c.bench_function("second_directional_derivative_32_obstacles", |b| {
        b.iter(|| {
            field
                .second_directional_derivative(black_box(&x), black_box(&s))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_sample, bench_directional);
criterion_main!(benches);
