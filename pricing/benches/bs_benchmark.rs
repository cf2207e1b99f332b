// https://bheisler.github.io/criterion.rs/book/getting_started.html

extern crate pricing;
use pricing::analytic::BlackScholesMerton;
use pricing::common::models::ExerciseType;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

criterion_group!(benches, criterion_closed_form_pricing);
criterion_main!(benches);

pub fn criterion_closed_form_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Black-Scholes closed-form evaluation");

    group.bench_function("construct and summarize a call", |b| {
        b.iter(|| summarize(ExerciseType::Call, black_box((100.0, 102.0, 1.0))))
    });
    group.bench_function("construct and summarize a put", |b| {
        b.iter(|| summarize(ExerciseType::Put, black_box((100.0, 102.0, 1.0))))
    });

    group.finish()
}

fn summarize(exercise_type: ExerciseType, (asset_price, strike, tte): (f64, f64, f64)) {
    let option = BlackScholesMerton::new(exercise_type, asset_price, strike, tte, 0.05, 0.2, 0.02)
        .unwrap();
    let summary = option.summary();
    assert!(summary.price.is_finite());
}
