//! Benchmarks for the hot validation path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use railguard::prelude::*;

fn validate_benchmark(c: &mut Criterion) {
    let rule = EndsWith::new("a");
    let metadata = Metadata::new();

    let passing = serde_json::json!("the quick brown fox ends in a");
    let failing = serde_json::json!("the quick brown fox does not");
    let list = serde_json::json!(["x", "y", "z"]);

    c.bench_function("ends_with_string_pass", |b| {
        b.iter(|| rule.validate(black_box(&passing), &metadata))
    });

    c.bench_function("ends_with_string_fail_with_fix", |b| {
        b.iter(|| rule.validate(black_box(&failing), &metadata))
    });

    c.bench_function("ends_with_list_fail_with_fix", |b| {
        b.iter(|| rule.validate(black_box(&list), &metadata))
    });
}

criterion_group!(benches, validate_benchmark);
criterion_main!(benches);
