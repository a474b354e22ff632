//! Validation throughput benchmarks.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use serde_json::json;
use shapecheck::prelude::*;

fn bench_scalars(c: &mut Criterion) {
    let schema = string().min(3).max(64);
    let input = json!("a reasonably sized string value");
    c.bench_function("string_bounds", |b| {
        b.iter(|| schema.validate(black_box(&input)).unwrap());
    });

    let schema = number().min(1.0).max(1_000_000.0);
    let input = json!("123456");
    c.bench_function("number_coerce", |b| {
        b.iter(|| schema.validate(black_box(&input)).unwrap());
    });
}

fn bench_nested(c: &mut Criterion) {
    let schema = object(fields! {
        "name" => string().min(1),
        "email" => string().email(),
        "scores" => array(number().min(0.0).max(100.0)).max(32),
        "meta" => object(fields! {
            "version" => number(),
        }).optional(),
    });
    let input = json!({
        "name": "alice",
        "email": "alice@example.com",
        "scores": [90, 85, "72", 100],
        "meta": { "version": 2 },
    });
    c.bench_function("nested_object", |b| {
        b.iter(|| schema.validate(black_box(&input)).unwrap());
    });
}

criterion_group!(benches, bench_scalars, bench_nested);
criterion_main!(benches);
