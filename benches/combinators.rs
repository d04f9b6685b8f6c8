//! Benchmarks for combinator overhead and error accumulation cost.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use validly::prelude::*;

fn bench_single_validator(c: &mut Criterion) {
    let validator = min_length(8);
    c.bench_function("single_min_length_valid", |b| {
        b.iter(|| validator.validate(black_box("a reasonably long input")));
    });
    c.bench_function("single_min_length_invalid", |b| {
        b.iter(|| validator.validate(black_box("short")));
    });
}

fn bench_and_chain(c: &mut Criterion) {
    let validator = min_length(3)
        .and(max_length(64))
        .and(alphanumeric())
        .and(lowercase());

    c.bench_function("and_chain_all_pass", |b| {
        b.iter(|| validator.validate(black_box("username42")));
    });
    c.bench_function("and_chain_all_fail", |b| {
        b.iter(|| validator.validate(black_box("X!")));
    });
}

fn bench_or_chain(c: &mut Criterion) {
    let validator = exact_length(5).or(exact_length(10)).or(exact_length(15));

    c.bench_function("or_chain_first_passes", |b| {
        b.iter(|| validator.validate(black_box("abcde")));
    });
    c.bench_function("or_chain_all_fail", |b| {
        b.iter(|| validator.validate(black_box("ab")));
    });
}

fn bench_each(c: &mut Criterion) {
    let validator = in_range(0i64, 1000i64).each();
    let all_valid: Vec<i64> = (0..100).collect();
    let all_invalid: Vec<i64> = (2000..2100).collect();

    c.bench_function("each_100_valid", |b| {
        b.iter(|| validator.validate(black_box(all_valid.as_slice())));
    });
    c.bench_function("each_100_invalid", |b| {
        b.iter(|| validator.validate(black_box(all_invalid.as_slice())));
    });
}

fn bench_schema(c: &mut Criterion) {
    struct User {
        username: String,
        email: String,
        age: i64,
    }

    let schema = Schema::new()
        .field("username", min_length(3).and(max_length(20)), |u: &User| {
            u.username.as_str()
        })
        .field("email", email(), |u: &User| u.email.as_str())
        .field("age", in_range(13i64, 130i64), |u: &User| &u.age);

    let valid = User {
        username: "alice".into(),
        email: "alice@example.com".into(),
        age: 30,
    };
    let invalid = User {
        username: "a".into(),
        email: "nope".into(),
        age: 7,
    };

    c.bench_function("schema_valid_record", |b| {
        b.iter(|| schema.validate(black_box(&valid)));
    });
    c.bench_function("schema_invalid_record", |b| {
        b.iter(|| schema.validate(black_box(&invalid)));
    });
}

criterion_group!(
    benches,
    bench_single_validator,
    bench_and_chain,
    bench_or_chain,
    bench_each,
    bench_schema
);
criterion_main!(benches);
