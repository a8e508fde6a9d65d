//! Benchmarks for optional operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use presence_core::{absent, from_nullable, of};
use presence_test::{FuzzerConfig, LawFuzzer};

fn bench_from_nullable(c: &mut Criterion) {
    c.bench_function("from_nullable_present", |b| {
        b.iter(|| from_nullable(black_box(Some(42u64))))
    });

    c.bench_function("from_nullable_absent", |b| {
        b.iter(|| from_nullable(black_box(None::<u64>)))
    });
}

fn bench_or(c: &mut Criterion) {
    let present = of(7u64).unwrap();

    c.bench_function("present_or", |b| {
        b.iter(|| black_box(present).or(black_box(9u64)))
    });

    c.bench_function("absent_or", |b| {
        b.iter(|| absent::<u64>().or(black_box(9u64)))
    });
}

fn bench_transform(c: &mut Criterion) {
    let text = of(String::from("presence")).unwrap();

    c.bench_function("transform_len", |b| {
        b.iter(|| black_box(&text).as_ref().transform(|s| s.len()))
    });

    c.bench_function("transform_chain", |b| {
        b.iter(|| {
            of(black_box(3u64))
                .unwrap()
                .transform(|n| n.checked_mul(1_000))
                .transform(|n| n.checked_sub(1))
                .or_null()
        })
    });
}

fn bench_law_fuzzer(c: &mut Criterion) {
    c.bench_function("law_fuzzer_light", |b| {
        b.iter(|| LawFuzzer::new(FuzzerConfig::light()).run())
    });
}

criterion_group!(
    benches,
    bench_from_nullable,
    bench_or,
    bench_transform,
    bench_law_fuzzer
);
criterion_main!(benches);
