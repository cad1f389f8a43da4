use abbrevs_core::{EmbeddedSource, Registry, TokenStore};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_lookups(c: &mut Criterion) {
    let store = TokenStore::embedded();

    c.bench_function("tokens_en_filtered", |b| {
        b.iter(|| store.tokens(black_box("en"), false))
    });

    c.bench_function("all_tokens_with_singletons", |b| {
        b.iter(|| store.all_tokens(black_box(true)))
    });
}

fn bench_registry_load(c: &mut Criterion) {
    c.bench_function("registry_from_embedded_source", |b| {
        b.iter(|| Registry::from_source(black_box(&EmbeddedSource)))
    });
}

criterion_group!(benches, bench_lookups, bench_registry_load);
criterion_main!(benches);
