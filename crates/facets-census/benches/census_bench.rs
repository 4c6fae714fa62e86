//! Census benchmarks
//!
//! Kept small so the whole suite finishes within about a minute.

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use facets_census::domain::brute_force::brute_force_histogram;
use facets_census::{SetStore, compute_histogram};

fn ci_criterion() -> Criterion {
    Criterion::default()
        .sample_size(15)
        .measurement_time(Duration::from_secs(8))
}

fn store_of(sets: &[Vec<u32>]) -> SetStore {
    let mut store = SetStore::new();
    for set in sets {
        store.add_set(set).expect("benchmark sets are valid");
    }
    store
}

/// Sixteen overlapping 14-element windows over the universe
fn sliding_windows() -> SetStore {
    let sets: Vec<Vec<u32>> = (0..16).map(|i| (i * 3..i * 3 + 14).collect()).collect();
    store_of(&sets)
}

fn bench_single_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_set");

    let store = store_of(&[(0..18).collect()]);
    group.bench_function("census_18", |b| b.iter(|| compute_histogram(black_box(&store))));

    group.finish();
}

fn bench_overlapping_family(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlapping_family");

    let store = sliding_windows();
    group.bench_function("chain_census", |b| {
        b.iter(|| compute_histogram(black_box(&store)))
    });
    group.bench_function("brute_force", |b| {
        b.iter(|| brute_force_histogram(black_box(&store)))
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = ci_criterion();
    targets = bench_single_set, bench_overlapping_family
}
criterion_main!(benches);
