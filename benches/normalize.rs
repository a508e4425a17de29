//! Criterion benchmarks for list normalization and quoting

#![allow(clippy::unwrap_used, missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mural_studio::domain::entities::PortfolioItem;
use mural_studio::domain::services::{QuoteEngine, filter_by_category, normalize_records};
use mural_studio::domain::value_objects::{CategoryFilter, QuoteRequest, Tier};
use std::hint::black_box;

const CATEGORIES: [&str; 5] = ["murals", "abstract", "portraits", "commercial", "automotive"];

/// Portfolio list of `len` items where roughly `1 / dup_every` are repeats
fn portfolio(len: usize, dup_every: usize) -> Vec<PortfolioItem> {
    (0..len)
        .map(|i| {
            let n = if dup_every > 0 && i % dup_every == 0 { 0 } else { i };
            let category = CATEGORIES.get(n % CATEGORIES.len()).copied().unwrap_or("murals");
            PortfolioItem::new(format!("Project {n}"), category)
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for len in [100usize, 1_000, 10_000] {
        let records = portfolio(len, 4);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &records, |b, records| {
            b.iter(|| normalize_records(black_box(records.clone())));
        });
    }
    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let records = normalize_records(portfolio(10_000, 0));
    let filter = CategoryFilter::category("murals");
    c.bench_function("filter_by_category/10000", |b| {
        b.iter(|| filter_by_category(black_box(&records), black_box(&filter)));
    });
}

fn bench_quote(c: &mut Criterion) {
    let engine = QuoteEngine::default();
    let request = QuoteRequest::new(37.5, Tier::Premium).unwrap();
    c.bench_function("quote", |b| {
        b.iter(|| engine.quote(black_box(&request)));
    });
}

criterion_group!(benches, bench_normalize, bench_filter, bench_quote);
criterion_main!(benches);
