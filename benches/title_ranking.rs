use std::hint::black_box;

use anidle::models::CatalogRecord;
use anidle::search::{CatalogIndex, DEFAULT_LIMIT, normalize_title, rank_titles};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Generate a synthetic catalog with varied romaji/english titles
fn generate_catalog(num_titles: usize) -> Vec<CatalogRecord> {
    let words = [
        "Shingeki",
        "Kyojin",
        "Attack",
        "Titan",
        "Cowboy",
        "Bebop",
        "Fullmetal",
        "Alchemist",
        "Evangelion",
        "Gundam",
        "Pokémon",
        "Monogatari",
        "Re:Zero",
    ];

    (0..num_titles)
        .map(|i| {
            let a = words[i % words.len()];
            let b = words[(i / words.len()) % words.len()];
            CatalogRecord {
                id: i as i64,
                romaji: format!("{} no {} {}", a, b, i),
                english: if i % 3 == 0 { String::new() } else { format!("{} of the {} ({})", b, a, i) },
            }
        })
        .collect()
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for size in [1_000, 10_000, 20_000].iter() {
        let records = generate_catalog(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| CatalogIndex::build(black_box(records.clone())));
        });
    }

    group.finish();
}

fn bench_rank_titles(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_titles");

    for size in [1_000, 10_000, 20_000].iter() {
        let index = CatalogIndex::build(generate_catalog(*size));

        group.throughput(Throughput::Elements(*size as u64));

        // Short query, many prefix and contains hits
        group.bench_with_input(BenchmarkId::new("short_query", size), size, |b, _| {
            b.iter(|| rank_titles(black_box("ti"), black_box(&index), DEFAULT_LIMIT));
        });

        // Longer query, few hits
        group.bench_with_input(BenchmarkId::new("long_query", size), size, |b, _| {
            b.iter(|| rank_titles(black_box("evangelion no gundam"), black_box(&index), DEFAULT_LIMIT));
        });

        // No hits at all
        group.bench_with_input(BenchmarkId::new("no_match", size), size, |b, _| {
            b.iter(|| rank_titles(black_box("zzzz"), black_box(&index), DEFAULT_LIMIT));
        });
    }

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_title", |b| {
        b.iter(|| normalize_title(black_box("  Shingeki no Kyojin: Ōgon no Pokémon ＳＰＹ×ＦＡＭＩＬＹ!! ")));
    });
}

criterion_group!(benches, bench_index_build, bench_rank_titles, bench_normalize);
criterion_main!(benches);
