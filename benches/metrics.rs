// SPDX-License-Identifier: MIT
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use seqmetrics::algorithms::{
    damerau_levenshtein, lcs_length, lcs_reconstruct, levenshtein, longest_common_substring_length,
    osa_distance,
};

fn pseudo_random(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            b"ACGT"[(state >> 62) as usize]
        })
        .collect()
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");
    for len in [16usize, 128, 512] {
        let a = pseudo_random(len, 1);
        let b = pseudo_random(len, 2);
        group.bench_with_input(BenchmarkId::new("levenshtein", len), &len, |bench, _| {
            bench.iter(|| levenshtein(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("osa", len), &len, |bench, _| {
            bench.iter(|| osa_distance(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("damerau_levenshtein", len), &len, |bench, _| {
            bench.iter(|| damerau_levenshtein(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("lcs_length", len), &len, |bench, _| {
            bench.iter(|| lcs_length(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("lcs_reconstruct", len), &len, |bench, _| {
            bench.iter(|| lcs_reconstruct(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("longest_common_substring", len), &len, |bench, _| {
            bench.iter(|| longest_common_substring_length(black_box(&a), black_box(&b)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_metrics);
criterion_main!(benches);
