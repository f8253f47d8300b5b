//! Performance benchmarks for the chain finder
//!
//! Run with: cargo bench --bench chain_finder_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shiritori_core::{ChainProcessor, ChainSequenceFinder, Config};
use std::hint::black_box;

/// Generate text of roughly `size` bytes with short chains broken regularly
fn generate_text(size: usize) -> String {
    let base = "apple elegant task king green cat dog bird ";
    let repeat_count = size / base.len() + 1;

    let mut text = base.repeat(repeat_count);
    text.truncate(size);
    text
}

/// Benchmark different text sizes
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let finder = ChainSequenceFinder::new();

    for size in [1024, 10_240, 102_400, 1_024_000] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("find", size), &text, |b, text| {
            b.iter(|| finder.find(black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark one long chain that spills the inline buffer
fn bench_single_long_chain(c: &mut Criterion) {
    let text = vec!["aa"; 50_000].join(" ");
    let finder = ChainSequenceFinder::new();

    c.bench_function("single_long_chain", |b| {
        b.iter(|| finder.find(black_box(&text)));
    });
}

/// Compare sequential and parallel batch processing
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let messages: Vec<String> = (0..10_000).map(|_| generate_text(256)).collect();

    let sequential = ChainProcessor::with_config(
        Config::builder()
            .parallel_threshold(usize::MAX)
            .build()
            .unwrap(),
    )
    .unwrap();
    let parallel = ChainProcessor::new();

    group.bench_function("sequential", |b| {
        b.iter(|| sequential.process_batch(black_box(&messages)).unwrap());
    });
    group.bench_function("parallel", |b| {
        b.iter(|| parallel.process_batch(black_box(&messages)).unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_text_sizes,
    bench_single_long_chain,
    bench_batch
);
criterion_main!(benches);
