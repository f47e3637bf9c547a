//! Benchmark – `asciicheck` strategies over a single buffer and a block stream.
#![allow(missing_docs)]

use std::time::Duration;

use asciicheck::{
    IterSource, ValidateOptions, chunk_utils::produce_blocks, is_ascii, scanner::scan_scalar,
    validate, validate_stream, validate_with,
};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// A deterministic ASCII payload of exactly `len` bytes, optionally ending in
/// a single non-ASCII byte so that every strategy scans the whole buffer.
fn make_payload(len: usize, dirty_tail: bool) -> Vec<u8> {
    let text = b"The quick brown fox jumps over the lazy dog. ";
    let mut payload: Vec<u8> = text.iter().copied().cycle().take(len).collect();
    if dirty_tail {
        if let Some(last) = payload.last_mut() {
            *last = 0xE9;
        }
    }
    payload
}

fn bench_single_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_buffer");

    for &len in &[64usize, 4 * 1024, 1024 * 1024] {
        let payload = make_payload(len, true);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("scalar", len), &payload, |b, p| {
            b.iter(|| black_box(scan_scalar(black_box(p))));
        });
        group.bench_with_input(BenchmarkId::new("validate", len), &payload, |b, p| {
            b.iter(|| black_box(validate(black_box(p))));
        });
        group.bench_with_input(BenchmarkId::new("is_ascii", len), &payload, |b, p| {
            b.iter(|| black_box(is_ascii(black_box(p))));
        });
        group.bench_with_input(BenchmarkId::new("validate_with", len), &payload, |b, p| {
            let options = ValidateOptions::default();
            b.iter(|| black_box(validate_with(black_box(p), &options)));
        });
    }
    group.finish();
}

fn bench_stream(c: &mut Criterion) {
    let payload = make_payload(4 * 1024 * 1024, false);
    let mut group = c.benchmark_group("stream_split");
    group.throughput(Throughput::Bytes(payload.len() as u64));

    for &parts in &[32usize, 1_000, 100_000] {
        let blocks = produce_blocks(&payload, parts);
        group.bench_with_input(BenchmarkId::from_parameter(parts), &blocks, |b, blocks| {
            b.iter(|| {
                let Ok(outcome) = validate_stream(IterSource::new(blocks.iter().copied()));
                black_box(outcome);
            });
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_single_buffer, bench_stream }
criterion_main!(benches);
