//! Throughput benchmarks for the six cycle indicators.
//!
//! Run with: `cargo bench -p mesa-cycles`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use mesa_cycles::indicators::{dc_period, dc_phase, mama, phasor, sine_wave, trendline};

fn synthetic_prices(len: usize) -> Vec<f64> {
    let mut price = 100.0_f64;
    (0..len)
        .map(|i| {
            let i = i as f64;
            price += (i * 0.11).sin() * 0.8 + (i * 0.017).cos() * 0.3;
            price.max(1.0)
        })
        .collect()
}

fn bench_indicators(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle_indicators");
    for &len in &[1_000usize, 10_000, 100_000] {
        let data = synthetic_prices(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("dc_period", len), &data, |b, d| {
            b.iter(|| dc_period(black_box(d)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("dc_phase", len), &data, |b, d| {
            b.iter(|| dc_phase(black_box(d)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("phasor", len), &data, |b, d| {
            b.iter(|| phasor(black_box(d)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("sine_wave", len), &data, |b, d| {
            b.iter(|| sine_wave(black_box(d)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("trendline", len), &data, |b, d| {
            b.iter(|| trendline(black_box(d)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("mama", len), &data, |b, d| {
            b.iter(|| mama(black_box(d)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_indicators);
criterion_main!(benches);
