use ampcap::{load_samples_from_reader, trapezoid, LoadOptions};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fmt::Write as _;
use std::io::Cursor;

/// Build a log in the logger's layout with a 1 Hz sawtooth current
fn build_log(rows: usize) -> String {
    let mut text = String::from("Logger v2.1\nDateTime,Time (sec),Amps (mA)\n");
    for i in 0..rows {
        let (h, m, s) = (i / 3600, (i / 60) % 60, i % 60);
        let current = 5.0 + (i % 30) as f64 * 2.5;
        writeln!(text, "2024-09-{:02} {:02}:{:02}:{:02},{},{}", 16 + h / 24, h % 24, m, s, i, current)
            .unwrap();
    }
    text
}

/// Benchmark the trapezoidal integrator alone
fn bench_trapezoid(c: &mut Criterion) {
    let mut group = c.benchmark_group("trapezoid");

    for n in [1_000usize, 13_000, 100_000] {
        let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let y: Vec<f64> = (0..n).map(|i| 5.0 + (i % 30) as f64 * 2.5).collect();

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| trapezoid(black_box(&x), black_box(&y)).unwrap())
        });
    }

    group.finish();
}

/// Benchmark parsing a log of typical size
fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    let options = LoadOptions::default();

    for rows in [1_000usize, 13_000] {
        let text = build_log(rows);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &text, |b, text| {
            b.iter(|| load_samples_from_reader(Cursor::new(text.as_bytes()), &options).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_trapezoid, bench_load);
criterion_main!(benches);
