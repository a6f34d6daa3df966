use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vumatrix_meter::{generate, report, MeterConfig};

fn table_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("thresholds");

    group.bench_function("default_5_rows", |b| {
        b.iter(|| generate(black_box(MeterConfig::DEFAULT)).expect("default config"));
    });

    let tall = MeterConfig::new(256, 60.0, 0.3, 1.0).expect("tall meter");
    group.bench_function("tall_256_rows", |b| {
        b.iter(|| generate(black_box(tall)).expect("tall config"));
    });

    let table = generate(MeterConfig::DEFAULT).expect("default config");
    let mut sink = Vec::with_capacity(128);
    group.bench_function("report_default", |b| {
        b.iter(|| {
            sink.clear();
            report(black_box(&table), &mut sink).expect("report");
        });
    });

    group.finish();
}

criterion_group!(benches, table_generation);
criterion_main!(benches);
