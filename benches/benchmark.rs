use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cxxlex::{analyze, preprocessor::strip_comments, report::ReportFormatter, Tokenizer};

const SAMPLE: &str = include_str!("../data/sample.cpp");

fn bench_pipeline(c: &mut Criterion) {
    let cleaned = strip_comments(SAMPLE);
    let analysis = analyze(SAMPLE);
    let formatter = ReportFormatter::default();

    c.bench_function("strip comments", |b| {
        b.iter(|| strip_comments(black_box(SAMPLE)))
    });
    c.bench_function("tokenize", |b| {
        b.iter(|| Tokenizer::new().tokenize(black_box(&cleaned)))
    });
    c.bench_function("analyze", |b| b.iter(|| analyze(black_box(SAMPLE))));
    c.bench_function("format report", |b| {
        b.iter(|| formatter.format(black_box(&analysis)))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
