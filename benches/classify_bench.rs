use std::fs;
use std::hint::black_box;
use std::path::Path;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use header_sweep::classify::{Classifier, ClassifierOptions};
use header_sweep::search::FsSearch;
use tempfile::TempDir;

const HEADERS: usize = 120;
const CONSUMER_FILES: usize = 400;
const LINES_PER_FILE: usize = 30;

fn classify_benchmark(c: &mut Criterion) {
    let fixture = create_fixture(HEADERS, CONSUMER_FILES, LINES_PER_FILE);
    let search = FsSearch::new(&[]).expect("globset");

    let headers: Vec<String> = (0..HEADERS).map(|i| format!("widget_{i}.h")).collect();
    let opts = ClassifierOptions {
        external: vec![fixture.path().join("app")],
        internal: fixture.path().join("lib/src"),
        debug_header: None,
    };
    let classifier = Classifier::new(&search, opts);

    let mut group = c.benchmark_group("classify_headers");
    group.throughput(Throughput::Elements(HEADERS as u64));
    group.bench_with_input(BenchmarkId::new("synthetic", HEADERS), &headers, |b, hs| {
        b.iter(|| {
            let report = classifier.classify(black_box(hs));
            black_box(report.unused_everywhere.len());
        });
    });
    group.finish();
}

fn create_fixture(header_count: usize, consumer_files: usize, lines_per_file: usize) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    let lib = dir.path().join("lib/src");
    let app = dir.path().join("app");
    fs::create_dir_all(&lib).expect("create lib");
    fs::create_dir_all(&app).expect("create app");

    for i in 0..header_count {
        fs::write(lib.join(format!("widget_{i}.h")), "#pragma once\n").expect("write header");
    }

    // Every other header gets an external mention so both branches of the
    // classifier loop stay hot.
    for i in 0..consumer_files {
        write_consumer(&app, i, header_count, lines_per_file);
    }

    dir
}

fn write_consumer(app: &Path, i: usize, header_count: usize, lines_per_file: usize) {
    let mut body = String::new();
    let header = (i * 2) % header_count;
    body.push_str(&format!("#include \"widget_{header}.h\"\n"));
    for n in 0..lines_per_file.saturating_sub(1) {
        body.push_str(&format!("int local_{i}_{n} = {n};\n"));
    }
    fs::write(app.join(format!("consumer_{i}.cpp")), body).expect("write consumer");
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = classify_benchmark
}
criterion_main!(benches);
