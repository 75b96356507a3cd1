//! Benchmarks tests for measuring the performance of the code

use std::path::Path;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qix_build::{
    compiler::{flags::FlagTables, registry::TargetRegistry},
    config_file::{qix_cfg_from_file, QixConfigFile},
    domain::flags::FlagSet,
    utils::{constants::CONFIG_FILE_MOCK, reader::build_model},
};

pub fn start_up_benchmark(c: &mut Criterion) {
    let model = build_model(QixConfigFile::default(), Path::new("."))
        .expect("The default project model must be valid");

    c.bench_function("Compose a flag set with repeated entries", |b| {
        b.iter(|| {
            FlagSet::compose(
                black_box(["-vet", "-vet-style", "-vet", "-debug"]),
                black_box([["-debug", "-sanitize:address"]]),
            )
        })
    });

    c.bench_function("Build the flag tables", |b| {
        b.iter(|| FlagTables::new(black_box(&model)))
    });

    c.bench_function("Build and query the target registry", |b| {
        b.iter(|| {
            let registry = TargetRegistry::new(black_box(&model));
            registry.resolve(black_box("test-msan")).is_ok()
        })
    });

    c.bench_function("Parse the configuration file", |b| {
        b.iter(|| qix_cfg_from_file(black_box(CONFIG_FILE_MOCK)).map(|cfg| build_model(cfg, Path::new("."))))
    });
}

criterion_group!(benches, start_up_benchmark);
criterion_main!(benches);
