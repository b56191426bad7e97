//! Benchmarks for saywhen-core.
//!
//! Run with: `cargo bench -p saywhen-core`
//!
//! Results are saved to `target/criterion/` with HTML reports.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use saywhen_core::{normalize, Options, Saywhen};

/// Representative expressions, one per pattern family.
const INPUTS: &[(&str, &str)] = &[
    ("anchor", "tomorrow"),
    ("anchor_stacked", "next week monday at 7pm"),
    ("arrow", "3 weeks from now"),
    ("narrow", "3rd wednesday in november"),
    ("date_numeric", "03/04/2011"),
    ("date_name", "january 5 2011 at 7:00"),
    ("clock", "4:00"),
    ("numerized", "twenty three days ago"),
    ("miss", "nothing temporal here"),
];

fn fixed_parser() -> Saywhen {
    let options = Options {
        now: NaiveDate::from_ymd_opt(2006, 8, 16)
            .unwrap()
            .and_hms_opt(14, 0, 0),
        ..Options::default()
    };
    Saywhen::with_options(options).unwrap()
}

/// Benchmark the full parse pipeline for each pattern family.
fn bench_parse(c: &mut Criterion) {
    let parser = fixed_parser();
    let mut group = c.benchmark_group("parse");
    for (name, input) in INPUTS {
        group.bench_function(*name, |b| {
            b.iter(|| parser.parse_instant(black_box(input)));
        });
    }
    group.finish();
}

/// Benchmark normalization alone; it dominates short misses.
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for (name, input) in INPUTS {
        group.bench_function(*name, |b| {
            b.iter(|| normalize::normalize(black_box(input)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_normalize);
criterion_main!(benches);
