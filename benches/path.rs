// Copyright 2026 the Pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks of parsing, normalizing and measuring paths.

#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use pathdata::{parse, ParamCurveExtrema, Path, Segment};

const SAMPLE: &str = "M600,350 l 50,-25 a25,25 -30 0,1 50,-25 l50-25a25,50-30 0,1 50,-25 \
                      c 0 -10 25 25 50 -25 0 -10 25 25 50 -25zL 100 100 H 200 V 200H100Z \
                      M 200,200C300,300 0,0 400 400 S 425,375 450,350 Q 400 400 500,230 T 450 230";

fn bench_path(cc: &mut Criterion) {
    cc.bench_function("parse", |b| {
        b.iter(|| parse(black_box(SAMPLE)));
    });

    let path: Path = SAMPLE.parse().unwrap();
    cc.bench_function("normalize", |b| {
        b.iter(|| black_box(&path).normalize());
    });
    cc.bench_function("bounding_box", |b| {
        b.iter(|| black_box(&path).bounding_box());
    });

    let segments = path.to_segments();
    cc.bench_function("segment bounding_box", |b| {
        b.iter(|| {
            black_box(&segments)
                .iter()
                .map(Segment::bounding_box)
                .count()
        });
    });

    let mut group = cc.benchmark_group("arclen");
    for step in [1e-2, 5e-3, 1e-3] {
        group.bench_with_input(BenchmarkId::from_parameter(step), &step, |b, &step| {
            b.iter(|| black_box(&path).arclen(step));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_path);
criterion_main!(benches);
