// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Tree building and serialization benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use footmount::ast::Evaluator;
use footmount::geometry::Classifier;
use footmount::io::to_scad;
use footmount::parts::{make_feet, make_shoe, FeetOptions, ShoeOptions, SlopeStyle};
use footmount::PartsConfig;
use nalgebra::Point3;

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let config = PartsConfig::default();

    for slope in [SlopeStyle::Flat, SlopeStyle::Sloped, SlopeStyle::BackSloped] {
        let options = FeetOptions {
            slope,
            ..FeetOptions::default()
        };
        group.bench_with_input(BenchmarkId::new("feet", slope), &options, |b, options| {
            b.iter(|| make_feet(black_box(&config), black_box(options)));
        });
    }

    group.bench_function("shoe", |b| {
        b.iter(|| make_shoe(black_box(&config), black_box(&ShoeOptions::default())));
    });

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    let config = PartsConfig::default();
    let shoe = make_shoe(&config, &ShoeOptions::default()).node;

    group.bench_function("shoe_to_scad", |b| {
        b.iter(|| to_scad(black_box(&shoe)));
    });

    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    let feet = make_feet(&PartsConfig::default(), &FeetOptions::default());

    group.bench_function("feet_bounding_box", |b| {
        b.iter(|| Evaluator::new().bounding_box(black_box(&feet)));
    });

    let classifier = Classifier::new(&feet);
    let probe = Point3::new(20.0, 10.0, 5.0);
    group.bench_function("feet_classify", |b| {
        b.iter(|| classifier.contains(black_box(&probe)));
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_serialize, bench_analysis);
criterion_main!(benches);
