//! Benchmarks for palette generation and score index builds.
#![allow(missing_docs, unused_results)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resicolor::color::GradientPalette;
use resicolor::resolver::ResidueMap;
use resicolor::score::{
    build, ConfidenceClassifier, PhysicochemicalClassifier, ResidueRecord,
};

const ANCHORS: [&str; 3] =
    ["rgb(0, 0, 255)", "rgb(255, 255, 255)", "rgb(255, 0, 0)"];

fn palette_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("palette_generate");
    for steps in [10, 100, 1000] {
        group.bench_function(format!("{steps}_steps"), |b| {
            b.iter(|| {
                black_box(GradientPalette::generate(
                    black_box(&ANCHORS),
                    steps,
                ))
            })
        });
    }
    group.finish();
}

fn residues(count: i32) -> ResidueMap {
    ResidueMap::from_residues((1..=count).map(|seq| ("A", seq)))
}

fn index_build_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for count in [100, 1000, 10_000] {
        let map = residues(count);
        let plddt: Vec<_> = (1..=count)
            .map(|seq| ResidueRecord::new("A", seq, f64::from(seq % 100)))
            .collect();
        group.bench_function(format!("confidence_{count}_residues"), |b| {
            b.iter(|| black_box(build(&plddt, &ConfidenceClassifier, &map)))
        });

        let classifier = PhysicochemicalClassifier::default();
        let physico: Vec<_> = (1..=count)
            .map(|seq| {
                let v = f64::from(seq % 200) / 100.0 - 1.0;
                ResidueRecord::new("A", seq, v)
            })
            .collect();
        group.bench_function(
            format!("physicochemical_{count}_residues"),
            |b| b.iter(|| black_box(build(&physico, &classifier, &map))),
        );
    }
    group.finish();
}

criterion_group!(benches, palette_benchmark, index_build_benchmark);
criterion_main!(benches);
