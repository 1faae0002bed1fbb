//! Benchmarks for report building
//!
//! Tests classification, aggregation, sorting, and rendering over an
//! in-memory course tree, so no filesystem or media parsing is involved.

use coursetime::probe::ProbeError;
use coursetime::report::{render, section_number, Classification, ProgressReportBuilder};
use coursetime::scanner::MemoryTree;
use coursetime_common::Hours;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::path::Path;

/// Every video is seven minutes long
fn fixed_probe(_: &Path) -> Result<Hours, ProbeError> {
    Ok(Hours::from_secs_f64(420.0))
}

/// Course with `sections` folders of 12 videos each, a third of them done
fn course_tree(sections: usize) -> MemoryTree {
    let mut tree = MemoryTree::new();
    for i in 0..sections {
        let name = if i % 3 == 0 {
            format!("[Done] {:02} - Section", i + 1)
        } else {
            format!("{:02} - Section", i + 1)
        };
        for v in 0..12 {
            tree.add_file(format!("/course/{}/lesson {:02}.mp4", name, v));
            tree.add_file(format!("/course/{}/lesson {:02}.srt", name, v));
        }
    }
    tree.add_dir("/course/Extras");
    tree
}

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    group.bench_function("classify/done", |b| {
        b.iter(|| Classification::of(black_box("[Done] 12 - Ownership and Borrowing")));
    });

    group.bench_function("classify/counted", |b| {
        b.iter(|| Classification::of(black_box("12 - Ownership and Borrowing")));
    });

    group.bench_function("section_number", |b| {
        b.iter(|| section_number(black_box("Section duration: 12 - Ownership: 01h 24m")));
    });

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for sections in [10, 100, 500] {
        let builder = ProgressReportBuilder::new(course_tree(sections), fixed_probe);
        group.bench_with_input(
            BenchmarkId::new("sections", sections),
            &builder,
            |b, builder| {
                b.iter(|| builder.build(black_box(Path::new("/course"))).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let builder = ProgressReportBuilder::new(course_tree(100), fixed_probe);
    let report = builder.build(Path::new("/course")).unwrap();

    c.bench_function("render/100_sections", |b| {
        b.iter(|| render(black_box(&report)).unwrap());
    });
}

criterion_group!(benches, bench_classification, bench_build, bench_render);
criterion_main!(benches);
