use std::hint::black_box;

use criterion::{criterion_group, Criterion};

use tonality::prelude::*;

// ---------------------------------------------------------------------------------------------

pub fn generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scale");
    let templates = ScaleTemplates::new();
    let names = templates.names();
    group.bench_function("Generate", |b| {
        b.iter(|| {
            for name in &names {
                let scale = Scale::from_template_name(3, 4, name).unwrap();
                black_box(scale.notes().len());
            }
        })
    });
    group.finish();
}

pub fn shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scale");
    let mut scale = Scale::default();
    group.bench_function("Shift", |b| {
        b.iter(|| {
            scale.shift(1).unwrap();
            black_box(scale.degree(3));
        })
    });
    group.finish();
}

pub fn note_names(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scale");
    let scale = Scale::try_from("Gb4(major)").unwrap();
    group.bench_function("Note Names", |b| {
        b.iter(|| black_box(scale.note_names(false)))
    });
    group.finish();
}

// ---------------------------------------------------------------------------------------------

criterion_group! {
    name = scale;
    config = Criterion::default();
    targets = generate, shift, note_names
}
