use std::hint::black_box;

use criterion::{criterion_group, Criterion};

use tonality::prelude::*;

// ---------------------------------------------------------------------------------------------

pub fn resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("Chord");
    let templates = ChordTemplates::new();
    let names = templates.names();
    group.bench_function("Resolve", |b| {
        b.iter(|| {
            for name in &names {
                let chord = Chord::from_template_name(7, 3, name).unwrap();
                black_box(chord.notes().len());
            }
        })
    });
    group.finish();
}

pub fn invert(c: &mut Criterion) {
    let mut group = c.benchmark_group("Chord");
    let chord = Chord::try_from("(C)maj9").unwrap();
    group.bench_function("Invert", |b| {
        b.iter(|| {
            let mut chord = chord.clone();
            for _ in 0..chord.template().len() {
                chord.invert().unwrap();
                black_box(chord.notes().len());
            }
        })
    });
    group.finish();
}

// ---------------------------------------------------------------------------------------------

criterion_group! {
    name = chord;
    config = Criterion::default();
    targets = resolve, invert
}
