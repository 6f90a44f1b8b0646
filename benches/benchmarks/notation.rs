use std::hint::black_box;

use criterion::{criterion_group, Criterion};

use tonality::prelude::*;

// ---------------------------------------------------------------------------------------------

const NOTES: [&str; 6] = ["C4", "c#3", "Eb_5", "bb 2", "G##", "4C#"];
const SCALES: [&str; 4] = ["C4", "Eb(dorian)", "B7(jewish)", "F#3(harmonic minor)"];
const CHORDS: [&str; 4] = ["(C)", "(Eb7)min7", "(G3)7b9", "(D)maj7#11"];

// ---------------------------------------------------------------------------------------------

pub fn parse_notes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Notation");
    let notation = Notation::new();
    group.bench_function("Notes", |b| {
        b.iter(|| {
            for s in NOTES {
                black_box(notation.parse_note(s).unwrap());
            }
        })
    });
    group.finish();
}

pub fn parse_scales(c: &mut Criterion) {
    let mut group = c.benchmark_group("Notation");
    let notation = Notation::new();
    group.bench_function("Scales", |b| {
        b.iter(|| {
            for s in SCALES {
                black_box(notation.parse_scale(s).unwrap());
            }
        })
    });
    group.finish();
}

pub fn parse_chords(c: &mut Criterion) {
    let mut group = c.benchmark_group("Notation");
    let notation = Notation::new();
    group.bench_function("Chords", |b| {
        b.iter(|| {
            for s in CHORDS {
                black_box(notation.parse_chord(s).unwrap());
            }
        })
    });
    group.finish();
}

// ---------------------------------------------------------------------------------------------

criterion_group! {
    name = notation;
    config = Criterion::default();
    targets = parse_notes, parse_scales, parse_chords
}
