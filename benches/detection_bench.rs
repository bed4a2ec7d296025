//! Performance benchmarks for chord and scale detection

use chordsense::{detect_notes, DetectionConfig, Detector};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const INPUTS: [&[&str]; 4] = [
    &["C4", "E4", "G4"],
    &["C4", "E4", "G4", "A4"],
    &["G2", "B3", "D4", "F4"],
    &["C3", "D4", "E5", "F4", "G5", "A4", "B4"],
];

fn bench_cold_detection(c: &mut Criterion) {
    let config = DetectionConfig {
        cache_capacity: 0,
        ..Default::default()
    };
    let detector = Detector::new(config).expect("valid config");

    c.bench_function("detect_uncached", |b| {
        b.iter(|| {
            for notes in INPUTS {
                let _ = detector.detect(black_box(notes));
            }
        });
    });
}

fn bench_cached_detection(c: &mut Criterion) {
    let detector = Detector::default_engine().expect("valid config");
    for notes in INPUTS {
        detector.detect(notes);
    }

    c.bench_function("detect_cached", |b| {
        b.iter(|| {
            for notes in INPUTS {
                let _ = detector.detect(black_box(notes));
            }
        });
    });
}

fn bench_one_shot(c: &mut Criterion) {
    c.bench_function("detect_notes_one_shot", |b| {
        b.iter(|| {
            let _ = detect_notes(black_box(INPUTS[3]), DetectionConfig::default());
        });
    });
}

criterion_group!(benches, bench_cold_detection, bench_cached_detection, bench_one_shot);
criterion_main!(benches);
