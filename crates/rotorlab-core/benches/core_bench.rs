//! Criterion benchmarks for rotorlab-core filters
//!
//! Run with: cargo bench -p rotorlab-core

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rotorlab_core::{
    Biquad, BiquadCoefficients, CascadeFilter, CascadeOrder, Pipeline, StageConfig, BUTTERWORTH_Q,
};

const SAMPLE_RATE: f64 = 4000.0;

fn test_signal(size: usize) -> Vec<f64> {
    let mut state = 0x12345678u32;
    (0..size)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            f64::from(state as i32) / f64::from(i32::MAX)
        })
        .collect()
}

fn bench_biquad(c: &mut Criterion) {
    let signal = test_signal(1000);
    let coeffs = BiquadCoefficients::lowpass(100.0, BUTTERWORTH_Q, SAMPLE_RATE).unwrap();

    c.bench_function("biquad_1000_samples", |b| {
        b.iter(|| {
            let mut filter = Biquad::new(coeffs);
            for &x in &signal {
                black_box(filter.process(black_box(x)));
            }
        })
    });
}

fn bench_cascade(c: &mut Criterion) {
    let signal = test_signal(1000);

    c.bench_function("pt3_1000_samples", |b| {
        b.iter(|| {
            let mut filter =
                CascadeFilter::new(100.0, SAMPLE_RATE, CascadeOrder::Third).unwrap();
            for &x in &signal {
                black_box(filter.process(black_box(x)));
            }
        })
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let signal = test_signal(1000);
    let config = [
        StageConfig::Pt2 { cutoff_hz: 100.0 },
        StageConfig::Notch {
            center_hz: 200.0,
            q: 5.0,
        },
        StageConfig::Butterworth { cutoff_hz: 500.0 },
    ];

    c.bench_function("pipeline_3_stages_1000_samples", |b| {
        b.iter(|| {
            let mut pipeline = Pipeline::new(&config, SAMPLE_RATE).unwrap();
            black_box(pipeline.run(&signal).unwrap())
        })
    });
}

criterion_group!(benches, bench_biquad, bench_cascade, bench_pipeline);
criterion_main!(benches);
