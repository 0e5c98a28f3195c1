//! End-to-end checks across the filter, synthesis, and analysis layers.

use core::f64::consts::TAU;

use rotorlab_analysis::{
    dynamic_notch_stages, pipeline_response, response_at, spectrum, stage_response,
};
use rotorlab_core::{Pipeline, StageConfig, notch_q};
use rotorlab_synth::{NoiseSource, SignalKind, generate};

const SAMPLE_RATE: f64 = 4000.0;

#[test]
fn lowpass_passes_dc_within_a_tenth_db() {
    for stage in [
        StageConfig::Butterworth { cutoff_hz: 100.0 },
        StageConfig::Bessel { cutoff_hz: 100.0 },
        StageConfig::Damped { cutoff_hz: 100.0 },
        StageConfig::Pt1 { cutoff_hz: 100.0 },
        StageConfig::Pt3 { cutoff_hz: 100.0 },
    ] {
        let curve = stage_response(&stage, SAMPLE_RATE).unwrap();
        assert!(
            curve.magnitude_db[0].abs() < 0.1,
            "{stage:?} at 1 Hz: {} dB",
            curve.magnitude_db[0]
        );
    }
}

#[test]
fn wide_notch_attenuates_its_center_tone() {
    // Q from a 5 Hz bandwidth around 150 Hz: 750 / 22475, a very wide notch.
    let q = notch_q(150.0, 5.0).unwrap();
    assert!((q - 750.0 / 22475.0).abs() < 1e-12);

    let (db, _) = response_at(&StageConfig::Notch { center_hz: 150.0, q }, 150.0, SAMPLE_RATE)
        .unwrap();
    assert!(db < -20.0, "notch center response {db} dB");
}

#[test]
fn cascade_law_holds_to_nanodecibel() {
    // Composing stage curves must equal the whole-chain curve on every grid
    // point. Both sides sum the same per-stage dB values over the same
    // constant grid, so agreement is far tighter than the 1e-9 bound.
    let stages = StageConfig::bessel4_stages(120.0);
    let whole = pipeline_response(&stages, SAMPLE_RATE).unwrap();

    let a = stage_response(&stages[0], SAMPLE_RATE).unwrap();
    let b = stage_response(&stages[1], SAMPLE_RATE).unwrap();
    let composed = a.cascade(&b).unwrap();

    for i in 0..whole.frequencies.len() {
        assert!((whole.magnitude_db[i] - composed.magnitude_db[i]).abs() < 1e-9);
        assert!((whole.phase_deg[i] - composed.phase_deg[i]).abs() < 1e-9);
    }
}

#[test]
fn filtered_tone_loses_the_energy_the_curve_predicts() {
    // Run a 400 Hz tone through a 100 Hz Butterworth and compare measured
    // steady-state attenuation against the analytic curve.
    let stage = StageConfig::Butterworth { cutoff_hz: 100.0 };
    let (predicted_db, _) = response_at(&stage, 400.0, SAMPLE_RATE).unwrap();

    let mut rng = NoiseSource::default();
    let signal = generate(
        &SignalKind::Sine {
            frequency_hz: 400.0,
            amplitude: 1.0,
        },
        8000,
        SAMPLE_RATE,
        &mut rng,
    );
    let mut pipeline = Pipeline::new(&[stage], SAMPLE_RATE).unwrap();
    let output = pipeline.run(&signal).unwrap();

    // Skip the transient, then compare RMS ratios in dB.
    let steady = &output[4000..];
    let rms = (steady.iter().map(|y| y * y).sum::<f64>() / steady.len() as f64).sqrt();
    let input_rms = (0.5_f64).sqrt();
    let measured_db = 20.0 * (rms / input_rms).log10();
    assert!(
        (measured_db - predicted_db).abs() < 0.5,
        "measured {measured_db} dB, predicted {predicted_db} dB"
    );
}

#[test]
fn spectrum_locates_a_generated_tone() {
    let mut rng = NoiseSource::default();
    let signal = generate(
        &SignalKind::Sine {
            frequency_hz: 200.0,
            amplitude: 1.0,
        },
        1000,
        SAMPLE_RATE,
        &mut rng,
    );
    let spec = spectrum(&signal, SAMPLE_RATE).unwrap();
    let peaks = spec.detect_peaks(100.0, 300.0, 1);
    assert_eq!(peaks.len(), 1);
    assert_eq!(peaks[0].frequency_hz, 200.0);
}

#[test]
fn dynamic_notch_suppresses_the_rotor_tone() {
    // A gyro-like capture: 20 Hz base motion plus a 180 Hz rotor tone and a
    // little noise. The detector must find the rotor tone and the placed
    // notch must remove most of it.
    let mut rng = NoiseSource::new(42);
    let capture = generate(
        &SignalKind::Realistic {
            base_hz: 20.0,
            rotor_hz: 180.0,
            noise_level: 0.05,
        },
        1000,
        SAMPLE_RATE,
        &mut rng,
    );

    let spec = spectrum(&capture, SAMPLE_RATE).unwrap();
    let stages = dynamic_notch_stages(&spec, 100.0, 300.0, 1, 20.0).unwrap();
    assert_eq!(stages.len(), 1);
    let center = match stages[0] {
        StageConfig::Notch { center_hz, .. } => center_hz,
        _ => panic!("expected a notch stage"),
    };
    assert!(
        (center - 180.0).abs() <= spec.bin_width_hz(),
        "notch placed at {center} Hz"
    );

    // Verify suppression on a clean tone at the rotor frequency.
    let tone: Vec<f64> = (0..8000)
        .map(|i| (TAU * 180.0 * i as f64 / SAMPLE_RATE).sin())
        .collect();
    let mut pipeline = Pipeline::new(&stages, SAMPLE_RATE).unwrap();
    let output = pipeline.run(&tone).unwrap();
    let steady = &output[4000..];
    let rms = (steady.iter().map(|y| y * y).sum::<f64>() / steady.len() as f64).sqrt();
    assert!(rms < 0.1, "steady-state RMS after notch: {rms}");
}

#[test]
fn chirp_through_lowpass_decays_with_frequency() {
    // As a chirp sweeps past the cutoff its envelope must shrink.
    let mut rng = NoiseSource::default();
    let sweep = generate(
        &SignalKind::Chirp {
            start_hz: 20.0,
            end_hz: 1500.0,
            amplitude: 1.0,
        },
        8000,
        SAMPLE_RATE,
        &mut rng,
    );
    let mut pipeline =
        Pipeline::new(&[StageConfig::Butterworth { cutoff_hz: 100.0 }], SAMPLE_RATE).unwrap();
    let output = pipeline.run(&sweep).unwrap();

    let energy = |window: &[f64]| window.iter().map(|y| y * y).sum::<f64>();
    let early = energy(&output[1000..2000]);
    let late = energy(&output[7000..8000]);
    assert!(
        late < early / 10.0,
        "early energy {early}, late energy {late}"
    );
}
