//! Response demo: filter curves, spectra, and dynamic notch placement.
//!
//! Run with: cargo run -p rotorlab-analysis --example response_demo

use rotorlab_analysis::{dynamic_notch_stages, pipeline_response, spectrum, stage_response};
use rotorlab_core::{Pipeline, StageConfig};
use rotorlab_synth::{NoiseSource, SignalKind, generate};

fn main() {
    let sample_rate = 4000.0;

    // --- Single-stage response curves ---
    println!("=== Low-pass Response Curves (100 Hz cutoff) ===\n");

    let stages = [
        ("PT1", StageConfig::Pt1 { cutoff_hz: 100.0 }),
        ("PT2", StageConfig::Pt2 { cutoff_hz: 100.0 }),
        ("PT3", StageConfig::Pt3 { cutoff_hz: 100.0 }),
        ("Butterworth", StageConfig::Butterworth { cutoff_hz: 100.0 }),
        ("Bessel", StageConfig::Bessel { cutoff_hz: 100.0 }),
    ];

    println!(
        "{:<12} {:>10} {:>10} {:>10} {:>12}",
        "Filter", "100 Hz", "200 Hz", "400 Hz", "-3 dB point"
    );
    println!("{:-<12} {:->10} {:->10} {:->10} {:->12}", "", "", "", "", "");

    for (name, stage) in &stages {
        let curve = stage_response(stage, sample_rate).expect("valid stage");
        let cutoff = curve
            .cutoff_frequency(0.0)
            .map_or_else(|| "-".to_string(), |f| format!("{f:.1} Hz"));
        println!(
            "{:<12} {:>8.2}dB {:>8.2}dB {:>8.2}dB {:>12}",
            name,
            curve.magnitude_at(100.0),
            curve.magnitude_at(200.0),
            curve.magnitude_at(400.0),
            cutoff
        );
    }

    // --- Composed pipeline response ---
    println!("\n=== Pipeline Response (PT2 + notch at 180 Hz) ===\n");

    let chain = [
        StageConfig::Pt2 { cutoff_hz: 250.0 },
        StageConfig::Notch {
            center_hz: 180.0,
            q: 9.0,
        },
    ];
    let curve = pipeline_response(&chain, sample_rate).expect("valid chain");

    println!("{:>10} {:>12} {:>12}", "Freq (Hz)", "Mag (dB)", "Phase (deg)");
    println!("{:->10} {:->12} {:->12}", "", "", "");
    for freq in [10.0, 50.0, 100.0, 170.0, 180.0, 190.0, 400.0, 1000.0] {
        println!(
            "{:>10.0} {:>12.2} {:>12.1}",
            freq,
            curve.magnitude_at(freq),
            curve.phase_at(freq)
        );
    }

    // --- Spectrum of a gyro-like capture ---
    println!("\n=== Spectrum of a Gyro-like Signal ===\n");

    let mut rng = NoiseSource::new(42);
    let capture = generate(
        &SignalKind::Realistic {
            base_hz: 20.0,
            rotor_hz: 180.0,
            noise_level: 0.05,
        },
        1000,
        sample_rate,
        &mut rng,
    );

    let spec = spectrum(&capture, sample_rate).expect("non-empty capture");
    println!(
        "Capture: 20 Hz base + 180 Hz rotor tone + noise, {} samples",
        capture.len()
    );
    println!("Bin width: {:.1} Hz", spec.bin_width_hz());

    let peaks = spec.detect_peaks(5.0, 1000.0, 3);
    println!("\nTop spectral peaks:");
    println!("{:>10} {:>12}", "Freq (Hz)", "Magnitude");
    println!("{:->10} {:->12}", "", "");
    for peak in &peaks {
        println!("{:>10.0} {:>12.4}", peak.frequency_hz, peak.magnitude);
    }

    // --- Dynamic notch placement ---
    println!("\n=== Dynamic Notch Placement ===\n");

    let notches =
        dynamic_notch_stages(&spec, 100.0, 500.0, 1, 20.0).expect("band above bandwidth");
    for stage in &notches {
        if let StageConfig::Notch { center_hz, q } = stage {
            println!("Placed notch: center {center_hz:.0} Hz, Q {q:.3}");
        }
    }

    let mut pipeline = Pipeline::new(&notches, sample_rate).expect("valid notch stages");
    let filtered = pipeline.run(&capture).expect("non-empty capture");
    let filtered_spec = spectrum(&filtered, sample_rate).expect("non-empty output");

    let rotor_bin = (180.0 / spec.bin_width_hz()).round() as usize;
    println!(
        "Rotor bin before: {:.4}, after: {:.4}",
        spec.magnitudes[rotor_bin], filtered_spec.magnitudes[rotor_bin]
    );

    println!("\nResponse demo complete.");
}
