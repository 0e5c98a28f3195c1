//! Property tests for the response analyzer.

use proptest::prelude::*;

use rotorlab_analysis::{SWEEP_POINTS, pipeline_response, stage_response};
use rotorlab_core::StageConfig;

const SAMPLE_RATE: f64 = 4000.0;

/// Stage descriptors whose parameters always pass designer validation at
/// the fixed sample rate.
fn valid_stage() -> impl Strategy<Value = StageConfig> {
    let cutoff = 1.0_f64..1900.0;
    prop_oneof![
        cutoff.clone().prop_map(|cutoff_hz| StageConfig::Pt1 { cutoff_hz }),
        cutoff.clone().prop_map(|cutoff_hz| StageConfig::Pt2 { cutoff_hz }),
        cutoff.clone().prop_map(|cutoff_hz| StageConfig::Pt3 { cutoff_hz }),
        cutoff
            .clone()
            .prop_map(|cutoff_hz| StageConfig::Butterworth { cutoff_hz }),
        cutoff.clone().prop_map(|cutoff_hz| StageConfig::Bessel { cutoff_hz }),
        cutoff.clone().prop_map(|cutoff_hz| StageConfig::Damped { cutoff_hz }),
        (cutoff.clone(), 0.1_f64..20.0)
            .prop_map(|(cutoff_hz, q)| StageConfig::Lowpass { cutoff_hz, q }),
        (cutoff, 0.1_f64..20.0)
            .prop_map(|(center_hz, q)| StageConfig::Notch { center_hz, q }),
    ]
}

proptest! {
    #[test]
    fn cascade_law_closes_over_stage_pairs(a in valid_stage(), b in valid_stage()) {
        let whole = pipeline_response(&[a, b], SAMPLE_RATE).unwrap();
        let curve_a = stage_response(&a, SAMPLE_RATE).unwrap();
        let curve_b = stage_response(&b, SAMPLE_RATE).unwrap();
        let composed = curve_a.cascade(&curve_b).unwrap();

        prop_assert_eq!(whole.frequencies.len(), SWEEP_POINTS);
        for i in 0..SWEEP_POINTS {
            prop_assert!(
                (whole.magnitude_db[i] - composed.magnitude_db[i]).abs() < 1e-9,
                "magnitude diverges at bin {}", i
            );
            prop_assert!(
                (whole.phase_deg[i] - composed.phase_deg[i]).abs() < 1e-9,
                "phase diverges at bin {}", i
            );
        }
    }

    #[test]
    fn stage_curves_are_finite_and_grid_aligned(stage in valid_stage()) {
        let curve = stage_response(&stage, SAMPLE_RATE).unwrap();
        prop_assert_eq!(curve.frequencies.len(), SWEEP_POINTS);
        prop_assert_eq!(curve.magnitude_db.len(), SWEEP_POINTS);
        prop_assert_eq!(curve.phase_deg.len(), SWEEP_POINTS);
        prop_assert!(curve.frequencies[0] == 1.0);
        prop_assert!(*curve.frequencies.last().unwrap() == SAMPLE_RATE / 2.0);
        for i in 0..SWEEP_POINTS {
            prop_assert!(curve.magnitude_db[i].is_finite());
            prop_assert!(curve.phase_deg[i].is_finite());
        }
    }

    #[test]
    fn lowpass_curves_pass_dc(cutoff_hz in 10.0_f64..1000.0) {
        let curve =
            stage_response(&StageConfig::Butterworth { cutoff_hz }, SAMPLE_RATE).unwrap();
        prop_assert!(curve.magnitude_db[0].abs() < 0.1);
    }
}
