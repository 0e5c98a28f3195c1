//! Dynamic notch placement.
//!
//! Bridges the spectral and filter layers: spectral peaks detected in a
//! measured signal become notch stage descriptors, one per peak, each
//! centered on its peak bin with a caller-chosen bandwidth.

use rotorlab_core::{StageConfig, notch_q};

use crate::error::AnalysisError;
use crate::spectrum::Spectrum;

/// Place up to `count` notch stages on the strongest peaks in
/// `[min_hz, max_hz]`.
///
/// Each returned stage is a [`StageConfig::Notch`] centered on a detected
/// peak, with Q derived from `bandwidth_hz` so every notch has the same
/// absolute width regardless of where it lands. Peaks are taken in
/// descending magnitude order, so when fewer stages are requested than
/// peaks exist, the strongest disturbances are notched first.
///
/// Returns an empty vector when the band holds no peak; an unchanged
/// pipeline is the correct response to a clean spectrum.
///
/// # Errors
///
/// Q derivation fails for a peak at or below `bandwidth_hz`; choose the
/// search band so `min_hz > bandwidth_hz` to rule this out statically.
pub fn dynamic_notch_stages(
    spectrum: &Spectrum,
    min_hz: f64,
    max_hz: f64,
    count: usize,
    bandwidth_hz: f64,
) -> Result<Vec<StageConfig>, AnalysisError> {
    let peaks = spectrum.detect_peaks(min_hz, max_hz, count);
    let mut stages = Vec::with_capacity(peaks.len());
    for peak in peaks {
        let q = notch_q(peak.frequency_hz, bandwidth_hz)?;
        stages.push(StageConfig::Notch {
            center_hz: peak.frequency_hz,
            q,
        });
    }
    Ok(stages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::spectrum;
    use core::f64::consts::TAU;
    use rotorlab_core::FilterError;

    const SAMPLE_RATE: f64 = 4000.0;

    fn tone(freq: f64, amplitude: f64, length: usize) -> Vec<f64> {
        (0..length)
            .map(|i| amplitude * (TAU * freq * i as f64 / SAMPLE_RATE).sin())
            .collect()
    }

    #[test]
    fn places_notch_on_detected_tone() {
        let spec = spectrum(&tone(200.0, 1.0, 1000), SAMPLE_RATE).unwrap();
        let stages = dynamic_notch_stages(&spec, 100.0, 300.0, 1, 20.0).unwrap();
        assert_eq!(stages.len(), 1);
        match stages[0] {
            StageConfig::Notch { center_hz, q } => {
                assert_eq!(center_hz, 200.0);
                let expected = notch_q(200.0, 20.0).unwrap();
                assert_eq!(q, expected);
            }
            _ => panic!("expected a notch stage"),
        }
    }

    #[test]
    fn clean_band_yields_no_stages() {
        let spec = spectrum(&tone(200.0, 1.0, 1000), SAMPLE_RATE).unwrap();
        let stages = dynamic_notch_stages(&spec, 400.0, 800.0, 3, 20.0).unwrap();
        assert!(stages.is_empty());
    }

    #[test]
    fn strongest_peaks_are_notched_first() {
        let signal: Vec<f64> = tone(120.0, 0.4, 1000)
            .iter()
            .zip(tone(300.0, 1.0, 1000).iter())
            .map(|(a, b)| a + b)
            .collect();
        let spec = spectrum(&signal, SAMPLE_RATE).unwrap();
        let stages = dynamic_notch_stages(&spec, 50.0, 400.0, 1, 20.0).unwrap();
        assert_eq!(stages.len(), 1);
        assert!(matches!(
            stages[0],
            StageConfig::Notch { center_hz, .. } if center_hz == 300.0
        ));
    }

    #[test]
    fn bandwidth_at_peak_frequency_is_rejected() {
        // A peak at 200 Hz with a 200 Hz bandwidth makes the Q denominator
        // exactly zero.
        let spec = spectrum(&tone(200.0, 1.0, 1000), SAMPLE_RATE).unwrap();
        let result = dynamic_notch_stages(&spec, 100.0, 300.0, 1, 200.0);
        assert_eq!(
            result,
            Err(AnalysisError::Filter(FilterError::DivisionByZero(
                "notch center frequency equals bandwidth"
            )))
        );
    }
}
