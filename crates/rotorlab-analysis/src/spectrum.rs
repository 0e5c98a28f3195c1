//! DFT magnitude spectrum and peak detection.
//!
//! The spectrum is the single-sided magnitude of the discrete Fourier
//! transform: for an `n`-sample signal, bins `k = 0..n/2` at frequency
//! `k * sample_rate / n`, magnitude `|X[k]| / n`. The FFT evaluates the
//! same sums as the direct DFT definition for any `n`, not just powers of
//! two.

use rustfft::FftPlanner;
use rustfft::num_complex::Complex;

use crate::error::AnalysisError;

/// Floor added to the magnitude before the log, bounding the dB scale at
/// −180 dB so rounding-noise bins stay well below any real tone.
const DB_FLOOR: f64 = 1e-9;

/// A detected spectral peak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralPeak {
    /// Bin center frequency in Hz.
    pub frequency_hz: f64,
    /// Linear magnitude at the bin.
    pub magnitude: f64,
}

/// Single-sided magnitude spectrum of one signal buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// Bin center frequencies in Hz, ascending from 0 (DC).
    pub frequencies: Vec<f64>,
    /// Linear magnitudes, `|X[k]| / n`, index-aligned with `frequencies`.
    pub magnitudes: Vec<f64>,
    /// Magnitudes in dB with a −180 dB floor.
    pub magnitudes_db: Vec<f64>,
}

impl Spectrum {
    /// Spacing between adjacent bins in Hz.
    pub fn bin_width_hz(&self) -> f64 {
        if self.frequencies.len() > 1 {
            self.frequencies[1] - self.frequencies[0]
        } else {
            0.0
        }
    }

    /// Detect up to `count` peaks inside `[min_hz, max_hz]`.
    ///
    /// A peak is a strict local maximum: a bin whose magnitude exceeds both
    /// immediate neighbors. Endpoint bins never qualify, so a strong tone
    /// just outside the band cannot smear a spurious edge peak into it.
    /// Results are ordered by descending magnitude; the sort is stable, so
    /// equal-magnitude peaks keep their ascending-frequency order.
    pub fn detect_peaks(&self, min_hz: f64, max_hz: f64, count: usize) -> Vec<SpectralPeak> {
        let mut peaks = Vec::new();
        for k in 1..self.magnitudes.len().saturating_sub(1) {
            let freq = self.frequencies[k];
            if freq < min_hz || freq > max_hz {
                continue;
            }
            let mag = self.magnitudes[k];
            if mag > self.magnitudes[k - 1] && mag > self.magnitudes[k + 1] {
                peaks.push(SpectralPeak {
                    frequency_hz: freq,
                    magnitude: mag,
                });
            }
        }
        peaks.sort_by(|a, b| {
            b.magnitude
                .partial_cmp(&a.magnitude)
                .unwrap_or(core::cmp::Ordering::Equal)
        });
        peaks.truncate(count);
        peaks
    }

    /// Frequency of the strongest bin across the whole spectrum.
    ///
    /// Unlike [`Spectrum::detect_peaks`] this needs no local-maximum shape,
    /// so it also works for single-bin spectra and band edges.
    pub fn peak_frequency(&self) -> Option<f64> {
        self.magnitudes
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal))
            .map(|(k, _)| self.frequencies[k])
    }
}

/// Compute the single-sided magnitude spectrum of `signal`.
///
/// # Errors
///
/// [`AnalysisError::EmptySignal`] for an empty buffer.
pub fn spectrum(signal: &[f64], sample_rate: f64) -> Result<Spectrum, AnalysisError> {
    if signal.is_empty() {
        return Err(AnalysisError::EmptySignal);
    }

    let n = signal.len();
    let mut buffer: Vec<Complex<f64>> = signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
    FftPlanner::new().plan_fft_forward(n).process(&mut buffer);

    let bins = n / 2 + 1;
    let scale = 1.0 / n as f64;
    let mut frequencies = Vec::with_capacity(bins);
    let mut magnitudes = Vec::with_capacity(bins);
    let mut magnitudes_db = Vec::with_capacity(bins);
    for (k, value) in buffer.iter().take(bins).enumerate() {
        let magnitude = value.norm() * scale;
        frequencies.push(k as f64 * sample_rate / n as f64);
        magnitudes.push(magnitude);
        magnitudes_db.push(20.0 * (magnitude + DB_FLOOR).log10());
    }

    Ok(Spectrum {
        frequencies,
        magnitudes,
        magnitudes_db,
    })
}
