//! Analytic frequency-response evaluation.
//!
//! Evaluates a stage's transfer function H(z) directly on the unit circle,
//! z = e^{iω} with ω = 2πf / sample_rate, instead of measuring it from
//! signals. Biquad stages evaluate the rational function from their designed
//! coefficients; one-pole cascade stages raise the single-pole transfer
//! function to the cascade order by repeated complex multiplication.
//!
//! Cascades compose by summation in the log/phase domain: dB is
//! log-magnitude and series LTI systems multiply in magnitude, so the
//! combined curve of two stages over the same frequency grid is the
//! point-wise sum of their magnitude-dB and phase-degree sequences.

use rustfft::num_complex::Complex;

use rotorlab_core::{FilterError, StageConfig, StageFilter};

use crate::error::AnalysisError;

/// Number of linear sweep points from 1 Hz to Nyquist.
pub const SWEEP_POINTS: usize = 2048;

/// Guard against an exact magnitude zero before the log (keeps the curve
/// finite; never reached by the evaluated responses in practice).
const MIN_MAGNITUDE: f64 = 1e-300;

/// Frequency-response curve: three index-aligned sequences.
///
/// Produced fresh per call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseCurve {
    /// Frequency grid in Hz.
    pub frequencies: Vec<f64>,
    /// Magnitude response in dB.
    pub magnitude_db: Vec<f64>,
    /// Phase response in degrees.
    pub phase_deg: Vec<f64>,
}

impl ResponseCurve {
    /// Unity (0 dB, 0°) curve over the standard sweep grid.
    pub fn flat(sample_rate: f64) -> Result<Self, AnalysisError> {
        let frequencies = sweep_grid(sample_rate)?;
        let n = frequencies.len();
        Ok(Self {
            frequencies,
            magnitude_db: vec![0.0; n],
            phase_deg: vec![0.0; n],
        })
    }

    /// Combine with another curve in series.
    ///
    /// Adds the magnitude-dB and phase-degree sequences point-wise, which is
    /// exact for cascaded LTI stages.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::GridMismatch`] unless both curves share the
    /// identical frequency grid.
    pub fn cascade(&self, other: &ResponseCurve) -> Result<ResponseCurve, AnalysisError> {
        if self.frequencies != other.frequencies {
            return Err(AnalysisError::GridMismatch);
        }
        let magnitude_db = self
            .magnitude_db
            .iter()
            .zip(other.magnitude_db.iter())
            .map(|(a, b)| a + b)
            .collect();
        let phase_deg = self
            .phase_deg
            .iter()
            .zip(other.phase_deg.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(ResponseCurve {
            frequencies: self.frequencies.clone(),
            magnitude_db,
            phase_deg,
        })
    }

    /// Magnitude at a specific frequency (linearly interpolated).
    pub fn magnitude_at(&self, freq_hz: f64) -> f64 {
        interpolate(&self.frequencies, &self.magnitude_db, freq_hz)
    }

    /// Phase at a specific frequency (linearly interpolated).
    pub fn phase_at(&self, freq_hz: f64) -> f64 {
        interpolate(&self.frequencies, &self.phase_deg, freq_hz)
    }

    /// Find the −3 dB cutoff relative to `reference_db`.
    ///
    /// Returns the interpolated frequency of the first downward crossing,
    /// or `None` if the curve never falls 3 dB below the reference.
    pub fn cutoff_frequency(&self, reference_db: f64) -> Option<f64> {
        let target = reference_db - 3.0;

        for i in 1..self.magnitude_db.len() {
            if self.magnitude_db[i] < target && self.magnitude_db[i - 1] >= target {
                let t = (target - self.magnitude_db[i - 1])
                    / (self.magnitude_db[i] - self.magnitude_db[i - 1]);
                return Some(
                    self.frequencies[i - 1] + t * (self.frequencies[i] - self.frequencies[i - 1]),
                );
            }
        }
        None
    }
}

/// Evaluate one stage's response over the standard sweep grid.
///
/// # Errors
///
/// Stage validation errors propagate; the sweep itself requires a sample
/// rate whose Nyquist frequency lies above the 1 Hz sweep start.
pub fn stage_response(
    stage: &StageConfig,
    sample_rate: f64,
) -> Result<ResponseCurve, AnalysisError> {
    let evaluator = StageEvaluator::build(stage, sample_rate)?;
    let frequencies = sweep_grid(sample_rate)?;

    let mut magnitude_db = Vec::with_capacity(frequencies.len());
    let mut phase_deg = Vec::with_capacity(frequencies.len());
    for &freq in &frequencies {
        let h = evaluator.transfer(omega(freq, sample_rate));
        magnitude_db.push(to_db(h.norm()));
        phase_deg.push(h.arg().to_degrees());
    }

    Ok(ResponseCurve {
        frequencies,
        magnitude_db,
        phase_deg,
    })
}

/// Evaluate a whole stage chain over the standard sweep grid.
///
/// Each stage's curve is computed independently and the results are summed
/// (log-domain cascade composition). An empty chain yields the unity curve.
pub fn pipeline_response(
    stages: &[StageConfig],
    sample_rate: f64,
) -> Result<ResponseCurve, AnalysisError> {
    let mut combined = ResponseCurve::flat(sample_rate)?;
    for stage in stages {
        combined = combined.cascade(&stage_response(stage, sample_rate)?)?;
    }
    Ok(combined)
}

/// Evaluate one stage's response at a single frequency.
///
/// Returns `(magnitude_db, phase_deg)`.
///
/// # Errors
///
/// Stage validation errors propagate; the probe frequency must satisfy
/// `0 < freq_hz <= sample_rate / 2`.
pub fn response_at(
    stage: &StageConfig,
    freq_hz: f64,
    sample_rate: f64,
) -> Result<(f64, f64), AnalysisError> {
    if !(freq_hz > 0.0 && freq_hz <= sample_rate / 2.0) {
        return Err(AnalysisError::Filter(FilterError::InvalidParameter(
            "probe frequency must lie in (0, Nyquist]",
        )));
    }
    let evaluator = StageEvaluator::build(stage, sample_rate)?;
    let h = evaluator.transfer(omega(freq_hz, sample_rate));
    Ok((to_db(h.norm()), h.arg().to_degrees()))
}

/// Per-stage transfer-function evaluator.
///
/// Built from the same designed parameters the pipeline uses, so curves and
/// filtered signals always describe the same filter.
enum StageEvaluator {
    Biquad {
        b0: f64,
        b1: f64,
        b2: f64,
        a1: f64,
        a2: f64,
    },
    OnePole {
        gain: f64,
        stages: usize,
    },
}

impl StageEvaluator {
    fn build(stage: &StageConfig, sample_rate: f64) -> Result<Self, AnalysisError> {
        match stage.build(sample_rate)? {
            StageFilter::Biquad(filter) => {
                let c = filter.coefficients();
                Ok(Self::Biquad {
                    b0: c.b0,
                    b1: c.b1,
                    b2: c.b2,
                    a1: c.a1,
                    a2: c.a2,
                })
            }
            StageFilter::Cascade(filter) => Ok(Self::OnePole {
                gain: filter.gain(),
                stages: filter.order().stages(),
            }),
        }
    }

    /// H(e^{iω}) for this stage.
    fn transfer(&self, omega: f64) -> Complex<f64> {
        // z^-1 on the unit circle.
        let z_inv = Complex::new((-omega).cos(), (-omega).sin());
        match *self {
            Self::Biquad { b0, b1, b2, a1, a2 } => {
                let z_inv2 = z_inv * z_inv;
                let numerator = Complex::new(b0, 0.0) + z_inv * b1 + z_inv2 * b2;
                let denominator = Complex::new(1.0, 0.0) + z_inv * a1 + z_inv2 * a2;
                numerator / denominator
            }
            Self::OnePole { gain, stages } => {
                // Single pole: H1 = g / (1 - (1-g) z^-1), raised to the
                // cascade order by repeated multiplication.
                let single = Complex::new(gain, 0.0)
                    / (Complex::new(1.0, 0.0) - z_inv * (1.0 - gain));
                let mut h = single;
                for _ in 1..stages {
                    h *= single;
                }
                h
            }
        }
    }
}

/// The shared linear sweep grid: 1 Hz to Nyquist in [`SWEEP_POINTS`] steps.
///
/// A shared constant grid keeps independently computed curves index-aligned,
/// which the cascade composition relies on. No frequency above Nyquist is
/// ever produced.
fn sweep_grid(sample_rate: f64) -> Result<Vec<f64>, AnalysisError> {
    let nyquist = sample_rate / 2.0;
    if !(nyquist > 1.0) {
        return Err(AnalysisError::Filter(FilterError::InvalidParameter(
            "sample rate too low for the 1 Hz sweep start",
        )));
    }
    let last = (SWEEP_POINTS - 1) as f64;
    Ok((0..SWEEP_POINTS)
        .map(|i| 1.0 + (nyquist - 1.0) * i as f64 / last)
        .collect())
}

fn omega(freq_hz: f64, sample_rate: f64) -> f64 {
    std::f64::consts::TAU * freq_hz / sample_rate
}

fn to_db(magnitude: f64) -> f64 {
    20.0 * magnitude.max(MIN_MAGNITUDE).log10()
}

/// Linear interpolation over an ascending grid.
fn interpolate(x: &[f64], y: &[f64], target_x: f64) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    if target_x <= x[0] {
        return y[0];
    }
    for i in 1..x.len() {
        if target_x <= x[i] {
            let t = (target_x - x[i - 1]) / (x[i] - x[i - 1]);
            return y[i - 1] + t * (y[i] - y[i - 1]);
        }
    }
    y[y.len() - 1]
}
