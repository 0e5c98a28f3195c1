//! Biquad (bi-quadratic) filter section and coefficient design.
//!
//! Coefficient calculation uses the RBJ Audio EQ Cookbook formulas for the
//! low-pass and notch responses. Coefficients are designed once, validated,
//! and stored as an immutable value; the stateful [`Biquad`] section only
//! ever reads them.

use core::f64::consts::TAU;
use libm::{cos, sin};

use crate::error::FilterError;

/// Butterworth low-pass Q (maximally flat passband).
pub const BUTTERWORTH_Q: f64 = 0.707106781;

/// Two-pole Bessel low-pass Q (maximally flat group delay).
pub const BESSEL_Q: f64 = 0.577350269;

/// Critically damped low-pass Q (no overshoot in the step response).
pub const DAMPED_Q: f64 = 0.5;

/// Cutoff multiplier for stage A of the four-pole Bessel decimation filter.
pub const BESSEL4_FREQ_A: f64 = 1.603357516;
/// Q for stage A of the four-pole Bessel decimation filter.
pub const BESSEL4_Q_A: f64 = 0.805538282;
/// Cutoff multiplier for stage B of the four-pole Bessel decimation filter.
pub const BESSEL4_FREQ_B: f64 = 1.430171560;
/// Q for stage B of the four-pole Bessel decimation filter.
pub const BESSEL4_Q_B: f64 = 0.521934582;

/// Normalized biquad coefficients.
///
/// Five real numbers `(b0, b1, b2, a1, a2)` with the leading recursion
/// coefficient `a0` normalized to 1. Produced only by the designers on this
/// type and immutable once created; two calls with identical arguments yield
/// bit-identical values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadCoefficients {
    /// Feedforward coefficient `b0`.
    pub b0: f64,
    /// Feedforward coefficient `b1`.
    pub b1: f64,
    /// Feedforward coefficient `b2`.
    pub b2: f64,
    /// Feedback coefficient `a1` (of the normalized recursion).
    pub a1: f64,
    /// Feedback coefficient `a2` (of the normalized recursion).
    pub a2: f64,
}

impl BiquadCoefficients {
    /// Design low-pass coefficients (RBJ cookbook).
    ///
    /// # Arguments
    ///
    /// * `cutoff_hz` - Cutoff frequency in Hz, `0 < cutoff < sample_rate / 2`
    /// * `q` - Q factor, `> 0` (see [`BUTTERWORTH_Q`], [`BESSEL_Q`],
    ///   [`DAMPED_Q`] for the fixed flavors)
    /// * `sample_rate` - Sample rate in Hz, `> 0`
    ///
    /// # Errors
    ///
    /// [`FilterError::InvalidParameter`] when a precondition is violated.
    /// A cutoff at or above Nyquist is rejected rather than producing a
    /// degenerate filter.
    pub fn lowpass(cutoff_hz: f64, q: f64, sample_rate: f64) -> Result<Self, FilterError> {
        validate_design(cutoff_hz, q, sample_rate)?;

        let omega = TAU * cutoff_hz / sample_rate;
        let cos_omega = cos(omega);
        let alpha = sin(omega) / (2.0 * q);

        let b1 = 1.0 - cos_omega;
        let b0 = b1 / 2.0;
        Self::normalized(b0, b1, b0, 1.0 + alpha, -2.0 * cos_omega, 1.0 - alpha)
    }

    /// Design notch (band-reject) coefficients (RBJ cookbook).
    ///
    /// # Arguments
    ///
    /// * `center_hz` - Notch center frequency in Hz, `0 < center < sample_rate / 2`
    /// * `q` - Q factor, `> 0` (notch width = center / Q)
    /// * `sample_rate` - Sample rate in Hz, `> 0`
    ///
    /// # Errors
    ///
    /// [`FilterError::InvalidParameter`] when a precondition is violated.
    pub fn notch(center_hz: f64, q: f64, sample_rate: f64) -> Result<Self, FilterError> {
        validate_design(center_hz, q, sample_rate)?;

        let omega = TAU * center_hz / sample_rate;
        let cos_omega = cos(omega);
        let alpha = sin(omega) / (2.0 * q);

        let b1 = -2.0 * cos_omega;
        Self::normalized(1.0, b1, 1.0, 1.0 + alpha, b1, 1.0 - alpha)
    }

    /// Normalize by `a0` and verify every coefficient is finite.
    fn normalized(
        b0: f64,
        b1: f64,
        b2: f64,
        a0: f64,
        a1: f64,
        a2: f64,
    ) -> Result<Self, FilterError> {
        let a0_inv = 1.0 / a0;
        let coeffs = Self {
            b0: b0 * a0_inv,
            b1: b1 * a0_inv,
            b2: b2 * a0_inv,
            a1: a1 * a0_inv,
            a2: a2 * a0_inv,
        };
        if coeffs.is_finite() {
            Ok(coeffs)
        } else {
            Err(FilterError::NumericInstability(
                "designed coefficient is not finite",
            ))
        }
    }

    /// True when all five coefficients are finite.
    pub fn is_finite(&self) -> bool {
        self.b0.is_finite()
            && self.b1.is_finite()
            && self.b2.is_finite()
            && self.a1.is_finite()
            && self.a2.is_finite()
    }
}

/// Design the four-pole Bessel low-pass decimation filter.
///
/// Returns two cascaded biquad low-pass stages. The cutoff multipliers and
/// Q values are the fixed constants of the Bessel approximation; see
/// [`BESSEL4_FREQ_A`] and friends.
///
/// # Errors
///
/// [`FilterError::InvalidParameter`] when either corrected stage cutoff is
/// not strictly below Nyquist.
pub fn bessel4_lowpass(
    cutoff_hz: f64,
    sample_rate: f64,
) -> Result<[BiquadCoefficients; 2], FilterError> {
    Ok([
        BiquadCoefficients::lowpass(cutoff_hz * BESSEL4_FREQ_A, BESSEL4_Q_A, sample_rate)?,
        BiquadCoefficients::lowpass(cutoff_hz * BESSEL4_FREQ_B, BESSEL4_Q_B, sample_rate)?,
    ])
}

/// Shared designer preconditions: `0 < frequency < Nyquist`, `Q > 0`.
fn validate_design(frequency_hz: f64, q: f64, sample_rate: f64) -> Result<(), FilterError> {
    // Negated comparisons so NaN parameters fail validation too.
    if !(sample_rate > 0.0) {
        return Err(FilterError::InvalidParameter("sample rate must be positive"));
    }
    if !(frequency_hz > 0.0) {
        return Err(FilterError::InvalidParameter("frequency must be positive"));
    }
    if !(frequency_hz < sample_rate / 2.0) {
        return Err(FilterError::InvalidParameter(
            "frequency must be below Nyquist",
        ));
    }
    if !(q > 0.0) {
        return Err(FilterError::InvalidParameter("Q must be positive"));
    }
    Ok(())
}

/// Stateful biquad section.
///
/// Implements the Direct Form I structure:
/// ```text
/// y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2]
///                - a1*y[n-1] - a2*y[n-2]
/// ```
///
/// Owns its own recursion memory (two prior inputs, two prior outputs);
/// never shared across stages.
#[derive(Debug, Clone)]
pub struct Biquad {
    coeffs: BiquadCoefficients,

    /// Input delay line: x[n-1], x[n-2]
    x1: f64,
    x2: f64,

    /// Output delay line: y[n-1], y[n-2]
    y1: f64,
    y2: f64,
}

impl Biquad {
    /// Create a section from designed coefficients with cleared state.
    pub fn new(coeffs: BiquadCoefficients) -> Self {
        Self {
            coeffs,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    /// The coefficients this section was built with.
    pub fn coefficients(&self) -> BiquadCoefficients {
        self.coeffs
    }

    /// Processes a single sample through the section.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        let c = &self.coeffs;
        let output = c.b0 * input + c.b1 * self.x1 + c.b2 * self.x2
                                  - c.a1 * self.y1 - c.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = output;

        output
    }

    /// Clears the recursion memory without changing coefficients.
    pub fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }
}
