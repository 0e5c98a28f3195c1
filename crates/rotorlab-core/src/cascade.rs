//! One-pole cascade low-pass filters (PT1, PT2, PT3).
//!
//! A single-pole exponential smoother cascaded 1, 2, or 3 times to
//! approximate higher-order roll-off while keeping a single real gain:
//!
//! ```text
//! state[i] += (prev - state[i]) * gain
//! ```
//!
//! where `prev` is the input for the first stage and the previous stage's
//! output afterwards. Cascading moves the −3 dB point below the nominal
//! cutoff, so the cutoff is pre-multiplied by an order-dependent correction
//! constant before the gain is derived.

use core::f64::consts::TAU;

use crate::error::FilterError;

/// Cascade length with its cutoff-correction constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeOrder {
    /// Single pole (PT1), 6 dB/octave.
    First,
    /// Two cascaded poles (PT2), 12 dB/octave.
    Second,
    /// Three cascaded poles (PT3), 18 dB/octave.
    Third,
}

impl CascadeOrder {
    /// Number of chained smoothing stages.
    pub fn stages(self) -> usize {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }

    /// Cutoff-correction constant keeping the −3 dB point at the nominal
    /// cutoff after cascading.
    pub fn correction(self) -> f64 {
        match self {
            Self::First => 1.0,
            Self::Second => 1.553773974,
            Self::Third => 1.961459177,
        }
    }
}

/// One-pole cascade filter with order-corrected gain.
///
/// The gain is derived once at construction:
///
/// ```text
/// gain = (cutoff * k) / (cutoff * k + sample_rate / 2π)
/// ```
///
/// clamped to at most 1. Arbitrarily large (finite) cutoffs are accepted;
/// the clamp keeps the recursion stable. The recursion memory is owned
/// exclusively by this instance and is only cleared wholesale by
/// [`CascadeFilter::reset`].
#[derive(Debug, Clone)]
pub struct CascadeFilter {
    gain: f64,
    state: [f64; 3],
    order: CascadeOrder,
}

impl CascadeFilter {
    /// Create a cascade filter.
    ///
    /// # Arguments
    ///
    /// * `cutoff_hz` - Nominal −3 dB cutoff in Hz, `> 0` (no Nyquist bound;
    ///   the gain saturates at 1 instead)
    /// * `sample_rate` - Sample rate in Hz, `> 0`
    /// * `order` - Cascade length
    ///
    /// # Errors
    ///
    /// [`FilterError::InvalidParameter`] for non-positive cutoff or sample
    /// rate; [`FilterError::NumericInstability`] if the derived gain is not
    /// finite.
    pub fn new(
        cutoff_hz: f64,
        sample_rate: f64,
        order: CascadeOrder,
    ) -> Result<Self, FilterError> {
        if !(sample_rate > 0.0) {
            return Err(FilterError::InvalidParameter("sample rate must be positive"));
        }
        if !(cutoff_hz > 0.0) {
            return Err(FilterError::InvalidParameter("cutoff must be positive"));
        }

        let corrected = cutoff_hz * order.correction();
        let gain = corrected / (corrected + sample_rate / TAU);
        if !gain.is_finite() {
            return Err(FilterError::NumericInstability("cascade gain is not finite"));
        }

        Ok(Self {
            gain: if gain > 1.0 { 1.0 } else { gain },
            state: [0.0; 3],
            order,
        })
    }

    /// The per-stage smoothing gain in (0, 1].
    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// The cascade order this filter was built with.
    pub fn order(&self) -> CascadeOrder {
        self.order
    }

    /// Process one sample, updating every stage in chain order.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        let mut prev = input;
        for state in self.state.iter_mut().take(self.order.stages()) {
            *state += (prev - *state) * self.gain;
            prev = *state;
        }
        prev
    }

    /// Clear all stage memory to zero.
    pub fn reset(&mut self) {
        self.state = [0.0; 3];
    }
}
