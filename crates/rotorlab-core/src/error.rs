//! Error types for filter construction.
//!
//! Validation happens once, when coefficients or filter state are built.
//! The per-sample processing path never branches on errors; anything that
//! would make a filter unstable or meaningless is rejected up front.

/// Errors reported while designing coefficients or constructing filters.
///
/// None of these are recoverable internally; they are surfaced to the caller
/// as a distinguishable value and the filter is simply not built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    /// A design parameter is outside its valid range (non-positive sample
    /// rate, cutoff at or above Nyquist, non-positive Q, empty signal).
    InvalidParameter(&'static str),
    /// A derived quantity divides by zero (notch Q when the center frequency
    /// equals the bandwidth parameter).
    DivisionByZero(&'static str),
    /// A designed coefficient or gain came out non-finite (NaN or infinity).
    NumericInstability(&'static str),
}

impl core::fmt::Display for FilterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidParameter(what) => write!(f, "invalid parameter: {what}"),
            Self::DivisionByZero(what) => write!(f, "division by zero: {what}"),
            Self::NumericInstability(what) => write!(f, "numeric instability: {what}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FilterError {}
