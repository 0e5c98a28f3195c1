//! Rotorlab Core - filter design primitives for gyro signal tuning
//!
//! This crate provides the numeric core of the rotorlab filter engine:
//! coefficient design for biquad low-pass and notch sections, one-pole
//! cascade (PT1/PT2/PT3) smoothing filters, and a sequential filter
//! pipeline that applies an ordered list of stages to a sample stream.
//!
//! # Core Abstractions
//!
//! ## Coefficient Design
//!
//! - [`BiquadCoefficients`] - Immutable, normalized five-coefficient set
//!   produced by the designer ([`BiquadCoefficients::lowpass`],
//!   [`BiquadCoefficients::notch`])
//! - [`bessel4_lowpass`] - Four-pole Bessel decimation filter as two
//!   cascaded biquad stages
//! - Fixed low-pass Q flavors: [`BUTTERWORTH_Q`], [`BESSEL_Q`], [`DAMPED_Q`]
//!
//! ## Filters
//!
//! - [`Biquad`] - Second-order IIR section (Direct Form I) holding its own
//!   recursion memory
//! - [`CascadeFilter`] - One-pole exponential smoothing cascaded 1, 2, or 3
//!   times with order-dependent cutoff correction
//!
//! ## Composition
//!
//! - [`StageConfig`] - Closed stage descriptor enum (PT1/PT2/PT3 and the
//!   biquad flavors); no string dispatch, no fallback branches
//! - [`Pipeline`] - Instantiates one fresh filter per stage and applies them
//!   strictly in order, sample by sample
//!
//! # Error Handling
//!
//! All parameter validation happens when a filter is constructed, never in
//! the per-sample path. Invalid cutoffs (including cutoff at or above
//! Nyquist), non-positive Q, and non-finite designed coefficients are
//! reported as [`FilterError`] values at construction time.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded flight-controller use.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rotorlab-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use rotorlab_core::{Pipeline, StageConfig};
//!
//! let config = [
//!     StageConfig::Pt1 { cutoff_hz: 100.0 },
//!     StageConfig::Notch { center_hz: 220.0, q: 5.0 },
//! ];
//! let mut pipeline = Pipeline::new(&config, 4000.0).unwrap();
//! let filtered = pipeline.run(&[0.0, 1.0, 1.0, 1.0]).unwrap();
//! assert_eq!(filtered.len(), 4);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod biquad;
pub mod cascade;
pub mod error;
pub mod notch;
pub mod pipeline;

// Re-export main types at crate root
pub use biquad::{
    BESSEL_Q, BUTTERWORTH_Q, Biquad, BiquadCoefficients, DAMPED_Q, bessel4_lowpass,
};
pub use cascade::{CascadeFilter, CascadeOrder};
pub use error::FilterError;
pub use notch::{notch_q, rpm_notch_center};
pub use pipeline::{Pipeline, StageConfig, StageFilter, TimeSeries};
