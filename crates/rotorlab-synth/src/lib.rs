//! Rotorlab Synth - synthetic test signals for filter evaluation
//!
//! Canonical test sequences the tuning UI feeds through a filter pipeline:
//!
//! - [`white_noise`] - Uniform noise in `[-amplitude, amplitude]`
//! - [`step`] - Unit step at a configured time
//! - [`sine`] - Fixed-frequency sinusoid
//! - [`chirp`] - Linear frequency sweep with integrated phase
//! - [`gyro_like`] - Composite "realistic" gyro signal (base sinusoid +
//!   rotor sinusoid at reduced amplitude + noise)
//!
//! The signal kind is always passed explicitly (see [`SignalKind`] and
//! [`generate`]); there is no process-wide "current signal" selector.
//!
//! Randomness comes from an injected [`NoiseSource`] so time-domain tests
//! are reproducible. Only the statistical shape of the noise (bounded
//! amplitude, near-zero mean) is a contract; exact values are not.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod noise;
pub mod signal;

pub use noise::NoiseSource;
pub use signal::{SignalKind, chirp, generate, gyro_like, sine, step, white_noise};
