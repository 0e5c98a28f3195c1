//! Test-signal generators.
//!
//! All generators produce a finite sample sequence of the requested length;
//! insertion order is time order. Only the noise-bearing generators are
//! non-deterministic, and then only through the injected [`NoiseSource`].

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::f64::consts::TAU;
use libm::sin;

use crate::noise::NoiseSource;

/// Amplitude of the secondary rotor sinusoid in the composite signal,
/// relative to the base sinusoid.
const ROTOR_AMPLITUDE: f64 = 0.3;

/// Test-signal selector with per-kind parameters.
///
/// Passed explicitly to [`generate`]; there is no global signal state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SignalKind {
    /// White noise, uniform in `[-level, level]`.
    Noise {
        /// Peak amplitude.
        level: f64,
    },
    /// Unit step: 0 before `at_seconds`, 1 at and after it.
    Step {
        /// Step time in seconds.
        at_seconds: f64,
    },
    /// Fixed-frequency sinusoid.
    Sine {
        /// Frequency in Hz.
        frequency_hz: f64,
        /// Peak amplitude.
        amplitude: f64,
    },
    /// Linear frequency sweep.
    Chirp {
        /// Instantaneous frequency at the first sample, Hz.
        start_hz: f64,
        /// Instantaneous frequency at the last sample, Hz.
        end_hz: f64,
        /// Peak amplitude.
        amplitude: f64,
    },
    /// Composite gyro-like signal: base sinusoid + rotor sinusoid at
    /// reduced amplitude + noise.
    Realistic {
        /// Base motion frequency in Hz.
        base_hz: f64,
        /// Rotor disturbance frequency in Hz.
        rotor_hz: f64,
        /// Peak noise amplitude.
        noise_level: f64,
    },
}

/// Generate a signal of `length` samples for the selected kind.
pub fn generate(
    kind: &SignalKind,
    length: usize,
    sample_rate: f64,
    rng: &mut NoiseSource,
) -> Vec<f64> {
    match *kind {
        SignalKind::Noise { level } => white_noise(length, level, rng),
        SignalKind::Step { at_seconds } => step(length, at_seconds, sample_rate),
        SignalKind::Sine {
            frequency_hz,
            amplitude,
        } => sine(length, frequency_hz, amplitude, sample_rate),
        SignalKind::Chirp {
            start_hz,
            end_hz,
            amplitude,
        } => chirp(length, start_hz, end_hz, amplitude, sample_rate),
        SignalKind::Realistic {
            base_hz,
            rotor_hz,
            noise_level,
        } => gyro_like(length, base_hz, rotor_hz, noise_level, sample_rate, rng),
    }
}

/// White noise, uniform in `[-amplitude, amplitude]`.
pub fn white_noise(length: usize, amplitude: f64, rng: &mut NoiseSource) -> Vec<f64> {
    (0..length).map(|_| amplitude * rng.next_sample()).collect()
}

/// Unit step: 0 before `at_seconds`, 1 at and after it.
pub fn step(length: usize, at_seconds: f64, sample_rate: f64) -> Vec<f64> {
    (0..length)
        .map(|i| {
            if i as f64 / sample_rate >= at_seconds {
                1.0
            } else {
                0.0
            }
        })
        .collect()
}

/// Fixed-frequency sinusoid: `amplitude * sin(2π f i / sample_rate)`.
pub fn sine(length: usize, frequency_hz: f64, amplitude: f64, sample_rate: f64) -> Vec<f64> {
    (0..length)
        .map(|i| amplitude * sin(TAU * frequency_hz * i as f64 / sample_rate))
        .collect()
}

/// Linear chirp from `start_hz` to `end_hz` over the buffer duration.
///
/// The phase is accumulated from the instantaneous frequency at every
/// sample rather than resampled from it, so the sweep stays glitch-free
/// and frequency-accurate even at high sweep rates.
pub fn chirp(
    length: usize,
    start_hz: f64,
    end_hz: f64,
    amplitude: f64,
    sample_rate: f64,
) -> Vec<f64> {
    let span = if length > 1 { (length - 1) as f64 } else { 1.0 };
    let mut phase = 0.0;
    (0..length)
        .map(|i| {
            let sample = amplitude * sin(phase);
            let instantaneous = start_hz + (end_hz - start_hz) * (i as f64 / span);
            phase += TAU * instantaneous / sample_rate;
            sample
        })
        .collect()
}

/// Composite gyro-like signal: base sinusoid at unit amplitude, rotor
/// sinusoid at reduced amplitude, plus uniform noise.
pub fn gyro_like(
    length: usize,
    base_hz: f64,
    rotor_hz: f64,
    noise_level: f64,
    sample_rate: f64,
    rng: &mut NoiseSource,
) -> Vec<f64> {
    (0..length)
        .map(|i| {
            let t = i as f64 / sample_rate;
            sin(TAU * base_hz * t)
                + ROTOR_AMPLITUDE * sin(TAU * rotor_hz * t)
                + noise_level * rng.next_sample()
        })
        .collect()
}
