//! Rotorlab Analysis - frequency-response and spectral analysis
//!
//! Analysis tools for the rotorlab filter engine:
//!
//! - [`response`] - Analytic frequency-response evaluation on the unit
//!   circle: magnitude (dB) and phase (degrees) curves per filter stage,
//!   with cascade composition by summation in the log/phase domain
//! - [`spectrum`] - DFT magnitude spectrum and local-maximum peak detection
//! - [`dynamic`] - Dynamic notch placement from detected spectral peaks
//!
//! ## Example Workflow
//!
//! ```rust
//! use rotorlab_analysis::{pipeline_response, spectrum};
//! use rotorlab_core::StageConfig;
//!
//! let stages = [
//!     StageConfig::Pt2 { cutoff_hz: 100.0 },
//!     StageConfig::Notch { center_hz: 180.0, q: 5.0 },
//! ];
//!
//! // Response curve of the whole chain (no signal required).
//! let curve = pipeline_response(&stages, 4000.0).unwrap();
//! assert!(curve.magnitude_db[0].abs() < 0.1); // ~0 dB near DC
//!
//! // Spectrum of a measured signal, peaks feeding notch placement.
//! let signal: Vec<f64> = (0..1000)
//!     .map(|i| (2.0 * std::f64::consts::PI * 180.0 * i as f64 / 4000.0).sin())
//!     .collect();
//! let spec = spectrum(&signal, 4000.0).unwrap();
//! let peaks = spec.detect_peaks(100.0, 300.0, 1);
//! assert!((peaks[0].frequency_hz - 180.0).abs() <= 4.0);
//! ```

pub mod dynamic;
pub mod error;
pub mod response;
pub mod spectrum;

// Re-export main types
pub use dynamic::dynamic_notch_stages;
pub use error::AnalysisError;
pub use response::{ResponseCurve, SWEEP_POINTS, pipeline_response, response_at, stage_response};
pub use spectrum::{SpectralPeak, Spectrum, spectrum};
