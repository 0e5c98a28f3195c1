//! Sequential filter pipeline.
//!
//! A pipeline is built from an ordered list of [`StageConfig`] descriptors.
//! Construction instantiates one fresh, exclusively-owned filter per stage;
//! running feeds every input sample through all stages in declared order,
//! each stage consuming the previous stage's output. One output sample per
//! input sample, O(1) extra memory per stage.
//!
//! Stage types form a closed enum. There is no string dispatch and no
//! default branch that could silently swallow an unknown type.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::biquad::{
    BESSEL4_FREQ_A, BESSEL4_FREQ_B, BESSEL4_Q_A, BESSEL4_Q_B, BESSEL_Q, BUTTERWORTH_Q, Biquad,
    BiquadCoefficients, DAMPED_Q,
};
use crate::cascade::{CascadeFilter, CascadeOrder};
use crate::error::FilterError;

/// Descriptor for one pipeline stage.
///
/// Plain data: building the actual filter (and validating its parameters)
/// happens in [`Pipeline::new`] or [`StageConfig::build`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StageConfig {
    /// Single one-pole smoother.
    Pt1 {
        /// Nominal −3 dB cutoff in Hz.
        cutoff_hz: f64,
    },
    /// Two cascaded one-pole smoothers with cutoff correction.
    Pt2 {
        /// Nominal −3 dB cutoff in Hz.
        cutoff_hz: f64,
    },
    /// Three cascaded one-pole smoothers with cutoff correction.
    Pt3 {
        /// Nominal −3 dB cutoff in Hz.
        cutoff_hz: f64,
    },
    /// Biquad low-pass, Butterworth flavor (fixed Q).
    Butterworth {
        /// Cutoff frequency in Hz.
        cutoff_hz: f64,
    },
    /// Biquad low-pass, two-pole Bessel flavor (fixed Q).
    Bessel {
        /// Cutoff frequency in Hz.
        cutoff_hz: f64,
    },
    /// Biquad low-pass, critically damped flavor (fixed Q).
    Damped {
        /// Cutoff frequency in Hz.
        cutoff_hz: f64,
    },
    /// Biquad low-pass with caller-supplied Q.
    Lowpass {
        /// Cutoff frequency in Hz.
        cutoff_hz: f64,
        /// Quality factor.
        q: f64,
    },
    /// Biquad notch.
    Notch {
        /// Center frequency in Hz.
        center_hz: f64,
        /// Quality factor.
        q: f64,
    },
}

impl StageConfig {
    /// The two stages of the four-pole Bessel decimation filter, expressed
    /// as generic low-pass descriptors with the fixed Bessel constants.
    pub fn bessel4_stages(cutoff_hz: f64) -> [StageConfig; 2] {
        [
            StageConfig::Lowpass {
                cutoff_hz: cutoff_hz * BESSEL4_FREQ_A,
                q: BESSEL4_Q_A,
            },
            StageConfig::Lowpass {
                cutoff_hz: cutoff_hz * BESSEL4_FREQ_B,
                q: BESSEL4_Q_B,
            },
        ]
    }

    /// Instantiate the stateful filter this descriptor describes.
    ///
    /// # Errors
    ///
    /// Propagates the designer's validation errors; see
    /// [`BiquadCoefficients::lowpass`] and [`CascadeFilter::new`].
    pub fn build(&self, sample_rate: f64) -> Result<StageFilter, FilterError> {
        let filter = match *self {
            Self::Pt1 { cutoff_hz } => StageFilter::Cascade(CascadeFilter::new(
                cutoff_hz,
                sample_rate,
                CascadeOrder::First,
            )?),
            Self::Pt2 { cutoff_hz } => StageFilter::Cascade(CascadeFilter::new(
                cutoff_hz,
                sample_rate,
                CascadeOrder::Second,
            )?),
            Self::Pt3 { cutoff_hz } => StageFilter::Cascade(CascadeFilter::new(
                cutoff_hz,
                sample_rate,
                CascadeOrder::Third,
            )?),
            Self::Butterworth { cutoff_hz } => StageFilter::Biquad(Biquad::new(
                BiquadCoefficients::lowpass(cutoff_hz, BUTTERWORTH_Q, sample_rate)?,
            )),
            Self::Bessel { cutoff_hz } => StageFilter::Biquad(Biquad::new(
                BiquadCoefficients::lowpass(cutoff_hz, BESSEL_Q, sample_rate)?,
            )),
            Self::Damped { cutoff_hz } => StageFilter::Biquad(Biquad::new(
                BiquadCoefficients::lowpass(cutoff_hz, DAMPED_Q, sample_rate)?,
            )),
            Self::Lowpass { cutoff_hz, q } => StageFilter::Biquad(Biquad::new(
                BiquadCoefficients::lowpass(cutoff_hz, q, sample_rate)?,
            )),
            Self::Notch { center_hz, q } => StageFilter::Biquad(Biquad::new(
                BiquadCoefficients::notch(center_hz, q, sample_rate)?,
            )),
        };
        Ok(filter)
    }
}

/// A built pipeline stage: one exclusively-owned stateful filter.
#[derive(Debug, Clone)]
pub enum StageFilter {
    /// Biquad section (low-pass flavors and notch).
    Biquad(Biquad),
    /// One-pole cascade (PT1/PT2/PT3).
    Cascade(CascadeFilter),
}

impl StageFilter {
    /// Process one sample through this stage.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        match self {
            Self::Biquad(filter) => filter.process(input),
            Self::Cascade(filter) => filter.process(input),
        }
    }

    /// Clear this stage's recursion memory.
    pub fn reset(&mut self) {
        match self {
            Self::Biquad(filter) => filter.reset(),
            Self::Cascade(filter) => filter.reset(),
        }
    }
}

/// Time-aligned input/output pair produced by one pipeline run.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    /// Sample times in seconds.
    pub time: Vec<f64>,
    /// The unfiltered input sequence.
    pub input: Vec<f64>,
    /// The filtered output sequence, index-aligned with `input`.
    pub output: Vec<f64>,
}

/// Ordered chain of stateful filter stages.
pub struct Pipeline {
    stages: Vec<StageFilter>,
    sample_rate: f64,
}

impl Pipeline {
    /// Build a pipeline, instantiating one fresh filter per descriptor.
    ///
    /// Parameter validation for every stage happens here; the per-sample
    /// path does not branch on errors.
    ///
    /// # Errors
    ///
    /// The first stage whose parameters fail validation aborts construction.
    pub fn new(config: &[StageConfig], sample_rate: f64) -> Result<Self, FilterError> {
        let mut stages = Vec::with_capacity(config.len());
        for stage in config {
            stages.push(stage.build(sample_rate)?);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("pipeline: {} stages at {sample_rate} Hz", stages.len());

        Ok(Self {
            stages,
            sample_rate,
        })
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// True when the pipeline has no stages (a passthrough).
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Sample rate the stages were designed for.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Feed one sample through all stages in order.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        let mut sample = input;
        for stage in &mut self.stages {
            sample = stage.process(sample);
        }
        sample
    }

    /// Apply the pipeline to a whole signal, one output per input sample.
    ///
    /// # Errors
    ///
    /// [`FilterError::InvalidParameter`] for an empty input buffer.
    pub fn run(&mut self, input: &[f64]) -> Result<Vec<f64>, FilterError> {
        if input.is_empty() {
            return Err(FilterError::InvalidParameter(
                "input signal must not be empty",
            ));
        }
        Ok(input.iter().map(|&x| self.process(x)).collect())
    }

    /// Apply the pipeline and return the time-aligned input/output pair the
    /// rendering layer consumes.
    ///
    /// # Errors
    ///
    /// [`FilterError::InvalidParameter`] for an empty input buffer.
    pub fn run_with_time(&mut self, input: &[f64]) -> Result<TimeSeries, FilterError> {
        let output = self.run(input)?;
        let time = (0..input.len())
            .map(|i| i as f64 / self.sample_rate)
            .collect();
        Ok(TimeSeries {
            time,
            input: input.to_vec(),
            output,
        })
    }

    /// Clear every stage's recursion memory.
    pub fn reset(&mut self) {
        for stage in &mut self.stages {
            stage.reset();
        }
    }
}
