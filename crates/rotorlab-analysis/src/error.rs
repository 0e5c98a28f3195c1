//! Analysis-layer errors.

use rotorlab_core::FilterError;
use thiserror::Error;

/// Errors reported by the response and spectrum analyzers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// A stage failed filter-level validation.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Two response curves were combined over different frequency grids.
    #[error("response curves span different frequency grids")]
    GridMismatch,

    /// The signal buffer handed to the analyzer was empty.
    #[error("signal buffer is empty")]
    EmptySignal,
}
