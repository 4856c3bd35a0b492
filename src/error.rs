//! Error types for the computation engine.
//!
//! There is no recovery inside the engine: the computation is deterministic,
//! so a retry cannot change the outcome. Every failure bubbles to the caller
//! with enough context to diagnose it.

use std::fmt;

use crate::verify::VerifyFailure;

/// Errors surfaced by [`compute_pi`](crate::compute_pi).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComputeError {
    /// Requested precision is zero or exceeds [`MAX_DIGITS`](crate::MAX_DIGITS).
    InvalidPrecision { digits: u64 },
    /// Allocation failure surfaced from the arbitrary-precision layer.
    OutOfMemory,
    /// The assembled digit string failed a post-computation check. This
    /// indicates an internal bug, not a caller error; it is returned rather
    /// than panicking so the caller can decide what to do.
    VerificationFailed(VerifyFailure),
    /// A splitting worker terminated abnormally; the reduction was abandoned.
    WorkerPanicked,
}

impl fmt::Display for ComputeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPrecision { digits } => {
                write!(f, "requested precision {digits} is outside the supported range")
            }
            Self::OutOfMemory => write!(f, "arbitrary-precision allocation failed"),
            Self::VerificationFailed(failure) => {
                write!(f, "verification of the computed digits failed: {failure}")
            }
            Self::WorkerPanicked => write!(f, "a splitting worker terminated abnormally"),
        }
    }
}

impl std::error::Error for ComputeError {}

impl From<VerifyFailure> for ComputeError {
    fn from(failure: VerifyFailure) -> Self {
        Self::VerificationFailed(failure)
    }
}
