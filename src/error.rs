//! Errors for weighted selection.

use crate::weight::Value;

/// Errors returned by weight validation, the samplers, and the selection entry points.
///
/// All of them are terminal for the call that produced them: no partial result is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SampleError {
    /// The weight reporter produced something other than a number.
    #[error("weight must be a number (got {0})")]
    NonNumericWeight(Value),
    /// The weight reporter produced NaN or an infinity.
    #[error("weight must be finite (got {0})")]
    NonFiniteWeight(f64),
    /// The weight reporter produced a number below zero.
    #[error("weight must be >= 0 (got {0})")]
    NegativeWeight(f64),
    /// The requested count was below zero.
    #[error("requested count must be >= 0 (got {0})")]
    NegativeCount(i64),
    /// Not enough candidates to satisfy the request.
    #[error("requested {requested} candidate(s) but only {available} available")]
    InsufficientCandidates { requested: usize, available: usize },
}
