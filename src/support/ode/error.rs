use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Invalid inputs to [`integrate`](super::integrate).
///
/// Numerical difficulty during stepping is not an error; it is reported
/// through [`Status::Truncated`](super::Status::Truncated).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OdeError {
    #[error("invalid relative tolerance: {0}")]
    RelTol(ConstraintError),

    #[error("invalid absolute tolerance: {0}")]
    AbsTol(ConstraintError),

    #[error("invalid maximum step: {0}")]
    MaxStep(ConstraintError),

    #[error("invalid first step: {0}")]
    FirstStep(ConstraintError),

    #[error("time span must be finite")]
    NonFiniteSpan,

    #[error("time span must have a positive duration: {0}")]
    Span(ConstraintError),

    #[error("initial state is not finite")]
    NonFiniteInitialState,

    /// An evaluation time fell outside the integration span.
    #[error("evaluation time {time} lies outside [{start}, {end}]")]
    EvaluationTimeOutOfSpan { time: f64, start: f64, end: f64 },

    /// Evaluation times were not strictly increasing.
    #[error("evaluation times must be strictly increasing: {time} follows {previous}")]
    UnorderedEvaluationTimes { previous: f64, time: f64 },
}
