/// A reported state at one evaluation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<const N: usize> {
    pub t: f64,
    pub y: [f64; N],
}

/// The states reported by one [`integrate`](super::integrate) call.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<const N: usize> {
    /// Reported states, in evaluation-time order.
    ///
    /// When the run is truncated this holds only the times reached.
    pub points: Vec<Point<N>>,

    /// Whether the whole span was covered.
    pub status: Status,

    /// Step counters.
    pub stats: Stats,
}

/// How an integration run ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Status {
    /// The end of the span was reached.
    Completed,
    /// Stepping stopped early; the points cover `[start, t]` only.
    Truncated(Truncation),
}

impl Status {
    /// Returns `true` if the run stopped before the end of the span.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated(_))
    }
}

/// Reason an integration run stopped early.
///
/// `t` is the time of the last accepted step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Truncation {
    /// The step budget was exhausted.
    StepLimit { t: f64 },
    /// The step size needed to meet the tolerance fell below what `t` can resolve.
    StepSizeUnderflow { t: f64 },
    /// The solver detected stiffness and gave up.
    Stiffness { t: f64 },
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Accepted steps of the main pass.
    pub accepted: usize,
    /// Right-hand side evaluations, including those spent on evaluation times.
    pub evaluations: usize,
}
