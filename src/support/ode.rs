//! Adaptive explicit Runge–Kutta integration of small ODE systems.
//!
//! [`integrate`] advances an [`OdeSystem`] with the Dormand–Prince 5(4)
//! solver of [`ode_solvers`] and reports the state at caller-chosen
//! evaluation times. Internal steps are sized by local error control and are
//! independent of the reporting grid; a state between accepted steps is
//! reached by restarting the solver from the start of the enclosing step.
//!
//! Evaluation times are pulled lazily from any iterator, so very fine grids
//! (see [`EvaluationGrid`]) never need to be materialised.
//!
//! Integration is always bounded. If the step budget is exhausted, the step
//! size underflows or the solver detects stiffness, the partial [`Solution`]
//! is returned with a [`Status::Truncated`] status rather than an error.
//!
//! # Example
//!
//! ```
//! use splashdown::support::ode::{EvaluationGrid, IntegratorConfig, Status, integrate};
//!
//! // Exponential decay, y' = -y.
//! let decay = |_t: f64, y: &[f64; 1]| [-y[0]];
//!
//! let solution = integrate(
//!     &decay,
//!     (0.0, 1.0),
//!     [1.0],
//!     EvaluationGrid::linspace(0.0, 1.0, 11),
//!     &IntegratorConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(solution.status, Status::Completed);
//! assert_eq!(solution.points.len(), 11);
//! let last = solution.points.last().unwrap();
//! assert!((last.y[0] - (-1.0_f64).exp()).abs() < 1e-5);
//! ```

mod config;
mod error;
mod grid;
mod integrate;
mod solution;

pub use config::IntegratorConfig;
pub use error::OdeError;
pub use grid::EvaluationGrid;
pub use integrate::integrate;
pub use solution::{Point, Solution, Stats, Status, Truncation};

/// A first-order system `y' = f(t, y)` with `N` state variables.
///
/// Implemented for any `Fn(f64, &[f64; N]) -> [f64; N]`.
pub trait OdeSystem<const N: usize> {
    /// Evaluates the time derivative of `y` at time `t`.
    fn derivative(&self, t: f64, y: &[f64; N]) -> [f64; N];
}

impl<F, const N: usize> OdeSystem<N> for F
where
    F: Fn(f64, &[f64; N]) -> [f64; N],
{
    fn derivative(&self, t: f64, y: &[f64; N]) -> [f64; N] {
        self(t, y)
    }
}
