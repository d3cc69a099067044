use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Force;

/// Errors that can occur while solving the flotation draft.
#[derive(Debug, Error)]
pub enum FlotationError {
    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Smallest force imbalance encountered during iteration.
        residual: Force,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
