use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Force, Length},
    force::newton,
    length::meter,
};

/// Solver configuration for the flotation draft.
#[derive(Debug, Clone, Copy)]
pub struct FlotationConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the draft.
    pub depth_tol: Length,

    /// Absolute tolerance on the force residual (buoyancy - weight).
    pub force_tol: Force,
}

impl Default for FlotationConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            depth_tol: Length::new::<meter>(1e-12),
            force_tol: Force::new::<newton>(1e-9),
        }
    }
}

impl FlotationConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.depth_tol.get::<meter>(),
            x_rel_tol: 0.0,
            residual_tol: self.force_tol.get::<newton>(),
        }
    }
}
