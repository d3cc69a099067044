//! Static equilibrium of a body resting in still water.
//!
//! Finds the draft at which buoyancy balances weight by bisection on the
//! penetration depth, using the same wetted-volume geometry as the dynamics.

mod config;
mod error;
mod problem;

pub use config::FlotationConfig;
pub use error::FlotationError;

use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Force, Length},
    force::newton,
    length::meter,
};

use super::{FluidProperties, ObjectSpec};

use problem::{DisplacementModel, DraftProblem};

/// Where a body comes to rest once the motion has died out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Flotation {
    /// Buoyancy balances weight with the lowest point at `draft`.
    Floats { draft: Length },

    /// Full immersion cannot support the body.
    ///
    /// `net_weight` is the weight left over once fully submerged.
    Sinks { net_weight: Force },
}

impl Flotation {
    /// Solves the equilibrium draft of `object` in `fluid`.
    ///
    /// A body whose fully submerged buoyancy does not exceed its weight
    /// sinks, including the neutrally buoyant case.
    ///
    /// # Errors
    ///
    /// Returns [`FlotationError`] if the bisection solver fails or does not
    /// converge within the configured iteration limit.
    pub fn solve(
        object: &ObjectSpec,
        fluid: &FluidProperties,
        config: &FlotationConfig,
    ) -> Result<Self, FlotationError> {
        let weight: Force = object.mass() * fluid.gravity();
        let full_buoyancy: Force =
            fluid.water_density() * fluid.gravity() * object.total_volume();

        if full_buoyancy <= weight {
            return Ok(Self::Sinks {
                net_weight: weight - full_buoyancy,
            });
        }

        let model = DisplacementModel::new(object, fluid);
        let problem = DraftProblem::new(weight);

        let solution = bisection::solve(
            &model,
            &problem,
            [0.0, object.height().get::<meter>()],
            &config.bisection(),
            |_event: &bisection::Event<'_, _, _>| -> Option<bisection::Action> { None },
        )?;

        if solution.status != bisection::Status::Converged {
            return Err(FlotationError::MaxIters {
                residual: Force::new::<newton>(solution.residual),
                iters: solution.iters,
            });
        }

        Ok(Self::Floats {
            draft: solution.snapshot.output.depth,
        })
    }

    /// Returns the draft if the body floats.
    #[must_use]
    pub fn draft(&self) -> Option<Length> {
        match self {
            Self::Floats { draft } => Some(*draft),
            Self::Sinks { .. } => None,
        }
    }
}
