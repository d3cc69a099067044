use crate::support::constraint::StrictlyPositive;

use super::OdeError;

/// Step-size control settings for [`integrate`](super::integrate).
///
/// These map directly onto the parameters of the underlying
/// [`ode_solvers::Dopri5`] solver.
#[derive(Debug, Clone, Copy)]
pub struct IntegratorConfig {
    /// Relative error tolerance per step.
    pub rel_tol: f64,

    /// Absolute error tolerance per step.
    pub abs_tol: f64,

    /// Maximum number of steps before integration is cut short.
    pub max_steps: u32,

    /// Largest internal step allowed.
    pub max_step: f64,

    /// Size of the first step, or `None` to choose it automatically.
    pub first_step: Option<f64>,

    /// Number of steps after which the solver starts testing for stiffness.
    pub stiffness_test_after: u32,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            rel_tol: 1e-6,
            abs_tol: 1e-9,
            max_steps: 500_000,
            max_step: f64::INFINITY,
            first_step: None,
            stiffness_test_after: 1000,
        }
    }
}

impl IntegratorConfig {
    /// Checks the settings before any step is taken.
    pub(super) fn validate(&self) -> Result<(), OdeError> {
        StrictlyPositive::new(self.rel_tol).map_err(OdeError::RelTol)?;
        StrictlyPositive::new(self.abs_tol).map_err(OdeError::AbsTol)?;
        StrictlyPositive::new(self.max_step).map_err(OdeError::MaxStep)?;
        if let Some(first_step) = self.first_step {
            StrictlyPositive::new(first_step).map_err(OdeError::FirstStep)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn default_is_valid() {
        assert!(IntegratorConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_tolerances() {
        let config = IntegratorConfig {
            rel_tol: 0.0,
            ..IntegratorConfig::default()
        };
        assert_eq!(config.validate(), Err(OdeError::RelTol(ConstraintError::Zero)));

        // A zero absolute tolerance divides by zero on vanishing components.
        let config = IntegratorConfig {
            abs_tol: 0.0,
            ..IntegratorConfig::default()
        };
        assert_eq!(config.validate(), Err(OdeError::AbsTol(ConstraintError::Zero)));

        let config = IntegratorConfig {
            first_step: Some(f64::NAN),
            ..IntegratorConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(OdeError::FirstStep(ConstraintError::NotANumber))
        );

        let config = IntegratorConfig {
            max_step: -1.0,
            ..IntegratorConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(OdeError::MaxStep(ConstraintError::Negative))
        );
    }
}
