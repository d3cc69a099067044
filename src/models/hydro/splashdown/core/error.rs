use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// An object or fluid description that cannot be simulated.
///
/// Returned at construction time, before any integration starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid mass: {0}")]
    Mass(ConstraintError),

    #[error("invalid radius: {0}")]
    Radius(ConstraintError),

    #[error("invalid height: {0}")]
    Height(ConstraintError),

    #[error("invalid drag coefficient: {0}")]
    DragCoefficient(ConstraintError),

    #[error("invalid reference area: {0}")]
    ReferenceArea(ConstraintError),

    #[error("invalid water density: {0}")]
    WaterDensity(ConstraintError),

    #[error("invalid air density: {0}")]
    AirDensity(ConstraintError),

    #[error("invalid gravitational acceleration: {0}")]
    Gravity(ConstraintError),
}
