//! Vertical water entry of a rigid axisymmetric body.
//!
//! The body falls along its axis through air into still water. Its state is
//! the position `z` of its lowest point, measured downward from the free
//! surface, and its velocity `v`, positive downward. Weight, Archimedes
//! buoyancy and quadratic drag act on it; the drag coefficient blends from
//! the air to the water regime as the body goes in (see [`ImmersionMode`]).
//!
//! [`simulate`] integrates the motion and returns a [`Trajectory`], from which
//! [`ImpactMetrics`] are extracted. [`Flotation`] gives the static resting
//! state in still water.

mod error;
mod flotation;
mod fluid;
mod force;
mod geometry;
mod immersion;
mod metrics;
mod object;
mod release;
mod trajectory;

pub use error::ConfigError;
pub use flotation::{Flotation, FlotationConfig, FlotationError};
pub use fluid::FluidProperties;
pub use force::ForceModel;
pub use immersion::{ImmersionMode, ImmersionProfile};
pub use metrics::{ImpactMetrics, MetricsError};
pub use object::{ObjectSpec, Shape};
pub use release::Release;
pub use trajectory::{Sample, Trajectory};

use uom::si::{
    f64::{Length, Time, Velocity},
    length::meter,
    time::second,
    velocity::meter_per_second,
};

use crate::support::ode::{EvaluationGrid, IntegratorConfig, OdeError, integrate};

/// Integrates the fall described by `release` under `force`.
///
/// Samples are reported at `release.points` evenly spaced times over the
/// release window. If the integrator runs out of steps the trajectory is
/// returned truncated rather than as an error.
///
/// # Errors
///
/// Returns an [`OdeError`] if the integrator configuration, window or initial
/// state are invalid.
pub fn simulate(
    force: &ForceModel,
    release: &Release,
    config: &IntegratorConfig,
) -> Result<Trajectory, OdeError> {
    let grid = EvaluationGrid::linspace(
        release.start.get::<second>(),
        release.end.get::<second>(),
        release.points,
    )
    .map(Time::new::<second>);

    simulate_at(
        force,
        (release.z0, release.v0),
        (release.start, release.end),
        grid,
        config,
    )
}

/// Integrates a fall from `(z0, v0)` over `span`, sampling at `times`.
///
/// `times` may be any strictly increasing sequence inside `span`, such as a
/// grid refined around the expected impact. It is consumed lazily.
///
/// # Errors
///
/// Returns an [`OdeError`] if the integrator configuration, span or initial
/// state are invalid, or if `times` leaves the span or is not strictly
/// increasing.
pub fn simulate_at<I>(
    force: &ForceModel,
    (z0, v0): (Length, Velocity),
    span: (Time, Time),
    times: I,
    config: &IntegratorConfig,
) -> Result<Trajectory, OdeError>
where
    I: IntoIterator<Item = Time>,
{
    let span = (span.0.get::<second>(), span.1.get::<second>());
    let y0 = [z0.get::<meter>(), v0.get::<meter_per_second>()];

    let system = |_t: f64, y: &[f64; 2]| force.derivative(y);
    let times = times.into_iter().map(|t| t.get::<second>());
    let solution = integrate(&system, span, y0, times, config)?;

    let trajectory = Trajectory::from_solution(solution, force);
    log::debug!(
        "{} ({}, {:?}): {} samples",
        force.object().name(),
        force.object().shape(),
        force.immersion().mode(),
        trajectory.len()
    );

    Ok(trajectory)
}
