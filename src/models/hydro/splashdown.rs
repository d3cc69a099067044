//! Water-entry (splashdown) model.
//!
//! [`Splashdown`] is a [`twine_core::Model`] that drops a rigid cylinder or
//! apex-down cone into still water and reports its trajectory, the impact
//! metrics of the entry and whether it ends up floating.
//!
//! # Example
//!
//! ```
//! use splashdown::models::hydro::splashdown::{
//!     FluidProperties, ImmersionMode, Release, Splashdown, presets,
//! };
//! use twine_core::Model;
//! use uom::si::{f64::{Length, Time}, length::meter, time::second};
//!
//! let model = Splashdown::new(
//!     presets::ech_4(),
//!     FluidProperties::default(),
//!     ImmersionMode::Progressive,
//! );
//!
//! let release = Release::from_rest(Length::new::<meter>(-5.0))
//!     .over(Time::new::<second>(0.0), Time::new::<second>(3.0), 3001);
//! let results = model.call(&release).unwrap();
//!
//! assert!(results.metrics.impact_time.is_some());
//! assert!(results.metrics.max_depth > Length::new::<meter>(0.0));
//! ```

mod core;
pub mod presets;

pub use self::core::{
    ConfigError, Flotation, FlotationConfig, FlotationError, FluidProperties, ForceModel,
    ImmersionMode, ImmersionProfile, ImpactMetrics, MetricsError, ObjectSpec, Release, Sample,
    Shape, Trajectory, simulate, simulate_at,
};

use thiserror::Error;
use twine_core::Model;
use uom::si::f64::{Length, Time, Velocity};

use crate::support::ode::{IntegratorConfig, OdeError};

/// Drop simulation of a single body in a given fluid.
#[derive(Debug, Clone)]
pub struct Splashdown {
    force: ForceModel,
    integrator: IntegratorConfig,
    flotation: FlotationConfig,
}

/// Everything computed for one release.
#[derive(Debug, Clone, PartialEq)]
pub struct SplashdownResults {
    pub trajectory: Trajectory,
    pub metrics: ImpactMetrics,
    pub flotation: Flotation,
}

/// Errors that can occur while running a [`Splashdown`].
#[derive(Debug, Error)]
pub enum SplashdownError {
    #[error("integration failed")]
    Ode(#[from] OdeError),

    #[error("metric extraction failed")]
    Metrics(#[from] MetricsError),

    #[error("flotation solve failed")]
    Flotation(#[from] FlotationError),
}

impl Splashdown {
    /// Creates a model with default integrator and flotation settings.
    #[must_use]
    pub fn new(object: ObjectSpec, fluid: FluidProperties, mode: ImmersionMode) -> Self {
        Self {
            force: ForceModel::new(object, fluid, mode),
            integrator: IntegratorConfig::default(),
            flotation: FlotationConfig::default(),
        }
    }

    #[must_use]
    pub fn with_integrator(self, integrator: IntegratorConfig) -> Self {
        Self { integrator, ..self }
    }

    #[must_use]
    pub fn with_flotation(self, flotation: FlotationConfig) -> Self {
        Self { flotation, ..self }
    }

    #[must_use]
    pub fn force(&self) -> &ForceModel {
        &self.force
    }

    /// Runs a release from `(z0, v0)` sampled at caller-chosen `times`.
    ///
    /// Use this instead of [`Model::call`] when the evenly spaced grid of a
    /// [`Release`] is not wanted, e.g. to refine sampling around impact.
    ///
    /// # Errors
    ///
    /// Returns a [`SplashdownError`] under the same conditions as
    /// [`Model::call`], and if `times` leaves `span` or is not strictly
    /// increasing.
    pub fn call_at<I>(
        &self,
        initial: (Length, Velocity),
        span: (Time, Time),
        times: I,
    ) -> Result<SplashdownResults, SplashdownError>
    where
        I: IntoIterator<Item = Time>,
    {
        let trajectory = simulate_at(&self.force, initial, span, times, &self.integrator)?;
        self.analyze(trajectory)
    }

    fn analyze(&self, trajectory: Trajectory) -> Result<SplashdownResults, SplashdownError> {
        let metrics = ImpactMetrics::extract(&trajectory)?;
        let flotation =
            Flotation::solve(self.force.object(), self.force.fluid(), &self.flotation)?;

        Ok(SplashdownResults {
            trajectory,
            metrics,
            flotation,
        })
    }
}

impl Model for Splashdown {
    type Input = Release;
    type Output = SplashdownResults;
    type Error = SplashdownError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let trajectory = simulate(&self.force, input, &self.integrator)?;
        self.analyze(trajectory)
    }
}
