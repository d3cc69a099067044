use uom::{
    ConstZero,
    si::{
        f64::{Acceleration, Length, Time, Velocity},
        length::meter,
        time::second,
        velocity::meter_per_second,
    },
};

use crate::support::ode::{Solution, Stats, Status};

use super::ForceModel;

/// State of the body at one evaluation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: Time,

    /// Position of the lowest point, positive below the surface.
    pub z: Length,

    /// Velocity, positive downward.
    pub velocity: Velocity,

    /// Acceleration, positive downward.
    pub acceleration: Acceleration,
}

impl Sample {
    /// Penetration depth below the surface, zero while in air.
    #[must_use]
    pub fn depth(&self) -> Length {
        self.z.max(Length::ZERO)
    }
}

/// Time series produced by one simulation run.
///
/// Samples are in strictly increasing time order. A truncated run holds only
/// the samples reached before integration stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    samples: Vec<Sample>,
    status: Status,
    stats: Stats,
}

impl Trajectory {
    /// Attaches accelerations to the integrator's `(z, v)` output.
    pub(super) fn from_solution(solution: Solution<2>, force: &ForceModel) -> Self {
        let samples = solution
            .points
            .iter()
            .map(|point| {
                let z = Length::new::<meter>(point.y[0]);
                let velocity = Velocity::new::<meter_per_second>(point.y[1]);
                Sample {
                    time: Time::new::<second>(point.t),
                    z,
                    velocity,
                    acceleration: force.acceleration(z, velocity),
                }
            })
            .collect();

        Self {
            samples,
            status: solution.status,
            stats: solution.stats,
        }
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns `true` if integration stopped before the end of the window.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.status.is_truncated()
    }

    #[must_use]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The last sample reached, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }
}

#[cfg(test)]
impl Trajectory {
    /// Builds a completed trajectory directly from samples.
    pub(super) fn from_samples(samples: Vec<Sample>) -> Self {
        Self {
            samples,
            status: Status::Completed,
            stats: Stats::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::acceleration::meter_per_second_squared;

    fn sample(z: f64) -> Sample {
        Sample {
            time: Time::ZERO,
            z: Length::new::<meter>(z),
            velocity: Velocity::ZERO,
            acceleration: Acceleration::new::<meter_per_second_squared>(9.81),
        }
    }

    #[test]
    fn depth_is_zero_in_air() {
        assert_eq!(sample(-2.0).depth(), Length::ZERO);
        assert_eq!(sample(0.0).depth(), Length::ZERO);
        assert_eq!(sample(0.3).depth(), Length::new::<meter>(0.3));
    }
}
