//! Scalar impact metrics derived from a trajectory.

use thiserror::Error;
use uom::{
    ConstZero,
    si::{
        f64::{Acceleration, Length, Ratio, Time, Velocity},
        ratio::ratio,
    },
};

use super::{Sample, Trajectory};

/// Errors that can occur while extracting metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MetricsError {
    #[error("trajectory has no samples")]
    EmptyTrajectory,
}

/// Water-entry metrics of one run.
///
/// All values come from the same trajectory, so
/// `depth_at_peak_acceleration ≤ max_depth` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactMetrics {
    /// First instant the lowest point reaches the surface, interpolated
    /// between samples.
    ///
    /// `None` when no air-to-water crossing occurs in the window, including
    /// runs that start at or below the surface.
    pub impact_time: Option<Time>,

    /// Deepest penetration over the whole run.
    pub max_depth: Length,

    /// Penetration at the first sample of largest |a|.
    pub depth_at_peak_acceleration: Length,

    /// Signed acceleration at the first sample of largest |a|.
    ///
    /// Negative during entry, where the body decelerates.
    pub peak_acceleration: Acceleration,

    /// Time of the first sample of largest |a|.
    pub peak_acceleration_time: Time,

    /// Largest downward velocity reached.
    pub peak_speed: Velocity,
}

impl ImpactMetrics {
    /// Extracts metrics from `trajectory`.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::EmptyTrajectory`] if there are no samples.
    pub fn extract(trajectory: &Trajectory) -> Result<Self, MetricsError> {
        let samples = trajectory.samples();
        let first = samples.first().ok_or(MetricsError::EmptyTrajectory)?;

        let impact_time = samples
            .windows(2)
            .find_map(|pair| surface_crossing(&pair[0], &pair[1]));

        let mut max_depth = Length::ZERO;
        let mut peak = first;
        let mut peak_speed = first.velocity;

        for sample in samples {
            max_depth = max_depth.max(sample.depth());
            if sample.acceleration.abs() > peak.acceleration.abs() {
                peak = sample;
            }
            peak_speed = peak_speed.max(sample.velocity);
        }

        Ok(Self {
            impact_time,
            max_depth,
            depth_at_peak_acceleration: peak.depth(),
            peak_acceleration: peak.acceleration,
            peak_acceleration_time: peak.time,
            peak_speed,
        })
    }

    /// Time from surface contact to the acceleration peak.
    #[must_use]
    pub fn impact_duration(&self) -> Option<Time> {
        self.impact_time
            .map(|impact| self.peak_acceleration_time - impact)
    }

    /// Peak acceleration magnitude in multiples of `gravity`.
    #[must_use]
    pub fn peak_load_factor(&self, gravity: Acceleration) -> Ratio {
        self.peak_acceleration.abs() / gravity
    }

    /// Peak speed as a fraction of `terminal` velocity.
    ///
    /// Pair with [`ForceModel::terminal_velocity_in_air`](super::ForceModel::terminal_velocity_in_air)
    /// to see how close the fall came to its terminal regime.
    #[must_use]
    pub fn terminal_velocity_fraction(&self, terminal: Velocity) -> Ratio {
        self.peak_speed / terminal
    }
}

/// Interpolated time at which `z` reaches zero between two samples, if the
/// pair goes from air (`z < 0`) to water (`z ≥ 0`).
fn surface_crossing(before: &Sample, after: &Sample) -> Option<Time> {
    if !(before.z < Length::ZERO && after.z >= Length::ZERO) {
        return None;
    }
    let fraction: Ratio = -before.z / (after.z - before.z);
    Some(before.time + (after.time - before.time) * fraction.get::<ratio>())
}
