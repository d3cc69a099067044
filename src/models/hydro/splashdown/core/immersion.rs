use uom::{
    ConstZero,
    si::f64::{Length, Ratio},
};

use crate::support::constraint::{Constrained, UnitInterval};

use super::ObjectSpec;

/// How the transition from air to water is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImmersionMode {
    /// Drag, wetted area and buoyancy grow with the immersed depth.
    #[default]
    Progressive,
    /// The body counts as fully wetted as soon as it touches the surface.
    Instant,
}

/// Immersion state of a body as a function of its position `z`.
///
/// `z` is the position of the body's lowest point, positive below the
/// surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImmersionProfile {
    mode: ImmersionMode,
    extent: Length,
}

impl ImmersionProfile {
    /// Builds the profile for `object`, ramping over its full height.
    #[must_use]
    pub fn new(mode: ImmersionMode, object: &ObjectSpec) -> Self {
        Self {
            mode,
            extent: object.height(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> ImmersionMode {
        self.mode
    }

    /// Fraction of the drag taken from the water regime.
    ///
    /// Zero in air, one once the body is wetted over its whole extent
    /// (or, in [`ImmersionMode::Instant`], as soon as `z ≥ 0`).
    #[must_use]
    pub fn drag_blend(&self, z: Length) -> Constrained<Ratio, UnitInterval> {
        match self.mode {
            ImmersionMode::Instant if z >= Length::ZERO => UnitInterval::one(),
            ImmersionMode::Instant => UnitInterval::zero(),
            ImmersionMode::Progressive => {
                let fraction: Ratio = z / self.extent;
                UnitInterval::clamp(fraction)
            }
        }
    }

    /// Depth passed to the geometry when computing buoyancy and wetted area.
    ///
    /// Instant immersion reports the full extent as soon as the body touches.
    #[must_use]
    pub fn wetted_depth(&self, z: Length) -> Length {
        match self.mode {
            ImmersionMode::Instant if z >= Length::ZERO => self.extent,
            ImmersionMode::Instant => Length::ZERO,
            ImmersionMode::Progressive if z > Length::ZERO => z,
            ImmersionMode::Progressive => Length::ZERO,
        }
    }
}
