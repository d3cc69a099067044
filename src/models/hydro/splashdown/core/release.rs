use uom::{
    ConstZero,
    si::{
        f64::{Length, Time, Velocity},
        length::meter,
        time::second,
    },
};

/// Initial conditions and reporting window of one drop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    /// Initial position of the lowest point, negative above the surface.
    pub z0: Length,

    /// Initial velocity, positive downward.
    pub v0: Velocity,

    pub start: Time,
    pub end: Time,

    /// Number of evenly spaced evaluation times over `[start, end]`.
    pub points: usize,
}

impl Default for Release {
    /// Dropped from rest 5 m above the water, observed for 8 s at 10⁶ points.
    fn default() -> Self {
        Self {
            z0: Length::new::<meter>(-5.0),
            v0: Velocity::ZERO,
            start: Time::ZERO,
            end: Time::new::<second>(8.0),
            points: 1_000_000,
        }
    }
}

impl Release {
    /// Releases from rest at `z0` with the default window.
    #[must_use]
    pub fn from_rest(z0: Length) -> Self {
        Self {
            z0,
            ..Self::default()
        }
    }

    /// Replaces the reporting window.
    #[must_use]
    pub fn over(self, start: Time, end: Time, points: usize) -> Self {
        Self {
            start,
            end,
            points,
            ..self
        }
    }
}
