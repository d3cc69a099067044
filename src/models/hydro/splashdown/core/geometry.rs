//! Wetted cross-section and displaced volume versus penetration depth.

use std::f64::consts::PI;

use uom::{
    ConstZero,
    si::{
        f64::{Area, Length, Ratio, Volume},
        ratio::ratio,
    },
};

use super::{ObjectSpec, Shape};

impl ObjectSpec {
    /// Volume of the whole body.
    #[must_use]
    pub fn total_volume(&self) -> Volume {
        let cylinder: Volume = self.full_area() * self.height();
        match self.shape() {
            Shape::Cylinder => cylinder,
            Shape::Cone => cylinder / 3.0,
        }
    }

    /// Cross-section at the widest point (`π r²`).
    #[must_use]
    pub fn full_area(&self) -> Area {
        self.radius() * self.radius() * PI
    }

    /// Wetted cross-sectional area at the waterline for a penetration `depth`.
    ///
    /// Zero for `depth ≤ 0`. Depths beyond the body's height are clamped.
    #[must_use]
    pub fn submerged_area(&self, depth: Length) -> Area {
        let Some(fraction) = self.depth_fraction(depth) else {
            return Area::ZERO;
        };
        match self.shape() {
            Shape::Cylinder => self.full_area(),
            Shape::Cone => self.full_area() * fraction.powi(2),
        }
    }

    /// Volume below the waterline for a penetration `depth`.
    ///
    /// Zero for `depth ≤ 0`. Depths beyond the body's height are clamped.
    #[must_use]
    pub fn submerged_volume(&self, depth: Length) -> Volume {
        let Some(fraction) = self.depth_fraction(depth) else {
            return Volume::ZERO;
        };
        match self.shape() {
            Shape::Cylinder => self.total_volume() * fraction,
            // Similar cones: volume scales with the cube of the immersed height.
            Shape::Cone => self.total_volume() * fraction.powi(3),
        }
    }

    /// Immersed fraction of the height in `(0, 1]`, or `None` if dry.
    fn depth_fraction(&self, depth: Length) -> Option<f64> {
        if depth.is_nan() || depth <= Length::ZERO {
            return None;
        }
        let fraction: Ratio = depth.min(self.height()) / self.height();
        Some(fraction.get::<ratio>())
    }
}
