use uom::si::{
    acceleration::meter_per_second_squared,
    area::square_meter,
    f64::{Acceleration, Force, Length, Velocity},
    length::meter,
    mass::kilogram,
    mass_density::kilogram_per_cubic_meter,
    ratio::ratio,
    velocity::meter_per_second,
};

use super::{FluidProperties, ImmersionMode, ImmersionProfile, ObjectSpec};

/// Net vertical force on a falling body.
///
/// Positions and velocities are positive downward, with `z` locating the
/// body's lowest point relative to the surface. The resulting acceleration
/// is a pure function of `(z, v)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForceModel {
    object: ObjectSpec,
    fluid: FluidProperties,
    immersion: ImmersionProfile,
}

impl ForceModel {
    #[must_use]
    pub fn new(object: ObjectSpec, fluid: FluidProperties, mode: ImmersionMode) -> Self {
        let immersion = ImmersionProfile::new(mode, &object);
        Self {
            object,
            fluid,
            immersion,
        }
    }

    #[must_use]
    pub fn object(&self) -> &ObjectSpec {
        &self.object
    }

    #[must_use]
    pub fn fluid(&self) -> &FluidProperties {
        &self.fluid
    }

    #[must_use]
    pub fn immersion(&self) -> &ImmersionProfile {
        &self.immersion
    }

    #[must_use]
    pub fn weight(&self) -> Force {
        self.object.mass() * self.fluid.gravity()
    }

    /// Archimedes force, acting upward.
    #[must_use]
    pub fn buoyancy(&self, z: Length) -> Force {
        let volume = self
            .object
            .submerged_volume(self.immersion.wetted_depth(z));
        self.fluid.water_density() * self.fluid.gravity() * volume
    }

    /// Quadratic drag, opposing `v`.
    ///
    /// Blends `½ ρ_air C_d A_ref` and `½ ρ_water C_d A_wet(z)` with the
    /// immersion fraction.
    #[must_use]
    pub fn drag(&self, z: Length, v: Velocity) -> Force {
        let blend = self.immersion.drag_blend(z).into_inner().get::<ratio>();
        let half_cd = 0.5 * self.object.drag_coefficient().get::<ratio>();
        let wetted_area = self
            .object
            .submerged_area(self.immersion.wetted_depth(z));
        let signed_square = v * v.abs();

        let air: Force = self.fluid.air_density()
            * self.object.reference_area()
            * signed_square
            * (half_cd * (1.0 - blend));
        let water: Force =
            self.fluid.water_density() * wetted_area * signed_square * (half_cd * blend);

        air + water
    }

    /// Net downward acceleration at position `z` and velocity `v`.
    #[must_use]
    pub fn acceleration(&self, z: Length, v: Velocity) -> Acceleration {
        let net: Force = self.weight() - self.buoyancy(z) - self.drag(z, v);
        net / self.object.mass()
    }

    /// State derivative `(v, a)` in SI base units for the integrator.
    pub(super) fn derivative(&self, y: &[f64; 2]) -> [f64; 2] {
        let z = Length::new::<meter>(y[0]);
        let v = Velocity::new::<meter_per_second>(y[1]);
        [
            y[1],
            self.acceleration(z, v).get::<meter_per_second_squared>(),
        ]
    }

    /// Speed at which air drag balances weight, `√(2 m g / (ρ_air C_d A_ref))`.
    ///
    /// Reported for reference only; the dynamics apply no speed cap.
    #[must_use]
    pub fn terminal_velocity_in_air(&self) -> Velocity {
        let m = self.object.mass().get::<kilogram>();
        let g = self.fluid.gravity().get::<meter_per_second_squared>();
        let rho = self.fluid.air_density().get::<kilogram_per_cubic_meter>();
        let cd = self.object.drag_coefficient().get::<ratio>();
        let area = self.object.reference_area().get::<square_meter>();

        Velocity::new::<meter_per_second>((2.0 * m * g / (rho * cd * area)).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Mass, Ratio},
        force::newton,
    };

    use crate::models::hydro::splashdown::core::Shape;

    fn model(shape: Shape, mode: ImmersionMode) -> ForceModel {
        let object = ObjectSpec::new(
            shape,
            Mass::new::<kilogram>(1.0),
            Length::new::<meter>(0.05),
            Length::new::<meter>(0.2),
            Ratio::new::<ratio>(1.0),
        )
        .unwrap();
        ForceModel::new(object, FluidProperties::default(), mode)
    }

    fn accel(model: &ForceModel, z: f64, v: f64) -> f64 {
        model
            .acceleration(Length::new::<meter>(z), Velocity::new::<meter_per_second>(v))
            .get::<meter_per_second_squared>()
    }

    #[test]
    fn at_rest_in_air_falls_at_g() {
        for shape in [Shape::Cylinder, Shape::Cone] {
            for mode in [ImmersionMode::Progressive, ImmersionMode::Instant] {
                assert_relative_eq!(accel(&model(shape, mode), -5.0, 0.0), 9.81);
            }
        }
    }

    #[test]
    fn drag_opposes_velocity() {
        let model = model(Shape::Cylinder, ImmersionMode::Progressive);
        let z = Length::new::<meter>(-1.0);

        let down = model.drag(z, Velocity::new::<meter_per_second>(10.0));
        let up = model.drag(z, Velocity::new::<meter_per_second>(-10.0));
        assert!(down.get::<newton>() > 0.0);
        assert_relative_eq!(down.get::<newton>(), -up.get::<newton>());

        // ½ ρ_air C_d A v|v|
        let expected = 0.5 * 1.225 * 1.0 * std::f64::consts::PI * 0.05 * 0.05 * 100.0;
        assert_relative_eq!(down.get::<newton>(), expected, max_relative = 1e-12);
    }

    #[test]
    fn fully_submerged_cylinder() {
        let model = model(Shape::Cylinder, ImmersionMode::Progressive);
        let area = std::f64::consts::PI * 0.05 * 0.05;
        let volume = area * 0.2;

        let v = 2.0;
        let expected = 9.81 - 1000.0 * 9.81 * volume - 0.5 * 1000.0 * area * v * v;
        assert_relative_eq!(accel(&model, 0.5, v), expected, max_relative = 1e-12);
    }

    #[test]
    fn progressive_is_continuous_at_the_surface() {
        for shape in [Shape::Cylinder, Shape::Cone] {
            let model = model(shape, ImmersionMode::Progressive);
            let below = accel(&model, 1e-9, 8.0);
            let above = accel(&model, -1e-9, 8.0);
            assert_relative_eq!(below, above, epsilon = 1e-4);
        }
    }

    #[test]
    fn instant_jumps_at_the_surface() {
        let model = model(Shape::Cylinder, ImmersionMode::Instant);
        let below = accel(&model, 0.0, 8.0);
        let above = accel(&model, -1e-9, 8.0);
        assert!(above - below > 100.0);
    }

    #[test]
    fn buoyancy_only_when_wet() {
        let model = model(Shape::Cone, ImmersionMode::Progressive);
        assert_relative_eq!(
            model.buoyancy(Length::new::<meter>(-0.1)).get::<newton>(),
            0.0
        );
        assert!(model.buoyancy(Length::new::<meter>(0.1)).get::<newton>() > 0.0);
    }

    #[test]
    fn terminal_velocity() {
        let model = model(Shape::Cone, ImmersionMode::Progressive);
        let area = std::f64::consts::PI * 0.05 * 0.05;
        let expected = (2.0 * 9.81 / (1.225 * area)).sqrt();
        assert_relative_eq!(
            model.terminal_velocity_in_air().get::<meter_per_second>(),
            expected,
            max_relative = 1e-12
        );
    }
}
