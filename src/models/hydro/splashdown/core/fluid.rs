use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, MassDensity},
    mass_density::kilogram_per_cubic_meter,
};

use crate::support::constraint::StrictlyPositive;

use super::ConfigError;

/// Densities of the two media and the gravitational acceleration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    water_density: MassDensity,
    air_density: MassDensity,
    gravity: Acceleration,
}

impl FluidProperties {
    /// Constructs validated fluid properties.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any value is not strictly positive.
    pub fn new(
        water_density: MassDensity,
        air_density: MassDensity,
        gravity: Acceleration,
    ) -> Result<Self, ConfigError> {
        let water_density =
            StrictlyPositive::new(water_density).map_err(ConfigError::WaterDensity)?;
        let air_density = StrictlyPositive::new(air_density).map_err(ConfigError::AirDensity)?;
        let gravity = StrictlyPositive::new(gravity).map_err(ConfigError::Gravity)?;

        Ok(Self {
            water_density: water_density.into_inner(),
            air_density: air_density.into_inner(),
            gravity: gravity.into_inner(),
        })
    }

    #[must_use]
    pub fn water_density(&self) -> MassDensity {
        self.water_density
    }

    #[must_use]
    pub fn air_density(&self) -> MassDensity {
        self.air_density
    }

    #[must_use]
    pub fn gravity(&self) -> Acceleration {
        self.gravity
    }
}

/// Fresh water, sea-level air, and `g = 9.81 m/s²`.
impl Default for FluidProperties {
    fn default() -> Self {
        Self {
            water_density: MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
            air_density: MassDensity::new::<kilogram_per_cubic_meter>(1.225),
            gravity: Acceleration::new::<meter_per_second_squared>(9.81),
        }
    }
}
