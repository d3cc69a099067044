use std::{f64::consts::PI, fmt};

use uom::si::f64::{Area, Length, Mass, Ratio};

use crate::support::constraint::StrictlyPositive;

use super::ConfigError;

/// Body shape. Cones fall apex down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Cylinder,
    Cone,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cylinder => f.write_str("cylinder"),
            Self::Cone => f.write_str("cone"),
        }
    }
}

/// A rigid axisymmetric body falling along its axis.
///
/// Every dimension, the mass and the drag coefficient are strictly positive.
/// The reference area used for air drag defaults to the base area `π r²`.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSpec {
    name: String,
    shape: Shape,
    mass: Mass,
    radius: Length,
    height: Length,
    drag_coefficient: Ratio,
    reference_area: Area,
}

impl ObjectSpec {
    /// Constructs a validated object.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first field that is not strictly
    /// positive.
    pub fn new(
        shape: Shape,
        mass: Mass,
        radius: Length,
        height: Length,
        drag_coefficient: Ratio,
    ) -> Result<Self, ConfigError> {
        let mass = StrictlyPositive::new(mass).map_err(ConfigError::Mass)?;
        let radius = StrictlyPositive::new(radius).map_err(ConfigError::Radius)?;
        let height = StrictlyPositive::new(height).map_err(ConfigError::Height)?;
        let drag_coefficient =
            StrictlyPositive::new(drag_coefficient).map_err(ConfigError::DragCoefficient)?;

        Ok(Self::new_unchecked(
            shape,
            mass.into_inner(),
            radius.into_inner(),
            height.into_inner(),
            drag_coefficient.into_inner(),
        ))
    }

    /// Constructs an object without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure every quantity is strictly positive.
    /// Violating this invariant produces non-physical forces.
    #[must_use]
    pub fn new_unchecked(
        shape: Shape,
        mass: Mass,
        radius: Length,
        height: Length,
        drag_coefficient: Ratio,
    ) -> Self {
        Self {
            name: shape.to_string(),
            shape,
            mass,
            radius,
            height,
            drag_coefficient,
            reference_area: radius * radius * PI,
        }
    }

    /// Replaces the reference area used for air drag.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReferenceArea`] if `area` is not strictly positive.
    pub fn with_reference_area(self, area: Area) -> Result<Self, ConfigError> {
        let area = StrictlyPositive::new(area).map_err(ConfigError::ReferenceArea)?;
        Ok(Self {
            reference_area: area.into_inner(),
            ..self
        })
    }

    /// Sets the display name used by reports.
    #[must_use]
    pub fn named(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub fn mass(&self) -> Mass {
        self.mass
    }

    /// Base radius (cone) or radius (cylinder).
    #[must_use]
    pub fn radius(&self) -> Length {
        self.radius
    }

    /// Axial extent: cylinder length or cone height.
    #[must_use]
    pub fn height(&self) -> Length {
        self.height
    }

    #[must_use]
    pub fn drag_coefficient(&self) -> Ratio {
        self.drag_coefficient
    }

    #[must_use]
    pub fn reference_area(&self) -> Area {
        self.reference_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{area::square_meter, length::meter, mass::kilogram, ratio::ratio};

    use crate::support::constraint::ConstraintError;

    fn cylinder(mass: f64, radius: f64) -> Result<ObjectSpec, ConfigError> {
        ObjectSpec::new(
            Shape::Cylinder,
            Mass::new::<kilogram>(mass),
            Length::new::<meter>(radius),
            Length::new::<meter>(0.2),
            Ratio::new::<ratio>(1.0),
        )
    }

    #[test]
    fn reference_area_defaults_to_base_area() {
        let object = cylinder(1.0, 0.05).unwrap();
        assert_relative_eq!(
            object.reference_area().get::<square_meter>(),
            PI * 0.05 * 0.05,
            max_relative = 1e-12
        );
        assert_eq!(object.name(), "cylinder");
    }

    #[test]
    fn rejects_non_positive_fields() {
        assert_eq!(
            cylinder(0.0, 0.05),
            Err(ConfigError::Mass(ConstraintError::Zero))
        );
        assert_eq!(
            cylinder(1.0, -0.05),
            Err(ConfigError::Radius(ConstraintError::Negative))
        );
        assert_eq!(
            cylinder(f64::NAN, 0.05),
            Err(ConfigError::Mass(ConstraintError::NotANumber))
        );

        let flat = ObjectSpec::new(
            Shape::Cone,
            Mass::new::<kilogram>(1.0),
            Length::new::<meter>(0.1),
            Length::new::<meter>(0.0),
            Ratio::new::<ratio>(0.8),
        );
        assert_eq!(flat, Err(ConfigError::Height(ConstraintError::Zero)));

        let no_drag = ObjectSpec::new(
            Shape::Cone,
            Mass::new::<kilogram>(1.0),
            Length::new::<meter>(0.1),
            Length::new::<meter>(0.1),
            Ratio::new::<ratio>(0.0),
        );
        assert_eq!(
            no_drag,
            Err(ConfigError::DragCoefficient(ConstraintError::Zero))
        );
    }

    #[test]
    fn custom_reference_area() {
        let object = cylinder(1.0, 0.05)
            .unwrap()
            .with_reference_area(Area::new::<square_meter>(0.01))
            .unwrap()
            .named("test body");
        assert_relative_eq!(object.reference_area().get::<square_meter>(), 0.01);
        assert_eq!(object.name(), "test body");

        let err = cylinder(1.0, 0.05)
            .unwrap()
            .with_reference_area(Area::new::<square_meter>(-1.0));
        assert_eq!(err, Err(ConfigError::ReferenceArea(ConstraintError::Negative)));
    }
}
