use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker for values strictly greater than zero.
///
/// Every extent, mass and density describing a falling body carries this
/// constraint: a zero radius or mass makes the force balance meaningless.
///
/// # Examples
///
/// ```
/// use splashdown::support::constraint::StrictlyPositive;
/// use uom::si::{f64::Length, length::meter};
///
/// let r = StrictlyPositive::new(Length::new::<meter>(0.75)).unwrap();
/// assert_eq!(r.as_ref().get::<meter>(), 0.75);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or `NaN`.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Mass, MassDensity},
        mass::kilogram,
        mass_density::kilogram_per_cubic_meter,
    };

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(1e-12).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-0.5), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn masses() {
        assert!(StrictlyPositive::new(Mass::new::<kilogram>(0.774)).is_ok());
        assert!(StrictlyPositive::new(Mass::new::<kilogram>(0.0)).is_err());
        assert!(StrictlyPositive::new(Mass::new::<kilogram>(-3.7)).is_err());
    }

    #[test]
    fn densities() {
        let water = MassDensity::new::<kilogram_per_cubic_meter>(1000.0);
        let rho = StrictlyPositive::new(water).unwrap();
        assert_eq!(rho.into_inner(), water);
    }
}
