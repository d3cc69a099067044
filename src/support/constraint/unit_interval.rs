use std::{cmp::Ordering, marker::PhantomData};

use uom::si::{f64::Ratio, ratio::ratio};

use super::{Constrained, Constraint, ConstraintError};

/// Supplies the endpoints 0 and 1 for types usable with [`UnitInterval`].
pub trait UnitBounds: PartialOrd + Copy {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }
    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}

/// Marker for values in the closed unit interval `0 ≤ x ≤ 1`.
///
/// Implemented for `f64` and `uom::si::f64::Ratio`.
///
/// # Examples
///
/// ```
/// use splashdown::support::constraint::UnitInterval;
/// use uom::si::{f64::Ratio, ratio::{percent, ratio}};
///
/// let f = UnitInterval::new(Ratio::new::<ratio>(0.25)).unwrap();
/// assert_eq!(f.as_ref().get::<percent>(), 25.0);
///
/// assert!(UnitInterval::new(1.0001).is_err());
/// assert!(UnitInterval::new(f64::NAN).is_err());
///
/// // Out-of-range values can be saturated instead of rejected:
/// assert_eq!(UnitInterval::clamp(1.7).into_inner(), 1.0);
/// assert_eq!(UnitInterval::clamp(-0.2).into_inner(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs `Constrained<T, UnitInterval>` if `0 ≤ value ≤ 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if the comparison is undefined.
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }

    /// Saturates `value` into `[0, 1]`.
    ///
    /// Values that cannot be compared (`NaN`) map to zero.
    #[must_use]
    pub fn clamp<T: UnitBounds>(value: T) -> Constrained<T, UnitInterval> {
        match Self::new(value) {
            Ok(inside) => inside,
            Err(ConstraintError::AboveMaximum) => Self::one(),
            Err(_) => Self::zero(),
        }
    }

    /// Returns the lower endpoint.
    #[must_use]
    pub fn zero<T: UnitBounds>() -> Constrained<T, UnitInterval> {
        Constrained::<T, UnitInterval> {
            value: T::zero(),
            _marker: PhantomData,
        }
    }

    /// Returns the upper endpoint.
    #[must_use]
    pub fn one<T: UnitBounds>() -> Constrained<T, UnitInterval> {
        Constrained::<T, UnitInterval> {
            value: T::one(),
            _marker: PhantomData,
        }
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn endpoints_are_inside() {
        assert_eq!(UnitInterval::new(0.0).unwrap().into_inner(), 0.0);
        assert_eq!(UnitInterval::new(1.0).unwrap().into_inner(), 1.0);
    }

    #[test]
    fn out_of_range() {
        assert_eq!(UnitInterval::new(-1e-15), Err(ConstraintError::BelowMinimum));
        assert_eq!(
            UnitInterval::new(1.0 + 1e-15),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            UnitInterval::new(f64::NEG_INFINITY),
            Err(ConstraintError::BelowMinimum)
        );
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn clamp_saturates() {
        assert_eq!(UnitInterval::clamp(0.3).into_inner(), 0.3);
        assert_eq!(UnitInterval::clamp(f64::INFINITY).into_inner(), 1.0);
        assert_eq!(UnitInterval::clamp(f64::NAN).into_inner(), 0.0);

        let r = UnitInterval::clamp(Ratio::new::<ratio>(4.0));
        assert_eq!(r.into_inner().get::<ratio>(), 1.0);
    }
}
