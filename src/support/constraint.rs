//! Numeric constraints checked once, at construction.
//!
//! Physical inputs such as a mass, a radius or a solver tolerance only make
//! sense within a range. Wrapping them in [`Constrained<T, C>`] records that
//! the range was checked, so downstream code can rely on it without
//! re-validating.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: greater than zero (masses, lengths, densities)
//! - [`NonNegative`]: zero or greater (absolute tolerances, depths)
//! - [`UnitInterval`]: closed interval `0 ≤ x ≤ 1` (immersion fractions)
//!
//! Each marker also has an associated `new()` shortcut,
//! e.g. `StrictlyPositive::new(0.75)`.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitInterval};

/// A numeric invariant enforced when a [`Constrained`] value is built.
///
/// Implement this on a zero-sized marker type to define a new invariant.
pub trait Constraint<T> {
    /// Checks that `value` satisfies the invariant.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Why a value was rejected by a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// Result alias for constrained construction.
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value of type `T` known to satisfy constraint `C`.
///
/// # Example
///
/// ```
/// use splashdown::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Mass, mass::kilogram};
///
/// let m = Constrained::<_, StrictlyPositive>::new(Mass::new::<kilogram>(50.0)).unwrap();
/// assert_eq!(m.into_inner().get::<kilogram>(), 50.0);
///
/// assert!(StrictlyPositive::new(Mass::new::<kilogram>(0.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
