//! Numeric constraint checks for model parameters.
//!
//! A constraint is a zero-sized marker type implementing [`Constraint<T>`],
//! used to validate parameters once at construction time. Two markers are
//! provided:
//!
//! - [`StrictlyPositive`]: greater than zero (rejects zero, negatives, NaN)
//! - [`Finite`]: a finite float (rejects NaN and infinities)
//!
//! Validated values stay plain: callers run the check in their constructors
//! and surface a domain-specific error on failure, so invariants are
//! enforced exactly once and the rest of the code works with ordinary
//! numbers.
//!
//! # Extending
//!
//! Define a custom numeric invariant by implementing [`Constraint<T>`] for
//! your own marker type.

use std::cmp::Ordering;

use num_traits::{Float, Zero};
use thiserror::Error;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    NotFinite,
}

/// Marker type enforcing that a value is strictly greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictlyPositive;

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

/// Marker type enforcing that a floating-point value is finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finite;

impl<T: Float> Constraint<T> for Finite {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::NotFinite)
        } else {
            Ok(())
        }
    }
}
