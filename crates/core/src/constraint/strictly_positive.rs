use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type for values that are greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a `Constrained<T, StrictlyPositive>` if `value > 0`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Zero`], [`ConstraintError::Negative`],
    /// or [`ConstraintError::NotANumber`].
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        let zero = T::zero();
        if *value > zero {
            Ok(())
        } else if *value == zero {
            Err(ConstraintError::Zero)
        } else if *value < zero {
            Err(ConstraintError::Negative)
        } else {
            Err(ConstraintError::NotANumber)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(StrictlyPositive::new(1_usize).unwrap().into_inner(), 1);
        assert_eq!(StrictlyPositive::new(0_usize), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-3), Err(ConstraintError::Negative));
    }

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(1e-12).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }
}
