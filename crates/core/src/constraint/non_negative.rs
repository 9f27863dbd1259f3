use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type for values that are zero or greater.
///
/// `NaN` is rejected because it compares false against zero in both directions.
///
/// # Examples
///
/// ```
/// use rcsim_core::constraint::NonNegative;
///
/// assert!(NonNegative::new(0.0).is_ok());
/// assert!(NonNegative::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a `Constrained<T, NonNegative>` if `value >= 0`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Negative`] or [`ConstraintError::NotANumber`].
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        let zero = T::zero();
        if *value >= zero {
            Ok(())
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

    use uom::si::{electrical_resistance::ohm, f64::ElectricalResistance};

    #[test]
    fn floats() {
        assert!(NonNegative::new(2.0).is_ok(), "Positive value is ok");
        assert!(NonNegative::new(0.0).is_ok(), "Zero value is ok");
        assert_eq!(NonNegative::new(-2.0), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn resistance() {
        let r = ElectricalResistance::new::<ohm>(1000.0);
        assert_eq!(NonNegative::new(r).unwrap().into_inner(), r);

        let r = ElectricalResistance::new::<ohm>(0.0);
        assert!(NonNegative::new(r).is_ok(), "A short circuit is ok");

        let r = ElectricalResistance::new::<ohm>(-1.0);
        assert_eq!(NonNegative::new(r), Err(ConstraintError::Negative));
    }
}
