use super::{Constrained, Constraint, ConstraintError};

/// Marker type for floating-point values that are neither infinite nor `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Finite;

impl Finite {
    /// Constructs a `Constrained<f64, Finite>` if `value` is finite.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Infinite`] or [`ConstraintError::NotANumber`].
    pub fn new(value: f64) -> Result<Constrained<f64, Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl Constraint<f64> for Finite {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::Infinite)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_values() {
        assert!(Finite::new(-5.0).is_ok(), "Negative values are finite");
        assert!(Finite::new(0.0).is_ok());
        assert_eq!(Finite::new(f64::INFINITY), Err(ConstraintError::Infinite));
        assert_eq!(
            Finite::new(f64::NEG_INFINITY),
            Err(ConstraintError::Infinite)
        );
        assert_eq!(Finite::new(f64::NAN), Err(ConstraintError::NotANumber));
    }
}
