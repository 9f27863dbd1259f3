//! Decimal SI prefixes for user-entered magnitudes.
//!
//! Component values are usually written with a prefix: a `4.7k` resistor, a
//! `100u` capacitor, a `5m` duration. [`Scaled`] parses that shorthand and
//! converts it to a value in the SI base unit.
//!
//! ```
//! use rcsim_core::units::{Prefix, Scaled};
//!
//! let r: Scaled = "4.7k".parse().unwrap();
//! assert_eq!(r.prefix, Prefix::Kilo);
//! assert_eq!(r.to_si(), 4700.0);
//! ```

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Errors that can occur when parsing a prefixed magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("no value given")]
    Empty,

    #[error("invalid magnitude `{0}`")]
    InvalidMagnitude(String),

    #[error("unknown unit prefix `{0}`")]
    UnknownPrefix(String),
}

/// A decimal SI prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Prefix {
    Pico,
    Nano,
    Micro,
    Milli,
    #[default]
    None,
    Kilo,
    Mega,
}

impl Prefix {
    /// Returns the multiplier this prefix applies to the base unit.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::Pico => 1e-12,
            Self::Nano => 1e-9,
            Self::Micro => 1e-6,
            Self::Milli => 1e-3,
            Self::None => 1.0,
            Self::Kilo => 1e3,
            Self::Mega => 1e6,
        }
    }

    /// Returns the display symbol, empty for [`Prefix::None`].
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Pico => "p",
            Self::Nano => "n",
            Self::Micro => "µ",
            Self::Milli => "m",
            Self::None => "",
            Self::Kilo => "k",
            Self::Mega => "M",
        }
    }
}

impl FromStr for Prefix {
    type Err = UnitError;

    /// Parses a prefix symbol. Both `µ` (micro sign and Greek mu) and `u` are
    /// accepted for micro.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p" => Ok(Self::Pico),
            "n" => Ok(Self::Nano),
            "u" | "µ" | "μ" => Ok(Self::Micro),
            "m" => Ok(Self::Milli),
            "" => Ok(Self::None),
            "k" => Ok(Self::Kilo),
            "M" => Ok(Self::Mega),
            other => Err(UnitError::UnknownPrefix(other.to_owned())),
        }
    }
}

/// A magnitude paired with an SI prefix, as entered by a user.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "serde_repr::ScaledRepr"))]
pub struct Scaled {
    pub magnitude: f64,
    pub prefix: Prefix,
}

impl Scaled {
    /// Creates a scaled value.
    #[must_use]
    pub fn new(magnitude: f64, prefix: Prefix) -> Self {
        Self { magnitude, prefix }
    }

    /// Converts to a value in the SI base unit.
    #[must_use]
    pub fn to_si(self) -> f64 {
        self.magnitude * self.prefix.factor()
    }

    /// Parses a prefixed magnitude that may end with a unit symbol.
    ///
    /// The unit symbol is stripped before parsing, so `"5ms"` with unit `"s"`
    /// reads as 5 milliseconds and `"1uF"` with unit `"F"` as 1 microfarad.
    ///
    /// # Errors
    ///
    /// Returns a [`UnitError`] if the remaining text is not a valid magnitude
    /// with an optional prefix.
    pub fn parse_with_unit(text: &str, unit: &str) -> Result<Self, UnitError> {
        let text = text.trim();
        let text = text.strip_suffix(unit).unwrap_or(text);
        text.parse()
    }
}

impl FromStr for Scaled {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(UnitError::Empty);
        }

        // A trailing letter is the prefix symbol.
        let split = s
            .char_indices()
            .last()
            .filter(|&(_, c)| c.is_alphabetic())
            .map_or(s.len(), |(i, _)| i);
        let (number, prefix) = s.split_at(split);

        let prefix: Prefix = prefix.parse()?;
        let magnitude: f64 = number
            .trim_end()
            .parse()
            .map_err(|_| UnitError::InvalidMagnitude(number.to_owned()))?;

        Ok(Self { magnitude, prefix })
    }
}

impl fmt::Display for Scaled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.prefix.symbol())
    }
}

impl From<f64> for Scaled {
    fn from(magnitude: f64) -> Self {
        Self::new(magnitude, Prefix::None)
    }
}

#[cfg(feature = "serde")]
mod serde_repr {
    use super::{Scaled, UnitError};

    /// Accepts either a bare number or prefixed text.
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    pub(super) enum ScaledRepr {
        Number(f64),
        Text(String),
    }

    impl TryFrom<ScaledRepr> for Scaled {
        type Error = UnitError;

        fn try_from(repr: ScaledRepr) -> Result<Self, Self::Error> {
            match repr {
                ScaledRepr::Number(value) => Ok(Scaled::from(value)),
                ScaledRepr::Text(text) => text.parse(),
            }
        }
    }
}
