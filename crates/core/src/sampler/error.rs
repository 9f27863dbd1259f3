use std::fmt;

use thiserror::Error;

use crate::constraint::ConstraintError;

/// Errors that can occur when running a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("invalid {parameter}: {reason}")]
    InvalidParameter {
        parameter: Parameter,
        reason: ConstraintError,
    },
}

/// Identifies a simulation input in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    Resistance,
    Capacitance,
    SourceVoltage,
    Duration,
    TimeConstant,
    SampleCount,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Resistance => "resistance",
            Self::Capacitance => "capacitance",
            Self::SourceVoltage => "source voltage",
            Self::Duration => "duration",
            Self::TimeConstant => "time constant",
            Self::SampleCount => "sample count",
        };
        f.write_str(name)
    }
}
