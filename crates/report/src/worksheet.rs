use std::fmt;

use rcsim_core::CircuitParameters;
use uom::si::{
    capacitance::farad, electric_potential::volt, electrical_resistance::ohm, time::second,
};

/// The circuit equations with a circuit's values substituted in.
///
/// Shows how τ follows from R and C and how it enters the charge and
/// discharge equations, for readers checking the numbers by hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Worksheet {
    resistance: f64,
    capacitance: f64,
    source_voltage: f64,
    time_constant: f64,
}

impl Worksheet {
    #[must_use]
    pub fn from_params(params: &CircuitParameters) -> Self {
        Self {
            resistance: params.resistance.get::<ohm>(),
            capacitance: params.capacitance.get::<farad>(),
            source_voltage: params.source_voltage.get::<volt>(),
            time_constant: params.time_constant().get::<second>(),
        }
    }
}

impl fmt::Display for Worksheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            resistance: r,
            capacitance: c,
            source_voltage: vs,
            time_constant: tau,
        } = *self;

        writeln!(f, "Time constant")?;
        writeln!(f, "  τ = R · C = {r} Ω · {c:.2e} F = {tau:.4} s")?;
        writeln!(f, "Charging")?;
        writeln!(f, "  V(t) = Vs · (1 − e^(−t/τ))")?;
        writeln!(f, "       = {vs} V · (1 − e^(−t/{tau:.4}))")?;
        writeln!(f, "Discharging")?;
        writeln!(f, "  V(t) = Vs · e^(−t/τ)")?;
        write!(f, "       = {vs} V · e^(−t/{tau:.4})")
    }
}
