use std::fmt;

use rcsim_core::{SimulationResult, format_engineering};
use uom::si::{electric_potential::volt, time::second};

/// Headline values for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// The time constant with an SI prefix, e.g. `"1.00ms"`.
    pub time_constant: String,

    /// The steady-state voltage with an SI prefix, e.g. `"5.00V"`.
    pub max_voltage: String,

    pub status: &'static str,
}

impl Summary {
    /// Formats the headline values of a result.
    #[must_use]
    pub fn from_result(result: &SimulationResult) -> Self {
        let tau = result.time_constant.get::<second>();
        let vmax = result.steady_state_voltage.get::<volt>();

        Self {
            time_constant: format!("{}s", format_engineering(tau)),
            max_voltage: format!("{}V", format_engineering(vmax)),
            status: "Calculated",
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Time constant (τ): {}", self.time_constant)?;
        writeln!(f, "Max voltage (Vs):  {}", self.max_voltage)?;
        write!(f, "Status:            {}", self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rcsim_core::{CircuitParameters, simulate};

    #[test]
    fn reference_circuit() {
        let result = simulate(&CircuitParameters::default(), 100).unwrap();
        let summary = Summary::from_result(&result);

        assert_eq!(summary.time_constant, "1.00ms");
        assert_eq!(summary.max_voltage, "5.00V");
        assert_eq!(summary.status, "Calculated");
    }

    #[test]
    fn zero_time_constant() {
        let params = CircuitParameters::default().capacitance_si(0.0);
        let result = simulate(&params, 10).unwrap();
        let summary = Summary::from_result(&result);

        assert_eq!(summary.time_constant, "0s");
    }

    #[test]
    fn display() {
        let summary = Summary {
            time_constant: "47.00ms".into(),
            max_voltage: "12.00V".into(),
            status: "Calculated",
        };

        assert_eq!(
            summary.to_string(),
            "Time constant (τ): 47.00ms\nMax voltage (Vs):  12.00V\nStatus:            Calculated"
        );
    }
}
