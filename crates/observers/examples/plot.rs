//! Interactive chart of an RC circuit charging and discharging.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot
//! cargo run --example plot --features plot -- 4.7k 100u 12
//! ```
//!
//! Arguments are resistance (Ω), capacitance (F), and source voltage (V),
//! each with an optional SI prefix. The run covers five time constants.

use std::error::Error;

use rcsim_core::{CircuitParameters, simulate_observed, units::Scaled};
use rcsim_observers::{PlotObserver, ShowConfig};

fn arg(index: usize, default: &str) -> Result<f64, Box<dyn Error>> {
    let text = std::env::args().nth(index).unwrap_or_else(|| default.into());
    Ok(text.parse::<Scaled>()?.to_si())
}

fn main() -> Result<(), Box<dyn Error>> {
    let params = CircuitParameters::default()
        .resistance_si(arg(1, "1k")?)
        .capacitance_si(arg(2, "1u")?)
        .source_voltage_si(arg(3, "5")?);
    let params = params.duration(params.time_constant() * 5.0);

    let mut obs = PlotObserver::<2>::new(["Charge (V)", "Discharge (V)"]);
    let result = simulate_observed(&params, 100, &mut obs)?;

    let y_max = 1.1 * result.steady_state_voltage.value;
    obs.show(ShowConfig::new().title("RC transient").legend().y_max(y_max))?;

    Ok(())
}
