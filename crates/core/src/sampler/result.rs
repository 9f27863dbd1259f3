use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Time},
    time::second,
};

/// Capacitor voltages sampled at a single instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub time: Time,
    pub charge: ElectricPotential,
    pub discharge: ElectricPotential,
}

/// The outcome of a single simulation run.
///
/// Each run produces a fresh, owned result; nothing is shared with or carried
/// over from earlier runs.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// The time constant τ = R·C.
    pub time_constant: Time,

    /// The asymptotic capacitor voltage, equal to the source voltage.
    pub steady_state_voltage: ElectricPotential,

    /// Samples in order of increasing time, from `t = 0` to the duration.
    pub samples: Vec<SamplePoint>,
}

impl SimulationResult {
    /// Number of sampling intervals, one less than the number of samples.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len().saturating_sub(1)
    }

    /// Returns how far the charging capacitor has progressed toward the
    /// steady-state voltage, as a percentage.
    ///
    /// Returns 0 when the steady-state voltage is zero.
    #[must_use]
    pub fn percent_charged(&self, sample: &SamplePoint) -> f64 {
        let steady_state = self.steady_state_voltage.get::<volt>();
        if steady_state == 0.0 {
            return 0.0;
        }
        sample.charge.get::<volt>() / steady_state * 100.0
    }

    /// Charging voltage as `[time in s, voltage in V]` points for plotting.
    #[must_use]
    pub fn charge_series(&self) -> Vec<[f64; 2]> {
        self.samples
            .iter()
            .map(|s| [s.time.get::<second>(), s.charge.get::<volt>()])
            .collect()
    }

    /// Discharging voltage as `[time in s, voltage in V]` points for plotting.
    #[must_use]
    pub fn discharge_series(&self) -> Vec<[f64; 2]> {
        self.samples
            .iter()
            .map(|s| [s.time.get::<second>(), s.discharge.get::<volt>()])
            .collect()
    }
}
