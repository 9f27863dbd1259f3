use std::convert::Infallible;

use uom::si::{
    capacitance::{farad, microfarad},
    electric_potential::volt,
    electrical_resistance::ohm,
    f64::{Capacitance, ElectricPotential, ElectricalResistance, Time},
    time::{millisecond, second},
};

use crate::{
    Model,
    constraint::{ConstraintError, Finite, NonNegative},
    sampler::{Parameter, SimulationError},
};

/// Physical parameters of a series RC circuit driven by a DC source.
///
/// Parameters are plain values and may be constructed in any state.
/// They are checked by [`CircuitParameters::validate`], which the sampler
/// calls before every run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitParameters {
    pub resistance: ElectricalResistance,
    pub capacitance: Capacitance,
    pub source_voltage: ElectricPotential,
    pub duration: Time,
}

impl CircuitParameters {
    /// Creates parameters from `uom` quantities.
    #[must_use]
    pub fn new(
        resistance: ElectricalResistance,
        capacitance: Capacitance,
        source_voltage: ElectricPotential,
        duration: Time,
    ) -> Self {
        Self {
            resistance,
            capacitance,
            source_voltage,
            duration,
        }
    }

    /// Creates parameters from raw SI values (Ω, F, V, s).
    #[must_use]
    pub fn from_si(resistance: f64, capacitance: f64, source_voltage: f64, duration: f64) -> Self {
        Self::new(
            ElectricalResistance::new::<ohm>(resistance),
            Capacitance::new::<farad>(capacitance),
            ElectricPotential::new::<volt>(source_voltage),
            Time::new::<second>(duration),
        )
    }

    /// Sets resistance from a `uom::ElectricalResistance`.
    #[must_use]
    pub fn resistance(mut self, resistance: ElectricalResistance) -> Self {
        self.resistance = resistance;
        self
    }

    /// Sets resistance in SI units (Ω).
    #[must_use]
    pub fn resistance_si(self, resistance: f64) -> Self {
        self.resistance(ElectricalResistance::new::<ohm>(resistance))
    }

    /// Sets capacitance from a `uom::Capacitance`.
    #[must_use]
    pub fn capacitance(mut self, capacitance: Capacitance) -> Self {
        self.capacitance = capacitance;
        self
    }

    /// Sets capacitance in SI units (F).
    #[must_use]
    pub fn capacitance_si(self, capacitance: f64) -> Self {
        self.capacitance(Capacitance::new::<farad>(capacitance))
    }

    /// Sets source voltage from a `uom::ElectricPotential`.
    #[must_use]
    pub fn source_voltage(mut self, source_voltage: ElectricPotential) -> Self {
        self.source_voltage = source_voltage;
        self
    }

    /// Sets source voltage in SI units (V).
    #[must_use]
    pub fn source_voltage_si(self, source_voltage: f64) -> Self {
        self.source_voltage(ElectricPotential::new::<volt>(source_voltage))
    }

    /// Sets the simulated duration from a `uom::Time`.
    #[must_use]
    pub fn duration(mut self, duration: Time) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the simulated duration in SI units (s).
    #[must_use]
    pub fn duration_si(self, duration: f64) -> Self {
        self.duration(Time::new::<second>(duration))
    }

    /// Returns the time constant τ = R·C.
    #[must_use]
    pub fn time_constant(&self) -> Time {
        self.resistance * self.capacitance
    }

    /// Checks that every parameter is physically meaningful.
    ///
    /// Resistance, capacitance, and duration must be finite and non-negative.
    /// The source voltage must be finite but may have either sign. The time
    /// constant R·C must also be finite, which large finite inputs can break.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] naming the first
    /// offending parameter.
    pub fn validate(&self) -> Result<(), SimulationError> {
        non_negative(Parameter::Resistance, self.resistance.value)?;
        non_negative(Parameter::Capacitance, self.capacitance.value)?;
        finite(Parameter::SourceVoltage, self.source_voltage.value)?;
        non_negative(Parameter::Duration, self.duration.value)?;
        finite(Parameter::TimeConstant, self.time_constant().value)?;
        Ok(())
    }
}

fn finite(parameter: Parameter, value: f64) -> Result<(), SimulationError> {
    Finite::new(value)
        .map(|_| ())
        .map_err(|reason| SimulationError::InvalidParameter { parameter, reason })
}

fn non_negative(parameter: Parameter, value: f64) -> Result<(), SimulationError> {
    finite(parameter, value)?;
    NonNegative::new(value)
        .map(|_| ())
        .map_err(|reason: ConstraintError| SimulationError::InvalidParameter { parameter, reason })
}

impl Default for CircuitParameters {
    /// A 1 kΩ resistor charging a 1 µF capacitor from 5 V over 5 ms.
    fn default() -> Self {
        Self {
            resistance: ElectricalResistance::new::<ohm>(1000.0),
            capacitance: Capacitance::new::<microfarad>(1.0),
            source_voltage: ElectricPotential::new::<volt>(5.0),
            duration: Time::new::<millisecond>(5.0),
        }
    }
}

/// Capacitor voltages at a single instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voltages {
    /// Voltage while charging from 0 toward the source voltage.
    pub charge: ElectricPotential,
    /// Voltage while discharging from the source voltage toward 0.
    pub discharge: ElectricPotential,
}

/// Closed-form model of a first-order RC circuit.
///
/// Maps elapsed time to the capacitor voltage for both the charging and the
/// discharging case:
///
/// ```text
/// charge(t)    = Vs · (1 − e^(−t/τ))
/// discharge(t) = Vs · e^(−t/τ)
/// ```
///
/// When τ is zero the capacitor follows the source instantly: the charging
/// voltage is 0 at `t = 0` and `Vs` afterwards, and the discharging voltage
/// is `Vs` at `t = 0` and 0 afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RcCircuit {
    time_constant: Time,
    source_voltage: ElectricPotential,
}

impl RcCircuit {
    /// Creates a model from circuit parameters.
    #[must_use]
    pub fn new(parameters: &CircuitParameters) -> Self {
        Self {
            time_constant: parameters.time_constant(),
            source_voltage: parameters.source_voltage,
        }
    }

    /// Returns the time constant τ = R·C.
    #[must_use]
    pub fn time_constant(&self) -> Time {
        self.time_constant
    }

    /// Returns the source (steady-state) voltage.
    #[must_use]
    pub fn source_voltage(&self) -> ElectricPotential {
        self.source_voltage
    }

    /// Returns `e^(−t/τ)`, the fraction of the initial voltage remaining on a
    /// discharging capacitor.
    fn remaining_fraction(&self, time: Time) -> f64 {
        let tau = self.time_constant.get::<second>();
        let t = time.get::<second>();

        if tau > 0.0 {
            (-t / tau).exp()
        } else if t > 0.0 {
            0.0
        } else {
            1.0
        }
    }
}

impl Model for RcCircuit {
    type Input = Time;
    type Output = Voltages;
    type Error = Infallible;

    fn call(&self, time: &Self::Input) -> Result<Self::Output, Self::Error> {
        let remaining = self.remaining_fraction(*time);

        Ok(Voltages {
            charge: self.source_voltage * (1.0 - remaining),
            discharge: self.source_voltage * remaining,
        })
    }
}
