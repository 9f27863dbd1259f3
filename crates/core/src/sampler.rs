//! Transient response sampling for a first-order RC circuit.
//!
//! The sampler evaluates the closed-form [`RcCircuit`] model at uniformly
//! spaced instants between `t = 0` and the simulated duration:
//!
//! ```text
//! step = duration / sample_count
//! t_i  = i · step, for i in 0..=sample_count
//! ```
//!
//! # Example
//!
//! ```
//! use rcsim_core::{CircuitParameters, sampler};
//!
//! let params = CircuitParameters::from_si(1000.0, 1e-6, 5.0, 0.005);
//! let result = sampler::simulate(&params, 100).unwrap();
//!
//! assert_eq!(result.samples.len(), 101);
//! ```

mod error;
mod event;
mod result;

pub use error::{Parameter, SimulationError};
pub use event::Event;
pub use result::{SamplePoint, SimulationResult};

use uom::si::{electric_potential::volt, time::second};

use crate::{
    CircuitParameters, Model, Observer, RcCircuit,
    constraint::{ConstraintError, StrictlyPositive},
};

/// Number of sampling intervals used when the caller has no preference.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Largest accepted number of sampling intervals.
pub const MAX_SAMPLE_COUNT: usize = 10_000_000;

/// Samples the charge and discharge response of an RC circuit.
///
/// Returns `sample_count + 1` samples whose times run from 0 to the
/// simulated duration inclusive.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidParameter`] if the circuit parameters
/// fail [`CircuitParameters::validate`] or if `sample_count` is zero or
/// above [`MAX_SAMPLE_COUNT`].
pub fn simulate(
    parameters: &CircuitParameters,
    sample_count: usize,
) -> Result<SimulationResult, SimulationError> {
    simulate_observed(parameters, sample_count, ())
}

/// Samples the charge and discharge response of an RC circuit, emitting an
/// [`Event`] to the observer for every sample.
///
/// # Algorithm
///
/// 1. Validate the parameters and sample count.
/// 2. Compute τ = R·C and the step `duration / sample_count`.
/// 3. For each step `i` in `0..=sample_count`:
///    - Evaluate the model at `t = i · step`, using the exact duration for
///      the last step.
///    - Emit an [`Event`] to the observer.
/// 4. Return the result with all samples.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidParameter`] if the circuit parameters
/// fail [`CircuitParameters::validate`] or if `sample_count` is zero or
/// above [`MAX_SAMPLE_COUNT`].
#[allow(clippy::cast_precision_loss)]
pub fn simulate_observed<Obs>(
    parameters: &CircuitParameters,
    sample_count: usize,
    mut observer: Obs,
) -> Result<SimulationResult, SimulationError>
where
    Obs: Observer<Event>,
{
    parameters.validate()?;
    let sample_count = check_sample_count(sample_count)?;

    let circuit = RcCircuit::new(parameters);
    let time_constant = circuit.time_constant();
    let source_voltage = circuit.source_voltage();

    let _span = tracing::debug_span!(
        "simulate",
        tau_s = time_constant.get::<second>(),
        vs_v = source_voltage.get::<volt>(),
        sample_count,
    )
    .entered();

    if time_constant.get::<second>() == 0.0 {
        tracing::debug!("time constant is zero, capacitor follows the source instantly");
    }
    if source_voltage.get::<volt>() == 0.0 {
        tracing::debug!("source voltage is zero, percent charged is reported as 0");
    }

    let duration = parameters.duration;
    let step = duration / sample_count as f64;

    let mut samples = Vec::with_capacity(sample_count.saturating_add(1));
    for i in 0..=sample_count {
        let time = if i == sample_count {
            duration
        } else {
            step * i as f64
        };

        let Ok(voltages) = circuit.call(&time);
        let sample = SamplePoint {
            time,
            charge: voltages.charge,
            discharge: voltages.discharge,
        };

        observer.observe(&Event { step: i, sample });
        samples.push(sample);
    }

    tracing::debug!(samples = samples.len(), "simulation complete");

    Ok(SimulationResult {
        time_constant,
        steady_state_voltage: source_voltage,
        samples,
    })
}

fn check_sample_count(sample_count: usize) -> Result<usize, SimulationError> {
    let invalid = |reason| SimulationError::InvalidParameter {
        parameter: Parameter::SampleCount,
        reason,
    };

    let sample_count = StrictlyPositive::new(sample_count)
        .map_err(invalid)?
        .into_inner();
    if sample_count > MAX_SAMPLE_COUNT {
        return Err(invalid(ConstraintError::AboveMaximum(MAX_SAMPLE_COUNT)));
    }
    Ok(sample_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn volts(v: uom::si::f64::ElectricPotential) -> f64 {
        v.get::<volt>()
    }

    fn err_message(result: Result<SimulationResult, SimulationError>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn reference_circuit() {
        let params = CircuitParameters::from_si(1000.0, 1e-6, 5.0, 0.005);
        let result = simulate(&params, 100).expect("should simulate");

        assert_relative_eq!(
            result.time_constant.get::<second>(),
            0.001,
            max_relative = 1e-12
        );
        assert_relative_eq!(volts(result.steady_state_voltage), 5.0);
        assert_eq!(result.samples.len(), 101);
        assert_eq!(result.sample_count(), 100);

        // One time constant in, at step 20.
        let one_tau = result.samples[20];
        assert_relative_eq!(one_tau.time.get::<second>(), 0.001, max_relative = 1e-12);
        assert_abs_diff_eq!(volts(one_tau.charge), 3.1606, epsilon = 1e-4);
        assert_abs_diff_eq!(volts(one_tau.discharge), 1.8394, epsilon = 1e-4);
    }

    #[test]
    fn first_and_last_samples() {
        let params = CircuitParameters::from_si(220.0, 47e-6, 12.0, 0.1);
        let result = simulate(&params, 37).expect("should simulate");

        let first = result.samples.first().unwrap();
        assert_eq!(first.time.get::<second>(), 0.0);
        assert_eq!(volts(first.charge), 0.0);
        assert_eq!(volts(first.discharge), 12.0);

        let last = result.samples.last().unwrap();
        assert_eq!(last.time, params.duration);
    }

    #[test]
    fn charge_and_discharge_are_monotonic_and_complementary() {
        let params = CircuitParameters::from_si(1000.0, 1e-6, 5.0, 0.01);
        let result = simulate(&params, 200).expect("should simulate");

        for pair in result.samples.windows(2) {
            assert!(pair[1].time > pair[0].time);
            assert!(volts(pair[1].charge) >= volts(pair[0].charge));
            assert!(volts(pair[1].discharge) <= volts(pair[0].discharge));
        }

        for s in &result.samples {
            assert_relative_eq!(volts(s.charge) + volts(s.discharge), 5.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn nearly_charged_after_five_time_constants() {
        let params = CircuitParameters::from_si(1000.0, 1e-6, 5.0, 0.005);
        let result = simulate(&params, 50).expect("should simulate");

        let last = result.samples.last().unwrap();
        assert!(volts(last.charge) >= 0.99 * 5.0);
        assert!(volts(last.discharge) <= 0.01 * 5.0);
    }

    #[test]
    fn zero_resistance_switches_instantly() {
        let params = CircuitParameters::from_si(0.0, 1e-6, 5.0, 0.005);
        let result = simulate(&params, 10).expect("should simulate");

        assert_eq!(result.time_constant.get::<second>(), 0.0);
        assert_eq!(volts(result.samples[0].charge), 0.0);
        assert_eq!(volts(result.samples[0].discharge), 5.0);
        for s in &result.samples[1..] {
            assert_eq!(volts(s.charge), 5.0);
            assert_eq!(volts(s.discharge), 0.0);
        }
    }

    #[test]
    fn zero_source_voltage_reports_zero_percent() {
        let params = CircuitParameters::default().source_voltage_si(0.0);
        let result = simulate(&params, 20).expect("should simulate");

        for s in &result.samples {
            let percent = result.percent_charged(s);
            assert!(!percent.is_nan());
            assert_eq!(percent, 0.0);
        }
    }

    #[test]
    fn percent_charged_tracks_charge_voltage() {
        let params = CircuitParameters::default();
        let result = simulate(&params, 100).expect("should simulate");

        assert_eq!(result.percent_charged(&result.samples[0]), 0.0);
        assert_abs_diff_eq!(
            result.percent_charged(&result.samples[20]),
            63.212,
            epsilon = 1e-3
        );
    }

    #[test]
    fn zero_duration_repeats_the_initial_sample() {
        let params = CircuitParameters::default().duration_si(0.0);
        let result = simulate(&params, 4).expect("should simulate");

        assert_eq!(result.samples.len(), 5);
        for s in &result.samples {
            assert_eq!(s.time.get::<second>(), 0.0);
            assert_eq!(volts(s.charge), 0.0);
        }
    }

    #[test]
    fn zero_sample_count_is_rejected() {
        let err = simulate(&CircuitParameters::default(), 0).unwrap_err();
        assert_eq!(
            err,
            SimulationError::InvalidParameter {
                parameter: Parameter::SampleCount,
                reason: ConstraintError::Zero,
            }
        );
    }

    #[test]
    fn sample_count_above_maximum_is_rejected() {
        let params = CircuitParameters::default();

        for sample_count in [MAX_SAMPLE_COUNT + 1, usize::MAX] {
            let mut events = 0;
            let err = simulate_observed(&params, sample_count, |_: &Event| events += 1)
                .unwrap_err();
            assert_eq!(
                err,
                SimulationError::InvalidParameter {
                    parameter: Parameter::SampleCount,
                    reason: ConstraintError::AboveMaximum(MAX_SAMPLE_COUNT),
                }
            );
            assert_eq!(events, 0);
        }

        assert_eq!(
            err_message(simulate(&params, usize::MAX)),
            "invalid sample count: value exceeds the maximum of 10000000"
        );
    }

    #[test]
    fn infinite_time_constant_is_rejected() {
        let params = CircuitParameters::from_si(1e200, 1e200, 5.0, 0.005);
        assert_eq!(
            err_message(simulate(&params, 10)),
            "invalid time constant: value must be finite"
        );
    }

    #[test]
    fn negative_capacitance_is_rejected() {
        let params = CircuitParameters::default().capacitance_si(-1e-6);
        let err = simulate(&params, 10).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid capacitance: value must not be negative"
        );
    }

    #[test]
    fn observer_sees_every_step() {
        let mut steps = Vec::new();
        let result = simulate_observed(&CircuitParameters::default(), 4, |event: &Event| {
            steps.push(event.step);
        })
        .expect("should simulate");

        assert_eq!(steps, vec![0, 1, 2, 3, 4]);
        assert_eq!(result.samples.len(), 5);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let params = CircuitParameters::default();
        let a = simulate(&params, 50).expect("should simulate");
        let b = simulate(&params, 50).expect("should simulate");
        assert_eq!(a, b);
    }

    #[test]
    fn series_match_samples() {
        let params = CircuitParameters::default();
        let result = simulate(&params, 10).expect("should simulate");

        let charge = result.charge_series();
        let discharge = result.discharge_series();
        assert_eq!(charge.len(), 11);
        assert_eq!(discharge.len(), 11);
        assert_eq!(charge[0], [0.0, 0.0]);
        assert_eq!(discharge[0], [0.0, 5.0]);
        assert_relative_eq!(charge[10][0], 0.005, max_relative = 1e-12);
    }
}
