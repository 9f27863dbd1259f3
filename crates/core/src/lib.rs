//! Transient response of first-order RC circuits.
//!
//! This crate computes how a capacitor charges and discharges through a
//! resistor, using the closed-form solution of the circuit equation:
//!
//! - [`CircuitParameters`] — resistance, capacitance, source voltage, and
//!   simulated duration as `uom` quantities
//! - [`RcCircuit`] — a [`Model`] mapping elapsed time to capacitor voltages
//! - [`sampler`] — evaluates the model at uniform steps and collects a
//!   [`SimulationResult`]
//! - [`format_engineering`] — short SI-prefixed display strings
//! - [`units`] — parses prefixed magnitudes such as `4.7k` or `100u`
//! - [`constraint`] — construction-time numeric checks used for validation

pub mod constraint;
pub mod sampler;
pub mod units;

mod circuit;
mod format;
mod model;
mod observer;

pub use circuit::{CircuitParameters, RcCircuit, Voltages};
pub use format::format_engineering;
pub use model::Model;
pub use observer::Observer;
pub use sampler::{
    DEFAULT_SAMPLE_COUNT, Event, MAX_SAMPLE_COUNT, SamplePoint, SimulationError, SimulationResult, simulate,
    simulate_observed,
};
