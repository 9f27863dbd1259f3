//! Reusable observers for RC transient simulations.
//!
//! Observers receive a [`rcsim_core::Event`] for every sample the sampler
//! computes.
//!
//! - [`TracingObserver`] — logs each sample as a `tracing` event
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for charting the charge and discharge
//!   curves via egui. This feature adds dependencies on `eframe` and
//!   `egui_plot`.

mod tracing_observer;

#[cfg(feature = "plot")]
mod plot;

pub use tracing_observer::TracingObserver;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
