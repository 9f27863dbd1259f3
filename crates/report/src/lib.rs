//! Text presentation of RC transient simulations.
//!
//! Turns a [`SimulationResult`] into the pieces a user reads:
//!
//! - [`Summary`] — headline time constant and maximum voltage
//! - [`Table`] — a down-sampled table with a percent-charged column
//! - [`write_csv`] — the full-resolution series as CSV
//! - [`Worksheet`] — the circuit equations with the user's values substituted
//!
//! [`SimulationResult`]: rcsim_core::SimulationResult

mod csv;
mod error;
mod summary;
mod table;
mod worksheet;

pub use csv::write_csv;
pub use error::ReportError;
pub use summary::Summary;
pub use table::{Table, TableRow, default_stride};
pub use worksheet::Worksheet;
