use std::fmt;

use rcsim_core::SimulationResult;
use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Time},
    time::second,
};

use crate::ReportError;

/// One row of a down-sampled result table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    /// Index of the sample this row was taken from.
    pub step: usize,
    pub time: Time,
    pub charge: ElectricPotential,
    pub discharge: ElectricPotential,
    pub percent_charged: f64,
}

/// A readable subset of a simulation's samples.
///
/// Keeps every `stride`-th sample plus the final sample, so the table always
/// ends at the simulated duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: Vec<TableRow>,
}

/// Returns a stride that yields about ten rows, and at least 1.
#[must_use]
pub fn default_stride(sample_count: usize) -> usize {
    (sample_count / 10).max(1)
}

impl Table {
    /// Builds a table from every `stride`-th sample and the last sample.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidStride`] if `stride` is zero.
    pub fn downsample(result: &SimulationResult, stride: usize) -> Result<Self, ReportError> {
        if stride == 0 {
            return Err(ReportError::InvalidStride);
        }

        let last = result.samples.len().saturating_sub(1);
        let rows = result
            .samples
            .iter()
            .enumerate()
            .filter(|&(step, _)| step % stride == 0 || step == last)
            .map(|(step, sample)| TableRow {
                step,
                time: sample.time,
                charge: sample.charge,
                discharge: sample.discharge,
                percent_charged: result.percent_charged(sample),
            })
            .collect();

        Ok(Self { rows })
    }

    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }
}

impl fmt::Display for TableRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>10.3} {:>12.3} {:>14.3} {:>9}",
            self.time.get::<second>(),
            self.charge.get::<volt>(),
            self.discharge.get::<volt>(),
            format!("{:.1}%", self.percent_charged),
        )
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>10} {:>12} {:>14} {:>9}",
            "t (s)", "charge (V)", "discharge (V)", "charged"
        )?;
        for row in &self.rows {
            write!(f, "\n{row}")?;
        }
        Ok(())
    }
}
