//! Run settings merged from a TOML file and command-line arguments.
//!
//! A config file may set any subset of values:
//!
//! ```toml
//! [circuit]
//! resistance = "4.7k"
//! capacitance = "100u"
//! voltage = 12
//! duration = 2.5
//!
//! [output]
//! samples = 50
//! stride = 5
//! format = "csv"
//! explain = true
//! ```
//!
//! Command-line arguments take precedence over the file, and anything left
//! unset falls back to a 1 kΩ, 1 µF, 5 V circuit observed for 5 ms.

use std::path::Path;

use clap::ValueEnum;
use rcsim_core::{CircuitParameters, DEFAULT_SAMPLE_COUNT, units::Scaled};
use rcsim_report::default_stride;
use serde::Deserialize;

use crate::{Cli, error::CliError};

/// How simulation results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Summary and a down-sampled table.
    #[default]
    Table,
    /// Every sample as CSV.
    Csv,
}

/// Contents of a config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub circuit: CircuitSection,
    pub output: OutputSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CircuitSection {
    pub resistance: Option<Scaled>,
    pub capacitance: Option<Scaled>,
    pub voltage: Option<Scaled>,
    pub duration: Option<Scaled>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    pub samples: Option<usize>,
    pub stride: Option<usize>,
    pub format: Option<OutputFormat>,
    pub explain: Option<bool>,
}

impl FileConfig {
    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid config TOML.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&text).map_err(|source| CliError::ParseConfig {
            path: path.to_owned(),
            source,
        })
    }

    /// Parses config TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid config TOML.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Fully resolved settings for a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub params: CircuitParameters,
    pub samples: usize,
    pub stride: usize,
    pub format: OutputFormat,
    pub explain: bool,
}

impl Settings {
    /// Merges arguments over file values over defaults.
    #[must_use]
    pub fn resolve(cli: &Cli, file: &FileConfig) -> Self {
        let circuit = &file.circuit;
        let output = &file.output;

        let mut params = CircuitParameters::default();
        if let Some(r) = cli.resistance.or(circuit.resistance) {
            params = params.resistance_si(r.to_si());
        }
        if let Some(c) = cli.capacitance.or(circuit.capacitance) {
            params = params.capacitance_si(c.to_si());
        }
        if let Some(v) = cli.voltage.or(circuit.voltage) {
            params = params.source_voltage_si(v.to_si());
        }
        if let Some(t) = cli.duration.or(circuit.duration) {
            params = params.duration_si(t.to_si());
        }

        let samples = cli
            .samples
            .or(output.samples)
            .unwrap_or(DEFAULT_SAMPLE_COUNT);
        let stride = cli
            .stride
            .or(output.stride)
            .unwrap_or_else(|| default_stride(samples));

        Self {
            params,
            samples,
            stride,
            format: cli.format.or(output.format).unwrap_or_default(),
            explain: cli.explain || output.explain.unwrap_or(false),
        }
    }
}
