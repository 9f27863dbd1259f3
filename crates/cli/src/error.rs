use std::{io, path::PathBuf};

use rcsim_core::SimulationError;
use rcsim_report::ReportError;
use thiserror::Error;

/// Errors that stop a command-line run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read config file {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    #[cfg(feature = "plot")]
    #[error("failed to open chart window: {0}")]
    Plot(#[from] eframe::Error),
}
