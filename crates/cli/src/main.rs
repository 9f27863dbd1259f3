use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use rcsim_core::{Event, Observer, simulate_observed, units::Scaled};
use rcsim_observers::TracingObserver;
use rcsim_report::{Summary, Table, Worksheet, write_csv};
use tracing_subscriber::EnvFilter;

mod config;
mod error;

use config::{FileConfig, OutputFormat, Settings};
use error::CliError;

/// Charge and discharge response of an RC circuit
#[derive(Debug, Parser)]
#[command(name = "rcsim", version)]
struct Cli {
    /// Resistance in ohms, with optional SI prefix (e.g. 4.7k)
    #[arg(long, value_parser = ohms)]
    resistance: Option<Scaled>,

    /// Capacitance in farads, with optional SI prefix (e.g. 100u)
    #[arg(long, value_parser = farads)]
    capacitance: Option<Scaled>,

    /// Source voltage in volts
    #[arg(long, value_parser = volts, allow_negative_numbers = true)]
    voltage: Option<Scaled>,

    /// Simulated duration in seconds, with optional SI prefix (e.g. 5m)
    #[arg(long, value_parser = seconds)]
    duration: Option<Scaled>,

    /// Number of sampling intervals
    #[arg(long)]
    samples: Option<usize>,

    /// Show every Nth sample in the table
    #[arg(long)]
    stride: Option<usize>,

    /// TOML file with circuit and output settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Print the circuit equations with values substituted
    #[arg(long)]
    explain: bool,

    /// Open a chart of the charge and discharge curves
    #[cfg(feature = "plot")]
    #[arg(long)]
    plot: bool,
}

fn ohms(text: &str) -> Result<Scaled, rcsim_core::units::UnitError> {
    Scaled::parse_with_unit(text, "Ω")
}

fn farads(text: &str) -> Result<Scaled, rcsim_core::units::UnitError> {
    Scaled::parse_with_unit(text, "F")
}

fn volts(text: &str) -> Result<Scaled, rcsim_core::units::UnitError> {
    Scaled::parse_with_unit(text, "V")
}

fn seconds(text: &str) -> Result<Scaled, rcsim_core::units::UnitError> {
    Scaled::parse_with_unit(text, "s")
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let file = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(cli, &file);
    tracing::info!(?settings, "resolved settings");

    let mut logger = TracingObserver::new();
    #[cfg(feature = "plot")]
    let mut chart = rcsim_observers::PlotObserver::<2>::new(["Charge (V)", "Discharge (V)"]);

    let result = simulate_observed(&settings.params, settings.samples, |event: &Event| {
        logger.observe(event);
        #[cfg(feature = "plot")]
        chart.observe(event);
    })?;
    tracing::debug!(samples = logger.seen(), "simulation observed");

    let mut out = io::stdout().lock();
    match settings.format {
        OutputFormat::Table => {
            writeln!(out, "{}", Summary::from_result(&result))?;
            writeln!(out)?;
            writeln!(out, "{}", Table::downsample(&result, settings.stride)?)?;
        }
        OutputFormat::Csv => write_csv(&result, &mut out)?,
    }

    if settings.explain {
        writeln!(out)?;
        writeln!(out, "{}", Worksheet::from_params(&settings.params))?;
    }
    drop(out);

    #[cfg(feature = "plot")]
    show_chart(cli, chart, &result)?;

    Ok(())
}

/// Opens the chart window when requested, leaving headroom above `Vs`.
#[cfg(feature = "plot")]
fn show_chart(
    cli: &Cli,
    chart: rcsim_observers::PlotObserver<2>,
    result: &rcsim_core::SimulationResult,
) -> Result<(), CliError> {
    use rcsim_observers::ShowConfig;

    if cli.plot {
        let y_max = 1.1 * result.steady_state_voltage.value;
        chart.show(
            ShowConfig::new()
                .title("RC transient response")
                .legend()
                .y_max(y_max),
        )?;
    }
    Ok(())
}
