//! Plotting observer for charting charge and discharge curves.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use rcsim_core::{Event, Observer};
use uom::si::{electric_potential::volt, time::second};

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("RC transient").legend().y_max(5.5))?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    y_max: Option<f64>,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, automatic bounds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            y_max: None,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Extends the y-axis to include this value.
    ///
    /// Leaves headroom above the curves, e.g. `1.1 · Vs` for an RC chart.
    #[must_use]
    pub fn y_max(mut self, y_max: f64) -> Self {
        self.y_max = Some(y_max);
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts one point per trace from a sampler event.
pub trait Plottable<const N: usize> {
    /// The x-axis value shared by every trace.
    fn x(&self) -> f64;

    /// The y-axis value for each trace.
    fn traces(&self) -> [f64; N];
}

/// Plots time in seconds against charge and discharge voltage in volts.
impl Plottable<2> for Event {
    fn x(&self) -> f64 {
        self.sample.time.get::<second>()
    }

    fn traces(&self) -> [f64; 2] {
        [
            self.sample.charge.get::<volt>(),
            self.sample.discharge.get::<volt>(),
        ]
    }
}

/// An observer that collects trace data during a run and displays it via egui.
///
/// The const generic `N` is the number of traces. Each observer owns its
/// data and its window; a new run gets a new observer.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["Charge (V)", "Discharge (V)"]);
/// rcsim_core::simulate_observed(&params, 100, &mut obs)?;
/// obs.show(ShowConfig::new().title("RC transient").legend())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    pub fn record(&mut self, x: f64, traces: [f64; N]) {
        for (points, y) in self.data.iter_mut().zip(traces) {
            points.push([x, y]);
        }
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    legend: config.legend,
                    y_max: config.y_max,
                }))
            }),
        )
    }
}

impl<const N: usize, E> Observer<E> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) {
        self.record(event.x(), event.traces());
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to the sampler, which takes its
/// observer by value, so [`PlotObserver::show`] can be called afterwards.
impl<const N: usize, E> Observer<E> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) {
        (*self).observe(event);
    }
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    legend: bool,
    y_max: Option<f64>,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("rc_transient")
                .x_axis_label("Time (s)")
                .y_axis_label("Voltage (V)")
                .include_y(0.0);
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            if let Some(y_max) = self.y_max {
                plot = plot.include_y(y_max);
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(Line::new(plot_points).name(name));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rcsim_core::{CircuitParameters, simulate_observed};

    fn points(obs: &PlotObserver<2>, trace: usize) -> &[[f64; 2]] {
        &obs.data[trace]
    }

    #[test]
    fn records_both_curves_from_a_run() {
        let mut obs = PlotObserver::<2>::new(["Charge (V)", "Discharge (V)"]);
        simulate_observed(&CircuitParameters::default(), 10, &mut obs).unwrap();

        let charge = points(&obs, 0);
        let discharge = points(&obs, 1);
        assert_eq!(charge.len(), 11);
        assert_eq!(discharge.len(), 11);
        assert_eq!(charge[0], [0.0, 0.0]);
        assert_eq!(discharge[0], [0.0, 5.0]);
        assert_relative_eq!(charge[10][0], 0.005, max_relative = 1e-12);
    }

    #[test]
    fn record_appends_to_every_trace() {
        let mut obs: PlotObserver<2> = PlotObserver::new(["a", "b"]);
        obs.record(1.0, [10.0, 1.0]);
        obs.record(2.0, [20.0, 2.0]);
        assert_eq!(points(&obs, 0), [[1.0, 10.0], [2.0, 20.0]]);
        assert_eq!(points(&obs, 1), [[1.0, 1.0], [2.0, 2.0]]);
    }

    #[test]
    fn each_run_gets_its_own_data() {
        let params = CircuitParameters::default();

        let mut first = PlotObserver::<2>::new(["c", "d"]);
        simulate_observed(&params, 4, &mut first).unwrap();

        let mut second = PlotObserver::<2>::new(["c", "d"]);
        simulate_observed(&params.source_voltage_si(10.0), 4, &mut second).unwrap();

        assert_eq!(points(&first, 1)[0], [0.0, 5.0]);
        assert_eq!(points(&second, 1)[0], [0.0, 10.0]);
    }
}
