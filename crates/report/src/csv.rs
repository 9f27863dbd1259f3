//! Full-resolution CSV output.

use std::io::Write;

use rcsim_core::SimulationResult;
use uom::si::{electric_potential::volt, time::second};

use crate::ReportError;

/// Writes every sample of a result as CSV.
///
/// Format:
/// ```csv
/// time_s,charge_v,discharge_v,percent_charged
/// 0,0,5,0
/// 0.00005,0.24385287749642,4.75614712250358,4.877057549928
/// ```
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the writer fails.
pub fn write_csv<W: Write>(result: &SimulationResult, writer: &mut W) -> Result<(), ReportError> {
    writeln!(writer, "time_s,charge_v,discharge_v,percent_charged")?;
    for sample in &result.samples {
        writeln!(
            writer,
            "{},{},{},{}",
            sample.time.get::<second>(),
            sample.charge.get::<volt>(),
            sample.discharge.get::<volt>(),
            result.percent_charged(sample),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rcsim_core::{CircuitParameters, simulate};

    #[test]
    fn one_line_per_sample_plus_header() {
        let result = simulate(&CircuitParameters::default(), 100).unwrap();

        let mut out = Vec::new();
        write_csv(&result, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 102);
        assert_eq!(lines[0], "time_s,charge_v,discharge_v,percent_charged");
        assert_eq!(lines[1], "0,0,5,0");
    }

    #[test]
    fn values_round_trip_through_text() {
        let result = simulate(&CircuitParameters::default(), 100).unwrap();

        let mut out = Vec::new();
        write_csv(&result, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let row: Vec<f64> = text
            .lines()
            .nth(21)
            .unwrap()
            .split(',')
            .map(|field| field.parse().unwrap())
            .collect();

        let sample = result.samples[20];
        assert_relative_eq!(row[0], sample.time.get::<second>());
        assert_relative_eq!(row[1], sample.charge.get::<volt>());
        assert_relative_eq!(row[2], sample.discharge.get::<volt>());
    }

    #[test]
    fn writer_failure_is_reported() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk full"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let result = simulate(&CircuitParameters::default(), 4).unwrap();
        assert!(matches!(
            write_csv(&result, &mut Broken),
            Err(ReportError::Io(_))
        ));
    }
}
