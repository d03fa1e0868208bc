//! Output backends for measurement results.
//!
//! `TickReport` is the default and reproduces the original contract: per
//! routine, a result line followed by a raw tick-count line, nothing else.
//! `CliReport` is the colored human-readable report and `JsonReport` the
//! machine-readable one.

use crate::format;
use crate::measurement::ValueFormatter;
use crate::stats::Sample;
use anes::{Attribute, Color, ResetAttributes, SetAttribute, SetForegroundColor};
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

/// Identifies one benchmarked routine together with its input index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BenchmarkId {
    /// Routine name, eg. `linked` or `local`.
    pub name: String,
    /// The Fibonacci index the routine was invoked with.
    pub index: u32,
}

impl BenchmarkId {
    /// Construct an id from a routine name and its input index.
    pub fn new<S: Into<String>>(name: S, index: u32) -> BenchmarkId {
        BenchmarkId {
            name: name.into(),
            index,
        }
    }
}

impl fmt::Display for BenchmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.index)
    }
}

/// Everything measured for one routine, plus derived statistics.
#[derive(Clone, Debug, Serialize)]
pub struct MeasurementRecord {
    /// Which routine was measured.
    pub id: BenchmarkId,
    /// The computed Fibonacci value.
    pub result: u64,
    /// Unit of the measured values, as reported by the measurement's
    /// formatter.
    pub unit: &'static str,
    /// One measured tick count per isolated invocation.
    pub ticks: Vec<u64>,
    /// Total measured ticks across all invocations, summed by the
    /// measurement itself.
    pub total: u64,
    /// The representative tick count: the median of `ticks`. This is the
    /// value the default report prints.
    pub typical: u64,
    /// Arithmetic mean of `ticks`.
    pub mean: f64,
    /// Median of `ticks`.
    pub median: f64,
    /// Sample standard deviation of `ticks`; absent for a single sample.
    pub std_dev: Option<f64>,
}

impl MeasurementRecord {
    /// Derives a record from raw measured tick counts and their measured
    /// total.
    ///
    /// # Panics
    ///
    /// Panics if `ticks` is empty.
    pub fn from_ticks(
        id: BenchmarkId,
        result: u64,
        ticks: Vec<u64>,
        total: u64,
        unit: &'static str,
    ) -> MeasurementRecord {
        assert!(!ticks.is_empty());

        let (mean, median, std_dev) = if ticks.len() > 1 {
            let values = ticks.iter().map(|&t| t as f64).collect::<Vec<f64>>();
            let sample = Sample::new(&values);
            let mean = sample.mean();
            let median = sample.percentiles().median();
            (mean, median, Some(sample.std_dev(Some(mean))))
        } else {
            let only = ticks[0] as f64;
            (only, only, None)
        };

        MeasurementRecord {
            id,
            result,
            unit,
            total,
            typical: median.round() as u64,
            mean,
            median,
            std_dev,
            ticks,
        }
    }

    fn min_tick(&self) -> f64 {
        // NB records always hold at least one tick
        self.ticks.iter().min().map(|&t| t as f64).unwrap_or(0.0)
    }

    fn max_tick(&self) -> f64 {
        self.ticks.iter().max().map(|&t| t as f64).unwrap_or(0.0)
    }
}

/// Something that can render measurement results.
pub trait Report {
    /// Called once per routine, after all of its samples have been taken.
    fn measurement_complete(
        &mut self,
        record: &MeasurementRecord,
        formatter: &dyn ValueFormatter,
    ) -> io::Result<()>;

    /// Called after a pair of routines has completed, with the first as the
    /// baseline. Reports that have no comparison concept ignore it.
    fn comparison(
        &mut self,
        _baseline: &MeasurementRecord,
        _candidate: &MeasurementRecord,
    ) -> io::Result<()> {
        Ok(())
    }
}

/// The default report: for each routine, the decimal result on one line and
/// the elapsed tick count on the next. No labels, no units, no extra output,
/// so a two-routine run emits exactly four lines.
pub struct TickReport<W: Write> {
    out: W,
}

impl TickReport<io::Stdout> {
    /// A tick report writing to standard output.
    pub fn stdout() -> TickReport<io::Stdout> {
        TickReport::new(io::stdout())
    }
}

impl<W: Write> TickReport<W> {
    /// A tick report writing to `out`.
    pub fn new(out: W) -> TickReport<W> {
        TickReport { out }
    }
}

impl<W: Write> Report for TickReport<W> {
    fn measurement_complete(
        &mut self,
        record: &MeasurementRecord,
        _formatter: &dyn ValueFormatter,
    ) -> io::Result<()> {
        writeln!(self.out, "{}", record.result)?;
        writeln!(self.out, "{}", record.typical)?;
        self.out.flush()
    }
}

/// One JSON object per record, on its own line.
pub struct JsonReport<W: Write> {
    out: W,
}

impl JsonReport<io::Stdout> {
    /// A JSON report writing to standard output.
    pub fn stdout() -> JsonReport<io::Stdout> {
        JsonReport::new(io::stdout())
    }
}

impl<W: Write> JsonReport<W> {
    /// A JSON report writing to `out`.
    pub fn new(out: W) -> JsonReport<W> {
        JsonReport { out }
    }
}

impl<W: Write> Report for JsonReport<W> {
    fn measurement_complete(
        &mut self,
        record: &MeasurementRecord,
        _formatter: &dyn ValueFormatter,
    ) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// How talkative the human-readable report is.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CliVerbosity {
    /// Only the time line per routine.
    Quiet,
    /// Id, result and time lines.
    Normal,
    /// Everything, including per-sample statistics.
    Verbose,
}

/// Human-readable console report with optional ANSI coloring.
pub struct CliReport<W: Write> {
    out: W,
    enable_text_coloring: bool,
    verbosity: CliVerbosity,
}

impl CliReport<io::Stdout> {
    /// A console report writing to standard output.
    pub fn stdout(enable_text_coloring: bool, verbosity: CliVerbosity) -> CliReport<io::Stdout> {
        CliReport::new(io::stdout(), enable_text_coloring, verbosity)
    }
}

impl<W: Write> CliReport<W> {
    /// A console report writing to `out`.
    pub fn new(out: W, enable_text_coloring: bool, verbosity: CliVerbosity) -> CliReport<W> {
        CliReport {
            out,
            enable_text_coloring,
            verbosity,
        }
    }

    fn with_color(&self, color: Color, s: &str) -> String {
        if self.enable_text_coloring {
            format!("{}{}{}", SetForegroundColor(color), s, ResetAttributes)
        } else {
            String::from(s)
        }
    }

    fn green(&self, s: &str) -> String {
        self.with_color(Color::DarkGreen, s)
    }

    fn red(&self, s: &str) -> String {
        self.with_color(Color::DarkRed, s)
    }

    fn bold(&self, s: String) -> String {
        if self.enable_text_coloring {
            format!("{}{}{}", SetAttribute(Attribute::Bold), s, ResetAttributes)
        } else {
            s
        }
    }

    fn faint(&self, s: String) -> String {
        if self.enable_text_coloring {
            format!("{}{}{}", SetAttribute(Attribute::Faint), s, ResetAttributes)
        } else {
            s
        }
    }
}

impl<W: Write> Report for CliReport<W> {
    fn measurement_complete(
        &mut self,
        record: &MeasurementRecord,
        formatter: &dyn ValueFormatter,
    ) -> io::Result<()> {
        let time_line = format!(
            "time:   [{} {} {}]",
            self.faint(formatter.format_value(record.min_tick())),
            self.bold(formatter.format_value(record.mean)),
            self.faint(formatter.format_value(record.max_tick())),
        );

        if self.verbosity == CliVerbosity::Quiet {
            // `{:<24}` does not reach through the Display impl, so pad the
            // rendered id instead.
            let id = record.id.to_string();
            writeln!(self.out, "{:<24}{}", id, time_line)?;
            return self.out.flush();
        }

        let id_line = self.green(&record.id.to_string());
        writeln!(self.out, "{}", id_line)?;
        writeln!(self.out, "  result: {}", format::integer(record.result))?;
        writeln!(self.out, "  {}", time_line)?;

        if self.verbosity == CliVerbosity::Verbose {
            writeln!(self.out, "  samples: {}", record.ticks.len())?;
            writeln!(
                self.out,
                "  total:  {}",
                formatter.format_value(record.total as f64)
            )?;
            writeln!(
                self.out,
                "  median: {}",
                formatter.format_value(record.median)
            )?;
            if let Some(std_dev) = record.std_dev {
                writeln!(self.out, "  std dev: {}", formatter.format_value(std_dev))?;
            }
        }

        self.out.flush()
    }

    fn comparison(
        &mut self,
        baseline: &MeasurementRecord,
        candidate: &MeasurementRecord,
    ) -> io::Result<()> {
        if self.verbosity == CliVerbosity::Quiet {
            return Ok(());
        }

        let pct = candidate.mean / baseline.mean - 1.0;
        let change = format::change(pct);
        let change = if pct < 0.0 {
            self.green(&change)
        } else {
            self.red(&change)
        };

        writeln!(
            self.out,
            "{} vs {}: {} change",
            candidate.id, baseline.id, change
        )?;
        self.out.flush()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::measurement::{Measurement, WallTime};

    fn record(name: &str, ticks: Vec<u64>) -> MeasurementRecord {
        let total = ticks.iter().sum();
        MeasurementRecord::from_ticks(BenchmarkId::new(name, 30), 1_346_269, ticks, total, "ns")
    }

    #[test]
    fn tick_report_prints_two_lines_per_record() {
        let mut out = Vec::new();
        {
            let mut report = TickReport::new(&mut out);
            report
                .measurement_complete(&record("linked", vec![1200]), WallTime.formatter())
                .unwrap();
            report
                .measurement_complete(&record("local", vec![800]), WallTime.formatter())
                .unwrap();
        }

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["1346269", "1200", "1346269", "800"]);
    }

    #[test]
    fn tick_report_uses_median_of_many_samples() {
        let mut out = Vec::new();
        {
            let mut report = TickReport::new(&mut out);
            report
                .measurement_complete(&record("local", vec![900, 100, 500]), WallTime.formatter())
                .unwrap();
        }

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().nth(1), Some("500"));
    }

    #[test]
    fn json_report_round_trips() {
        let mut out = Vec::new();
        {
            let mut report = JsonReport::new(&mut out);
            report
                .measurement_complete(&record("linked", vec![1200, 1400]), WallTime.formatter())
                .unwrap();
        }

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["id"]["name"], "linked");
        assert_eq!(value["id"]["index"], 30);
        assert_eq!(value["result"], 1_346_269);
        assert_eq!(value["unit"], "ns");
        assert_eq!(value["ticks"].as_array().unwrap().len(), 2);
        assert_eq!(value["total"], 2600);
        assert_eq!(value["mean"], 1300.0);
    }

    #[test]
    fn cli_report_mentions_result_and_time() {
        let mut out = Vec::new();
        {
            let mut report = CliReport::new(&mut out, false, CliVerbosity::Normal);
            report
                .measurement_complete(&record("local", vec![800]), WallTime.formatter())
                .unwrap();
        }

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("local/30"));
        assert!(text.contains("1,346,269"));
        assert!(text.contains("time:"));
    }

    #[test]
    fn cli_comparison_reports_relative_change() {
        let mut out = Vec::new();
        {
            let mut report = CliReport::new(&mut out, false, CliVerbosity::Normal);
            report
                .comparison(&record("linked", vec![1000]), &record("local", vec![500]))
                .unwrap();
        }

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("local/30 vs linked/30"));
        assert!(text.contains("\u{2212}50.00"));
    }

    #[test]
    fn statistics_degrade_for_a_single_sample() {
        let rec = record("local", vec![123]);
        assert_eq!(rec.typical, 123);
        assert_eq!(rec.total, 123);
        assert_eq!(rec.mean, 123.0);
        assert_eq!(rec.median, 123.0);
        assert!(rec.std_dev.is_none());
    }
}
