//! The benchmark driver.

use crate::fib::DEFAULT_INDEX;
use crate::measurement::{Measurement, WallTime};
use crate::report::{BenchmarkId, MeasurementRecord, Report, TickReport};
use crate::routine::Routine;
use std::io;

/// Number of isolated measurements taken per routine unless configured
/// otherwise. One measurement per routine is the original contract.
pub const DEFAULT_SAMPLE_COUNT: usize = 1;

/// Runs routines strictly sequentially: each routine is sampled to completion
/// and reported before the next one starts. A [`MeasurementRecord`] is derived
/// per routine, handed to the configured [`Report`] and retained for
/// programmatic use.
///
/// [`MeasurementRecord`]: ../report/struct.MeasurementRecord.html
/// [`Report`]: ../report/trait.Report.html
pub struct Harness<M: Measurement = WallTime> {
    measurement: M,
    fib_index: u32,
    sample_count: usize,
    report: Box<dyn Report>,
    records: Vec<MeasurementRecord>,
}

impl Default for Harness<WallTime> {
    /// Wall-clock measurement, index 30, one sample per routine, raw tick
    /// output on stdout.
    fn default() -> Harness<WallTime> {
        Harness::new(WallTime)
    }
}

impl<M: Measurement> Harness<M> {
    /// Creates a harness timing with the given measurement.
    pub fn new(measurement: M) -> Harness<M> {
        Harness {
            measurement,
            fib_index: DEFAULT_INDEX,
            sample_count: DEFAULT_SAMPLE_COUNT,
            report: Box::new(TickReport::stdout()),
            records: Vec::new(),
        }
    }

    /// Changes the Fibonacci index routines are invoked with.
    pub fn fib_index(mut self, index: u32) -> Harness<M> {
        self.fib_index = index;
        self
    }

    /// Changes the number of isolated measurements taken per routine.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    pub fn sample_count(mut self, count: usize) -> Harness<M> {
        assert!(count > 0, "sample count must be at least 1");
        self.sample_count = count;
        self
    }

    /// Installs the report measurement results are rendered with.
    pub fn with_report(mut self, report: Box<dyn Report>) -> Harness<M> {
        self.report = report;
        self
    }

    /// Samples `routine` at the configured index and reports the outcome.
    ///
    /// The routine runs to completion (all samples taken) before any output
    /// for it is emitted.
    pub fn bench<R: Routine<M>>(&mut self, name: &str, mut routine: R) -> io::Result<()> {
        let (result, values) =
            routine.sample(&self.measurement, self.fib_index, self.sample_count);

        let ticks = values
            .iter()
            .map(|v| self.measurement.to_f64(v) as u64)
            .collect::<Vec<u64>>();
        let total = values
            .iter()
            .fold(self.measurement.zero(), |acc, v| self.measurement.add(&acc, v));
        let total = self.measurement.to_f64(&total) as u64;
        let unit = self.measurement.formatter().scale_for_machines(&mut []);

        let record = MeasurementRecord::from_ticks(
            BenchmarkId::new(name, self.fib_index),
            result,
            ticks,
            total,
            unit,
        );
        self.report
            .measurement_complete(&record, self.measurement.formatter())?;
        self.records.push(record);

        Ok(())
    }

    /// Reports the most recently benched routine relative to the one benched
    /// before it. Does nothing until two routines have run.
    pub fn compare(&mut self) -> io::Result<()> {
        if let [.., baseline, candidate] = self.records.as_slice() {
            self.report.comparison(baseline, candidate)?;
        }
        Ok(())
    }

    /// The records produced so far, in bench order.
    pub fn records(&self) -> &[MeasurementRecord] {
        &self.records
    }
}
