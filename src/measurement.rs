//! This module defines a trait that can be used to plug different measurements
//! (eg. Unix's Processor Time, CPU or GPU performance counters, etc.) into the
//! harness. It also includes the [WallTime](struct.WallTime.html) struct which
//! defines the default wall-clock time measurement.

use crate::format;
use std::time::{Duration, Instant};

/// Trait providing functions to format measured values to string so that they
/// can be displayed on the command line. The functions of this trait take
/// measured values in f64 form; implementors can assume that the values are of
/// the same scale as those produced by the associated
/// [Measurement](trait.Measurement.html) (eg. if your measurement produces
/// values in nanoseconds, the values passed to the formatter will be in
/// nanoseconds).
pub trait ValueFormatter {
    /// Format the value (with appropriate unit) and return it as a string.
    fn format_value(&self, value: f64) -> String;

    /// Scale the values and return a unit string designed for machines.
    ///
    /// For example, this is used for the JSON output. Implementations should
    /// modify the given values slice to apply the desired scaling (if any) and
    /// return a string representing the unit the modified values are in.
    fn scale_for_machines(&self, values: &mut [f64]) -> &'static str;
}

/// Trait for all types which define something the harness can measure. The
/// only measurement currently provided is [WallTime](struct.WallTime.html),
/// but downstream code may define more.
///
/// This trait defines two core methods, `start` and `end`. `start` is called
/// before a single invocation of the routine under test to produce some
/// intermediate value (for example, the wall-clock time at that point) and
/// `end` is called after the invocation with the value returned by `start`.
pub trait Measurement {
    /// This type represents an intermediate value for the measurements. It
    /// will be produced by the start function and passed to the end function.
    /// An example might be the wall-clock time as of the `start` call.
    type Intermediate;

    /// This type is the measured value. An example might be the elapsed
    /// wall-clock time between the `start` and `end` calls.
    type Value;

    /// Called before invoking the routine under test.
    fn start(&self) -> Self::Intermediate;

    /// Called after invoking the routine under test to get the measured value.
    fn end(&self, i: Self::Intermediate) -> Self::Value;

    /// Combine two values. The harness sums the per-invocation values of a
    /// series of measurements to produce the routine's total.
    fn add(&self, v1: &Self::Value, v2: &Self::Value) -> Self::Value;

    /// Return a "zero" value for the Value type which can be added to another
    /// value.
    fn zero(&self) -> Self::Value;

    /// Converts the measured value to f64 so that it can be used in
    /// statistical analysis.
    fn to_f64(&self, value: &Self::Value) -> f64;

    /// Return a trait-object reference to the value formatter for this
    /// measurement.
    fn formatter(&self) -> &dyn ValueFormatter;
}

pub(crate) struct DurationFormatter;
impl ValueFormatter for DurationFormatter {
    fn format_value(&self, ns: f64) -> String {
        format::time(ns)
    }

    fn scale_for_machines(&self, _values: &mut [f64]) -> &'static str {
        // no scaling is needed
        "ns"
    }
}

/// `WallTime` is the default measurement. It measures the elapsed time of a
/// single invocation of the routine under test.
///
/// It is backed by `std::time::Instant`, a monotonic clock, so end timestamps
/// never precede start timestamps and measured values are never negative. The
/// measured `Duration` is reported downstream as an integer nanosecond tick
/// count.
pub struct WallTime;
impl Measurement for WallTime {
    type Intermediate = Instant;
    type Value = Duration;

    fn start(&self) -> Self::Intermediate {
        Instant::now()
    }
    fn end(&self, i: Self::Intermediate) -> Self::Value {
        i.elapsed()
    }
    fn add(&self, v1: &Self::Value, v2: &Self::Value) -> Self::Value {
        *v1 + *v2
    }
    fn zero(&self) -> Self::Value {
        Duration::from_secs(0)
    }
    fn to_f64(&self, val: &Self::Value) -> f64 {
        val.as_nanos() as f64
    }
    fn formatter(&self) -> &dyn ValueFormatter {
        &DurationFormatter
    }
}

#[cfg(test)]
mod test {
    use super::{Measurement, ValueFormatter, WallTime};
    use std::time::Duration;

    #[test]
    fn walltime_sums_values_from_zero() {
        let m = WallTime;
        let total = m.add(&m.zero(), &Duration::from_nanos(30));
        let total = m.add(&total, &Duration::from_nanos(12));
        assert_eq!(m.to_f64(&total), 42.0);
        assert_eq!(m.to_f64(&m.zero()), 0.0);
    }

    #[test]
    fn walltime_is_monotonic() {
        let m = WallTime;
        let start = m.start();
        let elapsed = m.end(start);
        assert!(m.to_f64(&elapsed) >= 0.0);
    }

    #[test]
    fn walltime_reports_nanoseconds() {
        let mut values = [1.0, 2.0];
        assert_eq!(WallTime.formatter().scale_for_machines(&mut values), "ns");
        assert_eq!(values, [1.0, 2.0]);
    }
}
