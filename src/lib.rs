//! A micro-benchmark harness that times an externally linked recursive
//! Fibonacci implementation against a locally defined equivalent and prints
//! results and elapsed tick counts to standard output.
//!
//! The default run computes `fib(30)` twice, once through a C-ABI call
//! boundary ([`fib::fib_linked`]) and once as a plain Rust call
//! ([`fib::fib_local`]), timing each invocation in isolation with a monotonic
//! clock and emitting four lines: linked result, its tick count, local
//! result, its tick count.
//!
//! The pieces are reusable: a [`Measurement`] abstraction with a wall-clock
//! default, a [`Routine`] wrapper for the code under test, a [`Harness`]
//! driver and pluggable [`report`](report/index.html) backends.
//!
//! [`fib::fib_linked`]: fib/fn.fib_linked.html
//! [`fib::fib_local`]: fib/fn.fib_local.html
//! [`Measurement`]: measurement/trait.Measurement.html
//! [`Routine`]: routine/trait.Routine.html
//! [`Harness`]: harness/struct.Harness.html

#![warn(missing_docs)]

pub mod cli;
pub mod fib;
mod format;
pub mod harness;
pub mod measurement;
pub mod report;
pub mod routine;
pub mod stats;

pub use crate::harness::Harness;
pub use crate::measurement::{Measurement, WallTime};
pub use crate::report::{BenchmarkId, MeasurementRecord};
pub use crate::routine::{Function, Routine};

/// A function that is opaque to the optimizer, used to prevent the compiler
/// from optimizing our benchmarks away.
///
/// This variant is stable-compatible, but it may cause some performance
/// overhead or fail to prevent code from being eliminated.
pub fn black_box<T>(dummy: T) -> T {
    unsafe {
        let ret = std::ptr::read_volatile(&dummy);
        std::mem::forget(dummy);
        ret
    }
}
