use crate::black_box;
use crate::measurement::Measurement;

/// A computation that the harness can measure.
///
/// `sample` is provided: it takes `count` measurements, each wrapping exactly
/// one invocation between `Measurement::start` and `Measurement::end`.
/// Measurements are taken in isolation and are never cumulative, so one slow
/// sample cannot leak into the next.
pub trait Routine<M: Measurement> {
    /// Run the computation once for the given index and return its result.
    fn invoke(&mut self, index: u32) -> u64;

    /// Takes `count` isolated measurements of the computation at `index`.
    ///
    /// Returns the computed result together with one measured value per
    /// invocation. The index and the result are both laundered through
    /// `black_box` so the computation cannot be const-folded away.
    fn sample(&mut self, m: &M, index: u32, count: usize) -> (u64, Vec<M::Value>) {
        debug_assert!(count > 0);

        let mut values = Vec::with_capacity(count);
        let mut result = 0;

        for _ in 0..count {
            let start = m.start();
            result = black_box(self.invoke(black_box(index)));
            values.push(m.end(start));
        }

        (result, values)
    }
}

/// Wraps an `FnMut(u32) -> u64` closure (or plain function) as a
/// [`Routine`](trait.Routine.html).
pub struct Function<F: FnMut(u32) -> u64> {
    f: F,
}
impl<F: FnMut(u32) -> u64> Function<F> {
    /// Wrap a closure for benchmarking.
    pub fn new(f: F) -> Function<F> {
        Function { f }
    }
}

impl<M: Measurement, F: FnMut(u32) -> u64> Routine<M> for Function<F> {
    fn invoke(&mut self, index: u32) -> u64 {
        (self.f)(index)
    }
}
