use crate::stats::float::Float;
use cast::usize;

/// A "view" into the percentiles of a sample
///
/// This "view" makes consecutive computations of percentiles much faster
/// (`O(1)`)
pub struct Percentiles<A>(Box<[A]>)
where
    A: Float;

impl<A> Percentiles<A>
where
    A: Float,
    usize: cast::From<A, Output = Result<usize, cast::Error>>,
{
    /// Builds a view from data that has already been sorted in ascending
    /// order and contains no `NaN`s.
    pub(crate) fn new(sorted: Box<[A]>) -> Percentiles<A> {
        debug_assert!(!sorted.is_empty());
        Percentiles(sorted)
    }

    /// Returns the percentile at `p`%, interpolating linearly between ranks
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the closed `[0, 100]` range
    pub fn at(&self, p: A) -> A {
        let _0 = A::cast(0);
        let _100 = A::cast(100);

        assert!(p >= _0 && p <= _100);

        let len = self.0.len() - 1;

        if p == _100 {
            return self.0[len];
        }

        let rank = (p / _100) * A::cast(len);
        let integer = rank.floor();
        let fraction = rank - integer;
        let n = usize(integer).unwrap();
        let floor = self.0[n];
        let ceiling = self.0[n + 1];

        floor + (ceiling - floor) * fraction
    }

    /// Returns the 50th percentile
    pub fn median(&self) -> A {
        self.at(A::cast(50))
    }
}

#[cfg(test)]
mod test {
    use super::Percentiles;
    use approx::assert_relative_eq;

    #[test]
    fn median_of_odd_sample() {
        let p = Percentiles::new(vec![1.0f64, 2.0, 9.0].into_boxed_slice());
        assert_relative_eq!(p.median(), 2.0);
    }

    #[test]
    fn median_interpolates_even_sample() {
        let p = Percentiles::new(vec![1.0f64, 2.0, 3.0, 9.0].into_boxed_slice());
        assert_relative_eq!(p.median(), 2.5);
    }

    #[test]
    fn endpoints() {
        let p = Percentiles::new(vec![1.0f64, 5.0, 9.0].into_boxed_slice());
        assert_relative_eq!(p.at(0.0), 1.0);
        assert_relative_eq!(p.at(100.0), 9.0);
    }
}
