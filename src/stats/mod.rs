//! Statistics over measured samples.
//!
//! A trimmed univariate kit: enough to summarize a handful of isolated
//! measurements with min/max/mean/standard-deviation and percentiles.

mod float;
mod percentiles;
mod sample;

pub use self::float::Float;
pub use self::percentiles::Percentiles;
pub use self::sample::Sample;

fn sum<A>(xs: &[A]) -> A
where
    A: Float,
{
    use std::ops::Add;

    xs.iter().cloned().fold(A::cast(0), Add::add)
}
