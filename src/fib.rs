//! The two recursive Fibonacci implementations under test.
//!
//! Both compute the recurrence `F(0) = F(1) = 1`, `F(n) = F(n-2) + F(n-1)`,
//! which runs one ahead of the textbook sequence. The offset is part of the
//! workload being measured and is preserved as-is.
//!
//! Overflow for large `n` is not handled; the routines are meant to be
//! measured, not hardened, and checking would change the code under test.

/// Index computed when none is given on the command line.
pub const DEFAULT_INDEX: u32 = 30;

/// Recursive Fibonacci behind an explicit foreign-call boundary.
///
/// The C ABI plus `#[inline(never)]` keep every call (including the
/// recursive ones) out of reach of the inliner, standing in for the
/// externally linked routine this harness compares against.
#[no_mangle]
#[inline(never)]
pub extern "C" fn fib_linked(n: u32) -> u64 {
    if n <= 1 {
        1
    } else {
        fib_linked(n - 2) + fib_linked(n - 1)
    }
}

/// Recursive Fibonacci as a plain Rust function, the local comparator.
pub fn fib_local(n: u32) -> u64 {
    if n <= 1 {
        1
    } else {
        fib_local(n - 2) + fib_local(n - 1)
    }
}
