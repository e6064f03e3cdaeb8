//! Entropy sources that feed a [`Randomizer`](crate::Randomizer).
//!
//! An `EntropySource` exposes the minimal primitive surface every higher-level generator is built
//! on. Swapping the source swaps the underlying generation algorithm without touching any of the
//! composite logic.
use std::fmt::Debug;

mod crypto;
mod default;
mod fixed;
mod xorshift;

pub use crypto::CryptoSource;
pub use default::DefaultSource;
pub use fixed::FixedSource;
pub use xorshift::XorShiftSource;

/// An `EntropySource` is an oracle for uniformly distributed primitive values.
///
/// Implementations are not required to validate their inputs: a caller asking for
/// `next_int_in_range(lo, hi)` with `hi <= lo` gets backend-defined output. The
/// [`Randomizer`](crate::Randomizer) layer is responsible for guarding degenerate ranges.
pub trait EntropySource: Debug {
    /// Draw a uniformly distributed boolean.
    fn next_boolean(&mut self) -> bool;

    /// Draw an integer in `[0, n)`.
    fn next_int_below(&mut self, n: i64) -> i64;

    /// Draw an integer in `[lo, hi)`.
    fn next_int_in_range(&mut self, lo: i64, hi: i64) -> i64;

    /// Draw a float in `[0, 1)`.
    fn next_double_unit(&mut self) -> f64;
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    fn next_boolean(&mut self) -> bool {
        (**self).next_boolean()
    }

    fn next_int_below(&mut self, n: i64) -> i64 {
        (**self).next_int_below(n)
    }

    fn next_int_in_range(&mut self, lo: i64, hi: i64) -> i64 {
        (**self).next_int_in_range(lo, hi)
    }

    fn next_double_unit(&mut self) -> f64 {
        (**self).next_double_unit()
    }
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn next_boolean(&mut self) -> bool {
        (**self).next_boolean()
    }

    fn next_int_below(&mut self, n: i64) -> i64 {
        (**self).next_int_below(n)
    }

    fn next_int_in_range(&mut self, lo: i64, hi: i64) -> i64 {
        (**self).next_int_in_range(lo, hi)
    }

    fn next_double_unit(&mut self) -> f64 {
        (**self).next_double_unit()
    }
}

/// Scale a unit fraction into `[lo, hi)` by `lo + (hi - lo) * fraction`, truncating toward zero.
///
/// This is not rejection sampling, so wide ranges carry a slight bias. Floating-point rounding can
/// push the product up to `hi - lo` for fractions close to 1; the result is clamped back below
/// `hi` in that case. Degenerate ranges (`hi <= lo`) yield `lo`.
pub(crate) fn scale_to_range(lo: i64, hi: i64, fraction: f64) -> i64 {
    if hi <= lo {
        return lo;
    }
    let span = (hi as i128 - lo as i128) as f64;
    let offset = (span * fraction) as i128;
    let value = lo as i128 + offset;
    if value >= hi as i128 {
        hi - 1
    } else {
        value as i64
    }
}
