use crate::source::{scale_to_range, EntropySource};
use rand::rngs::OsRng;
use rand::RngCore;

/// A `CryptoSource` draws raw bytes from the operating system's cryptographically secure generator.
///
/// The source holds no state of its own and is safe to use from any number of threads. Integer
/// ranges are produced by scaling a unit fraction rather than by rejection sampling, so they carry
/// the same slight bias as [`XorShiftSource`](crate::source::XorShiftSource).
#[derive(Clone, Copy, Debug, Default)]
pub struct CryptoSource;

impl CryptoSource {
    /// Construct a new `CryptoSource`.
    pub fn new() -> Self {
        Self
    }

    // 8 random bytes as a little-endian u64, divided by 2^64. Only the top 53 bits survive the
    // conversion to f64; dropping the rest up front keeps the quotient strictly below 1.
    fn scale_factor(&mut self) -> f64 {
        let mut bytes = [0u8; 8];
        OsRng.fill_bytes(&mut bytes);
        let bits = u64::from_le_bytes(bytes) >> 11;
        bits as f64 / (1u64 << 53) as f64
    }
}

impl EntropySource for CryptoSource {
    fn next_boolean(&mut self) -> bool {
        let mut byte = [0u8; 1];
        OsRng.fill_bytes(&mut byte);
        byte[0] & 1 == 1
    }

    fn next_int_below(&mut self, n: i64) -> i64 {
        self.next_int_in_range(0, n)
    }

    fn next_int_in_range(&mut self, lo: i64, hi: i64) -> i64 {
        let fraction = self.scale_factor();
        scale_to_range(lo, hi, fraction)
    }

    fn next_double_unit(&mut self) -> f64 {
        self.scale_factor()
    }
}
