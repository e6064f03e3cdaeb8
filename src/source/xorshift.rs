use crate::source::{scale_to_range, EntropySource};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

// Mersenne Twister initialization multiplier, reused here to spread one seed across four registers
const SEED_MULTIPLIER: u32 = 1_812_433_253;

/// An `XorShiftSource` implements Marsaglia's 32-bit xorshift generator with four registers.
///
/// The generator is fast and reproducible from a seed, but it is **not** cryptographically secure.
/// Every draw mutates the registers in place, so an instance is meant to have a single owner;
/// give each consumer its own source instead of sharing one behind a lock.
#[derive(Clone, Debug)]
pub struct XorShiftSource {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
    seed: u32,
}

impl XorShiftSource {
    /// Construct a new `XorShiftSource` seeded from the system clock.
    pub fn new() -> Self {
        Self::from_seed(clock_seed())
    }

    /// Construct a new `XorShiftSource` with a given seed.
    pub fn from_seed(seed: u32) -> Self {
        let mut source = Self {
            x: 0,
            y: 0,
            z: 0,
            w: 0,
            seed,
        };
        source.init_registers(seed);
        source
    }

    /// Reset the registers from the current system clock, as a fresh source would be.
    pub fn reseed(&mut self) {
        self.init_registers(clock_seed());
    }

    /// The seed the registers were last initialized from.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    fn init_registers(&mut self, seed: u32) {
        debug!(seed, "seeding xorshift entropy source");
        self.seed = seed;
        self.x = seed;
        self.y = SEED_MULTIPLIER.wrapping_mul(self.x).wrapping_add(1);
        self.z = SEED_MULTIPLIER.wrapping_mul(self.y).wrapping_add(1);
        self.w = SEED_MULTIPLIER.wrapping_mul(self.z).wrapping_add(1);
    }

    /// Advance the generator and return the new `w` register.
    pub fn next_u32(&mut self) -> u32 {
        let t = self.x ^ (self.x << 11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        self.w = self.w ^ (self.w >> 19) ^ t ^ (t >> 8);
        self.w
    }

    fn scale_factor(&mut self) -> f64 {
        self.next_u32() as f64 / (1u64 << 32) as f64
    }
}

impl Default for XorShiftSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for XorShiftSource {
    fn next_boolean(&mut self) -> bool {
        self.next_u32() % 2 == 0
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

// Current time in 100ns ticks, truncated to the low 32 bits
fn clock_seed() -> u32 {
    let elapsed = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    (elapsed.as_nanos() / 100) as u32
}
