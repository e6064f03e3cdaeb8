use crate::source::EntropySource;
use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// A `DefaultSource` draws from a general-purpose PCG generator.
///
/// The generator is an explicitly constructed shared resource: cloning a `DefaultSource` hands out
/// another handle to the *same* generator state, so a process can build one source at startup and
/// pass it to every randomizer that needs it. Sharing one stream avoids the correlated output that
/// independently constructed generators seeded at the same instant would produce.
///
/// The state sits behind a mutex, so handles may be sent to and used from different threads.
#[derive(Clone, Debug)]
pub struct DefaultSource {
    rng: Arc<Mutex<Pcg64Mcg>>,
    seed: u64,
}

impl DefaultSource {
    /// Construct a new `DefaultSource` with a freshly seeded generator.
    pub fn new() -> Self {
        Self::from_seed(OsRng.next_u64())
    }

    /// Construct a new `DefaultSource` with a given seed.
    ///
    /// Two sources initialized with the same seed produce the same sequence of draws.
    pub fn from_seed(seed: u64) -> Self {
        debug!(seed, "seeding default entropy source");
        Self {
            rng: Arc::new(Mutex::new(Pcg64Mcg::seed_from_u64(seed))),
            seed,
        }
    }

    /// The seed this source was initialized from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn rng(&self) -> MutexGuard<'_, Pcg64Mcg> {
        // A panic while holding the lock cannot leave the generator in an invalid state
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for DefaultSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for DefaultSource {
    fn next_boolean(&mut self) -> bool {
        self.rng().gen_range(0, 2) == 0
    }

    fn next_int_below(&mut self, n: i64) -> i64 {
        self.next_int_in_range(0, n)
    }

    fn next_int_in_range(&mut self, lo: i64, hi: i64) -> i64 {
        if hi <= lo {
            return lo;
        }
        self.rng().gen_range(lo, hi)
    }

    fn next_double_unit(&mut self) -> f64 {
        self.rng().gen::<f64>()
    }
}
