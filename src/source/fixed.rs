use crate::source::{scale_to_range, EntropySource};

/// A `FixedSource` replays the same caller-chosen stream of unit fractions on every pass.
///
/// It exists to make composite behavior exactly verifiable: every draw consumes the next fraction
/// (wrapping around at the end) and derives its result from it. Booleans are `fraction < 0.5`, and
/// integers use the same truncated scaling as the scaled backends.
#[derive(Clone, Debug)]
pub struct FixedSource {
    fractions: Vec<f64>,
    position: usize,
}

impl FixedSource {
    /// Construct a `FixedSource` over the given fractions.
    ///
    /// Fractions are clamped into `[0, 1)`. An empty list behaves like a list holding only `0.0`.
    pub fn new<I: IntoIterator<Item = f64>>(fractions: I) -> Self {
        let mut fractions = fractions
            .into_iter()
            .map(|f| if f.is_nan() { 0.0 } else { f.max(0.0).min(1.0 - f64::EPSILON) })
            .collect::<Vec<_>>();
        if fractions.is_empty() {
            fractions.push(0.0);
        }
        Self { fractions, position: 0 }
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.position
    }

    /// Restart the stream from its first fraction.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    fn next_fraction(&mut self) -> f64 {
        let fraction = self.fractions[self.position % self.fractions.len()];
        self.position += 1;
        fraction
    }
}

impl EntropySource for FixedSource {
    fn next_boolean(&mut self) -> bool {
        self.next_fraction() < 0.5
    }

    fn next_int_below(&mut self, n: i64) -> i64 {
        self.next_int_in_range(0, n)
    }

    fn next_int_in_range(&mut self, lo: i64, hi: i64) -> i64 {
        let fraction = self.next_fraction();
        scale_to_range(lo, hi, fraction)
    }

    fn next_double_unit(&mut self) -> f64 {
        self.next_fraction()
    }
}
