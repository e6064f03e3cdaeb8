use crate::alphabet::StringCharacterType;
use crate::enumeration::Enumeration;
use crate::error::{Error, Result};
use crate::source::{CryptoSource, DefaultSource, EntropySource, XorShiftSource};
use crate::{Backend, Config};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use tracing::{trace, warn};

/// A `Randomizer` builds every higher-level generator on top of an [`EntropySource`].
///
/// All operations are expressed purely in terms of the source's four primitive draws, so the same
/// generator logic runs unchanged over any backend. Ranges described as "between `min` and `max`"
/// include both bounds.
///
/// The `nullable_*` variants return `None` with probability exactly one half, decided by a single
/// extra boolean draw before the wrapped generator runs.
#[derive(Debug)]
pub struct Randomizer<S = DefaultSource> {
    source: S,
}

/// A randomizer over the general-purpose PCG backend.
pub type DefaultRandomizer = Randomizer<DefaultSource>;
/// A randomizer over the operating system's cryptographically secure backend.
pub type CryptoRandomizer = Randomizer<CryptoSource>;
/// A randomizer over the xorshift backend.
pub type XorShiftRandomizer = Randomizer<XorShiftSource>;

impl Randomizer<DefaultSource> {
    /// Construct a randomizer over a freshly seeded [`DefaultSource`].
    ///
    /// To share one generator between several randomizers, construct the source once and pass
    /// clones of it to [`Randomizer::with_source`].
    pub fn new() -> Self {
        Self::with_source(DefaultSource::new())
    }
}

impl Default for Randomizer<DefaultSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomizer<Box<dyn EntropySource + Send>> {
    /// Construct a randomizer over the backend selected by `config`.
    pub fn from_config(config: Config) -> Self {
        let source: Box<dyn EntropySource + Send> = match config.backend {
            Backend::Default => match config.seed {
                Some(seed) => Box::new(DefaultSource::from_seed(seed)),
                None => Box::new(DefaultSource::new()),
            },
            Backend::Crypto => {
                if config.seed.is_some() {
                    warn!("the crypto backend cannot be seeded; ignoring configured seed");
                }
                Box::new(CryptoSource::new())
            }
            // xorshift registers are 32 bits wide; only the low half of the seed is used
            Backend::XorShift => match config.seed {
                Some(seed) => Box::new(XorShiftSource::from_seed(seed as u32)),
                None => Box::new(XorShiftSource::new()),
            },
        };
        Self::with_source(source)
    }
}

impl<S: EntropySource> Randomizer<S> {
    /// Construct a randomizer that draws from the given source.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// The underlying entropy source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the underlying entropy source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consume the randomizer and return its entropy source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Run `generator` with probability one half, otherwise return `None`.
    ///
    /// The generator receives the randomizer itself so it can draw further values.
    pub fn nullable<T, F>(&mut self, generator: F) -> Option<T>
    where
        F: FnOnce(&mut Self) -> T,
    {
        if self.source.next_boolean() {
            Some(generator(self))
        } else {
            None
        }
    }

    /// Uniformly choose one member of the enumeration `T`.
    ///
    /// Fails with [`Error::EmptyEnumeration`] if `T` declares no members.
    pub fn enumeration<T: Enumeration>(&mut self) -> Result<T> {
        let members = T::MEMBERS;
        if members.is_empty() {
            return Err(Error::EmptyEnumeration {
                type_name: std::any::type_name::<T>(),
            });
        }
        let index = self.source.next_int_below(members.len() as i64) as usize;
        Ok(members[index])
    }

    /// Like [`Randomizer::enumeration`], but `None` half of the time.
    pub fn nullable_enumeration<T: Enumeration>(&mut self) -> Result<Option<T>> {
        self.nullable(|r| r.enumeration::<T>()).transpose()
    }

    /// A random date between `min` and `max`, with a zero time of day.
    ///
    /// Candidate days are the midnights falling within `[min, max]`. If `max <= min`, or no
    /// midnight falls within the range, `min` is returned unchanged, time of day included.
    pub fn date(&mut self, min: NaiveDateTime, max: NaiveDateTime) -> NaiveDateTime {
        if max <= min {
            trace!(%min, %max, "empty date range");
            return min;
        }
        let mut first = i64::from(min.date().num_days_from_ce());
        if min.time() != NaiveTime::MIN {
            first += 1;
        }
        let last = i64::from(max.date().num_days_from_ce());
        if last < first {
            trace!(%min, %max, "date range contains no midnight");
            return min;
        }
        let days = self.source.next_int_in_range(first, last + 1);
        match NaiveDate::from_num_days_from_ce_opt(days as i32) {
            Some(date) => date.and_time(NaiveTime::MIN),
            None => min,
        }
    }

    /// Like [`Randomizer::date`], but `None` half of the time.
    pub fn nullable_date(&mut self, min: NaiveDateTime, max: NaiveDateTime) -> Option<NaiveDateTime> {
        self.nullable(|r| r.date(min, max))
    }

    /// A random instant between `min` and `max`, at millisecond resolution.
    ///
    /// If `max <= min`, `min` is returned unchanged.
    pub fn date_time(&mut self, min: NaiveDateTime, max: NaiveDateTime) -> NaiveDateTime {
        if max <= min {
            trace!(%min, %max, "empty date-time range");
            return min;
        }
        let span = (max - min).num_milliseconds();
        let offset = (span as f64 * self.source.next_double_unit()) as i64;
        min + Duration::milliseconds(offset.min(span))
    }

    /// Like [`Randomizer::date_time`], but `None` half of the time.
    pub fn nullable_date_time(
        &mut self,
        min: NaiveDateTime,
        max: NaiveDateTime,
    ) -> Option<NaiveDateTime> {
        self.nullable(|r| r.date_time(min, max))
    }

    /// A fair coin flip.
    pub fn boolean(&mut self) -> bool {
        self.source.next_boolean()
    }

    /// `true` with probability `true_weight`, which should lie in `[0, 1]`.
    pub fn weighted_boolean(&mut self, true_weight: f64) -> bool {
        self.source.next_double_unit() < true_weight
    }

    /// Like [`Randomizer::boolean`], but `None` half of the time.
    pub fn nullable_boolean(&mut self) -> Option<bool> {
        self.nullable(|r| r.boolean())
    }

    /// A random integer between `min` and `max`, both inclusive.
    pub fn int(&mut self, min: i32, max: i32) -> i32 {
        self.source.next_int_in_range(i64::from(min), i64::from(max) + 1) as i32
    }

    /// A random integer between `0` and `max`, both inclusive.
    pub fn int_to(&mut self, max: i32) -> i32 {
        self.source.next_int_below(i64::from(max) + 1) as i32
    }

    /// Like [`Randomizer::int`], but `None` half of the time.
    pub fn nullable_int(&mut self, min: i32, max: i32) -> Option<i32> {
        self.nullable(|r| r.int(min, max))
    }

    /// A random float between `min` and `max`.
    pub fn double(&mut self, min: f64, max: f64) -> f64 {
        self.source.next_double_unit() * (max - min) + min
    }

    /// Like [`Randomizer::double`], but `None` half of the time.
    pub fn nullable_double(&mut self, min: f64, max: f64) -> Option<f64> {
        self.nullable(|r| r.double(min, max))
    }

    /// A random decimal between `min` and `max`.
    ///
    /// The scaling is carried out in decimal arithmetic, so bounds such as monetary amounts are not
    /// disturbed by binary floating-point rounding.
    pub fn decimal(&mut self, min: Decimal, max: Decimal) -> Decimal {
        let fraction = Decimal::from_f64(self.source.next_double_unit()).unwrap_or_default();
        match max.checked_sub(min) {
            Some(span) => fraction * span + min,
            // span wider than `Decimal::MAX`; interpolate between the bounds instead
            None => min * (Decimal::ONE - fraction) + max * fraction,
        }
    }

    /// Like [`Randomizer::decimal`], but `None` half of the time.
    pub fn nullable_decimal(&mut self, min: Decimal, max: Decimal) -> Option<Decimal> {
        self.nullable(|r| r.decimal(min, max))
    }

    /// Uniformly choose one element of `list`, or `T::default()` if it is empty.
    pub fn random<T: Clone + Default>(&mut self, list: &[T]) -> T {
        if list.is_empty() {
            return T::default();
        }
        let index = self.source.next_int_below(list.len() as i64) as usize;
        list[index].clone()
    }

    /// Uniformly choose one of a fixed set of values, or `T::default()` if there are none.
    pub fn random_of<T: Copy + Default, const N: usize>(&mut self, values: [T; N]) -> T {
        self.random(&values)
    }

    /// Choose one element of `list` with probability proportional to its weight.
    ///
    /// Weights are relative and need not sum to one; `weights[i]` belongs to `list[i]`. A draw
    /// landing exactly on a cumulative boundary selects the following element. Returns
    /// `T::default()` if the list is empty or the weights do not sum to a finite, positive total.
    pub fn weighted_random<T: Clone + Default>(&mut self, list: &[T], weights: &[f64]) -> T {
        if list.len() != weights.len() {
            warn!(
                values = list.len(),
                weights = weights.len(),
                "weighted selection over mismatched lengths"
            );
        }
        let candidates = list.len().min(weights.len());
        let (list, weights) = (&list[..candidates], &weights[..candidates]);
        if list.is_empty() {
            return T::default();
        }

        let total: f64 = weights.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            warn!(total, "weighted selection without a finite positive total");
            return T::default();
        }

        let draw = self.source.next_double_unit() * total;
        let mut cumulative = 0.0;
        for (value, weight) in list.iter().zip(weights) {
            cumulative += weight;
            if cumulative > draw {
                return value.clone();
            }
        }
        // Rounding in the running sum can leave the draw just past the last boundary
        list[candidates - 1].clone()
    }

    /// A string of `length` characters drawn from the alphabet of `character_type`.
    pub fn string(&mut self, length: usize, character_type: StringCharacterType) -> String {
        let alphabet = character_type.alphabet().chars().collect::<Vec<_>>();
        self.draw_string(length, &alphabet)
    }

    /// A string of `length` characters, each drawn uniformly (with replacement) from `from_chars`.
    ///
    /// Fails with [`Error::InvalidCharacterSource`] if `from_chars` is empty or only whitespace.
    pub fn string_from(&mut self, length: usize, from_chars: &str) -> Result<String> {
        let alphabet = character_source(from_chars)?;
        Ok(self.draw_string(length, &alphabet))
    }

    /// A string whose length lies between `min_length` and `max_length` (inclusive).
    pub fn string_between(
        &mut self,
        min_length: usize,
        max_length: usize,
        character_type: StringCharacterType,
    ) -> String {
        let length = self.length_between(min_length, max_length);
        self.string(length, character_type)
    }

    /// A string from `from_chars` whose length lies between `min_length` and `max_length`
    /// (inclusive).
    pub fn string_between_from(
        &mut self,
        min_length: usize,
        max_length: usize,
        from_chars: &str,
    ) -> Result<String> {
        let alphabet = character_source(from_chars)?;
        let length = self.length_between(min_length, max_length);
        Ok(self.draw_string(length, &alphabet))
    }

    /// Like [`Randomizer::string_between`], but `None` half of the time.
    pub fn nullable_string(
        &mut self,
        min_length: usize,
        max_length: usize,
        character_type: StringCharacterType,
    ) -> Option<String> {
        self.nullable(|r| r.string_between(min_length, max_length, character_type))
    }

    /// Like [`Randomizer::string_between_from`], but `None` half of the time.
    pub fn nullable_string_from(
        &mut self,
        min_length: usize,
        max_length: usize,
        from_chars: &str,
    ) -> Result<Option<String>> {
        self.nullable(|r| r.string_between_from(min_length, max_length, from_chars))
            .transpose()
    }

    fn length_between(&mut self, min_length: usize, max_length: usize) -> usize {
        let lo = min_length.min(i64::MAX as usize - 1) as i64;
        let hi = max_length.min(i64::MAX as usize - 1) as i64;
        self.source.next_int_in_range(lo, hi + 1) as usize
    }

    fn draw_string(&mut self, length: usize, alphabet: &[char]) -> String {
        let mut out = String::with_capacity(length);
        for _ in 0..length {
            let index = self.source.next_int_below(alphabet.len() as i64) as usize;
            out.push(alphabet[index]);
        }
        out
    }
}

fn character_source(from_chars: &str) -> Result<Vec<char>> {
    if from_chars.chars().all(char::is_whitespace) {
        return Err(Error::InvalidCharacterSource(from_chars.to_owned()));
    }
    Ok(from_chars.chars().collect())
}
