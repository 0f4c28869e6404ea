use chrono::{DateTime, Days, NaiveDate, TimeZone};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::clock::{Clock, KyivClock, kyiv_date};
use crate::core::{BASE_DATE, Gender, MAX_DAY_COUNT, Rnokpp, RnokppError, max_birthday};

/// RNOKPP generator over an injected random source and clock.
///
/// Production code uses [`Generator::from_entropy`]. Tests pass a seeded
/// RNG and a [`FixedClock`](super::FixedClock) to get reproducible output.
///
/// ```
/// use chrono::NaiveDate;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use rnokpp::{FixedClock, Gender, Generator};
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(7), FixedClock(today));
///
/// let birthday = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// let number = generator.generate(birthday, Gender::Female).unwrap();
/// let details = number.details().unwrap();
/// assert_eq!(details.birthday, birthday);
/// assert_eq!(details.gender, Gender::Female);
/// ```
#[derive(Debug, Clone)]
pub struct Generator<R, C = KyivClock> {
    rng: R,
    clock: C,
}

impl Generator<StdRng> {
    /// Generator seeded from OS entropy, bounded by the Kyiv wall clock.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy(), KyivClock)
    }
}

impl<R: Rng> Generator<R> {
    /// Generator over `rng`, bounded by the Kyiv wall clock.
    pub fn with_rng(rng: R) -> Self {
        Self::new(rng, KyivClock)
    }
}

impl<R: Rng, C: Clock> Generator<R, C> {
    pub fn new(rng: R, clock: C) -> Self {
        Self { rng, clock }
    }

    /// Replace the clock, keeping the random source.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Generator<R, C2> {
        Generator {
            rng: self.rng,
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Day count for `birthday`, checked against the allowed window.
    ///
    /// The window is `BASE_DATE..=today`, further capped by the last date the
    /// five day-count digits can hold.
    pub fn day_count(&self, birthday: NaiveDate) -> Result<u32, RnokppError> {
        if birthday < BASE_DATE {
            return Err(RnokppError::DateTooEarly(birthday));
        }
        if birthday > self.clock.today() {
            return Err(RnokppError::DateInFuture(birthday));
        }
        u32::try_from((birthday - BASE_DATE).num_days())
            .ok()
            .filter(|&days| days <= MAX_DAY_COUNT)
            .ok_or(RnokppError::DateOutOfRange(birthday))
    }

    /// Generate a valid RNOKPP for `birthday` and `gender`.
    ///
    /// Digits 5-7 are uniform over 0-9, and the gender digit is uniform over
    /// the five digits of matching parity.
    pub fn generate(&mut self, birthday: NaiveDate, gender: Gender) -> Result<Rnokpp, RnokppError> {
        let mut days = self.day_count(birthday)?;

        let mut head = [0u8; 9];
        for slot in head[..5].iter_mut().rev() {
            *slot = (days % 10) as u8;
            days /= 10;
        }
        for slot in &mut head[5..8] {
            *slot = self.rng.gen_range(0..=9);
        }
        head[8] = gender.digits()[self.rng.gen_range(0..5usize)];

        let rnokpp = Rnokpp::with_control_digit(head);
        tracing::trace!(%rnokpp, %birthday, %gender, "generated rnokpp");
        Ok(rnokpp)
    }

    /// Generate for the Kyiv calendar day of `moment`.
    pub fn generate_at<Tz: TimeZone>(
        &mut self,
        moment: &DateTime<Tz>,
        gender: Gender,
    ) -> Result<Rnokpp, RnokppError> {
        self.generate(kyiv_date(moment), gender)
    }

    /// Birthday drawn uniformly from `BASE_DATE..=today`.
    ///
    /// The upper bound is also capped at the last encodable date. If the
    /// clock reports a day before `BASE_DATE`, the result is `BASE_DATE`.
    pub fn random_birthday(&mut self) -> NaiveDate {
        let upper = self.clock.today().min(max_birthday());
        let span = (upper - BASE_DATE).num_days().max(0) as u64;
        BASE_DATE + Days::new(self.rng.gen_range(0..=span))
    }

    pub fn random_gender(&mut self) -> Gender {
        if self.rng.gen_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    /// Generate an RNOKPP for a random birthday and gender.
    pub fn generate_random(&mut self) -> Result<Rnokpp, RnokppError> {
        let birthday = self.random_birthday();
        let gender = self.random_gender();
        self.generate(birthday, gender)
    }

    /// Generate `count` random RNOKPPs.
    ///
    /// A zero count fails with [`RnokppError::InvalidCount`] before drawing
    /// any randomness. Any failure discards the whole batch.
    pub fn generate_random_n(&mut self, count: usize) -> Result<Vec<Rnokpp>, RnokppError> {
        if count == 0 {
            return Err(RnokppError::InvalidCount);
        }
        (0..count).map(|_| self.generate_random()).collect()
    }
}
