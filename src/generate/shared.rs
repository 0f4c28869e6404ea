use std::sync::{LazyLock, Mutex, PoisonError};

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::clock::KyivClock;
use super::generator::Generator;
use crate::core::{Gender, Rnokpp, RnokppError};

/// Process-wide RNG, seeded from OS entropy on first use and never reseeded.
static SHARED_RNG: LazyLock<Mutex<StdRng>> = LazyLock::new(|| {
    tracing::debug!("seeding shared rnokpp generator from OS entropy");
    Mutex::new(StdRng::from_entropy())
});

fn with_shared<T>(f: impl FnOnce(&mut Generator<&mut StdRng>) -> T) -> T {
    // The RNG state stays usable even if a holder panicked.
    let mut rng = SHARED_RNG.lock().unwrap_or_else(PoisonError::into_inner);
    let mut generator = Generator::new(&mut *rng, KyivClock);
    f(&mut generator)
}

/// Generate an RNOKPP for `birthday` and `gender` using the shared RNG.
///
/// ```
/// use chrono::NaiveDate;
/// use rnokpp::{Gender, generate_rnokpp, is_valid};
///
/// let birthday = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// let number = generate_rnokpp(birthday, Gender::Male).unwrap();
/// assert!(is_valid(&number.to_string()));
/// ```
pub fn generate_rnokpp(birthday: NaiveDate, gender: Gender) -> Result<Rnokpp, RnokppError> {
    with_shared(|g| g.generate(birthday, gender))
}

/// Generate an RNOKPP for a random birthday and gender using the shared RNG.
pub fn generate_random_rnokpp() -> Result<Rnokpp, RnokppError> {
    with_shared(|g| g.generate_random())
}

/// Generate `count` random RNOKPPs using the shared RNG.
pub fn generate_random_rnokpp_n(count: usize) -> Result<Vec<Rnokpp>, RnokppError> {
    with_shared(|g| g.generate_random_n(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn shared_generation_is_valid() {
        let r = generate_random_rnokpp().unwrap();
        assert!(r.is_valid());
    }

    #[test]
    fn shared_zero_count() {
        assert_eq!(generate_random_rnokpp_n(0), Err(RnokppError::InvalidCount));
    }

    #[test]
    fn shared_rng_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| thread::spawn(|| generate_random_rnokpp_n(25)))
            .collect();
        for h in handles {
            let batch = h.join().unwrap().unwrap();
            assert_eq!(batch.len(), 25);
            assert!(batch.iter().all(Rnokpp::is_valid));
        }
    }
}
