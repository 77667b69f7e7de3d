use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Return a uniformly shuffled copy of `items`, leaving `items` untouched.
///
/// `SliceRandom::shuffle` is a Fisher-Yates shuffle.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    copy.as_mut_slice().shuffle(rng);
    copy
}

/// Owns the randomness used to order answer options.
///
/// Seeded shufflers repeat the same sequence of permutations, which keeps tests
/// and recorded demos reproducible.
#[derive(Debug, Clone)]
pub struct Shuffler {
    rng: StdRng,
    seed: Option<u64>,
}

impl Shuffler {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    /// Seeded when `seed` is set, OS entropy otherwise.
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os_rng, Self::seeded)
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        shuffled(items, &mut self.rng)
    }
}
