//! Deterministic random number generation for board shuffles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical board orders
//! - **Forkable**: Each new session gets an independent branch
//! - **Unbiased**: Shuffles are Fisher-Yates, never sort-by-random-key
//!
//! ## Usage
//!
//! ```
//! use rust_connections::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! let mut items = vec!["Ahri", "Lux", "Zed", "Yasuo"];
//! rng.shuffle(&mut items);
//! assert_eq!(items.len(), 4);
//!
//! // Same seed, same order
//! let mut again = vec!["Ahri", "Lux", "Zed", "Yasuo"];
//! GameRng::new(42).shuffle(&mut again);
//! assert_eq!(items, again);
//! ```

use im::Vector;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used by sessions and the controller.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Generate a random usize in `0..=max`.
    pub fn index_up_to(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..=max)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        self.fisher_yates(slice.len(), |i, j| slice.swap(i, j));
    }

    /// Shuffle a persistent vector in place.
    pub fn shuffle_vector<T: Clone>(&mut self, vector: &mut Vector<T>) {
        self.fisher_yates(vector.len(), |i, j| vector.swap(i, j));
    }

    /// Return a shuffled copy, leaving the input untouched.
    #[must_use]
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        self.shuffle(&mut out);
        out
    }

    // For i from len-1 down to 1, swap i with a uniform j in [0, i].
    fn fisher_yates(&mut self, len: usize, mut swap: impl FnMut(usize, usize)) {
        for i in (1..len).rev() {
            let j = self.index_up_to(i);
            if i != j {
                swap(i, j);
            }
        }
    }
}
