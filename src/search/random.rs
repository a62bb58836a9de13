//! Random source abstraction for the search.
//!
//! The search draws every random decision through [`RandomSource`] so a
//! fixed seed reproduces a run exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform draws used by the search.
pub trait RandomSource {
    /// Uniform index in `0..bound`. `bound` is at least 1.
    fn next_index(&mut self, bound: usize) -> usize;

    /// In-place uniform shuffle (Fisher–Yates).
    ///
    /// # Reference
    /// Knuth (1997), "The Art of Computer Programming", Vol. 2, Algorithm 3.4.2P
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_index(i + 1);
            items.swap(i, j);
        }
    }
}

/// Adapts any `rand` generator into a [`RandomSource`].
///
/// # Example
/// ```
/// use u_group::search::{RandomSource, RngSource};
///
/// let mut a = RngSource::seeded(7);
/// let mut b = RngSource::seeded(7);
/// let mut xs = [1, 2, 3, 4, 5];
/// let mut ys = xs;
/// a.shuffle(&mut xs);
/// b.shuffle(&mut ys);
/// assert_eq!(xs, ys);
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps a generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// Deterministic source for a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}
