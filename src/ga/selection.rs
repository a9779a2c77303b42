//! Parent selection.
//!
//! Parents are drawn from a truncated pool: after ranking, only the top
//! `pool_size` individuals are eligible, and two distinct ones are picked
//! uniformly at random. Selection pressure comes entirely from the
//! truncation; within the pool every individual is equally likely.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms" (truncation selection)

use rand::seq::index::sample;
use rand::Rng;

/// Truncation selection over the best-ranked part of a sorted population.
///
/// # Examples
///
/// ```
/// use knapsack_evo::ga::TruncationSelection;
///
/// let sel = TruncationSelection::new(10);
/// assert_eq!(sel.pool_for(50), 10);
/// assert_eq!(sel.pool_for(4), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncationSelection {
    pool_size: usize,
}

impl TruncationSelection {
    pub fn new(pool_size: usize) -> Self {
        Self { pool_size }
    }

    /// Number of eligible parents for a population of `population_len`.
    pub fn pool_for(&self, population_len: usize) -> usize {
        self.pool_size.min(population_len)
    }

    /// Picks two distinct parent indices from the top of a ranked population.
    ///
    /// Indices refer to positions in the ranked (best-first) population.
    ///
    /// # Panics
    /// Panics if fewer than two individuals are eligible.
    pub fn select_pair<R: Rng>(&self, population_len: usize, rng: &mut R) -> (usize, usize) {
        let pool = self.pool_for(population_len);
        assert!(pool >= 2, "need at least two eligible parents, got {pool}");

        let picks = sample(rng, pool, 2);
        (picks.index(0), picks.index(1))
    }
}

impl Default for TruncationSelection {
    fn default() -> Self {
        TruncationSelection::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pair_is_distinct_and_in_pool() {
        let sel = TruncationSelection::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let (a, b) = sel.select_pair(50, &mut rng);
            assert_ne!(a, b);
            assert!(a < 10 && b < 10, "picked outside the top 10: ({a}, {b})");
        }
    }

    #[test]
    fn test_small_population_uses_everyone() {
        let sel = TruncationSelection::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0u32; 4];
        for _ in 0..4000 {
            let (a, b) = sel.select_pair(4, &mut rng);
            counts[a] += 1;
            counts[b] += 1;
        }
        for &c in &counts {
            assert!(c > 1600, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_two_individuals() {
        let sel = TruncationSelection::default();
        let mut rng = StdRng::seed_from_u64(1);
        let (a, b) = sel.select_pair(2, &mut rng);
        assert_eq!(a + b, 1);
    }

    #[test]
    #[should_panic(expected = "need at least two eligible parents")]
    fn test_single_individual_panics() {
        let mut rng = StdRng::seed_from_u64(42);
        TruncationSelection::default().select_pair(1, &mut rng);
    }
}
