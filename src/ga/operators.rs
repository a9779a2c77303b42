//! Binary genetic operators.
//!
//! Crossover and mutation operators for bit-string chromosomes. Each
//! operator is a pure function of its inputs and the injected random
//! source, so a fixed seed reproduces a run exactly.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: one cut in `[1, n-1]`
//! - [`two_point_crossover`]: middle segment taken from the second parent
//! - [`uniform_crossover`]: each gene from either parent with p = 0.5
//!
//! The closed [`Crossover`] enum selects one of them and dispatches through
//! the [`CrossoverOperator`] trait.
//!
//! # Mutation Operators
//!
//! - [`bit_flip_mutation`]: flip each bit independently with a fixed rate
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use super::types::Chromosome;
use rand::seq::index::sample;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Crossover operators
// ============================================================================

/// Capability interface for recombining two parents into one child.
pub trait CrossoverOperator {
    /// Produces one child from two equal-length parents.
    ///
    /// # Panics
    /// Implementations panic if the parents differ in length.
    fn crossover<R: Rng>(&self, parent_a: &Chromosome, parent_b: &Chromosome, rng: &mut R)
        -> Chromosome;
}

/// Crossover strategy.
///
/// # Examples
///
/// ```
/// use knapsack_evo::ga::Crossover;
///
/// let op: Crossover = "two_point".parse().unwrap();
/// assert_eq!(op, Crossover::TwoPoint);
/// assert_eq!(op.to_string(), "two_point");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Crossover {
    /// Cut once; prefix from parent A, suffix from parent B.
    SinglePoint,

    /// Cut twice; outer segments from parent A, middle from parent B.
    TwoPoint,

    /// Pick each gene from parent A or B with equal probability.
    Uniform,
}

impl Crossover {
    /// Every variant, in sweep order.
    pub const ALL: [Crossover; 3] = [
        Crossover::SinglePoint,
        Crossover::TwoPoint,
        Crossover::Uniform,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Crossover::SinglePoint => "single_point",
            Crossover::TwoPoint => "two_point",
            Crossover::Uniform => "uniform",
        }
    }
}

impl Default for Crossover {
    fn default() -> Self {
        Crossover::SinglePoint
    }
}

impl CrossoverOperator for Crossover {
    fn crossover<R: Rng>(
        &self,
        parent_a: &Chromosome,
        parent_b: &Chromosome,
        rng: &mut R,
    ) -> Chromosome {
        match self {
            Crossover::SinglePoint => single_point_crossover(parent_a, parent_b, rng),
            Crossover::TwoPoint => two_point_crossover(parent_a, parent_b, rng),
            Crossover::Uniform => uniform_crossover(parent_a, parent_b, rng),
        }
    }
}

impl fmt::Display for Crossover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Crossover {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Crossover::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| format!("unknown crossover '{s}' (expected single_point, two_point or uniform)"))
    }
}

/// Single-point crossover.
///
/// Draws `cut` uniformly from `[1, n-1]` and returns
/// `parent_a[..cut] ++ parent_b[cut..]`. With a single gene there is no
/// valid cut and the child is a copy of `parent_a`.
///
/// # Panics
/// Panics if the parents differ in length.
pub fn single_point_crossover<R: Rng>(
    parent_a: &Chromosome,
    parent_b: &Chromosome,
    rng: &mut R,
) -> Chromosome {
    let n = check_parents(parent_a, parent_b);
    if n < 2 {
        return parent_a.clone();
    }

    let cut = rng.random_range(1..n);
    splice(parent_a, parent_b, cut, n)
}

/// Two-point crossover.
///
/// Draws two distinct indices from `[0, n-1]`, sorts them as `(p1, p2)`
/// and returns `parent_a[..p1] ++ parent_b[p1..p2] ++ parent_a[p2..]`.
/// With a single gene the child is a copy of `parent_a`.
///
/// # Panics
/// Panics if the parents differ in length.
pub fn two_point_crossover<R: Rng>(
    parent_a: &Chromosome,
    parent_b: &Chromosome,
    rng: &mut R,
) -> Chromosome {
    let n = check_parents(parent_a, parent_b);
    if n < 2 {
        return parent_a.clone();
    }

    let picks = sample(rng, n, 2);
    let (p1, p2) = ordered(picks.index(0), picks.index(1));
    splice(parent_a, parent_b, p1, p2)
}

/// Uniform crossover: each gene from `parent_a` with probability 0.5,
/// else from `parent_b`.
///
/// # Panics
/// Panics if the parents differ in length.
pub fn uniform_crossover<R: Rng>(
    parent_a: &Chromosome,
    parent_b: &Chromosome,
    rng: &mut R,
) -> Chromosome {
    check_parents(parent_a, parent_b);

    parent_a
        .genes()
        .iter()
        .zip(parent_b.genes())
        .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
        .collect::<Vec<_>>()
        .into()
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Bit-flip mutation: flip each gene independently with probability `rate`.
///
/// `rate` is clamped to `[0, 1]`; a rate of `0` leaves every bit untouched.
///
/// # Complexity
/// O(n)
pub fn bit_flip_mutation<R: Rng>(chromosome: &mut Chromosome, rate: f64, rng: &mut R) {
    let rate = rate.clamp(0.0, 1.0);
    if rate == 0.0 {
        return;
    }
    for gene in chromosome.genes_mut() {
        if rng.random_bool(rate) {
            *gene = !*gene;
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn check_parents(parent_a: &Chromosome, parent_b: &Chromosome) -> usize {
    assert_eq!(
        parent_a.len(),
        parent_b.len(),
        "parents must have equal length"
    );
    parent_a.len()
}

/// `template[..start] ++ donor[start..end] ++ template[end..]`.
fn splice(template: &Chromosome, donor: &Chromosome, start: usize, end: usize) -> Chromosome {
    let mut genes = template.genes().to_vec();
    genes[start..end].copy_from_slice(&donor.genes()[start..end]);
    Chromosome::new(genes)
}

fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
