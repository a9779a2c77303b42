//! Population initialization.

use super::types::Chromosome;
use crate::instance::Instance;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// How the starting population is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Initialization {
    /// Every bit drawn independently and uniformly from {0, 1}.
    Random,

    /// Shuffle the items, then add them first-fit while they still fit.
    ///
    /// Every chromosome is feasible, but the order is random rather than
    /// guided by value/weight ratio, so the seeds are not optimal.
    #[serde(rename = "heuristic", alias = "greedy")]
    Greedy,
}

impl Initialization {
    pub const ALL: [Initialization; 2] = [Initialization::Random, Initialization::Greedy];

    pub fn label(&self) -> &'static str {
        match self {
            Initialization::Random => "random",
            Initialization::Greedy => "heuristic",
        }
    }

    /// Builds exactly `population_size` chromosomes of length `instance.item_count()`.
    pub fn populate<R: Rng>(
        &self,
        instance: &Instance,
        population_size: usize,
        rng: &mut R,
    ) -> Vec<Chromosome> {
        (0..population_size)
            .map(|_| match self {
                Initialization::Random => random_chromosome(instance.item_count(), rng),
                Initialization::Greedy => greedy_chromosome(instance, rng),
            })
            .collect()
    }
}

impl Default for Initialization {
    fn default() -> Self {
        Initialization::Random
    }
}

impl fmt::Display for Initialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Initialization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Initialization::Random),
            "heuristic" | "greedy" => Ok(Initialization::Greedy),
            _ => Err(format!("unknown initialization '{s}' (expected random or heuristic)")),
        }
    }
}

/// Uniformly random bit string of length `n`.
pub fn random_chromosome<R: Rng>(n: usize, rng: &mut R) -> Chromosome {
    (0..n).map(|_| rng.random_bool(0.5)).collect::<Vec<_>>().into()
}

/// Random-order first-fit packing.
///
/// Visits the items in a shuffled order and selects each one whose weight
/// still fits in the remaining capacity.
pub fn greedy_chromosome<R: Rng>(instance: &Instance, rng: &mut R) -> Chromosome {
    let n = instance.item_count();
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);

    let mut chromosome = Chromosome::empty(n);
    let mut load = 0u64;
    for i in order {
        match load.checked_add(instance.weights()[i]) {
            Some(next) if next <= instance.capacity() => {
                chromosome.genes_mut()[i] = true;
                load = next;
            }
            _ => {}
        }
    }
    chromosome
}
