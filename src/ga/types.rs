//! Chromosome representation and fitness evaluation.
//!
//! A [`Chromosome`] is a fixed-length bit vector, one bit per item. Its
//! fitness against an [`Instance`] is the total value of the selected items
//! when they fit in the knapsack, and exactly zero otherwise. Infeasible
//! solutions are not penalized proportionally, so the score gives no hint
//! about how far over capacity a chromosome is.

use crate::instance::Instance;

/// Fitness score. Higher is better (maximization).
pub type Fitness = u64;

/// A candidate solution: bit `i` set means item `i` is in the knapsack.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chromosome {
    genes: Vec<bool>,
}

impl Chromosome {
    pub fn new(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// All-zero chromosome of length `n` (empty knapsack).
    pub fn empty(n: usize) -> Self {
        Self {
            genes: vec![false; n],
        }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    pub fn genes_mut(&mut self) -> &mut [bool] {
        &mut self.genes
    }

    /// Indices of the selected items.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.genes
            .iter()
            .enumerate()
            .filter(|(_, &bit)| bit)
            .map(|(i, _)| i)
    }

    /// Sum of the selected items' weights, saturating at `u64::MAX`.
    ///
    /// # Panics
    /// Panics if the chromosome length differs from the instance's item count.
    pub fn total_weight(&self, instance: &Instance) -> u64 {
        self.check_len(instance);
        self.selected()
            .map(|i| instance.weights()[i])
            .fold(0u64, u64::saturating_add)
    }

    /// Sum of the selected items' values, ignoring capacity.
    ///
    /// Cannot overflow: [`Instance::new`] rejects instances whose total
    /// value exceeds `u64::MAX`.
    ///
    /// # Panics
    /// Panics if the chromosome length differs from the instance's item count.
    pub fn total_value(&self, instance: &Instance) -> u64 {
        self.check_len(instance);
        self.selected().map(|i| instance.values()[i]).sum()
    }

    fn check_len(&self, instance: &Instance) {
        assert_eq!(
            self.len(),
            instance.item_count(),
            "chromosome length must equal item count"
        );
    }
}

impl From<Vec<bool>> for Chromosome {
    fn from(genes: Vec<bool>) -> Self {
        Self::new(genes)
    }
}

/// Scores a chromosome against an instance.
///
/// Returns the total selected value if the total selected weight is within
/// capacity, else `0`. The empty chromosome is always feasible with
/// fitness `0`.
///
/// # Complexity
/// O(n) in the number of items.
///
/// # Panics
/// Panics if the chromosome length differs from the instance's item count.
pub fn fitness(chromosome: &Chromosome, instance: &Instance) -> Fitness {
    chromosome.check_len(instance);

    let capacity = instance.capacity();
    let mut weight = 0u64;
    let mut value: Fitness = 0;
    for (_, (&wi, &vi)) in chromosome
        .genes()
        .iter()
        .zip(instance.weights().iter().zip(instance.values()))
        .filter(|(&bit, _)| bit)
    {
        // A weight sum past u64::MAX is over any capacity.
        weight = match weight.checked_add(wi) {
            Some(w) if w <= capacity => w,
            _ => return 0,
        };
        value += vi;
    }
    value
}

/// A chromosome paired with its cached fitness.
///
/// The evolutionary loop scores each chromosome once, when it is created,
/// and reuses the cached value for ranking, elitism and reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scored {
    pub chromosome: Chromosome,
    pub fitness: Fitness,
}

impl Scored {
    pub fn evaluate(chromosome: Chromosome, instance: &Instance) -> Self {
        let fitness = fitness(&chromosome, instance);
        Self {
            chromosome,
            fitness,
        }
    }
}
