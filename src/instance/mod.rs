//! Knapsack problem instances.
//!
//! An [`Instance`] is the immutable description of one 0/1 knapsack
//! problem: index-aligned item weights and values plus the knapsack
//! capacity. Instances are built either directly with [`Instance::new`] or
//! loaded from a tabular file (see [`loader`]).

pub mod loader;

use crate::error::{KnapsackError, Result};

pub use loader::CAPACITY_MARKER;

/// One 0/1 knapsack problem.
///
/// `weights[i]` and `values[i]` describe item `i`. The constructor enforces
/// `weights.len() == values.len() > 0`; the fields are private so the
/// instance cannot change once built.
///
/// # Examples
///
/// ```
/// use knapsack_evo::Instance;
///
/// let instance = Instance::new(vec![2, 3, 4, 5], vec![3, 4, 5, 6], 5).unwrap();
/// assert_eq!(instance.item_count(), 4);
/// assert_eq!(instance.capacity(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    weights: Vec<u64>,
    values: Vec<u64>,
    capacity: u64,
}

impl Instance {
    /// Creates an instance, rejecting empty or misaligned item lists and
    /// item values whose total does not fit in a `u64`.
    pub fn new(weights: Vec<u64>, values: Vec<u64>, capacity: u64) -> Result<Self> {
        if weights.len() != values.len() {
            return Err(KnapsackError::config(format!(
                "weight/value count mismatch: {} weights, {} values",
                weights.len(),
                values.len()
            )));
        }
        if weights.is_empty() {
            return Err(KnapsackError::config("instance has no items"));
        }
        if values.iter().try_fold(0u64, |acc, &v| acc.checked_add(v)).is_none() {
            return Err(KnapsackError::config("total item value exceeds u64::MAX"));
        }
        Ok(Self {
            weights,
            values,
            capacity,
        })
    }

    /// Number of items (chromosome length).
    pub fn item_count(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }
}
