//! Evolutionary search for the 0/1 knapsack problem.
//!
//! Provides a genetic algorithm specialised for knapsack instances and a
//! driver that compares operator/parameter combinations:
//!
//! - **Instances** ([`instance`]): immutable weights/values/capacity, loaded
//!   from CSV tables.
//! - **Genetic Algorithm** ([`ga`]): bit-string chromosomes with
//!   all-or-nothing capacity fitness, top-2 elitism, truncation parent
//!   selection, single-point/two-point/uniform crossover, bit-flip mutation
//!   and an optional convergence stop.
//! - **Sweep** ([`sweep`]): runs the GA over instance × crossover × mutation
//!   rate × initialization × stopping rule and writes a results CSV.
//!
//! The GA is a heuristic; it makes no optimality claim. All randomness is
//! drawn from an injected [`rand::Rng`], so a fixed seed reproduces a run.
//!
//! # Example
//!
//! ```
//! use knapsack_evo::ga::{Crossover, GaConfig, GaRunner, Initialization, StoppingRule};
//! use knapsack_evo::Instance;
//!
//! let instance = Instance::new(vec![2, 3, 4, 5], vec![3, 4, 5, 6], 5)?;
//! let config = GaConfig::default()
//!     .with_crossover(Crossover::TwoPoint)
//!     .with_initialization(Initialization::Greedy)
//!     .with_stopping(StoppingRule::Convergence)
//!     .with_seed(7);
//! let result = GaRunner::run(&instance, &config)?;
//! assert_eq!(result.best_fitness, 7);
//! # Ok::<(), knapsack_evo::KnapsackError>(())
//! ```

pub mod error;
pub mod ga;
pub mod instance;
pub mod logging;
pub mod sweep;

pub use error::{KnapsackError, Result};
pub use instance::Instance;
pub use logging::{setup_logging, should_use_json};
