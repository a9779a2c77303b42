//! Genetic Algorithm for the 0/1 knapsack problem.
//!
//! Candidate solutions are bit strings ([`Chromosome`]) scored by
//! [`fitness`]: the total value of the selected items, or zero when they
//! exceed the knapsack capacity.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population, operators, stopping rule)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best chromosome found plus run statistics
//!
//! # Submodules
//!
//! - [`operators`]: Single-point, two-point and uniform crossover; bit-flip mutation
//! - [`init`]: Uniform-random and random-order greedy population seeding
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Martello & Toth (1990), *Knapsack Problems: Algorithms and Computer Implementations*

mod config;
pub mod init;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::{GaConfig, StoppingRule};
pub use init::Initialization;
pub use operators::{Crossover, CrossoverOperator};
pub use runner::{GaResult, GaRunner};
pub use selection::TruncationSelection;
pub use types::{fitness, Chromosome, Fitness, Scored};
