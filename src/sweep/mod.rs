//! Configuration sweep.
//!
//! Enumerates instance × crossover × mutation level × initialization ×
//! stopping rule, runs the GA once per combination, times each run and
//! collects one [`RunResult`] row per combination. Runs are strictly
//! sequential; each one owns its population and random stream.
//!
//! ```no_run
//! use knapsack_evo::sweep::{SweepConfig, SweepRunner};
//!
//! let config = SweepConfig {
//!     instance_dir: "./data".into(),
//!     seed: Some(42),
//!     ..SweepConfig::default()
//! };
//! let rows = SweepRunner::run(&config)?;
//! println!("{} runs", rows.len());
//! # Ok::<(), knapsack_evo::KnapsackError>(())
//! ```

mod config;
mod runner;

pub use config::{MutationLevel, SweepConfig, SweepEntry, INDEX_PLACEHOLDER};
pub use runner::{RunResult, SweepRunner};
