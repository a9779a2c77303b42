//! Sweep configuration.
//!
//! [`SweepConfig`] names the instance files to load, the parameter grid to
//! enumerate and where to write the results table. Every field has a
//! default matching the reference sweep, so a YAML file only needs the
//! fields it changes:
//!
//! ```yaml
//! instance_dir: ./data
//! last_instance: 3
//! crossovers: [uniform]
//! mutation_levels:
//!   - { label: tiny, rate: 0.001 }
//! seed: 42
//! ```

use crate::error::{KnapsackError, Result};
use crate::ga::{Crossover, GaConfig, Initialization, StoppingRule};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Placeholder replaced by the instance index in [`SweepConfig::file_template`].
pub const INDEX_PLACEHOLDER: &str = "{}";

/// A named mutation rate, e.g. `low = 0.01`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationLevel {
    pub label: String,
    pub rate: f64,
}

impl MutationLevel {
    pub fn new(label: impl Into<String>, rate: f64) -> Self {
        Self {
            label: label.into(),
            rate,
        }
    }

    /// The reference levels: low 0.01, medium 0.05, high 0.1.
    pub fn defaults() -> Vec<MutationLevel> {
        vec![
            MutationLevel::new("low", 0.01),
            MutationLevel::new("medium", 0.05),
            MutationLevel::new("high", 0.1),
        ]
    }
}

/// One point of the parameter grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepEntry {
    pub crossover: Crossover,
    pub mutation: MutationLevel,
    pub initialization: Initialization,
    pub stopping: StoppingRule,
}

/// Configuration for a parameter sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Directory holding the instance files.
    pub instance_dir: PathBuf,

    /// File name template; `{}` is replaced by the instance index.
    pub file_template: String,

    /// First instance index (inclusive).
    pub first_instance: u32,

    /// Last instance index (inclusive).
    pub last_instance: u32,

    /// Results CSV destination.
    pub output: PathBuf,

    pub population_size: usize,
    pub max_generations: usize,

    /// Stagnation limit used by convergence runs.
    pub stagnation_limit: usize,

    pub crossovers: Vec<Crossover>,
    pub mutation_levels: Vec<MutationLevel>,
    pub initializations: Vec<Initialization>,
    pub stopping_rules: Vec<StoppingRule>,

    /// Base seed. Run `k` of the sweep uses `seed + k`; `None` seeds every
    /// run randomly.
    pub seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            instance_dir: PathBuf::from("."),
            file_template: "knapsack_{}.csv".to_string(),
            first_instance: 1,
            last_instance: 10,
            output: PathBuf::from("resultados_ag_mochila.csv"),
            population_size: 50,
            max_generations: 100,
            stagnation_limit: 10,
            crossovers: Crossover::ALL.to_vec(),
            mutation_levels: MutationLevel::defaults(),
            initializations: Initialization::ALL.to_vec(),
            stopping_rules: StoppingRule::ALL.to_vec(),
            seed: None,
        }
    }
}

impl SweepConfig {
    /// Loads a configuration from a YAML file; missing fields take defaults.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Path of instance `index`.
    pub fn instance_path(&self, index: u32) -> PathBuf {
        self.instance_dir
            .join(self.file_template.replace(INDEX_PLACEHOLDER, &index.to_string()))
    }

    /// Instance indices covered by the sweep.
    pub fn instance_indices(&self) -> std::ops::RangeInclusive<u32> {
        self.first_instance..=self.last_instance
    }

    /// Every grid point, in crossover → mutation → init → stopping order.
    pub fn entries(&self) -> Vec<SweepEntry> {
        let mut entries = Vec::with_capacity(self.runs_per_instance());
        for &crossover in &self.crossovers {
            for mutation in &self.mutation_levels {
                for &initialization in &self.initializations {
                    for &stopping in &self.stopping_rules {
                        entries.push(SweepEntry {
                            crossover,
                            mutation: mutation.clone(),
                            initialization,
                            stopping,
                        });
                    }
                }
            }
        }
        entries
    }

    pub fn runs_per_instance(&self) -> usize {
        self.crossovers.len()
            * self.mutation_levels.len()
            * self.initializations.len()
            * self.stopping_rules.len()
    }

    /// Optimizer configuration for one grid point.
    pub fn ga_config(&self, entry: &SweepEntry, seed: Option<u64>) -> GaConfig {
        let mut config = GaConfig::default()
            .with_population_size(self.population_size)
            .with_max_generations(self.max_generations)
            .with_stagnation_limit(self.stagnation_limit)
            .with_crossover(entry.crossover)
            .with_mutation_rate(entry.mutation.rate)
            .with_initialization(entry.initialization)
            .with_stopping(entry.stopping);
        config.seed = seed;
        config
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.file_template.contains(INDEX_PLACEHOLDER) {
            return Err(KnapsackError::config(format!(
                "file_template must contain '{INDEX_PLACEHOLDER}', got {:?}",
                self.file_template
            )));
        }
        if self.first_instance > self.last_instance {
            return Err(KnapsackError::config(format!(
                "empty instance range {}..={}",
                self.first_instance, self.last_instance
            )));
        }
        if self.runs_per_instance() == 0 {
            return Err(KnapsackError::config("parameter grid is empty"));
        }
        for level in &self.mutation_levels {
            if !(0.0..=1.0).contains(&level.rate) {
                return Err(KnapsackError::config(format!(
                    "mutation level '{}' has rate {} outside [0, 1]",
                    level.label, level.rate
                )));
            }
        }
        for entry in self.entries() {
            self.ga_config(&entry, None).validate()?;
        }
        Ok(())
    }
}
