//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::init::Initialization;
use super::operators::Crossover;
use crate::error::{KnapsackError, Result};
use std::fmt;
use std::str::FromStr;

/// When the evolutionary loop stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoppingRule {
    /// Always run exactly `max_generations` generations.
    #[serde(rename = "fixed")]
    FixedGenerations,

    /// Stop once the top individual's fitness has not changed for
    /// `stagnation_limit` consecutive generations (or at `max_generations`).
    Convergence,
}

impl StoppingRule {
    pub const ALL: [StoppingRule; 2] = [StoppingRule::FixedGenerations, StoppingRule::Convergence];

    pub fn label(&self) -> &'static str {
        match self {
            StoppingRule::FixedGenerations => "fixed",
            StoppingRule::Convergence => "convergence",
        }
    }
}

impl Default for StoppingRule {
    fn default() -> Self {
        StoppingRule::FixedGenerations
    }
}

impl fmt::Display for StoppingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StoppingRule {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(StoppingRule::FixedGenerations),
            "convergence" => Ok(StoppingRule::Convergence),
            _ => Err(format!("unknown stopping rule '{s}' (expected fixed or convergence)")),
        }
    }
}

/// Configuration for the knapsack GA.
///
/// # Defaults
///
/// The defaults reproduce the reference sweep's fixed constants.
///
/// ```
/// use knapsack_evo::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 100);
/// assert_eq!(config.elite_count, 2);
/// assert_eq!(config.parent_pool, 10);
/// assert_eq!(config.stagnation_limit, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_evo::ga::{Crossover, GaConfig, Initialization, StoppingRule};
///
/// let config = GaConfig::default()
///     .with_crossover(Crossover::Uniform)
///     .with_mutation_rate(0.05)
///     .with_initialization(Initialization::Greedy)
///     .with_stopping(StoppingRule::Convergence)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Maximum number of generations. `0` returns the best of the initial
    /// population without any reproduction.
    pub max_generations: usize,

    /// Crossover operator used to produce each child.
    pub crossover: Crossover,

    /// Per-bit flip probability (0.0–1.0).
    pub mutation_rate: f64,

    /// How the starting population is built.
    pub initialization: Initialization,

    /// Fixed generation budget or convergence-based early stop.
    pub stopping: StoppingRule,

    /// Consecutive unchanged generations that count as converged.
    ///
    /// Only consulted with [`StoppingRule::Convergence`].
    pub stagnation_limit: usize,

    /// Number of top-ranked individuals copied unchanged each generation.
    pub elite_count: usize,

    /// Parents are drawn from the top `min(parent_pool, population_size)`.
    pub parent_pool: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            crossover: Crossover::default(),
            mutation_rate: 0.01,
            initialization: Initialization::default(),
            stopping: StoppingRule::default(),
            stagnation_limit: 10,
            elite_count: 2,
            parent_pool: 10,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_initialization(mut self, init: Initialization) -> Self {
        self.initialization = init;
        self
    }

    pub fn with_stopping(mut self, stopping: StoppingRule) -> Self {
        self.stopping = stopping;
        self
    }

    /// Sets the stagnation limit used by [`StoppingRule::Convergence`].
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    pub fn with_parent_pool(mut self, n: usize) -> Self {
        self.parent_pool = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`KnapsackError::Config`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(KnapsackError::config("population_size must be at least 2"));
        }
        if self.elite_count > self.population_size {
            return Err(KnapsackError::config(format!(
                "elite_count ({}) exceeds population_size ({})",
                self.elite_count, self.population_size
            )));
        }
        if self.parent_pool < 2 {
            return Err(KnapsackError::config("parent_pool must be at least 2"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(KnapsackError::config(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.stopping == StoppingRule::Convergence && self.stagnation_limit == 0 {
            return Err(KnapsackError::config(
                "stagnation_limit must be at least 1 with convergence stopping",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.max_generations, 100);
        assert_eq!(config.crossover, Crossover::SinglePoint);
        assert!((config.mutation_rate - 0.01).abs() < 1e-12);
        assert_eq!(config.initialization, Initialization::Random);
        assert_eq!(config.stopping, StoppingRule::FixedGenerations);
        assert_eq!(config.stagnation_limit, 10);
        assert_eq!(config.elite_count, 2);
        assert_eq!(config.parent_pool, 10);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(80)
            .with_max_generations(300)
            .with_crossover(Crossover::TwoPoint)
            .with_mutation_rate(0.1)
            .with_initialization(Initialization::Greedy)
            .with_stopping(StoppingRule::Convergence)
            .with_stagnation_limit(25)
            .with_elite_count(4)
            .with_parent_pool(20)
            .with_seed(7);

        assert_eq!(config.population_size, 80);
        assert_eq!(config.max_generations, 300);
        assert_eq!(config.crossover, Crossover::TwoPoint);
        assert!((config.mutation_rate - 0.1).abs() < 1e-12);
        assert_eq!(config.initialization, Initialization::Greedy);
        assert_eq!(config.stopping, StoppingRule::Convergence);
        assert_eq!(config.stagnation_limit, 25);
        assert_eq!(config.elite_count, 4);
        assert_eq!(config.parent_pool, 20);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_population_of_one() {
        let err = GaConfig::default().with_population_size(1).validate().unwrap_err();
        assert!(matches!(err, KnapsackError::Config(_)));
    }

    #[test]
    fn test_validate_elites_exceed_population() {
        let config = GaConfig::default()
            .with_population_size(3)
            .with_elite_count(4);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_elites_fill_population_is_ok() {
        let config = GaConfig::default()
            .with_population_size(2)
            .with_elite_count(2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_pool_too_small() {
        assert!(GaConfig::default().with_parent_pool(1).validate().is_err());
    }

    #[test]
    fn test_validate_zero_generations_is_ok() {
        assert!(GaConfig::default().with_max_generations(0).validate().is_ok());
    }

    #[test]
    fn test_validate_convergence_needs_limit() {
        let config = GaConfig::default()
            .with_stopping(StoppingRule::Convergence)
            .with_stagnation_limit(0);
        assert!(config.validate().is_err());

        // Ignored when running a fixed budget.
        let config = config.with_stopping(StoppingRule::FixedGenerations);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_clamp_rate() {
        assert!((GaConfig::default().with_mutation_rate(2.0).mutation_rate - 1.0).abs() < 1e-12);
        assert!(GaConfig::default().with_mutation_rate(-0.5).mutation_rate.abs() < 1e-12);
    }

    #[test]
    fn test_validate_nan_rate() {
        let config = GaConfig {
            mutation_rate: f64::NAN,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_stopping_labels() {
        for rule in StoppingRule::ALL {
            assert_eq!(rule.to_string().parse::<StoppingRule>(), Ok(rule));
        }
    }
}
