//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → ranking → elitism → selection → crossover → mutation →
//! replacement → stopping check → repeat.

use super::config::{GaConfig, StoppingRule};
use super::operators::{bit_flip_mutation, CrossoverOperator};
use super::selection::TruncationSelection;
use super::types::{Chromosome, Fitness, Scored};
use crate::error::Result;
use crate::instance::Instance;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Reverse;
use tracing::{debug, instrument, trace};

/// Result of a GA optimization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaResult {
    /// The fittest chromosome of the final population.
    pub best: Chromosome,

    /// Fitness of `best`.
    pub best_fitness: Fitness,

    /// Total weight of the items selected by `best`.
    pub best_weight: u64,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run stopped early by convergence.
    pub converged: bool,

    /// Best fitness in the population: the initial one, then one entry per
    /// generation.
    pub fitness_history: Vec<Fitness>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use knapsack_evo::ga::{GaConfig, GaRunner, Initialization};
/// use knapsack_evo::Instance;
///
/// let instance = Instance::new(vec![2, 3, 4, 5], vec![3, 4, 5, 6], 5).unwrap();
/// let config = GaConfig::default()
///     .with_initialization(Initialization::Greedy)
///     .with_seed(42);
/// let result = GaRunner::run(&instance, &config).unwrap();
/// assert_eq!(result.best_fitness, 7);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with an RNG seeded from `config.seed` (random if `None`).
    pub fn run(instance: &Instance, config: &GaConfig) -> Result<GaResult> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored; the caller owns the random stream.
    ///
    /// # Errors
    /// Returns [`KnapsackError::Config`](crate::KnapsackError::Config) if
    /// the configuration is invalid.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            items = instance.item_count(),
            crossover = %config.crossover,
            mutation_rate = config.mutation_rate,
            init = %config.initialization,
            stopping = %config.stopping,
        )
    )]
    pub fn run_with_rng<R: Rng>(
        instance: &Instance,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult> {
        config.validate()?;

        let selection = TruncationSelection::new(config.parent_pool);

        // 1. Initialize and score population
        let mut population: Vec<Scored> = config
            .initialization
            .populate(instance, config.population_size, rng)
            .into_iter()
            .map(|c| Scored::evaluate(c, instance))
            .collect();

        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(find_best(&population).fitness);

        let mut best_seen: Fitness = 0;
        let mut stagnation_counter = 0usize;
        let mut generations = 0usize;
        let mut converged = false;

        // 2. Evolutionary loop
        for gen in 0..config.max_generations {
            // Rank by fitness (descending, stable)
            population.sort_by_key(|s| Reverse(s.fitness));

            // Elite preservation
            let mut next_gen: Vec<Scored> = population[..config.elite_count].to_vec();

            // Generate offspring
            while next_gen.len() < config.population_size {
                let (a, b) = selection.select_pair(population.len(), rng);
                let mut child = config.crossover.crossover(
                    &population[a].chromosome,
                    &population[b].chromosome,
                    rng,
                );
                bit_flip_mutation(&mut child, config.mutation_rate, rng);
                next_gen.push(Scored::evaluate(child, instance));
            }

            population = next_gen;
            generations = gen + 1;

            let gen_best = find_best(&population).fitness;
            fitness_history.push(gen_best);
            trace!(generation = generations, best = gen_best, "generation complete");

            // Convergence check on the leading individual
            if config.stopping == StoppingRule::Convergence {
                let current_best = population[0].fitness;
                if current_best == best_seen {
                    stagnation_counter += 1;
                } else {
                    stagnation_counter = 0;
                    best_seen = current_best;
                }
                if stagnation_counter >= config.stagnation_limit {
                    converged = true;
                    break;
                }
            }
        }

        let best = find_best(&population).clone();
        let best_weight = best.chromosome.total_weight(instance);

        debug!(
            best = best.fitness,
            weight = best_weight,
            capacity = instance.capacity(),
            generations,
            converged,
            "GA finished"
        );

        Ok(GaResult {
            best: best.chromosome,
            best_fitness: best.fitness,
            best_weight,
            generations,
            converged,
            fitness_history,
        })
    }
}

/// Find the first individual with the highest fitness.
fn find_best(population: &[Scored]) -> &Scored {
    population
        .iter()
        .min_by_key(|s| Reverse(s.fitness))
        .expect("population must not be empty")
}

// ============================================================================
// Tests
// ============================================================================
