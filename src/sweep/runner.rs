//! Sweep execution and result persistence.

use super::config::{SweepConfig, SweepEntry};
use crate::error::{KnapsackError, Result};
use crate::ga::GaRunner;
use crate::instance::Instance;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::{error, info, warn};

/// Outcome of one optimizer run within a sweep.
///
/// Field order is the column order of the results CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    pub instance: u32,
    pub crossover: String,
    pub mutation: String,
    pub initialization: String,
    pub stopping_rule: String,
    /// Best fitness found.
    pub value: u64,
    /// Total weight of the best solution.
    pub total_weight: u64,
    pub capacity: u64,
    /// Wall time of the optimizer call, rounded to 4 decimals.
    pub elapsed_secs: f64,
}

impl RunResult {
    /// Column names of the results table.
    pub const HEADERS: [&'static str; 9] = [
        "instance",
        "crossover",
        "mutation",
        "initialization",
        "stopping_rule",
        "value",
        "total_weight",
        "capacity",
        "elapsed_secs",
    ];
}

/// Drives the optimizer over every instance × grid point, sequentially.
pub struct SweepRunner;

impl SweepRunner {
    /// Runs the full sweep and writes the results to `config.output`.
    pub fn run(config: &SweepConfig) -> Result<Vec<RunResult>> {
        let results = Self::run_instances(config)?;
        Self::write_results(&config.output, &results)?;
        info!(
            rows = results.len(),
            output = %config.output.display(),
            "results saved"
        );
        Ok(results)
    }

    /// Runs the full sweep without persisting anything.
    ///
    /// Missing instance files are skipped with a warning; malformed ones are
    /// logged as errors and skipped. Only an invalid sweep configuration
    /// aborts the whole sweep.
    pub fn run_instances(config: &SweepConfig) -> Result<Vec<RunResult>> {
        config.validate()?;

        let entries = config.entries();
        let mut results = Vec::new();
        let mut run_index = 0u64;

        for id in config.instance_indices() {
            let path = config.instance_path(id);
            let instance = match Instance::from_csv_path(&path) {
                Ok(instance) => instance,
                Err(KnapsackError::InstanceNotFound(path)) => {
                    warn!(instance = id, path = %path.display(), "instance file not found, skipping");
                    continue;
                }
                Err(err) => {
                    error!(instance = id, path = %path.display(), %err, "failed to load instance, skipping");
                    continue;
                }
            };

            for entry in &entries {
                let seed = config.seed.map(|base| base.wrapping_add(run_index));
                run_index += 1;
                results.push(Self::run_entry(config, id, &instance, entry, seed)?);
            }
        }

        Ok(results)
    }

    /// Runs and times a single grid point on one instance.
    pub fn run_entry(
        config: &SweepConfig,
        id: u32,
        instance: &Instance,
        entry: &SweepEntry,
        seed: Option<u64>,
    ) -> Result<RunResult> {
        let ga_config = config.ga_config(entry, seed);

        let start = Instant::now();
        let outcome = GaRunner::run(instance, &ga_config)?;
        let elapsed = start.elapsed().as_secs_f64();

        info!(
            instance = id,
            crossover = %entry.crossover,
            mutation = %entry.mutation.label,
            init = %entry.initialization,
            stopping = %entry.stopping,
            value = outcome.best_fitness,
            weight = outcome.best_weight,
            capacity = instance.capacity(),
            generations = outcome.generations,
            "run complete in {elapsed:.4}s"
        );

        Ok(RunResult {
            instance: id,
            crossover: entry.crossover.to_string(),
            mutation: entry.mutation.label.clone(),
            initialization: entry.initialization.to_string(),
            stopping_rule: entry.stopping.to_string(),
            value: outcome.best_fitness,
            total_weight: outcome.best_weight,
            capacity: instance.capacity(),
            elapsed_secs: round4(elapsed),
        })
    }

    /// Writes results as CSV to a file.
    pub fn write_results(path: impl AsRef<Path>, results: &[RunResult]) -> Result<()> {
        let file = std::fs::File::create(path)?;
        Self::write_results_to(file, results)
    }

    /// Writes results as CSV to any writer. The header row is always written.
    pub fn write_results_to<W: Write>(writer: W, results: &[RunResult]) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        wtr.write_record(RunResult::HEADERS)?;
        for row in results {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

fn round4(secs: f64) -> f64 {
    (secs * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{Crossover, Initialization, StoppingRule};
    use crate::sweep::MutationLevel;
    use std::fs;
    use std::path::PathBuf;

    const FIXTURE: &str = "Item,Peso,Valor\n1,2,3\n2,3,4\n3,4,5\n4,5,6\nCapacidade,5,\n";

    fn small_config(dir: PathBuf) -> SweepConfig {
        SweepConfig {
            output: dir.join("results.csv"),
            instance_dir: dir,
            first_instance: 1,
            last_instance: 3,
            max_generations: 30,
            crossovers: vec![Crossover::SinglePoint, Crossover::Uniform],
            mutation_levels: vec![MutationLevel::new("medium", 0.05)],
            initializations: vec![Initialization::Greedy],
            stopping_rules: StoppingRule::ALL.to_vec(),
            seed: Some(42),
            ..SweepConfig::default()
        }
    }

    #[test]
    fn test_sweep_skips_missing_and_malformed_instances() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("knapsack_1.csv"), FIXTURE).unwrap();
        // knapsack_2.csv is missing; knapsack_3.csv has no capacity row
        fs::write(dir.path().join("knapsack_3.csv"), "Item,Peso,Valor\n1,2,3\n").unwrap();

        let config = small_config(dir.path().to_path_buf());
        let results = SweepRunner::run_instances(&config).unwrap();

        assert_eq!(results.len(), config.runs_per_instance());
        for row in &results {
            assert_eq!(row.instance, 1);
            assert_eq!(row.value, 7);
            assert_eq!(row.total_weight, 5);
            assert_eq!(row.capacity, 5);
            assert!(row.elapsed_secs >= 0.0);
        }
        assert_eq!(results[0].crossover, "single_point");
        assert_eq!(results[0].mutation, "medium");
        assert_eq!(results[0].initialization, "heuristic");
        assert_eq!(results[0].stopping_rule, "fixed");
        assert_eq!(results[1].stopping_rule, "convergence");
    }

    #[test]
    fn test_run_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("knapsack_2.csv"), FIXTURE).unwrap();

        let config = small_config(dir.path().to_path_buf());
        let results = SweepRunner::run(&config).unwrap();

        let written = fs::read_to_string(&config.output).unwrap();
        let mut lines = written.lines();
        assert_eq!(
            lines.next(),
            Some("instance,crossover,mutation,initialization,stopping_rule,value,total_weight,capacity,elapsed_secs")
        );
        let rows: Vec<&str> = lines.collect();
        assert_eq!(rows.len(), results.len());
        assert!(rows[0].starts_with("2,single_point,medium,heuristic,fixed,7,5,5,"));
    }

    #[test]
    fn test_empty_results_still_have_header() {
        let mut buf = Vec::new();
        SweepRunner::write_results_to(&mut buf, &[]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.trim_end(), RunResult::HEADERS.join(","));
    }

    #[test]
    fn test_invalid_config_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let config = SweepConfig {
            population_size: 1,
            ..small_config(dir.path().to_path_buf())
        };
        assert!(matches!(
            SweepRunner::run_instances(&config),
            Err(KnapsackError::Config(_))
        ));
    }

    #[test]
    fn test_seeded_sweep_is_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("knapsack_1.csv"),
            "Item,Peso,Valor\n1,23,92\n2,31,57\n3,29,49\n4,44,68\n5,53,60\n6,38,43\n7,63,67\n8,85,84\n9,89,87\n10,82,72\nCapacidade,165,\n",
        )
        .unwrap();
        let config = SweepConfig {
            last_instance: 1,
            ..small_config(dir.path().to_path_buf())
        };

        let values = |rows: Vec<RunResult>| rows.into_iter().map(|r| (r.value, r.total_weight)).collect::<Vec<_>>();
        let a = values(SweepRunner::run_instances(&config).unwrap());
        let b = values(SweepRunner::run_instances(&config).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.123456), 0.1235);
        assert_eq!(round4(2.0), 2.0);
    }
}
