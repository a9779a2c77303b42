use clap::{Args, Parser, Subcommand};
use knapsack_evo::ga::{Crossover, GaConfig, GaRunner, Initialization, StoppingRule};
use knapsack_evo::sweep::{SweepConfig, SweepRunner};
use knapsack_evo::{setup_logging, should_use_json, Instance, KnapsackError};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "knapsack-evo")]
#[command(author, version, about = "Evolutionary 0/1 knapsack optimizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every operator/parameter combination over a range of instances
    Sweep(SweepArgs),

    /// Optimize a single instance file
    Solve(SolveArgs),
}

#[derive(Args)]
struct SweepArgs {
    /// YAML sweep configuration (defaults apply to missing fields)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding knapsack_<i>.csv files
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Results CSV path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// First instance index (inclusive)
    #[arg(long)]
    first: Option<u32>,

    /// Last instance index (inclusive)
    #[arg(long)]
    last: Option<u32>,

    /// Base random seed for reproducible sweeps
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct SolveArgs {
    /// Instance CSV file (Item,Peso,Valor)
    file: PathBuf,

    /// single_point, two_point or uniform
    #[arg(long, default_value = "single_point")]
    crossover: Crossover,

    /// Per-bit flip probability
    #[arg(long, default_value_t = 0.01)]
    mutation_rate: f64,

    /// random or heuristic
    #[arg(long, default_value = "random")]
    init: Initialization,

    /// Stop early once the best fitness stagnates
    #[arg(long)]
    convergence: bool,

    #[arg(long, default_value_t = 50)]
    population: usize,

    #[arg(long, default_value_t = 100)]
    generations: usize,

    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.json || should_use_json(), &cli.log_level);

    let outcome = match cli.command {
        Commands::Sweep(args) => sweep(args),
        Commands::Solve(args) => solve(args),
    };

    if let Err(err) = outcome {
        error!(%err, "aborted");
        std::process::exit(err.exit_code());
    }
}

fn sweep(args: SweepArgs) -> Result<(), KnapsackError> {
    let mut config = match &args.config {
        Some(path) => SweepConfig::from_yaml_file(path)?,
        None => SweepConfig::default(),
    };
    if let Some(dir) = args.dir {
        config.instance_dir = dir;
    }
    if let Some(output) = args.output {
        config.output = output;
    }
    if let Some(first) = args.first {
        config.first_instance = first;
    }
    if let Some(last) = args.last {
        config.last_instance = last;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    info!(
        instances = ?config.instance_indices(),
        runs_per_instance = config.runs_per_instance(),
        "testing configurations"
    );
    SweepRunner::run(&config)?;
    Ok(())
}

fn solve(args: SolveArgs) -> Result<(), KnapsackError> {
    let instance = Instance::from_csv_path(&args.file)?;

    let stopping = if args.convergence {
        StoppingRule::Convergence
    } else {
        StoppingRule::FixedGenerations
    };
    let mut config = GaConfig::default()
        .with_population_size(args.population)
        .with_max_generations(args.generations)
        .with_crossover(args.crossover)
        .with_mutation_rate(args.mutation_rate)
        .with_initialization(args.init)
        .with_stopping(stopping);
    config.seed = args.seed;

    let start = Instant::now();
    let result = GaRunner::run(&instance, &config)?;
    let elapsed = start.elapsed().as_secs_f64();

    let items: Vec<String> = result.best.selected().map(|i| (i + 1).to_string()).collect();
    info!(
        value = result.best_fitness,
        weight = result.best_weight,
        capacity = instance.capacity(),
        generations = result.generations,
        converged = result.converged,
        "best solution found in {elapsed:.4}s"
    );
    println!(
        "value={} weight={}/{} items=[{}]",
        result.best_fitness,
        result.best_weight,
        instance.capacity(),
        items.join(",")
    );
    Ok(())
}
