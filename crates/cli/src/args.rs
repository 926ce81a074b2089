//! Shared argument groups for the CLI commands.

use clap::Args;
use rescuevo_sim::errors::InvalidParameterError;
use rescuevo_sim::simulation::{PopulationState, SimulationParameters};
use std::path::PathBuf;

/// The six core simulation parameters, validated on build.
///
/// Defaults reproduce the reference rescue experiment: a population of 1000
/// decaying at 10% per generation, mutants with a 30% advantage, weak
/// mutation pressure, and a trickle of immigrants.
#[derive(Args, Debug, Clone)]
pub struct ParameterArgs {
    /// Maximum population size the environment supports
    #[arg(short = 'k', long, default_value_t = 1000)]
    pub carrying_capacity: u64,

    /// Per-generation fractional loss applied to wild-type reproduction
    #[arg(short = 'd', long, default_value_t = 0.1)]
    pub decay_rate: f64,

    /// Mutant reproductive advantage over wild-type
    #[arg(short = 's', long, default_value_t = 0.3)]
    pub selection_coefficient: f64,

    /// Per-individual probability a wild-type offspring converts to mutant
    #[arg(short = 'u', long, default_value_t = 0.001)]
    pub mutation_rate: f64,

    /// Mean number of wild-type immigrants arriving per generation
    #[arg(short = 'm', long, default_value_t = 3.0)]
    pub migration_rate: f64,

    /// Hard cap on the number of generations a trajectory may run
    #[arg(short = 'g', long, default_value_t = 1000)]
    pub max_generations: usize,
}

impl ParameterArgs {
    /// Build the validated parameter set.
    pub fn build(&self) -> Result<SimulationParameters, InvalidParameterError> {
        SimulationParameters::new(
            self.carrying_capacity,
            self.decay_rate,
            self.selection_coefficient,
            self.mutation_rate,
            self.migration_rate,
            self.max_generations,
        )
    }
}

/// Initial genotype counts at generation zero.
#[derive(Args, Debug, Clone)]
pub struct InitialStateArgs {
    /// Initial wild-type count
    #[arg(short = 'w', long, default_value_t = 1000)]
    pub wildtype: u64,

    /// Initial mutant count
    #[arg(long, default_value_t = 0)]
    pub mutant: u64,
}

impl InitialStateArgs {
    /// Build the initial population state.
    pub fn build(&self) -> PopulationState {
        PopulationState::new(self.wildtype, self.mutant)
    }
}

/// Arguments for the sweep command.
#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    /// Parameter to vary across the grid
    /// (decay-rate, selection-coefficient, mutation-rate, migration-rate)
    #[arg(short = 'p', long)]
    pub param: String,

    /// Explicit comma-separated grid values (e.g. "1,2,5,10")
    #[arg(long, conflicts_with_all = ["from", "to", "steps"])]
    pub values: Option<String>,

    /// Start of a linear grid (requires --to and --steps)
    #[arg(long, requires = "to", requires = "steps")]
    pub from: Option<f64>,

    /// End of a linear grid (inclusive)
    #[arg(long, requires = "from")]
    pub to: Option<f64>,

    /// Number of points in the linear grid
    #[arg(long, requires = "from")]
    pub steps: Option<usize>,

    /// Number of independent replicates per grid point
    #[arg(short = 'r', long, default_value_t = 50)]
    pub reps: usize,

    /// Replicate statistic to average
    /// (generations, final-mutants, capacity-fraction)
    #[arg(long, default_value = "generations")]
    pub metric: String,

    /// Base random seed; every replicate derives its own stream from it
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Output format (table, csv, json)
    #[arg(short = 'f', long, default_value = "table")]
    pub format: String,

    /// Output file (stdout if not specified)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,

    #[command(flatten)]
    pub params: ParameterArgs,

    #[command(flatten)]
    pub initial: InitialStateArgs,
}
