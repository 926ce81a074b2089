mod args;
mod commands;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};

use args::{InitialStateArgs, ParameterArgs, SweepArgs};
use commands::{run, sweep};

/// Rescuevo: an evolutionary rescue simulator
///
/// Simulates a two-genotype population declining under environmental decay,
/// with beneficial mutants fed by mutation and stochastic immigration racing
/// to refill the carrying capacity.
#[derive(Parser, Debug)]
#[command(name = "rescuevo")]
#[command(author, version, about = "Simulates evolutionary rescue of a declining population", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel replicates
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a single trajectory and report when it stops.
    ///
    /// Executes one population trajectory generation by generation until the
    /// carrying capacity is reached or the generation cap fires.
    Run {
        #[command(flatten)]
        params: ParameterArgs,

        #[command(flatten)]
        initial: InitialStateArgs,

        /// Random seed for the trajectory
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Print the full per-generation trajectory table
        #[arg(long)]
        trace: bool,
    },

    /// Sweep one parameter across a grid of values.
    ///
    /// Repeats independent replicates at every grid point and emits one
    /// summary row per point, in grid order.
    Sweep(Box<SweepArgs>),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Run {
            params,
            initial,
            seed,
            trace,
        } => {
            run::run_trajectory(&params, &initial, seed, trace)?;
        }
        Commands::Sweep(args) => {
            sweep::run_sweep(&args)?;
        }
    }

    Ok(())
}
