use anyhow::{Context, Result};
use rescuevo_sim::prelude::*;

use crate::args::{InitialStateArgs, ParameterArgs};
use crate::printing::{print_outcome, print_parameters, print_trace};

pub fn run_trajectory(
    params: &ParameterArgs,
    initial: &InitialStateArgs,
    seed: u64,
    trace: bool,
) -> Result<()> {
    println!("🧬 Rescuevo - Single Trajectory");
    println!("============================================");

    let params = params.build().context("Invalid simulation parameters")?;
    let initial = initial.build();
    print_parameters(&params, initial, seed);

    let mut trajectory = Trajectory::new(initial, params.clone(), seed);
    let outcome = if trace {
        trajectory.run_with_trace()
    } else {
        trajectory.run()
    };

    if let Some(states) = &outcome.trace {
        print_trace(states);
    }
    print_outcome(&outcome, &params);

    Ok(())
}
