use rescuevo_sim::analysis::summary;
use rescuevo_sim::prelude::*;

pub fn print_parameters(params: &SimulationParameters, initial: PopulationState, seed: u64) {
    println!("\n📋 Simulation Configuration");
    println!(
        "  • Carrying Capacity: {} [-k, --carrying-capacity]",
        params.carrying_capacity()
    );
    println!("  • Decay Rate: {} [-d, --decay-rate]", params.decay_rate());
    println!(
        "  • Selection Coefficient: {} [-s, --selection-coefficient]",
        params.selection_coefficient()
    );
    println!(
        "  • Mutation Rate: {} [-u, --mutation-rate]",
        params.mutation_rate()
    );
    println!(
        "  • Migration Rate: {} [-m, --migration-rate]",
        params.migration_rate()
    );
    println!(
        "  • Generation Cap: {} [-g, --max-generations]",
        params.max_generations()
    );

    println!("\n🧬 Initial Population");
    println!("  • Wild-type: {} [-w, --wildtype]", initial.wildtype);
    println!("  • Mutant: {} [--mutant]", initial.mutant);
    println!("  • Random Seed: {seed} [--seed]");
}

pub fn print_outcome(outcome: &TrajectoryOutcome, params: &SimulationParameters) {
    println!("\n✓ Trajectory complete!");
    match outcome.stop_reason {
        StopReason::ReachedCapacity => {
            println!("  • Stop Reason: reached carrying capacity");
        }
        StopReason::TimedOut => {
            println!("  • Stop Reason: generation cap reached");
        }
    }
    println!("  • Generations: {}", outcome.generations);
    println!("  • Final Wild-type: {}", outcome.final_state.wildtype);
    println!("  • Final Mutants: {}", outcome.final_state.mutant);

    let fraction = summary::proportion(
        outcome.final_state.total(),
        params.carrying_capacity(),
    )
    .expect("carrying capacity is validated positive");
    println!("  • Capacity Fraction: {fraction:.3}");
}

pub fn print_trace(states: &[PopulationState]) {
    println!("\n📈 Trajectory");
    println!("  {:>10}  {:>9}  {:>7}  {:>7}", "generation", "wildtype", "mutant", "total");
    for (generation, state) in states.iter().enumerate() {
        println!(
            "  {:>10}  {:>9}  {:>7}  {:>7}",
            generation,
            state.wildtype,
            state.mutant,
            state.total()
        );
    }
}

pub fn print_sweep_table(swept: SweptParameter, metric: SummaryMetric, rows: &[ExperimentRow]) {
    println!("\n📊 Sweep Results");
    println!("  {:>22}  mean {}", swept.to_string(), metric);
    for row in rows {
        println!("  {:>22}  {:.4}", row.parameter_value, row.summary);
    }
}
