use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rescuevo_sim::prelude::*;
use std::fs;

use crate::args::SweepArgs;
use crate::printing::print_sweep_table;

pub fn run_sweep(args: &SweepArgs) -> Result<()> {
    println!("🧬 Rescuevo - Parameter Sweep");
    println!("============================================");

    let swept = parse_swept(&args.param)?;
    let metric = parse_metric(&args.metric)?;
    let values = grid_values(args)?;

    let params = args.params.build().context("Invalid simulation parameters")?;
    let initial = args.initial.build();
    let experiment = Experiment::new(params, initial, args.reps, args.seed)
        .context("Invalid experiment configuration")?;

    println!(
        "\nSweeping {swept} over {} values, {} replicates each (seed {})...",
        values.len(),
        args.reps,
        args.seed
    );

    let pb = if args.no_progress {
        None
    } else {
        let pb = ProgressBar::new(values.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    };

    // Iterating the grid here instead of calling run_grid keeps the progress
    // bar ticking per point; run_point seeds replicates by grid index, so the
    // results match a single run_grid call exactly.
    let mut rows = Vec::with_capacity(values.len());
    for (grid_index, &value) in values.iter().enumerate() {
        let row = experiment
            .run_point(swept, value, grid_index, metric)
            .with_context(|| format!("Grid point {swept} = {value}"))?;
        rows.push(row);
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    emit(args, swept, metric, &rows)
}

fn parse_swept(name: &str) -> Result<SweptParameter> {
    Ok(match name {
        "decay-rate" => SweptParameter::DecayRate,
        "selection-coefficient" => SweptParameter::SelectionCoefficient,
        "mutation-rate" => SweptParameter::MutationRate,
        "migration-rate" => SweptParameter::MigrationRate,
        other => bail!(
            "Unknown parameter '{other}' (expected decay-rate, selection-coefficient, \
             mutation-rate, or migration-rate)"
        ),
    })
}

fn parse_metric(name: &str) -> Result<SummaryMetric> {
    Ok(match name {
        "generations" => SummaryMetric::GenerationsElapsed,
        "final-mutants" => SummaryMetric::FinalMutantCount,
        "capacity-fraction" => SummaryMetric::CapacityFraction,
        other => bail!(
            "Unknown metric '{other}' (expected generations, final-mutants, \
             or capacity-fraction)"
        ),
    })
}

/// Resolve the grid: an explicit value list, or a linear range.
fn grid_values(args: &SweepArgs) -> Result<Vec<f64>> {
    if let Some(list) = &args.values {
        let values = list
            .split(',')
            .map(|v| {
                v.trim()
                    .parse::<f64>()
                    .with_context(|| format!("Invalid grid value '{}'", v.trim()))
            })
            .collect::<Result<Vec<f64>>>()?;
        if values.is_empty() {
            bail!("Grid value list is empty");
        }
        return Ok(values);
    }

    match (args.from, args.to, args.steps) {
        (Some(from), Some(to), Some(steps)) => {
            if steps == 0 {
                bail!("A linear grid needs at least one step");
            }
            if steps == 1 {
                return Ok(vec![from]);
            }
            let increment = (to - from) / (steps - 1) as f64;
            Ok((0..steps).map(|i| from + increment * i as f64).collect())
        }
        _ => bail!("Specify a grid with either --values or --from/--to/--steps"),
    }
}

fn emit(
    args: &SweepArgs,
    swept: SweptParameter,
    metric: SummaryMetric,
    rows: &[ExperimentRow],
) -> Result<()> {
    let rendered = match args.format.as_str() {
        "table" => None,
        "csv" => Some(render_csv(rows)),
        "json" => Some(render_json(swept, metric, rows)?),
        other => bail!("Unknown format '{other}' (expected table, csv, or json)"),
    };

    match (&args.output, rendered) {
        (Some(path), Some(text)) => {
            fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("\n✓ Sweep complete! Results written to {}", path.display());
        }
        (Some(path), None) => {
            // A table only makes sense on a terminal; file output defaults to CSV.
            fs::write(path, render_csv(rows))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("\n✓ Sweep complete! Results written to {}", path.display());
        }
        (None, Some(text)) => {
            println!("{text}");
        }
        (None, None) => {
            print_sweep_table(swept, metric, rows);
            println!("\n✓ Sweep complete!");
        }
    }

    Ok(())
}

fn render_csv(rows: &[ExperimentRow]) -> String {
    let mut out = String::from("parameter_value,summary,replicates\n");
    for row in rows {
        out.push_str(&format!(
            "{},{},{}\n",
            row.parameter_value,
            row.summary,
            row.outcomes.len()
        ));
    }
    out
}

fn render_json(
    swept: SweptParameter,
    metric: SummaryMetric,
    rows: &[ExperimentRow],
) -> Result<String> {
    let table: Vec<serde_json::Value> = rows
        .iter()
        .map(|row| {
            serde_json::json!({
                "parameter": swept.to_string(),
                "parameter_value": row.parameter_value,
                "metric": metric.to_string(),
                "summary": row.summary,
                "replicates": row.outcomes.len(),
            })
        })
        .collect();
    serde_json::to_string_pretty(&table).context("Failed to serialize sweep results")
}
