//! Run a batch of property scenarios from a CSV file
//!
//! Each input row becomes one output row with the headline results

use anyhow::{Context, Result};
use clap::Parser;
use property_calculator::scenario::{load_scenarios, ScenarioRunner};
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "run_batch", about = "Run property scenarios from a CSV file")]
struct Args {
    /// CSV of scenario inputs (header row of field names)
    input: PathBuf,

    /// Where to write the results CSV
    #[arg(long, default_value = "batch_results.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let inputs = load_scenarios(&args.input)
        .with_context(|| format!("failed to load scenarios from {}", args.input.display()))?;
    println!("Loaded {} scenarios in {:?}", inputs.len(), start.elapsed());

    let runner = ScenarioRunner::new();
    let results = runner.run_batch(&inputs);

    let file = File::create(&args.output)
        .with_context(|| format!("unable to create {}", args.output.display()))?;
    let mut writer = csv::Writer::from_writer(file);
    for result in &results {
        writer.serialize(result.summary())?;
    }
    writer.flush()?;

    let unconverged = results
        .iter()
        .filter(|r| !r.buy_vs_rent.buy_irr_converged)
        .count();
    if unconverged > 0 {
        log::warn!("{} scenarios report an unconverged buy IRR estimate", unconverged);
    }

    println!("Output written to {}", args.output.display());
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
