use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use car_wash_sim::io::{load_input, save_results};
use car_wash_sim::simulation::SimEngine;

#[derive(Parser)]
#[command(name = "car_wash_sim")]
#[command(about = "Car wash simulation: runs rounds until every vehicle is clean")]
struct Cli {
    /// Path to the input JSON file (vehicles and washing systems)
    #[arg(long, default_value = "input.json")]
    input: PathBuf,

    /// Path the final dirtiness values are written to
    #[arg(long, default_value = "output.json")]
    output: PathBuf,

    /// Seed for the randomized stations' draws, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Abort with an error after this many rounds instead of looping forever
    /// on inputs that can never converge
    #[arg(long)]
    max_rounds: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let (vehicles, stations) = load_input(&cli.input, cli.seed)?;
    info!(
        "Loaded {} vehicles and {} washing stations from {}",
        vehicles.len(),
        stations.len(),
        cli.input.display()
    );

    let mut engine = match cli.max_rounds {
        Some(cap) => SimEngine::new_with_round_cap(vehicles, stations, cap),
        None => SimEngine::new(vehicles, stations),
    };

    let report = engine.run()?;
    save_results(&cli.output, &report.results)?;

    println!(
        "Simulation completed successfully after {} rounds; results written to {}",
        report.rounds,
        cli.output.display()
    );

    Ok(())
}
