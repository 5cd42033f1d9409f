use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use henhouse::{rng::seeded_rng, Flock, FlockReport, RunSettings, SettingsLoader};

#[derive(Debug, Parser)]
#[command(author, version, about = "Egg production and hatching simulation for a flock of chickens")]
struct Cli {
    /// Optional YAML file with initial_chickens, days and seed
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Initial number of chickens (default 50)
    #[arg(long, allow_negative_numbers = true)]
    chickens: Option<i64>,

    /// Number of days to simulate (default 365)
    #[arg(long)]
    days: Option<u64>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("henhouse=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let base = match &cli.settings {
        Some(path) => SettingsLoader::new(".").load(path)?,
        None => RunSettings::default(),
    };
    let settings = base.with_overrides(cli.chickens, cli.days, cli.seed);

    let mut flock = Flock::new(settings.initial_chickens, seeded_rng(settings.seed))
        .context("failed to create flock")?;
    flock.simulate(settings.days);
    tracing::info!(
        days = settings.days,
        population = flock.len(),
        "simulation finished"
    );

    let report = FlockReport::from_flock(&flock, settings.days);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
