//! Command-line entry point: parse a mission, simulate it, print the report.

use clap::{Parser, ValueEnum};
use martian_robots::{InputParser, Result, SAMPLE_INPUT, SimulationConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Run robots across a planet surface and report where they end up
#[derive(Parser, Debug)]
#[command(name = "martian-robots", version)]
struct Args {
    /// Mission file. Uses the built-in sample when omitted
    input: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let input = match &args.input {
        Some(path) => {
            tracing::info!(path = %path.display(), "reading mission file");
            std::fs::read_to_string(path)?
        }
        None => {
            tracing::info!("no mission file given, running the built-in sample");
            SAMPLE_INPUT.to_string()
        }
    };

    let parsed = InputParser::new(config).parse(&input)?;
    if !parsed.rejected.is_empty() {
        tracing::warn!(rejected = parsed.rejected.len(), "some robot records were skipped");
    }

    let report = parsed.planet.simulate();
    match args.format {
        Format::Text => print!("{}", report.to_text()),
        Format::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
