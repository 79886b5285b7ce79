use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli {
    pub mod render;
    pub mod status;

    pub fn parse_date(value: &str) -> Result<time::Date, String> {
        imfridge_shared::parse_day(value).map_err(|err| err.to_string())
    }
}

/// imfridge - what to eat, freeze or throw away
#[derive(Parser)]
#[command(name = "imfridge")]
#[command(about = "Freshness calendar for perishable items", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay items out on the month, week or day calendar
    Render(cli::render::RenderArgs),
    /// Freshness badge for every tracked item
    Status(cli::status::StatusArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = imfridge::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    imfridge::observability::init_observability(
        "imfridge",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Render(args) => cli::render::render(config, args),
        Commands::Status(args) => cli::status::status(config, args),
    }
}
