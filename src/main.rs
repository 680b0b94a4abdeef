use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use restaurant_reviews::{Report, ReviewStore, Seed};

#[derive(Parser)]
#[command(name = "restaurant-reviews")]
#[command(about = "Customers, restaurants and their reviews", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the built-in two-customer fixture and print a report
    Demo {
        /// Print the snapshot as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Load a seed file and print a report
    Report {
        /// Path to the seed JSON file
        seed: PathBuf,

        /// Print the snapshot as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match cli.verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let (seed, json) = match cli.command {
        Commands::Demo { json } => (Seed::fixture(), json),
        Commands::Report { seed, json } => (Seed::from_path(&seed)?, json),
    };

    let mut store = ReviewStore::new();
    seed.apply(&mut store).context("Failed to load seed into store")?;
    info!(
        customers = store.customer_count(),
        restaurants = store.restaurant_count(),
        reviews = store.review_count(),
        "store ready"
    );

    let snapshot = store.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", Report(&snapshot));
    }

    Ok(())
}
