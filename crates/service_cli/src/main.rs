//! hotelval CLI - Hotel Property Valuation Operations
//!
//! Operational entry point for the hotelval valuation library.
//!
//! # Commands
//!
//! - `hotelval value` - Compute single-point valuation metrics
//! - `hotelval grid` - Generate the three-dimensional sensitivity grid
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate orchestrates the
//! library crates (`valuer_core`, `valuer_sensitivity`) behind a unified
//! command-line interface. All math lives in the libraries; this crate
//! only parses arguments, loads configuration, and renders output.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// hotelval Hotel Valuation CLI
#[derive(Parser)]
#[command(name = "hotelval")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "hotelval.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Per-invocation overrides of the configured base assumptions.
#[derive(Args)]
struct AssumptionOverrides {
    /// Net operating income [$]
    #[arg(long)]
    noi: Option<f64>,

    /// Market cap rate (fraction, e.g. 0.085)
    #[arg(long)]
    cap_rate: Option<f64>,

    /// Average daily rate [$]
    #[arg(long)]
    adr: Option<f64>,

    /// Room count
    #[arg(long)]
    rooms: Option<u32>,

    /// Annual operating expenses [$]
    #[arg(long)]
    opex: Option<f64>,

    /// ADR multiplier
    #[arg(long)]
    multiplier: Option<f64>,

    /// Equity invested [$]
    #[arg(long)]
    equity: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute single-point valuation metrics
    Value {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        #[command(flatten)]
        overrides: AssumptionOverrides,
    },

    /// Generate the sensitivity grid and export it as CSV
    Grid {
        /// ADR range minimum [$]
        #[arg(long, default_value = "70")]
        adr_min: f64,

        /// ADR range maximum [$]
        #[arg(long, default_value = "95")]
        adr_max: f64,

        /// ADR step [$]
        #[arg(long, default_value = "25")]
        adr_step: f64,

        /// Occupancy range minimum [%]
        #[arg(long, default_value = "55")]
        occ_min: f64,

        /// Occupancy range maximum [%]
        #[arg(long, default_value = "85")]
        occ_max: f64,

        /// Occupancy step [percentage points]
        #[arg(long, default_value = "5")]
        occ_step: f64,

        /// Cap rate range minimum [%]
        #[arg(long, default_value = "7")]
        cap_min: f64,

        /// Cap rate range maximum [%]
        #[arg(long, default_value = "11")]
        cap_max: f64,

        /// Cap rate step [percentage points]
        #[arg(long, default_value = "1")]
        cap_step: f64,

        /// Output CSV path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Abort on the first failing row instead of skipping it
        #[arg(long)]
        halt_on_error: bool,

        /// Generate rows in parallel
        #[arg(long)]
        parallel: bool,

        #[command(flatten)]
        overrides: AssumptionOverrides,
    },
}

fn main() {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let outcome = match cli.command {
        Commands::Value { format, overrides } => {
            commands::value::run(&cli.config, &overrides, &format)
        }
        Commands::Grid {
            adr_min,
            adr_max,
            adr_step,
            occ_min,
            occ_max,
            occ_step,
            cap_min,
            cap_max,
            cap_step,
            output,
            halt_on_error,
            parallel,
            overrides,
        } => commands::grid::run(
            &cli.config,
            &overrides,
            commands::grid::GridArgs {
                adr_min,
                adr_max,
                adr_step,
                occ_min,
                occ_max,
                occ_step,
                cap_min,
                cap_max,
                cap_step,
                output,
                halt_on_error,
                parallel,
            },
        ),
    };

    if let Err(err) = outcome {
        // Withhold partial numeric output; surface the message only.
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
