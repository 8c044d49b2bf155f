//! Grid command implementation
//!
//! Generates the sensitivity grid and exports it as CSV, either to a file
//! or to stdout.

use std::io;
use std::path::{Path, PathBuf};

use tracing::info;
use valuer_sensitivity::export::write_csv;
use valuer_sensitivity::grid::{
    generate, generate_parallel, AssumptionRange, ErrorPolicy, GridConfig, GridSteps,
};

use super::value::apply_overrides;
use crate::config::AppConfig;
use crate::{AssumptionOverrides, Result};

/// Parsed grid command arguments.
pub struct GridArgs {
    /// ADR range minimum in dollars.
    pub adr_min: f64,
    /// ADR range maximum in dollars.
    pub adr_max: f64,
    /// ADR step in dollars.
    pub adr_step: f64,
    /// Occupancy range minimum in percent.
    pub occ_min: f64,
    /// Occupancy range maximum in percent.
    pub occ_max: f64,
    /// Occupancy step in percentage points.
    pub occ_step: f64,
    /// Cap-rate range minimum in percent.
    pub cap_min: f64,
    /// Cap-rate range maximum in percent.
    pub cap_max: f64,
    /// Cap-rate step in percentage points.
    pub cap_step: f64,
    /// CSV destination; stdout when absent.
    pub output: Option<PathBuf>,
    /// Legacy-compatible halt-on-first-error policy.
    pub halt_on_error: bool,
    /// Use the Rayon generation path.
    pub parallel: bool,
}

/// Run the grid command
pub fn run(config_path: &Path, overrides: &AssumptionOverrides, args: GridArgs) -> Result<()> {
    let config = AppConfig::load(config_path)?;
    let inputs = apply_overrides(config.assumptions.to_inputs(), overrides);

    let policy = if args.halt_on_error {
        ErrorPolicy::Halt
    } else {
        ErrorPolicy::Skip
    };
    let grid_config = GridConfig::new(
        AssumptionRange::new(args.adr_min, args.adr_max),
        AssumptionRange::new(args.occ_min, args.occ_max),
        AssumptionRange::new(args.cap_min, args.cap_max),
    )
    .with_steps(GridSteps {
        adr: args.adr_step,
        // Percentage-point steps become fractional steps.
        occupancy: args.occ_step / 100.0,
        cap_rate: args.cap_step / 100.0,
    })
    .with_error_policy(policy);

    info!("Generating sensitivity grid...");
    info!("  ADR: {} - {} step {}", args.adr_min, args.adr_max, args.adr_step);
    info!("  Occupancy: {}% - {}% step {}", args.occ_min, args.occ_max, args.occ_step);
    info!("  Cap rate: {}% - {}% step {}", args.cap_min, args.cap_max, args.cap_step);
    info!("  Error policy: {:?}", policy);

    let rows = if args.parallel {
        generate_parallel(&inputs, &grid_config)?
    } else {
        generate(&inputs, &grid_config)?
    };
    info!("Generated {} rows", rows.len());

    match &args.output {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            write_csv(&rows, io::BufWriter::new(file))?;
            info!("Wrote {}", path.display());
        }
        None => {
            write_csv(&rows, io::stdout().lock())?;
        }
    }

    Ok(())
}
