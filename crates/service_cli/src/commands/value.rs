//! Value command implementation
//!
//! Computes the single-point valuation metrics and renders them as an
//! aligned table or JSON.

use std::path::Path;

use serde::Serialize;
use tracing::info;
use valuer_core::engine::compute_valuation;
use valuer_core::types::{PropertyProfile, ValuationInputs, ValuationResult};

use crate::config::AppConfig;
use crate::{AssumptionOverrides, CliError, Result};

/// JSON payload for the value command.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueReport<'a> {
    property: &'a PropertyProfile,
    inputs: &'a ValuationInputs,
    result: &'a ValuationResult,
}

/// Run the value command
pub fn run(config_path: &Path, overrides: &AssumptionOverrides, format: &str) -> Result<()> {
    let config = AppConfig::load(config_path)?;
    let inputs = apply_overrides(config.assumptions.to_inputs(), overrides);

    info!("Computing valuation...");
    info!("  Property: {}", config.property.name);
    info!("  Rooms: {}", inputs.room_count);
    info!("  Cap rate: {}", inputs.cap_rate);

    let result = compute_valuation(&inputs)?;

    match format {
        "json" => {
            let report = ValueReport {
                property: &config.property,
                inputs: &inputs,
                result: &result,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "table" => {
            println!("{} · {}", config.property.name, config.property.location);
            println!();
            println!("  Net operating income (NOI)   ${:>15.2}", inputs.noi);
            println!("  Income approach value        ${:>15.2}", result.income_value);
            println!("  ADR multiplier value         ${:>15.2}", result.adr_value);
            println!();
            println!("  Cash-on-cash (income)         {:>15.3}", result.cash_on_cash_income);
            println!("  Cash-on-cash (ADR)            {:>15.3}", result.cash_on_cash_adr);
            println!("  Cash-on-cash (return)         {:>15.3}", result.cash_on_cash_return);
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            )));
        }
    }

    Ok(())
}

/// Applies per-invocation flag overrides on top of the configured inputs.
pub(crate) fn apply_overrides(
    mut inputs: ValuationInputs,
    overrides: &AssumptionOverrides,
) -> ValuationInputs {
    if let Some(noi) = overrides.noi {
        inputs.noi = noi;
    }
    if let Some(cap_rate) = overrides.cap_rate {
        inputs.cap_rate = cap_rate;
    }
    if let Some(adr) = overrides.adr {
        inputs.adr = adr;
    }
    if let Some(rooms) = overrides.rooms {
        inputs.room_count = rooms;
    }
    if let Some(opex) = overrides.opex {
        inputs.opex = opex;
    }
    if let Some(multiplier) = overrides.multiplier {
        inputs.adr_multiplier = multiplier;
    }
    if let Some(equity) = overrides.equity {
        inputs.equity_invested = equity;
    }
    inputs
}
