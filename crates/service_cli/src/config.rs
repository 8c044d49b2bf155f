//! CLI configuration management
//!
//! Base assumptions come from a TOML file (`hotelval.toml` by default);
//! every numeric value can then be overridden per invocation with CLI
//! flags. A missing configuration file is not an error: the built-in
//! defaults describe the demo property.

use std::path::Path;

use serde::{Deserialize, Serialize};
use valuer_core::types::{PropertyProfile, ValuationInputs};

use crate::{CliError, Result};

/// Base financial assumptions for the property.
///
/// Defaults mirror the demo property: 18 rooms at an ADR of 175 with an
/// 8.5% market cap rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// Number of rooms.
    pub room_count: u32,
    /// Average daily rate in dollars.
    pub adr: f64,
    /// Net operating income in dollars.
    pub noi: f64,
    /// Annual operating expenses in dollars.
    pub opex: f64,
    /// Market cap rate as a fraction.
    pub cap_rate: f64,
    /// Empirical ADR multiplier.
    pub adr_multiplier: f64,
    /// Equity invested in dollars.
    pub equity_invested: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            room_count: 18,
            adr: 175.0,
            noi: 230_000.0,
            opex: 480_000.0,
            cap_rate: 0.085,
            adr_multiplier: 7.6,
            equity_invested: 10_000.0,
        }
    }
}

impl Assumptions {
    /// Converts the assumptions into engine inputs.
    pub fn to_inputs(&self) -> ValuationInputs {
        ValuationInputs {
            noi: self.noi,
            cap_rate: self.cap_rate,
            adr: self.adr,
            room_count: self.room_count,
            adr_multiplier: self.adr_multiplier,
            equity_invested: self.equity_invested,
            opex: self.opex,
        }
    }
}

/// Full CLI configuration: property metadata plus base assumptions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Display metadata for report headers.
    pub property: PropertyProfile,
    /// Base financial assumptions.
    pub assumptions: Assumptions,
}

impl AppConfig {
    /// Loads configuration from a TOML file, falling back to the built-in
    /// defaults when the file does not exist.
    ///
    /// # Errors
    /// - `CliError::Io` if the file exists but cannot be read
    /// - `CliError::Config` if the file cannot be parsed
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|err| CliError::Config {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }
}
