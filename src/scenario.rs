//! IPCC climate scenarios selectable by the caller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A named climate projection applied as a fixed offset to the baseline
/// temperature estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClimateScenario {
    #[serde(rename = "present")]
    Present,
    #[serde(rename = "ssp1-2.6")]
    Ssp126,
    #[serde(rename = "ssp5-8.5")]
    Ssp585,
}

impl ClimateScenario {
    pub const ALL: [ClimateScenario; 3] = [
        ClimateScenario::Present,
        ClimateScenario::Ssp126,
        ClimateScenario::Ssp585,
    ];

    /// Warming offset applied to the baseline estimate (°C).
    pub fn shift_c(self) -> f64 {
        match self {
            ClimateScenario::Present => 0.0,
            ClimateScenario::Ssp126 => 1.5,
            ClimateScenario::Ssp585 => 3.2,
        }
    }

    /// Identifier used in config files and query strings.
    pub fn id(self) -> &'static str {
        match self {
            ClimateScenario::Present => "present",
            ClimateScenario::Ssp126 => "ssp1-2.6",
            ClimateScenario::Ssp585 => "ssp5-8.5",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClimateScenario::Present => "Present Day",
            ClimateScenario::Ssp126 => "SSP1-2.6 (+1.5°C)",
            ClimateScenario::Ssp585 => "SSP5-8.5 (+3.2°C)",
        }
    }
}

impl fmt::Display for ClimateScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ClimateScenario {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "present" | "present-day" | "present_day" => Ok(ClimateScenario::Present),
            "ssp1-2.6" | "ssp126" | "ssp1_2_6" => Ok(ClimateScenario::Ssp126),
            "ssp5-8.5" | "ssp585" | "ssp5_8_5" => Ok(ClimateScenario::Ssp585),
            other => Err(EngineError::UnknownScenario(other.to_string())),
        }
    }
}
