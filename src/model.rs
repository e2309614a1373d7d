//! Model constants for the thermal risk engine.
//!
//! Every tuned number in the published formulas lives here so that policy
//! tuning is a config edit, not a formula edit. Files are YAML; any field
//! omitted falls back to the baseline calibration.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

fn default_gradient_amplitude() -> f64 {
    28.0
}

fn default_gradient_offset() -> f64 {
    5.0
}

fn default_viable_min_c() -> f64 {
    15.0
}

fn default_viable_max_c() -> f64 {
    35.0
}

fn default_starvation_threshold() -> f64 {
    0.4
}

fn default_nominal_limit_c() -> f64 {
    31.5
}

fn default_starved_limit_c() -> f64 {
    30.4
}

fn default_metabolic_base() -> f64 {
    50.0
}

fn default_metabolic_exponent() -> f64 {
    0.09
}

fn default_oxygen_supply_base() -> f64 {
    300.0
}

fn default_oxygen_supply_rate() -> f64 {
    0.03
}

fn default_oxygen_demand_base() -> f64 {
    30.0
}

fn default_oxygen_demand_rate() -> f64 {
    0.045
}

fn default_cycle_amplitude_c() -> f64 {
    5.0
}

fn default_cycle_phase_month() -> f64 {
    5.0
}

fn default_survival_base_decay() -> f64 {
    0.05
}

fn default_survival_risk_divisor() -> f64 {
    500.0
}

fn default_curve_samples() -> usize {
    100
}

fn default_survival_years() -> u32 {
    10
}

/// Calibration constants behind every engine formula.
///
/// The latitudinal gradient pair (`gradient_amplitude`, `gradient_offset`)
/// approximates a global sea-surface-temperature profile. The two critical
/// limits encode the starvation penalty: the source narrative quotes a 1.07 °C
/// tolerance loss, while the literal thresholds (31.5 vs 30.4) differ by
/// 1.1 °C. The literals are authoritative here; the 1.07 figure is left as a
/// narrative discrepancy rather than corrected.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConstants {
    /// Amplitude of the latitudinal SST gradient (°C).
    #[serde(default = "default_gradient_amplitude")]
    pub gradient_amplitude: f64,
    /// Polar baseline offset of the SST gradient (°C).
    #[serde(default = "default_gradient_offset")]
    pub gradient_offset: f64,
    /// Lower bound of the viable physiological range (°C). Variant
    /// calibrations use 15 or 10.
    #[serde(default = "default_viable_min_c")]
    pub viable_min_c: f64,
    /// Upper bound of the viable physiological range (°C). Variant
    /// calibrations use 35 or 36.
    #[serde(default = "default_viable_max_c")]
    pub viable_max_c: f64,
    /// Nutritional index below which the starvation penalty applies.
    #[serde(default = "default_starvation_threshold")]
    pub starvation_threshold: f64,
    /// Collapse threshold for a well-fed individual (°C).
    #[serde(default = "default_nominal_limit_c")]
    pub nominal_limit_c: f64,
    /// Collapse threshold under starvation (°C).
    #[serde(default = "default_starved_limit_c")]
    pub starved_limit_c: f64,
    /// Metabolic demand curve scale (mg O2/kg/h at the viable minimum).
    #[serde(default = "default_metabolic_base")]
    pub metabolic_base: f64,
    /// Metabolic demand exponential rate (1/°C). Literature copies use 0.08
    /// or 0.09.
    #[serde(default = "default_metabolic_exponent")]
    pub metabolic_exponent: f64,
    /// Oxygen supply curve scale.
    #[serde(default = "default_oxygen_supply_base")]
    pub oxygen_supply_base: f64,
    /// Oxygen supply exponential decay rate (1/°C).
    #[serde(default = "default_oxygen_supply_rate")]
    pub oxygen_supply_rate: f64,
    /// Oxygen demand curve scale.
    #[serde(default = "default_oxygen_demand_base")]
    pub oxygen_demand_base: f64,
    /// Oxygen demand exponential growth rate (1/°C).
    #[serde(default = "default_oxygen_demand_rate")]
    pub oxygen_demand_rate: f64,
    /// Seasonal swing around the annual mean (°C).
    #[serde(default = "default_cycle_amplitude_c")]
    pub cycle_amplitude_c: f64,
    /// Month offset placing the seasonal peak (peak lands at phase + 3).
    #[serde(default = "default_cycle_phase_month")]
    pub cycle_phase_month: f64,
    /// Population decay rate per year at zero risk.
    #[serde(default = "default_survival_base_decay")]
    pub survival_base_decay: f64,
    /// Risk-score divisor controlling how risk steepens the decay.
    #[serde(default = "default_survival_risk_divisor")]
    pub survival_risk_divisor: f64,
    /// Sample count for curves over the viable temperature domain.
    #[serde(default = "default_curve_samples")]
    pub curve_samples: usize,
    /// Projection horizon for the survival curve (years).
    #[serde(default = "default_survival_years")]
    pub survival_years: u32,
}

impl Default for ModelConstants {
    fn default() -> Self {
        Self {
            gradient_amplitude: default_gradient_amplitude(),
            gradient_offset: default_gradient_offset(),
            viable_min_c: default_viable_min_c(),
            viable_max_c: default_viable_max_c(),
            starvation_threshold: default_starvation_threshold(),
            nominal_limit_c: default_nominal_limit_c(),
            starved_limit_c: default_starved_limit_c(),
            metabolic_base: default_metabolic_base(),
            metabolic_exponent: default_metabolic_exponent(),
            oxygen_supply_base: default_oxygen_supply_base(),
            oxygen_supply_rate: default_oxygen_supply_rate(),
            oxygen_demand_base: default_oxygen_demand_base(),
            oxygen_demand_rate: default_oxygen_demand_rate(),
            cycle_amplitude_c: default_cycle_amplitude_c(),
            cycle_phase_month: default_cycle_phase_month(),
            survival_base_decay: default_survival_base_decay(),
            survival_risk_divisor: default_survival_risk_divisor(),
            curve_samples: default_curve_samples(),
            survival_years: default_survival_years(),
        }
    }
}

pub struct ModelLoader {
    base_dir: PathBuf,
}

impl ModelLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<ModelConstants> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read model file {}", path.display()))?;
        let constants: ModelConstants = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(constants)
    }
}
