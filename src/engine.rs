//! The metabolic thermal risk engine.
//!
//! A pure function set over `(latitude, nutritional index, climate scenario)`.
//! Every derivation is stateless and deterministic; the engine holds only its
//! calibration constants and the caller-selected policy choices.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::model::ModelConstants;
use crate::scenario::ClimateScenario;

/// One analysis site as supplied by the caller (typically a map click).
///
/// Longitude is echoed into reports but never enters a formula. Coordinates
/// are deliberately not range-checked: unvalidated map clicks outside
/// [-90, 90] must still produce a clamped, non-crashing estimate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SiteInput {
    pub latitude: f64,
    pub longitude: f64,
    pub nutritional_index: f64,
    pub scenario: ClimateScenario,
}

impl SiteInput {
    fn validate(&self) -> Result<(), EngineError> {
        for (field, value) in [
            ("latitude", self.latitude),
            ("longitude", self.longitude),
            ("nutritional_index", self.nutritional_index),
        ] {
            if !value.is_finite() {
                return Err(EngineError::NonFiniteInput { field });
            }
        }
        if !(0.0..=1.0).contains(&self.nutritional_index) {
            return Err(EngineError::NutritionalIndexOutOfRange(
                self.nutritional_index,
            ));
        }
        Ok(())
    }
}

/// Risk scoring strategy. The two variants come from diverging literature
/// copies and encode different philosophies (absolute thermal staging vs
/// proportional distance to the limit), so they stay separate rather than
/// being merged into one formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskPolicy {
    /// Piecewise staging: below 25 °C risk ramps to 30, then to 90 as the
    /// critical limit approaches, saturating at 100 at or beyond it.
    ThreeZone,
    /// Proportional: risk is the temperature as a percentage of the limit,
    /// capped at 100.
    LimitRatio,
}

impl RiskPolicy {
    /// Score a temperature against a critical limit. Truncates toward zero
    /// and clamps to [0, 100].
    pub fn score(self, temperature_c: f64, critical_limit_c: f64) -> u32 {
        let raw = match self {
            RiskPolicy::ThreeZone => {
                if temperature_c < 25.0 {
                    (temperature_c / 25.0) * 30.0
                } else if temperature_c < critical_limit_c {
                    30.0 + ((temperature_c - 25.0) / (critical_limit_c - 25.0)) * 60.0
                } else {
                    100.0
                }
            }
            RiskPolicy::LimitRatio => {
                if temperature_c < critical_limit_c {
                    ((temperature_c / critical_limit_c) * 100.0).min(100.0)
                } else {
                    100.0
                }
            }
        };
        (raw as i64).clamp(0, 100) as u32
    }
}

/// Status banding strategy, again variant-dependent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusScheme {
    /// `>90 → CRITICAL`, `>40 → STRESS`, else `OPTIMAL`.
    ThreeTier,
    /// `>85 → CRITICAL`, else `STABLE`.
    TwoTier,
}

impl StatusScheme {
    /// Thresholds are strict greater-than; boundary scores fall into the
    /// lower category.
    pub fn classify(self, risk_score: u32) -> Status {
        match self {
            StatusScheme::ThreeTier => {
                if risk_score > 90 {
                    Status::Critical
                } else if risk_score > 40 {
                    Status::Stress
                } else {
                    Status::Optimal
                }
            }
            StatusScheme::TwoTier => {
                if risk_score > 85 {
                    Status::Critical
                } else {
                    Status::Stable
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Optimal,
    Stable,
    Stress,
    Critical,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Optimal => "OPTIMAL",
            Status::Stable => "STABLE",
            Status::Stress => "STRESS",
            Status::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything derived from one site input. Value type, never mutated after
/// creation; regenerated from scratch on every new input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Assessment {
    pub temperature_c: f64,
    pub critical_limit_c: f64,
    pub risk_score: u32,
    pub status: Status,
}

impl Assessment {
    /// Distance from the critical limit (°C). Negative when exceeded.
    pub fn safety_margin_c(&self) -> f64 {
        self.critical_limit_c - self.temperature_c
    }
}

pub struct RiskEngine {
    constants: ModelConstants,
    policy: RiskPolicy,
    scheme: StatusScheme,
}

impl RiskEngine {
    pub fn new(constants: ModelConstants) -> Self {
        Self {
            constants,
            policy: RiskPolicy::ThreeZone,
            scheme: StatusScheme::ThreeTier,
        }
    }

    pub fn with_policy(mut self, policy: RiskPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_scheme(mut self, scheme: StatusScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn constants(&self) -> &ModelConstants {
        &self.constants
    }

    pub fn policy(&self) -> RiskPolicy {
        self.policy
    }

    pub fn scheme(&self) -> StatusScheme {
        self.scheme
    }

    /// Validate the caller contract, then run the full derivation chain.
    pub fn assess(&self, input: &SiteInput) -> Result<Assessment, EngineError> {
        input.validate()?;
        let temperature_c =
            self.estimate_temperature(input.latitude, input.scenario.shift_c());
        let critical_limit_c = self.select_critical_limit(input.nutritional_index);
        let risk_score = self.compute_risk(temperature_c, critical_limit_c);
        let status = self.classify_status(risk_score);
        Ok(Assessment {
            temperature_c,
            critical_limit_c,
            risk_score,
            status,
        })
    }

    /// Latitudinal SST estimate: `A·cos(lat) + B + shift`, clamped to the
    /// viable physiological range.
    pub fn estimate_temperature(&self, latitude: f64, climate_shift_c: f64) -> f64 {
        let base = self.constants.gradient_amplitude * latitude.to_radians().cos()
            + self.constants.gradient_offset
            + climate_shift_c;
        base.clamp(self.constants.viable_min_c, self.constants.viable_max_c)
    }

    /// Starvation rule: below the threshold the lowered limit applies. The
    /// boundary itself is inclusive toward the nominal limit.
    pub fn select_critical_limit(&self, nutritional_index: f64) -> f64 {
        if nutritional_index < self.constants.starvation_threshold {
            self.constants.starved_limit_c
        } else {
            self.constants.nominal_limit_c
        }
    }

    pub fn compute_risk(&self, temperature_c: f64, critical_limit_c: f64) -> u32 {
        self.policy.score(temperature_c, critical_limit_c)
    }

    pub fn classify_status(&self, risk_score: u32) -> Status {
        self.scheme.classify(risk_score)
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new(ModelConstants::default())
    }
}
