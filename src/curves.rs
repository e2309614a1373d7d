//! Display-curve generators.
//!
//! Each generator is a pure function of the already-derived assessment and
//! the model constants. Series are regenerated on every call, never cached;
//! identical inputs yield bit-identical output.

use serde::Serialize;

use crate::engine::Assessment;
use crate::model::ModelConstants;

/// Named ordered sequence of (x, y) samples over a fixed display domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveSeries {
    pub name: &'static str,
    pub points: Vec<(f64, f64)>,
}

fn temperature_domain(constants: &ModelConstants) -> impl Iterator<Item = f64> + '_ {
    let n = constants.curve_samples.max(2);
    let span = constants.viable_max_c - constants.viable_min_c;
    (0..n).map(move |i| constants.viable_min_c + span * i as f64 / (n - 1) as f64)
}

/// Metabolic demand proxy: `k1 · exp(k2 · (t − t_min))` over the viable range.
pub fn metabolic_demand(constants: &ModelConstants) -> CurveSeries {
    let points = temperature_domain(constants)
        .map(|t| (t, metabolic_demand_at(constants, t)))
        .collect();
    CurveSeries {
        name: "metabolic_demand",
        points,
    }
}

/// Demand at a single temperature; used to highlight the current site on the
/// metabolic curve.
pub fn metabolic_demand_at(constants: &ModelConstants, temperature_c: f64) -> f64 {
    constants.metabolic_base
        * (constants.metabolic_exponent * (temperature_c - constants.viable_min_c)).exp()
}

/// Oxygen supply capacity, decaying with temperature.
pub fn oxygen_supply(constants: &ModelConstants) -> CurveSeries {
    let points = temperature_domain(constants)
        .map(|t| (t, constants.oxygen_supply_base * (-constants.oxygen_supply_rate * t).exp()))
        .collect();
    CurveSeries {
        name: "oxygen_supply",
        points,
    }
}

/// Oxygen demand, growing with temperature. Where it crosses the supply
/// curve is the implicit oxygen-limitation threshold.
pub fn oxygen_demand(constants: &ModelConstants) -> CurveSeries {
    let points = temperature_domain(constants)
        .map(|t| (t, constants.oxygen_demand_base * (constants.oxygen_demand_rate * t).exp()))
        .collect();
    CurveSeries {
        name: "oxygen_demand",
        points,
    }
}

/// Twelve monthly samples around the annual mean, peaking mid-year.
pub fn annual_cycle(constants: &ModelConstants, temperature_c: f64) -> CurveSeries {
    let points = (1..=12)
        .map(|month| {
            let m = month as f64;
            let swing = constants.cycle_amplitude_c
                * ((m - constants.cycle_phase_month) * std::f64::consts::PI / 6.0).sin();
            (m, temperature_c + swing)
        })
        .collect();
    CurveSeries {
        name: "annual_cycle",
        points,
    }
}

/// Single bar: distance from the critical limit. Negative means exceeded.
pub fn safety_margin(assessment: &Assessment) -> CurveSeries {
    CurveSeries {
        name: "safety_margin",
        points: vec![(0.0, assessment.safety_margin_c())],
    }
}

/// Risk-modulated population projection: exponential decline from an index
/// of 100, steepened by the risk score.
pub fn survival_decay(constants: &ModelConstants, risk_score: u32) -> CurveSeries {
    let rate =
        constants.survival_base_decay + risk_score as f64 / constants.survival_risk_divisor;
    let points = (0..=constants.survival_years)
        .map(|year| (year as f64, 100.0 * (-rate * year as f64).exp()))
        .collect();
    CurveSeries {
        name: "survival_decay",
        points,
    }
}

/// The full curve set backing a rendered analysis, in stable display order.
pub fn curve_set(constants: &ModelConstants, assessment: &Assessment) -> Vec<CurveSeries> {
    vec![
        metabolic_demand(constants),
        oxygen_supply(constants),
        oxygen_demand(constants),
        annual_cycle(constants, assessment.temperature_c),
        safety_margin(assessment),
        survival_decay(constants, assessment.risk_score),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constants() -> ModelConstants {
        ModelConstants::default()
    }

    #[test]
    fn metabolic_curve_spans_viable_range() {
        let c = constants();
        let curve = metabolic_demand(&c);
        assert_eq!(curve.points.len(), c.curve_samples);
        assert_eq!(curve.points.first().unwrap().0, c.viable_min_c);
        assert_eq!(curve.points.last().unwrap().0, c.viable_max_c);
        // Demand at the lower bound is exactly the base constant.
        assert!((curve.points[0].1 - c.metabolic_base).abs() < 1e-12);
    }

    #[test]
    fn annual_cycle_has_twelve_months() {
        let c = constants();
        let curve = annual_cycle(&c, 20.0);
        assert_eq!(curve.points.len(), 12);
        assert_eq!(curve.points[0].0, 1.0);
        assert_eq!(curve.points[11].0, 12.0);
    }

    #[test]
    fn survival_starts_at_full_index() {
        let c = constants();
        let curve = survival_decay(&c, 50);
        assert_eq!(curve.points[0], (0.0, 100.0));
        assert_eq!(curve.points.len(), c.survival_years as usize + 1);
    }
}
