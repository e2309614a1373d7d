//! Plain-text analysis reports for one assessed site.

use serde::Serialize;

use crate::engine::{Assessment, SiteInput};

/// Management decision keyed off the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    FishingBan,
    ReduceEffort,
    Monitor,
}

impl Decision {
    /// Same strict thresholds as the three-tier status bands.
    pub fn from_risk(risk_score: u32) -> Self {
        if risk_score > 90 {
            Decision::FishingBan
        } else if risk_score > 40 {
            Decision::ReduceEffort
        } else {
            Decision::Monitor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Decision::FishingBan => "FISHING BAN",
            Decision::ReduceEffort => "REDUCE EFFORT",
            Decision::Monitor => "MONITOR",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub scenario: String,
    pub nutritional_index: f64,
    pub temperature_c: f64,
    pub critical_limit_c: f64,
    pub safety_margin_c: f64,
    pub risk_score: u32,
    pub status: String,
    pub decision: Decision,
}

impl AnalysisReport {
    pub fn new(input: &SiteInput, assessment: &Assessment) -> Self {
        let id = format!("AX-{}", chrono::Utc::now().timestamp());
        Self::with_id(id, input, assessment)
    }

    /// Caller-supplied id, so tests and replays stay deterministic.
    pub fn with_id(id: String, input: &SiteInput, assessment: &Assessment) -> Self {
        Self {
            id,
            latitude: input.latitude,
            longitude: input.longitude,
            scenario: input.scenario.label().to_string(),
            nutritional_index: input.nutritional_index,
            temperature_c: assessment.temperature_c,
            critical_limit_c: assessment.critical_limit_c,
            safety_margin_c: assessment.safety_margin_c(),
            risk_score: assessment.risk_score,
            status: assessment.status.label().to_string(),
            decision: Decision::from_risk(assessment.risk_score),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str("STEF ANALYSIS\n");
        out.push_str(&format!("ID: #{}\n", self.id));
        out.push_str(&format!("LOC: {:.2}, {:.2}\n", self.latitude, self.longitude));
        out.push_str(&format!("SCENARIO: {}\n", self.scenario));
        out.push_str(&format!("NI: {:.2}\n", self.nutritional_index));
        out.push_str(&format!("TEMP: {:.1}°C\n", self.temperature_c));
        out.push_str(&format!("LIMIT: {:.1}°C\n", self.critical_limit_c));
        out.push_str(&format!("MARGIN: {:+.1}°C\n", self.safety_margin_c));
        out.push_str(&format!("RISK: {}%\n", self.risk_score));
        out.push_str(&format!("STATUS: {}\n", self.status));
        out.push_str(&format!("DECISION: {}\n", self.decision.label()));
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::{RiskEngine, SiteInput};
    use crate::scenario::ClimateScenario;

    use super::*;

    #[test]
    fn decision_thresholds_are_strict() {
        assert_eq!(Decision::from_risk(90), Decision::ReduceEffort);
        assert_eq!(Decision::from_risk(91), Decision::FishingBan);
        assert_eq!(Decision::from_risk(40), Decision::Monitor);
        assert_eq!(Decision::from_risk(41), Decision::ReduceEffort);
    }

    #[test]
    fn report_echoes_site_and_assessment() {
        let engine = RiskEngine::default();
        let input = SiteInput {
            latitude: 36.0,
            longitude: 14.25,
            nutritional_index: 1.0,
            scenario: ClimateScenario::Ssp126,
        };
        let assessment = engine.assess(&input).unwrap();
        let report = AnalysisReport::with_id("AX-TEST".into(), &input, &assessment);
        let text = report.render_text();
        assert!(text.contains("ID: #AX-TEST"));
        assert!(text.contains("LOC: 36.00, 14.25"));
        assert!(text.contains("SSP1-2.6"));
        assert!(text.contains(&format!("RISK: {}%", assessment.risk_score)));
    }
}
