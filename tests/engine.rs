use std::path::PathBuf;

use stef::{
    model::ModelLoader, ClimateScenario, EngineError, ModelConstants, RiskEngine, RiskPolicy,
    SiteInput, Status, StatusScheme,
};

fn engine() -> RiskEngine {
    RiskEngine::new(ModelConstants::default())
}

#[test]
fn temperature_stays_in_viable_range_across_the_globe() {
    let engine = engine();
    let shifts = [0.0, 1.5, 3.2];
    for lat in -90..=90 {
        for shift in shifts {
            let t = engine.estimate_temperature(lat as f64, shift);
            assert!(
                (15.0..=35.0).contains(&t),
                "lat {lat} shift {shift} produced {t}"
            );
        }
    }
}

#[test]
fn critical_limit_boundary_is_inclusive_toward_nominal() {
    let engine = engine();
    assert_eq!(engine.select_critical_limit(0.39), 30.4);
    assert_eq!(engine.select_critical_limit(0.4), 31.5);
    assert_eq!(engine.select_critical_limit(0.0), 30.4);
    assert_eq!(engine.select_critical_limit(1.0), 31.5);
}

#[test]
fn risk_is_monotone_in_temperature_under_both_policies() {
    for policy in [RiskPolicy::ThreeZone, RiskPolicy::LimitRatio] {
        for limit in [30.4, 31.5] {
            let mut previous = 0;
            let mut t = 15.0;
            while t <= 35.0 {
                let risk = policy.score(t, limit);
                assert!(
                    risk >= previous,
                    "{policy:?} not monotone at t={t} limit={limit}"
                );
                previous = risk;
                t += 0.05;
            }
        }
    }
}

#[test]
fn risk_saturates_at_the_critical_limit() {
    for policy in [RiskPolicy::ThreeZone, RiskPolicy::LimitRatio] {
        for limit in [30.4, 31.5] {
            assert_eq!(policy.score(limit, limit), 100);
            assert_eq!(policy.score(limit + 2.0, limit), 100);
        }
    }
}

#[test]
fn risk_is_truncated_and_bounded() {
    for policy in [RiskPolicy::ThreeZone, RiskPolicy::LimitRatio] {
        let mut t = 15.0;
        while t <= 35.0 {
            let risk = policy.score(t, 31.5);
            assert!(risk <= 100);
            t += 0.17;
        }
    }
    // 29.1525 / 31.5 * 100 = 92.55 truncates to 92, never rounds up.
    assert_eq!(RiskPolicy::LimitRatio.score(29.1525, 31.5), 92);
}

#[test]
fn status_boundaries_fall_into_the_lower_band() {
    assert_eq!(StatusScheme::ThreeTier.classify(90), Status::Stress);
    assert_eq!(StatusScheme::ThreeTier.classify(91), Status::Critical);
    assert_eq!(StatusScheme::ThreeTier.classify(40), Status::Optimal);
    assert_eq!(StatusScheme::ThreeTier.classify(41), Status::Stress);
    assert_eq!(StatusScheme::TwoTier.classify(85), Status::Stable);
    assert_eq!(StatusScheme::TwoTier.classify(86), Status::Critical);
}

#[test]
fn mediterranean_site_under_ssp1_matches_hand_calculation() {
    // lat 36, +1.5°C, NI 1.0: 28·cos(36°) + 5 + 1.5 ≈ 29.15°C.
    let input = SiteInput {
        latitude: 36.0,
        longitude: 14.25,
        nutritional_index: 1.0,
        scenario: ClimateScenario::Ssp126,
    };

    let ratio_engine = engine().with_policy(RiskPolicy::LimitRatio);
    let assessment = ratio_engine.assess(&input).unwrap();
    assert!((assessment.temperature_c - 29.1525).abs() < 1e-3);
    assert_eq!(assessment.critical_limit_c, 31.5);
    assert_eq!(assessment.risk_score, 92);
    assert_eq!(assessment.status, Status::Critical);

    let two_tier = engine()
        .with_policy(RiskPolicy::LimitRatio)
        .with_scheme(StatusScheme::TwoTier);
    let assessment = two_tier.assess(&input).unwrap();
    assert_eq!(assessment.status, Status::Critical);
}

#[test]
fn starved_site_uses_the_lowered_limit_end_to_end() {
    let input = SiteInput {
        latitude: 0.0,
        longitude: 0.0,
        nutritional_index: 0.2,
        scenario: ClimateScenario::Ssp585,
    };
    let assessment = engine().assess(&input).unwrap();
    assert_eq!(assessment.critical_limit_c, 30.4);
    // Equator under +3.2 clamps to 35, well past the limit.
    assert_eq!(assessment.temperature_c, 35.0);
    assert_eq!(assessment.risk_score, 100);
    assert_eq!(assessment.status, Status::Critical);
    assert!(assessment.safety_margin_c() < 0.0);
}

#[test]
fn invalid_nutritional_index_is_rejected() {
    let mut input = SiteInput {
        latitude: 10.0,
        longitude: 10.0,
        nutritional_index: -0.1,
        scenario: ClimateScenario::Present,
    };
    assert!(matches!(
        engine().assess(&input),
        Err(EngineError::NutritionalIndexOutOfRange(_))
    ));

    input.nutritional_index = 1.01;
    assert!(matches!(
        engine().assess(&input),
        Err(EngineError::NutritionalIndexOutOfRange(_))
    ));
}

#[test]
fn unknown_scenario_identifier_is_rejected() {
    let err = "rcp4.5".parse::<ClimateScenario>().unwrap_err();
    assert!(matches!(err, EngineError::UnknownScenario(_)));
}

#[test]
fn wide_range_calibration_loads_and_widens_the_clamp() {
    let loader = ModelLoader::new(env!("CARGO_MANIFEST_DIR"));
    let constants = loader
        .load(PathBuf::from("models/wide_range.yaml"))
        .expect("calibration parses");
    assert_eq!(constants.viable_min_c, 10.0);
    assert_eq!(constants.viable_max_c, 36.0);
    assert_eq!(constants.metabolic_exponent, 0.08);

    let engine = RiskEngine::new(constants);
    // Polar estimate now clamps to 10 instead of 15.
    assert_eq!(engine.estimate_temperature(90.0, 0.0), 10.0);
    // Equator under +3.2 (36.2°C) clamps to the wider maximum.
    assert_eq!(engine.estimate_temperature(0.0, 3.2), 36.0);
}
