//! Performance smoke test for the risk engine.
//!
//! Run with: cargo bench

use std::hint::black_box;

// Note: We would use criterion for proper benchmarks, but the whole
// derivation chain is O(fixed sample count) and completes in microseconds,
// so a coarse wall-clock check is enough here.

#[cfg(test)]
mod benches {
    use super::*;
    use std::time::Instant;

    use stef::{curves::curve_set, ClimateScenario, RiskEngine, SiteInput};

    #[test]
    fn full_assessment_stays_sub_millisecond() {
        let engine = RiskEngine::default();
        let input = SiteInput {
            latitude: 36.0,
            longitude: 14.25,
            nutritional_index: 1.0,
            scenario: ClimateScenario::Ssp126,
        };

        let iterations = 1_000;
        let start = Instant::now();
        for _ in 0..iterations {
            let assessment = engine.assess(black_box(&input)).unwrap();
            black_box(curve_set(engine.constants(), &assessment));
        }
        let per_call = start.elapsed() / iterations;
        assert!(
            per_call.as_micros() < 1_000,
            "assessment took {per_call:?} per call"
        );
    }
}
