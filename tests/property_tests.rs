//! Property-based tests over the analysis core.

use proptest::prelude::*;

use fsi_rust::api::{AwdParams, FusionInputs, FusionWeights};
use fsi_rust::models::FieldPolygon;
use fsi_rust::services::{compute_health_score, detect_awd, polygon_area_hectares};

fn score(p: f64, index: f64, risk: f64) -> f64 {
    compute_health_score(
        &FusionInputs {
            p_classifier_healthy: p,
            index_raw: index,
            risk_probability: risk,
        },
        &FusionWeights::default(),
    )
    .unwrap()
    .score
}

proptest! {
    // Every reading in the closed hysteresis band is ambiguous: both
    // thresholds use strict inequalities.
    #[test]
    fn awd_in_band_series_changes_nothing(
        values in prop::collection::vec(0.2f64..=0.3, 0..60)
    ) {
        let result = detect_awd(&values, &AwdParams::default());
        prop_assert!(!result.detected);
        prop_assert_eq!(result.cycle_count, 0);
        prop_assert_eq!(result.dry_day_count, 0);
    }

    #[test]
    fn awd_dry_days_never_exceed_series_length(
        values in prop::collection::vec(-0.5f64..=0.8, 0..60)
    ) {
        let result = detect_awd(&values, &AwdParams::default());
        prop_assert!(result.dry_day_count as usize <= values.len());
        prop_assert!(result.cycle_count <= result.dry_day_count);
    }

    #[test]
    fn fusion_score_always_bounded(
        p in 0.0f64..=1.0,
        index in -2.0f64..=2.0,
        risk in 0.0f64..=1.0,
    ) {
        let s = score(p, index, risk);
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn fusion_monotonic_in_classifier_probability(
        p_a in 0.0f64..=1.0,
        p_b in 0.0f64..=1.0,
        index in -2.0f64..=2.0,
        risk in 0.0f64..=1.0,
    ) {
        let lo = p_a.min(p_b);
        let hi = p_a.max(p_b);
        prop_assert!(score(hi, index, risk) >= score(lo, index, risk));
    }

    #[test]
    fn fusion_rising_risk_never_raises_score(
        p in 0.0f64..=1.0,
        index in -2.0f64..=2.0,
        risk_a in 0.0f64..=1.0,
        risk_b in 0.0f64..=1.0,
    ) {
        let lo = risk_a.min(risk_b);
        let hi = risk_a.max(risk_b);
        prop_assert!(score(p, index, hi) <= score(p, index, lo));
    }

    // Traversal direction of the ring must not change its area.
    #[test]
    fn area_invariant_under_ring_reversal(
        lon in -170.0f64..=170.0,
        lat in -60.0f64..=60.0,
        width in 0.0005f64..=0.01,
        height in 0.0005f64..=0.01,
    ) {
        let ring = vec![
            (lon, lat),
            (lon + width, lat),
            (lon + width, lat + height),
            (lon, lat + height),
        ];
        let forward = polygon_area_hectares(&FieldPolygon::new(ring.clone())).unwrap();
        let mut reversed = ring;
        reversed.reverse();
        let backward = polygon_area_hectares(&FieldPolygon::new(reversed)).unwrap();
        prop_assert!((forward - backward).abs() <= forward.abs() * 1e-6);
    }

    #[test]
    fn area_positive_for_non_degenerate_rectangles(
        lon in -170.0f64..=170.0,
        lat in -60.0f64..=60.0,
        width in 0.0005f64..=0.01,
        height in 0.0005f64..=0.01,
    ) {
        let ring = vec![
            (lon, lat),
            (lon + width, lat),
            (lon + width, lat + height),
            (lon, lat + height),
        ];
        let area = polygon_area_hectares(&FieldPolygon::new(ring)).unwrap();
        prop_assert!(area > 0.0);
    }
}
