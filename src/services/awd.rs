//! AWD (Alternate Wetting & Drying) cycle detection.
//!
//! Classifies a chronological water-index series into wet/dry states and
//! counts dry→wet recovery cycles in a single forward pass. The caller is
//! responsible for passing the series sorted ascending by date; the
//! detector does not re-sort.

use crate::routes::awd::{AwdParams, AwdResult};
use crate::services::error::{AnalysisError, AnalysisResult};

/// Soil state tracked across the pass. There is no terminal state; the
/// series can end in any of the three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SoilState {
    Unset,
    Wet,
    Dry,
}

/// Run the cycle detector over a chronological water-index series.
///
/// Readings strictly above the wet threshold mark the field wet, completing
/// a cycle if the previous marked state was dry. Readings strictly below
/// the dry threshold mark it dry and count one dry day. Readings on or
/// between the thresholds are ambiguous and change nothing, so a single
/// mid-band reading never breaks a wet or dry run.
///
/// An empty series yields the all-zero result with `detected = false`.
pub fn detect_awd(values: &[f64], params: &AwdParams) -> AwdResult {
    let mut state = SoilState::Unset;
    let mut cycle_count: u32 = 0;
    let mut dry_day_count: u32 = 0;

    for &value in values {
        if value > params.wet_threshold {
            if state == SoilState::Dry {
                cycle_count += 1;
            }
            state = SoilState::Wet;
        } else if value < params.dry_threshold {
            dry_day_count += 1;
            state = SoilState::Dry;
        }
        // Hysteresis band: state and counters unchanged.
    }

    AwdResult {
        detected: cycle_count >= params.min_cycles,
        cycle_count,
        dry_day_count,
    }
}

/// Validate detector thresholds at configuration time.
pub fn validate_params(params: &AwdParams) -> AnalysisResult<()> {
    if !params.wet_threshold.is_finite() || !params.dry_threshold.is_finite() {
        return Err(AnalysisError::Configuration(
            "AWD thresholds must be finite".to_string(),
        ));
    }
    if params.wet_threshold <= params.dry_threshold {
        return Err(AnalysisError::Configuration(format!(
            "wet threshold {} must exceed dry threshold {}",
            params.wet_threshold, params.dry_threshold
        )));
    }
    if params.min_cycles == 0 {
        return Err(AnalysisError::Configuration(
            "min_cycles must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> AwdParams {
        AwdParams::default()
    }

    #[test]
    fn test_empty_series_yields_zeros() {
        let result = detect_awd(&[], &defaults());
        assert_eq!(result, AwdResult::empty());
    }

    #[test]
    fn test_reference_series_trace() {
        // Two dry runs (0.18, then 0.19/0.22) each followed by a wet
        // recovery (0.34, then 0.33); the 0.25 and 0.22 readings sit in
        // the hysteresis band and change nothing.
        let series = [0.35, 0.32, 0.28, 0.18, 0.25, 0.34, 0.31, 0.19, 0.22, 0.33];
        let result = detect_awd(&series, &defaults());
        assert!(result.detected);
        assert_eq!(result.cycle_count, 2);
        assert_eq!(result.dry_day_count, 2);
    }

    #[test]
    fn test_single_cycle_prefix() {
        // Truncating after the first recovery leaves exactly one cycle.
        let series = [0.35, 0.32, 0.28, 0.18, 0.25, 0.34, 0.31];
        let result = detect_awd(&series, &defaults());
        assert!(result.detected);
        assert_eq!(result.cycle_count, 1);
        assert_eq!(result.dry_day_count, 1);
    }

    #[test]
    fn test_all_values_in_band_change_nothing() {
        let series = [0.25, 0.22, 0.28, 0.21, 0.29];
        let result = detect_awd(&series, &defaults());
        assert!(!result.detected);
        assert_eq!(result.cycle_count, 0);
        assert_eq!(result.dry_day_count, 0);
    }

    #[test]
    fn test_threshold_equality_is_ambiguous() {
        // Values exactly on a threshold are neither wet nor dry.
        let series = [0.30, 0.20, 0.30, 0.20];
        let result = detect_awd(&series, &defaults());
        assert_eq!(result.cycle_count, 0);
        assert_eq!(result.dry_day_count, 0);
    }

    #[test]
    fn test_dry_start_then_wet_counts_a_cycle() {
        // No initial wet reading is required before the first dry run.
        let series = [0.15, 0.18, 0.35];
        let result = detect_awd(&series, &defaults());
        assert!(result.detected);
        assert_eq!(result.cycle_count, 1);
        assert_eq!(result.dry_day_count, 2);
    }

    #[test]
    fn test_dry_run_without_recovery_is_not_a_cycle() {
        let series = [0.35, 0.18, 0.15, 0.12];
        let result = detect_awd(&series, &defaults());
        assert!(!result.detected);
        assert_eq!(result.cycle_count, 0);
        assert_eq!(result.dry_day_count, 3);
    }

    #[test]
    fn test_min_cycles_gates_detection() {
        let series = [0.35, 0.18, 0.35];
        let params = AwdParams {
            min_cycles: 2,
            ..AwdParams::default()
        };
        let result = detect_awd(&series, &params);
        assert!(!result.detected);
        assert_eq!(result.cycle_count, 1);
    }

    #[test]
    fn test_band_reading_preserves_dry_run() {
        // A single ambiguous reading must not break a dry run: the wet
        // recovery after it still completes the cycle.
        let series = [0.35, 0.18, 0.25, 0.34];
        let result = detect_awd(&series, &defaults());
        assert_eq!(result.cycle_count, 1);
        assert_eq!(result.dry_day_count, 1);
    }

    #[test]
    fn test_validate_params_rejects_inverted_thresholds() {
        let params = AwdParams {
            wet_threshold: 0.2,
            dry_threshold: 0.3,
            min_cycles: 1,
        };
        assert!(validate_params(&params).is_err());
    }

    #[test]
    fn test_validate_params_rejects_zero_min_cycles() {
        let params = AwdParams {
            min_cycles: 0,
            ..AwdParams::default()
        };
        assert!(validate_params(&params).is_err());
    }

    #[test]
    fn test_validate_params_accepts_defaults() {
        assert!(validate_params(&AwdParams::default()).is_ok());
    }
}
