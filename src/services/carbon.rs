//! Seasonal carbon-credit estimation.
//!
//! Deterministic arithmetic over the AWD detection outcome and the field
//! area. Not statistical: every figure follows from the configured
//! agronomic constants.

use crate::routes::carbon::{CarbonMetrics, CarbonParams};
use crate::services::error::{AnalysisError, AnalysisResult};

/// Fraction of baseline seasonal water use saved when AWD is practiced.
const WATER_SAVING_FRACTION: f64 = 0.35;

/// Estimate seasonal water savings, methane figures, and credit value.
///
/// When AWD is detected, the methane reduction is the configured fraction
/// of the seasonal baseline and water use drops by 35%. Without AWD there
/// is no water saving and the methane figure reported is the seasonal
/// baseline emission itself.
///
/// Physical quantities are rounded to 2 decimals, credit counts to 3.
pub fn calculate_carbon_metrics(
    area_hectare: f64,
    awd_detected: bool,
    params: &CarbonParams,
) -> AnalysisResult<CarbonMetrics> {
    if !area_hectare.is_finite() || area_hectare <= 0.0 {
        return Err(AnalysisError::Configuration(format!(
            "area must be positive, got {} ha",
            area_hectare
        )));
    }
    validate_params(params)?;

    let water_saved_mm = if awd_detected {
        params.baseline_water_mm * WATER_SAVING_FRACTION
    } else {
        0.0
    };
    // mm over hectares to cubic meters
    let water_saved_cubic_m = water_saved_mm * area_hectare * 10.0;

    let methane_baseline_kg = params.ch4_baseline_per_day * area_hectare * params.crop_days as f64;
    let methane_reduction_kg = if awd_detected {
        methane_baseline_kg * params.awd_reduction_factor
    } else {
        methane_baseline_kg
    };

    let co2e_reduction_ton = methane_reduction_kg * params.ch4_to_co2e / 1000.0;
    let carbon_credits = co2e_reduction_ton;
    let estimated_value_inr = carbon_credits * params.credit_price_inr;

    Ok(CarbonMetrics {
        area_hectare,
        water_saved_mm: round2(water_saved_mm),
        water_saved_cubic_m: round2(water_saved_cubic_m),
        methane_baseline_kg: round2(methane_baseline_kg),
        methane_reduction_kg: round2(methane_reduction_kg),
        co2e_reduction_ton: round3(co2e_reduction_ton),
        carbon_credits: round3(carbon_credits),
        estimated_value_inr: round2(estimated_value_inr),
        awd_detected,
    })
}

/// Validate agronomic constants at configuration time.
pub fn validate_params(params: &CarbonParams) -> AnalysisResult<()> {
    let positives = [
        ("baseline_water_mm", params.baseline_water_mm),
        ("ch4_baseline_per_day", params.ch4_baseline_per_day),
        ("ch4_to_co2e", params.ch4_to_co2e),
        ("credit_price_inr", params.credit_price_inr),
    ];
    for (name, value) in positives {
        if !value.is_finite() || value <= 0.0 {
            return Err(AnalysisError::Configuration(format!(
                "{} must be positive, got {}",
                name, value
            )));
        }
    }
    if params.crop_days == 0 {
        return Err(AnalysisError::Configuration(
            "crop_days must be positive".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&params.awd_reduction_factor) {
        return Err(AnalysisError::Configuration(format!(
            "awd_reduction_factor must be a fraction in [0, 1], got {}",
            params.awd_reduction_factor
        )));
    }
    Ok(())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_hectare_with_awd() {
        let metrics = calculate_carbon_metrics(1.0, true, &CarbonParams::default()).unwrap();
        assert_relative_eq!(metrics.water_saved_mm, 420.0);
        assert_relative_eq!(metrics.water_saved_cubic_m, 4200.0);
        assert_relative_eq!(metrics.methane_baseline_kg, 130.0);
        assert_relative_eq!(metrics.methane_reduction_kg, 45.5);
        assert_relative_eq!(metrics.co2e_reduction_ton, 1.238);
        assert_relative_eq!(metrics.carbon_credits, 1.238);
        assert_relative_eq!(metrics.estimated_value_inr, 1113.84);
        assert!(metrics.awd_detected);
    }

    #[test]
    fn test_no_awd_reports_baseline_methane() {
        let metrics = calculate_carbon_metrics(1.0, false, &CarbonParams::default()).unwrap();
        assert_relative_eq!(metrics.water_saved_mm, 0.0);
        assert_relative_eq!(metrics.water_saved_cubic_m, 0.0);
        assert_relative_eq!(metrics.methane_reduction_kg, metrics.methane_baseline_kg);
        assert!(!metrics.awd_detected);
    }

    #[test]
    fn test_scales_linearly_with_area() {
        let one = calculate_carbon_metrics(1.0, true, &CarbonParams::default()).unwrap();
        let two = calculate_carbon_metrics(2.0, true, &CarbonParams::default()).unwrap();
        assert_relative_eq!(two.methane_baseline_kg, one.methane_baseline_kg * 2.0);
        assert_relative_eq!(two.water_saved_cubic_m, one.water_saved_cubic_m * 2.0);
        // Per-season water depth does not depend on area
        assert_relative_eq!(two.water_saved_mm, one.water_saved_mm);
    }

    #[test]
    fn test_rejects_non_positive_area() {
        assert!(calculate_carbon_metrics(0.0, true, &CarbonParams::default()).is_err());
        assert!(calculate_carbon_metrics(-1.5, true, &CarbonParams::default()).is_err());
        assert!(calculate_carbon_metrics(f64::NAN, true, &CarbonParams::default()).is_err());
    }

    #[test]
    fn test_rejects_non_positive_constants() {
        let params = CarbonParams {
            baseline_water_mm: 0.0,
            ..CarbonParams::default()
        };
        assert!(calculate_carbon_metrics(1.0, true, &params).is_err());

        let params = CarbonParams {
            crop_days: 0,
            ..CarbonParams::default()
        };
        assert!(calculate_carbon_metrics(1.0, true, &params).is_err());
    }

    #[test]
    fn test_rejects_reduction_factor_above_one() {
        let params = CarbonParams {
            awd_reduction_factor: 1.5,
            ..CarbonParams::default()
        };
        assert!(validate_params(&params).is_err());
    }

    #[test]
    fn test_rounding_precision() {
        let params = CarbonParams {
            credit_price_inr: 333.33,
            ..CarbonParams::default()
        };
        let metrics = calculate_carbon_metrics(0.77, true, &params).unwrap();
        // 2 decimals on physical quantities, 3 on credit counts
        assert_relative_eq!(
            metrics.water_saved_mm,
            (1200.0_f64 * 0.35 * 100.0).round() / 100.0
        );
        let unrounded_credits: f64 = 1.3 * 0.77 * 100.0 * 0.35 * 27.2 / 1000.0;
        assert_relative_eq!(
            metrics.carbon_credits,
            (unrounded_credits * 1000.0).round() / 1000.0
        );
    }
}
