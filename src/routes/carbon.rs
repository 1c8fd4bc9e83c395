use serde::{Deserialize, Serialize};

// =========================================================
// Carbon-credit estimation types
// =========================================================

/// Agronomic constants for the seasonal carbon estimate.
///
/// Defaults describe one paddy season: 100 crop days, 1200 mm baseline
/// water use, 1.3 kg CH4/ha/day baseline emission, 35% methane reduction
/// under AWD, 27.2 kg CO2e per kg CH4, 900 INR per credit ton.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonParams {
    #[serde(default = "default_crop_days")]
    pub crop_days: u32,
    #[serde(default = "default_baseline_water_mm")]
    pub baseline_water_mm: f64,
    #[serde(default = "default_ch4_baseline_per_day")]
    pub ch4_baseline_per_day: f64,
    #[serde(default = "default_awd_reduction_factor")]
    pub awd_reduction_factor: f64,
    #[serde(default = "default_ch4_to_co2e")]
    pub ch4_to_co2e: f64,
    #[serde(default = "default_credit_price_inr")]
    pub credit_price_inr: f64,
}

fn default_crop_days() -> u32 {
    100
}

fn default_baseline_water_mm() -> f64 {
    1200.0
}

fn default_ch4_baseline_per_day() -> f64 {
    1.3
}

fn default_awd_reduction_factor() -> f64 {
    0.35
}

fn default_ch4_to_co2e() -> f64 {
    27.2
}

fn default_credit_price_inr() -> f64 {
    900.0
}

impl Default for CarbonParams {
    fn default() -> Self {
        Self {
            crop_days: default_crop_days(),
            baseline_water_mm: default_baseline_water_mm(),
            ch4_baseline_per_day: default_ch4_baseline_per_day(),
            awd_reduction_factor: default_awd_reduction_factor(),
            ch4_to_co2e: default_ch4_to_co2e(),
            credit_price_inr: default_credit_price_inr(),
        }
    }
}

/// Seasonal water, methane, and credit estimate for one field.
///
/// Physical quantities are rounded to 2 decimals, credit counts to 3, for
/// presentation stability. Derived and ephemeral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonMetrics {
    pub area_hectare: f64,
    pub water_saved_mm: f64,
    pub water_saved_cubic_m: f64,
    pub methane_baseline_kg: f64,
    pub methane_reduction_kg: f64,
    pub co2e_reduction_ton: f64,
    pub carbon_credits: f64,
    pub estimated_value_inr: f64,
    pub awd_detected: bool,
}

/// Route function name constant for carbon metrics
pub const GET_CARBON_METRICS: &str = "get_carbon_metrics";
