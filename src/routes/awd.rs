use serde::{Deserialize, Serialize};

// =========================================================
// AWD (Alternate Wetting & Drying) detection types
// =========================================================

/// Detector thresholds for classifying a water-index reading.
///
/// Readings strictly above `wet_threshold` are wet, strictly below
/// `dry_threshold` are dry. Values on or between the thresholds fall in the
/// hysteresis band and leave state and counters unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AwdParams {
    #[serde(default = "default_wet_threshold")]
    pub wet_threshold: f64,
    #[serde(default = "default_dry_threshold")]
    pub dry_threshold: f64,
    /// Minimum dry→wet recoveries before AWD counts as detected.
    #[serde(default = "default_min_cycles")]
    pub min_cycles: u32,
}

fn default_wet_threshold() -> f64 {
    0.30
}

fn default_dry_threshold() -> f64 {
    0.20
}

fn default_min_cycles() -> u32 {
    1
}

impl Default for AwdParams {
    fn default() -> Self {
        Self {
            wet_threshold: default_wet_threshold(),
            dry_threshold: default_dry_threshold(),
            min_cycles: default_min_cycles(),
        }
    }
}

/// Result of running the cycle detector over one water-index series.
///
/// Derived and ephemeral: recomputed per request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwdResult {
    pub detected: bool,
    pub cycle_count: u32,
    pub dry_day_count: u32,
}

impl AwdResult {
    /// The well-defined result for an empty series.
    pub fn empty() -> Self {
        Self {
            detected: false,
            cycle_count: 0,
            dry_day_count: 0,
        }
    }
}

/// Route function name constant for AWD detection
pub const GET_AWD_RESULT: &str = "get_awd_result";
