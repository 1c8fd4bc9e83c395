use serde::{Deserialize, Serialize};

// =========================================================
// Health-score fusion types
// =========================================================

/// Weights for the three fused signals. Must sum to 1; validated when the
/// configuration is loaded, not on every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FusionWeights {
    /// Image-classifier healthy probability weight.
    #[serde(default = "default_w1")]
    pub w1: f64,
    /// Normalized vegetation index weight.
    #[serde(default = "default_w2")]
    pub w2: f64,
    /// Inverted risk probability weight.
    #[serde(default = "default_w3")]
    pub w3: f64,
}

fn default_w1() -> f64 {
    0.4
}

fn default_w2() -> f64 {
    0.35
}

fn default_w3() -> f64 {
    0.25
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            w1: default_w1(),
            w2: default_w2(),
            w3: default_w3(),
        }
    }
}

/// Inputs to the fusion formula, gathered by the orchestration layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FusionInputs {
    /// External classifier output, in [0, 1].
    pub p_classifier_healthy: f64,
    /// Raw vegetation index reading; not guaranteed to be in [0, 1].
    pub index_raw: f64,
    /// External sequence-model output, in [0, 1].
    pub risk_probability: f64,
}

/// Advisory tier derived from the fused score. Tiers are non-overlapping
/// and cover [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryTier {
    Healthy,
    SlightStress,
    HighStress,
}

impl AdvisoryTier {
    /// Tier thresholds: score > 0.75 healthy, 0.5 < score <= 0.75 slight
    /// stress, score <= 0.5 high stress.
    pub fn from_score(score: f64) -> Self {
        if score > 0.75 {
            AdvisoryTier::Healthy
        } else if score > 0.5 {
            AdvisoryTier::SlightStress
        } else {
            AdvisoryTier::HighStress
        }
    }

    /// Advisory text shown to the farmer.
    pub fn advice(&self) -> &'static str {
        match self {
            AdvisoryTier::Healthy => "Crop is healthy. Continue current practices.",
            AdvisoryTier::SlightStress => {
                "Slight stress detected. Monitor irrigation & scout for pests."
            }
            AdvisoryTier::HighStress => {
                "High stress detected. Immediate intervention recommended (check water, pests, nutrients)."
            }
        }
    }
}

/// Fused health score with its advisory tier and the component signals.
///
/// Derived and ephemeral.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthScore {
    /// Bounded fused score in [0, 1].
    pub score: f64,
    pub tier: AdvisoryTier,
    pub advice: String,
    pub p_classifier_healthy: f64,
    /// Vegetation index after clamping to [0, 1].
    pub index_norm: f64,
    pub risk_probability: f64,
}

/// Route function name constant for health fusion
pub const GET_HEALTH_SCORE: &str = "get_health_score";
