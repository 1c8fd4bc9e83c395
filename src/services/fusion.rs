//! Health-score fusion.
//!
//! Combines three independently produced signals into one bounded score:
//! the image-classifier healthy probability, the latest vegetation index
//! reading, and the sequence-model risk probability. Pure function, no
//! side effects.

use crate::routes::fusion::{AdvisoryTier, FusionInputs, FusionWeights, HealthScore};
use crate::services::error::{AnalysisError, AnalysisResult};

/// Tolerance for the weight-sum check; weights come from a config file and
/// are entered by hand.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Fuse the three signals into a bounded health score with its tier.
///
/// The raw index is clamped to [0, 1] (NDVI can sit outside that range),
/// the risk probability is inverted into a health contribution, and the
/// weighted sum is clamped once more. Monotonic in each input.
pub fn compute_health_score(
    inputs: &FusionInputs,
    weights: &FusionWeights,
) -> AnalysisResult<HealthScore> {
    validate_weights(weights)?;

    let index_norm = inputs.index_raw.clamp(0.0, 1.0);
    let risk_health = 1.0 - inputs.risk_probability;
    let score = (weights.w1 * inputs.p_classifier_healthy
        + weights.w2 * index_norm
        + weights.w3 * risk_health)
        .clamp(0.0, 1.0);

    let tier = AdvisoryTier::from_score(score);
    Ok(HealthScore {
        score,
        tier,
        advice: tier.advice().to_string(),
        p_classifier_healthy: inputs.p_classifier_healthy,
        index_norm,
        risk_probability: inputs.risk_probability,
    })
}

/// Validate fusion weights at configuration time: each weight is a
/// fraction and the three must sum to 1.
pub fn validate_weights(weights: &FusionWeights) -> AnalysisResult<()> {
    for (name, value) in [
        ("w1", weights.w1),
        ("w2", weights.w2),
        ("w3", weights.w3),
    ] {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(AnalysisError::Configuration(format!(
                "fusion weight {} must be in [0, 1], got {}",
                name, value
            )));
        }
    }
    let sum = weights.w1 + weights.w2 + weights.w3;
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(AnalysisError::Configuration(format!(
            "fusion weights must sum to 1, got {}",
            sum
        )));
    }
    Ok(())
}
