//! External collaborator capabilities.
//!
//! The remote geospatial reducer, the pretrained image classifier, and the
//! pretrained sequence model are opaque services this backend consumes.
//! Rather than loading model weights into process-wide singletons at import
//! time, each collaborator is a trait object constructed once at process
//! start and injected into the request state, so the analysis layer can be
//! exercised against fakes.

pub mod stub;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::{DateRange, FieldPolygon, IndexKind, IndexTimeSeries};
use crate::routes::indices::EnvironmentSummary;

/// Result type at the collaborator boundary. Collaborator failures are
/// opaque; the HTTP layer maps them to 502-style internal errors.
pub type ProviderResult<T> = anyhow::Result<T>;

/// Remote geospatial reducer over the field polygon.
///
/// May be slow and may return partial or empty data; absent readings stay
/// absent and are never zero-filled.
#[async_trait]
pub trait IndexSeriesProvider: Send + Sync {
    /// Fetch one index time series for the polygon over the date range,
    /// ordered by acquisition date ascending.
    async fn fetch_index_series(
        &self,
        polygon: &FieldPolygon,
        kind: IndexKind,
        range: &DateRange,
    ) -> ProviderResult<IndexTimeSeries>;

    /// Fetch the season summary (mean indices, land-cover class, climate
    /// covariates) the reducer computes over the polygon.
    async fn fetch_environment_summary(
        &self,
        polygon: &FieldPolygon,
        range: &DateRange,
    ) -> ProviderResult<EnvironmentSummary>;
}

/// Classifier label at the 0.5 probability boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthLabel {
    Healthy,
    Stressed,
}

/// Output of the pretrained image classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierOutput {
    /// Probability the crop in the photo is healthy, in [0, 1].
    pub probability: f64,
    pub label: HealthLabel,
}

impl ClassifierOutput {
    pub fn from_probability(probability: f64) -> Self {
        let label = if probability > 0.5 {
            HealthLabel::Healthy
        } else {
            HealthLabel::Stressed
        };
        Self { probability, label }
    }
}

/// Pretrained image classifier over an uploaded field photo.
#[async_trait]
pub trait ImageClassifier: Send + Sync {
    async fn classify(&self, photo_path: &str) -> ProviderResult<ClassifierOutput>;
}

/// One timestep of covariates for the risk sequence model. NDVI is always
/// present (absent readings are dropped before assembly); the reducer
/// covariates may be missing and the model wrapper owns how to handle
/// that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskFeature {
    pub ndvi: f64,
    pub rainfall_mm: Option<f64>,
    pub temperature_k: Option<f64>,
    pub soil_moisture: Option<f64>,
}

/// Risk level at the 0.5 probability boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Low,
}

/// Output of the pretrained risk sequence model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskOutput {
    /// Probability of a stress event, in [0, 1].
    pub probability: f64,
    pub level: RiskLevel,
}

impl RiskOutput {
    pub fn from_probability(probability: f64) -> Self {
        let level = if probability > 0.5 {
            RiskLevel::High
        } else {
            RiskLevel::Low
        };
        Self { probability, level }
    }
}

/// Pretrained sequence model over per-timestep feature vectors.
#[async_trait]
pub trait RiskModel: Send + Sync {
    async fn predict_risk(&self, features: &[RiskFeature]) -> ProviderResult<RiskOutput>;
}

/// The collaborator bundle injected into request handlers.
#[derive(Clone)]
pub struct Providers {
    pub index: Arc<dyn IndexSeriesProvider>,
    pub classifier: Arc<dyn ImageClassifier>,
    pub risk: Arc<dyn RiskModel>,
}

impl Providers {
    pub fn new(
        index: Arc<dyn IndexSeriesProvider>,
        classifier: Arc<dyn ImageClassifier>,
        risk: Arc<dyn RiskModel>,
    ) -> Self {
        Self {
            index,
            classifier,
            risk,
        }
    }

    /// Deterministic stub wiring for local development and tests.
    pub fn stubs() -> Self {
        Self::new(
            Arc::new(stub::StubIndexProvider::default()),
            Arc::new(stub::StubImageClassifier::default()),
            Arc::new(stub::StubRiskModel::default()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_label_boundary() {
        assert_eq!(
            ClassifierOutput::from_probability(0.85).label,
            HealthLabel::Healthy
        );
        assert_eq!(
            ClassifierOutput::from_probability(0.5).label,
            HealthLabel::Stressed
        );
        assert_eq!(
            ClassifierOutput::from_probability(0.1).label,
            HealthLabel::Stressed
        );
    }

    #[test]
    fn test_risk_level_boundary() {
        assert_eq!(RiskOutput::from_probability(0.7).level, RiskLevel::High);
        assert_eq!(RiskOutput::from_probability(0.5).level, RiskLevel::Low);
    }
}
