//! Deterministic stub collaborators.
//!
//! Stand-ins for the remote reducer and the pretrained models, used by the
//! default server wiring and the test suites. Outputs are fixed so that
//! every derived figure downstream is reproducible.

use async_trait::async_trait;
use chrono::Duration;

use super::{
    ClassifierOutput, ImageClassifier, IndexSeriesProvider, ProviderResult, RiskFeature,
    RiskModel, RiskOutput,
};
use crate::models::{DateRange, FieldPolygon, IndexKind, IndexSample, IndexTimeSeries};
use crate::routes::indices::EnvironmentSummary;

/// Days between consecutive stub acquisitions.
const ACQUISITION_SPACING_DAYS: i64 = 3;

/// Demo water-index season: two dry spells, each followed by reflooding.
const NDWI_SEASON: [Option<f64>; 10] = [
    Some(0.35),
    Some(0.32),
    Some(0.28),
    Some(0.18),
    Some(0.25),
    Some(0.34),
    Some(0.31),
    Some(0.19),
    Some(0.22),
    Some(0.33),
];

/// Demo vegetation season: steady green-up with one failed acquisition.
const NDVI_SEASON: [Option<f64>; 10] = [
    Some(0.41),
    Some(0.45),
    Some(0.49),
    None,
    Some(0.55),
    Some(0.58),
    Some(0.62),
    Some(0.65),
    Some(0.68),
    Some(0.70),
];

/// Reducer stub returning the demo season clipped to the requested range.
#[derive(Debug, Clone, Default)]
pub struct StubIndexProvider;

#[async_trait]
impl IndexSeriesProvider for StubIndexProvider {
    async fn fetch_index_series(
        &self,
        _polygon: &FieldPolygon,
        kind: IndexKind,
        range: &DateRange,
    ) -> ProviderResult<IndexTimeSeries> {
        let season: &[Option<f64>] = match kind {
            IndexKind::Ndwi => &NDWI_SEASON,
            IndexKind::Ndvi => &NDVI_SEASON,
        };

        let mut samples = Vec::with_capacity(season.len());
        for (i, value) in season.iter().enumerate() {
            let date = range.start + Duration::days(i as i64 * ACQUISITION_SPACING_DAYS);
            if date > range.end {
                break;
            }
            samples.push(IndexSample {
                date,
                value: *value,
            });
        }
        Ok(IndexTimeSeries::new(kind, samples))
    }

    async fn fetch_environment_summary(
        &self,
        _polygon: &FieldPolygon,
        _range: &DateRange,
    ) -> ProviderResult<EnvironmentSummary> {
        Ok(EnvironmentSummary {
            ndvi: Some(0.52),
            evi: Some(0.47),
            savi: Some(0.39),
            crop_type_class: Some(40.0),
            rainfall_mm: Some(5.4),
            temperature_k: Some(301.6),
            soil_moisture: Some(0.31),
        })
    }
}

/// Image classifier stub returning a fixed healthy probability.
#[derive(Debug, Clone)]
pub struct StubImageClassifier {
    pub probability: f64,
}

impl Default for StubImageClassifier {
    fn default() -> Self {
        Self { probability: 0.85 }
    }
}

#[async_trait]
impl ImageClassifier for StubImageClassifier {
    async fn classify(&self, photo_path: &str) -> ProviderResult<ClassifierOutput> {
        anyhow::ensure!(!photo_path.is_empty(), "classifier requires a photo path");
        Ok(ClassifierOutput::from_probability(self.probability))
    }
}

/// Risk model stub returning a fixed stress probability.
#[derive(Debug, Clone)]
pub struct StubRiskModel {
    pub probability: f64,
}

impl Default for StubRiskModel {
    fn default() -> Self {
        Self { probability: 0.2 }
    }
}

#[async_trait]
impl RiskModel for StubRiskModel {
    async fn predict_risk(&self, features: &[RiskFeature]) -> ProviderResult<RiskOutput> {
        anyhow::ensure!(
            !features.is_empty(),
            "risk model requires at least one feature vector"
        );
        Ok(RiskOutput::from_probability(self.probability))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{HealthLabel, RiskLevel};
    use chrono::NaiveDate;

    fn polygon() -> FieldPolygon {
        FieldPolygon::new(vec![(77.2, 12.9), (77.201, 12.9), (77.2, 12.901)])
    }

    fn june() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_full_season_fits_thirty_days() {
        let provider = StubIndexProvider;
        let series = provider
            .fetch_index_series(&polygon(), IndexKind::Ndwi, &june())
            .await
            .unwrap();
        assert_eq!(series.samples.len(), 10);
        assert!(series.is_chronological());
        assert_eq!(series.present_values().len(), 10);
    }

    #[tokio::test]
    async fn test_short_range_clips_season() {
        let provider = StubIndexProvider;
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
        )
        .unwrap();
        let series = provider
            .fetch_index_series(&polygon(), IndexKind::Ndvi, &range)
            .await
            .unwrap();
        assert_eq!(series.samples.len(), 3);
    }

    #[tokio::test]
    async fn test_ndvi_season_has_one_absent_reading() {
        let provider = StubIndexProvider;
        let series = provider
            .fetch_index_series(&polygon(), IndexKind::Ndvi, &june())
            .await
            .unwrap();
        assert_eq!(series.samples.len(), 10);
        assert_eq!(series.present_values().len(), 9);
        assert_eq!(series.latest_value(), Some(0.70));
    }

    #[tokio::test]
    async fn test_classifier_requires_path() {
        let classifier = StubImageClassifier::default();
        assert!(classifier.classify("").await.is_err());
        let output = classifier.classify("photos/field.jpg").await.unwrap();
        assert_eq!(output.label, HealthLabel::Healthy);
        assert_eq!(output.probability, 0.85);
    }

    #[tokio::test]
    async fn test_risk_model_requires_features() {
        let model = StubRiskModel::default();
        assert!(model.predict_risk(&[]).await.is_err());
        let output = model
            .predict_risk(&[RiskFeature {
                ndvi: 0.6,
                rainfall_mm: Some(5.4),
                temperature_k: Some(301.6),
                soil_moisture: Some(0.31),
            }])
            .await
            .unwrap();
        assert_eq!(output.level, RiskLevel::Low);
    }
}
