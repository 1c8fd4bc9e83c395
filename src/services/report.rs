//! Advisory report orchestration.
//!
//! Pulls the registered polygon from the repository, the index series and
//! season summary from the reducer, and the model collaborators' outputs,
//! then dispatches to the pure analysis functions. Everything here is
//! recomputed per request; nothing is cached or persisted.

use log::debug;

use crate::api::{
    AwdResult, CarbonMetrics, FieldId, FieldReport, FusionInputs, HealthScore, IndexSeriesData,
};
use crate::config::AnalysisConfig;
use crate::db::repository::{FieldRepository, RepositoryError};
use crate::models::{DateRange, FieldPolygon, IndexKind, IndexTimeSeries};
use crate::providers::{Providers, RiskFeature};
use crate::routes::indices::EnvironmentSummary;
use crate::services::error::AnalysisError;
use crate::services::{area, awd, carbon, fusion};

/// Failures the orchestration layer can surface: storage, analysis, or a
/// collaborator going away.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("provider error: {0}")]
    Provider(anyhow::Error),
}

/// Result type for orchestration operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Fetch one index series and enforce the detector's ordering contract:
/// the analysis core assumes ascending acquisition dates and does not
/// re-sort, so unordered reducer output is sorted here.
async fn fetch_sorted_series(
    providers: &Providers,
    polygon: &FieldPolygon,
    kind: IndexKind,
    range: &DateRange,
) -> ReportResult<IndexTimeSeries> {
    let mut series = providers
        .index
        .fetch_index_series(polygon, kind, range)
        .await
        .map_err(ReportError::Provider)?;
    if !series.is_chronological() {
        debug!("{} series arrived unsorted, sorting by date", kind);
        series.sort_chronologically();
    }
    Ok(series)
}

/// Area of a registered field in hectares.
pub async fn field_area(repo: &dyn FieldRepository, field_id: FieldId) -> ReportResult<f64> {
    let field = repo.fetch_field(field_id).await?;
    Ok(area::polygon_area_hectares(&field.polygon)?)
}

/// Index time series plus season summary for a registered field.
pub async fn field_indices(
    repo: &dyn FieldRepository,
    providers: &Providers,
    field_id: FieldId,
    kind: IndexKind,
    range: DateRange,
) -> ReportResult<IndexSeriesData> {
    let field = repo.fetch_field(field_id).await?;
    let series = fetch_sorted_series(providers, &field.polygon, kind, &range).await?;
    let environment = providers
        .index
        .fetch_environment_summary(&field.polygon, &range)
        .await
        .map_err(ReportError::Provider)?;
    Ok(IndexSeriesData {
        field_id,
        series,
        environment,
    })
}

/// AWD detection over the water-index series of a registered field.
pub async fn field_awd(
    repo: &dyn FieldRepository,
    providers: &Providers,
    config: &AnalysisConfig,
    field_id: FieldId,
    range: DateRange,
) -> ReportResult<AwdResult> {
    let field = repo.fetch_field(field_id).await?;
    let series = fetch_sorted_series(providers, &field.polygon, IndexKind::Ndwi, &range).await?;
    Ok(awd::detect_awd(&series.present_values(), &config.awd))
}

/// Seasonal carbon metrics for a registered field.
pub async fn field_carbon(
    repo: &dyn FieldRepository,
    providers: &Providers,
    config: &AnalysisConfig,
    field_id: FieldId,
    range: DateRange,
) -> ReportResult<CarbonMetrics> {
    let field = repo.fetch_field(field_id).await?;
    let area_hectares = area::polygon_area_hectares(&field.polygon)?;
    let series = fetch_sorted_series(providers, &field.polygon, IndexKind::Ndwi, &range).await?;
    let awd_result = awd::detect_awd(&series.present_values(), &config.awd);
    Ok(carbon::calculate_carbon_metrics(
        area_hectares,
        awd_result.detected,
        &config.carbon,
    )?)
}

/// Assemble the complete advisory report for a field over a date range.
///
/// The health section is computed only when the field has a stored photo
/// for the classifier; without one it is `None`.
pub async fn build_field_report(
    repo: &dyn FieldRepository,
    providers: &Providers,
    config: &AnalysisConfig,
    field_id: FieldId,
    range: DateRange,
) -> ReportResult<FieldReport> {
    let field = repo.fetch_field(field_id).await?;
    let area_hectares = area::polygon_area_hectares(&field.polygon)?;

    let water_series =
        fetch_sorted_series(providers, &field.polygon, IndexKind::Ndwi, &range).await?;
    let water_values = water_series.present_values();
    let awd_result = awd::detect_awd(&water_values, &config.awd);
    let carbon_metrics =
        carbon::calculate_carbon_metrics(area_hectares, awd_result.detected, &config.carbon)?;

    let environment = providers
        .index
        .fetch_environment_summary(&field.polygon, &range)
        .await
        .map_err(ReportError::Provider)?;
    let veg_series = fetch_sorted_series(providers, &field.polygon, IndexKind::Ndvi, &range).await?;

    let health = match &field.photo_path {
        Some(photo_path) => Some(
            compute_field_health(providers, config, photo_path, &veg_series, &environment).await?,
        ),
        None => None,
    };

    Ok(FieldReport {
        field_id,
        crop_type: field.crop_type,
        range,
        area_hectares,
        awd: awd_result,
        carbon: carbon_metrics,
        environment,
        health,
        water_index_readings: water_values.len(),
    })
}

/// Run the classifier and risk model and fuse their outputs with the
/// latest vegetation reading.
async fn compute_field_health(
    providers: &Providers,
    config: &AnalysisConfig,
    photo_path: &str,
    veg_series: &IndexTimeSeries,
    environment: &EnvironmentSummary,
) -> ReportResult<HealthScore> {
    let latest_index = veg_series.latest_value().ok_or_else(|| {
        AnalysisError::InsufficientData(
            "no usable vegetation index reading in the requested range".to_string(),
        )
    })?;

    let classification = providers
        .classifier
        .classify(photo_path)
        .await
        .map_err(ReportError::Provider)?;

    let features = risk_features(veg_series, environment);
    let risk = providers
        .risk
        .predict_risk(&features)
        .await
        .map_err(ReportError::Provider)?;

    let inputs = FusionInputs {
        p_classifier_healthy: classification.probability,
        index_raw: latest_index,
        risk_probability: risk.probability,
    };
    Ok(fusion::compute_health_score(&inputs, &config.fusion)?)
}

/// One feature vector per usable vegetation reading, carrying the season
/// covariates alongside.
fn risk_features(series: &IndexTimeSeries, environment: &EnvironmentSummary) -> Vec<RiskFeature> {
    series
        .samples
        .iter()
        .filter_map(|sample| {
            sample.value.map(|ndvi| RiskFeature {
                ndvi,
                rainfall_mm: environment.rainfall_mm,
                temperature_k: environment.temperature_k,
                soil_moisture: environment.soil_moisture,
            })
        })
        .collect()
}
