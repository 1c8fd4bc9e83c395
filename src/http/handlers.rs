//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for analysis and to the repository service layer for
//! storage.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{Duration, Utc};

use super::dto::{
    AnalysisQuery, AreaResponse, CoordinateResponse, FieldListResponse, HealthResponse,
    IndicesQuery, SaveFieldRequest, SaveFieldResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{AwdResult, CarbonMetrics, FieldId, FieldRecord, FieldReport, IndexSeriesData};
use crate::db::services as db_services;
use crate::models::{DateRange, IndexKind};
use crate::services::report;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Days of history analyzed when the query gives no explicit range.
const DEFAULT_RANGE_DAYS: i64 = 90;

/// Resolve an optional start/end query into a validated date range.
fn resolve_range(
    start: Option<chrono::NaiveDate>,
    end: Option<chrono::NaiveDate>,
) -> Result<DateRange, AppError> {
    let today = Utc::now().date_naive();
    let end = end.unwrap_or(today);
    let start = start.unwrap_or(end - Duration::days(DEFAULT_RANGE_DAYS));
    DateRange::new(start, end).map_err(AppError::BadRequest)
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the
/// repository backend is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository: repo_status,
    }))
}

// =============================================================================
// Field CRUD
// =============================================================================

/// GET /v1/fields
///
/// List all registered fields.
pub async fn list_fields(State(state): State<AppState>) -> HandlerResult<FieldListResponse> {
    let fields = db_services::list_fields(state.repository.as_ref()).await?;
    let total = fields.len();
    Ok(Json(FieldListResponse { fields, total }))
}

/// POST /v1/fields
///
/// Save a field polygon, creating a record for a new user or replacing the
/// existing one wholesale.
pub async fn save_field(
    State(state): State<AppState>,
    Json(request): Json<SaveFieldRequest>,
) -> Result<(StatusCode, Json<SaveFieldResponse>), AppError> {
    let draft = request.into();
    let outcome = db_services::save_field(state.repository.as_ref(), &draft).await?;

    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((
        status,
        Json(SaveFieldResponse {
            field_id: outcome.field_id,
            created: outcome.created,
            checksum: outcome.checksum,
            message: "Polygon saved successfully".to_string(),
        }),
    ))
}

/// GET /v1/fields/{field_id}
///
/// Fetch one field record.
pub async fn get_field(
    State(state): State<AppState>,
    Path(field_id): Path<i64>,
) -> HandlerResult<FieldRecord> {
    let record =
        db_services::get_field(state.repository.as_ref(), FieldId::new(field_id)).await?;
    Ok(Json(record))
}

/// DELETE /v1/fields/{field_id}
///
/// Remove a field record.
pub async fn delete_field(
    State(state): State<AppState>,
    Path(field_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    db_services::delete_field(state.repository.as_ref(), FieldId::new(field_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /v1/fields/{field_id}/coordinate
///
/// Representative coordinate of the polygon, used by the map frontend for
/// centering.
pub async fn get_field_coordinate(
    State(state): State<AppState>,
    Path(field_id): Path<i64>,
) -> HandlerResult<CoordinateResponse> {
    let field_id = FieldId::new(field_id);
    let record = db_services::get_field(state.repository.as_ref(), field_id).await?;
    let (lon, lat) = record
        .polygon
        .first_vertex()
        .ok_or_else(|| AppError::BadRequest("field polygon has no vertices".to_string()))?;
    Ok(Json(CoordinateResponse { field_id, lon, lat }))
}

// =============================================================================
// Analysis Endpoints
// =============================================================================

/// GET /v1/fields/{field_id}/area
///
/// Field area in hectares.
pub async fn get_area(
    State(state): State<AppState>,
    Path(field_id): Path<i64>,
) -> HandlerResult<AreaResponse> {
    let field_id = FieldId::new(field_id);
    let area_hectares = report::field_area(state.repository.as_ref(), field_id).await?;
    Ok(Json(AreaResponse {
        field_id,
        area_hectares,
    }))
}

/// GET /v1/fields/{field_id}/indices
///
/// Index time series plus season summary from the reducer.
pub async fn get_indices(
    State(state): State<AppState>,
    Path(field_id): Path<i64>,
    Query(query): Query<IndicesQuery>,
) -> HandlerResult<IndexSeriesData> {
    let kind = match query.kind.as_deref() {
        None => IndexKind::Ndvi,
        Some(raw) => raw.parse().map_err(AppError::BadRequest)?,
    };
    let range = resolve_range(query.start, query.end)?;

    let data = report::field_indices(
        state.repository.as_ref(),
        &state.providers,
        FieldId::new(field_id),
        kind,
        range,
    )
    .await?;
    Ok(Json(data))
}

/// GET /v1/fields/{field_id}/awd
///
/// AWD cycle detection over the water-index series.
pub async fn get_awd(
    State(state): State<AppState>,
    Path(field_id): Path<i64>,
    Query(query): Query<AnalysisQuery>,
) -> HandlerResult<AwdResult> {
    let range = resolve_range(query.start, query.end)?;
    let result = report::field_awd(
        state.repository.as_ref(),
        &state.providers,
        &state.config,
        FieldId::new(field_id),
        range,
    )
    .await?;
    Ok(Json(result))
}

/// GET /v1/fields/{field_id}/carbon
///
/// Seasonal carbon metrics derived from the AWD detection and field area.
pub async fn get_carbon(
    State(state): State<AppState>,
    Path(field_id): Path<i64>,
    Query(query): Query<AnalysisQuery>,
) -> HandlerResult<CarbonMetrics> {
    let range = resolve_range(query.start, query.end)?;
    let metrics = report::field_carbon(
        state.repository.as_ref(),
        &state.providers,
        &state.config,
        FieldId::new(field_id),
        range,
    )
    .await?;
    Ok(Json(metrics))
}

/// GET /v1/fields/{field_id}/report
///
/// Complete advisory report: area, AWD, carbon, environment, and (when the
/// field has a stored photo) the fused health score.
pub async fn get_report(
    State(state): State<AppState>,
    Path(field_id): Path<i64>,
    Query(query): Query<AnalysisQuery>,
) -> HandlerResult<FieldReport> {
    let range = resolve_range(query.start, query.end)?;
    let report = report::build_field_report(
        state.repository.as_ref(),
        &state.providers,
        &state.config,
        FieldId::new(field_id),
        range,
    )
    .await?;
    Ok(Json(report))
}
