//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The analysis DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // AWD
    AwdResult,
    // Carbon
    CarbonMetrics,
    // Field registry
    FieldInfo,
    FieldRecord,
    // Report
    FieldReport,
    // Fusion
    HealthScore,
    // Indices
    IndexSeriesData,
};

/// Request body for saving a field polygon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFieldRequest {
    /// Owning user account identifier
    pub user_id: String,
    /// Crop grown on the field (free-form label)
    #[serde(default)]
    pub crop_type: String,
    /// Polygon ring as `[[lon, lat], ...]`
    pub polygon: Vec<(f64, f64)>,
    /// Optional stored photo path for the image classifier
    #[serde(default)]
    pub photo_path: Option<String>,
}

impl From<SaveFieldRequest> for crate::api::FieldDraft {
    fn from(request: SaveFieldRequest) -> Self {
        Self {
            user_id: request.user_id,
            crop_type: request.crop_type,
            polygon: crate::models::FieldPolygon::new(request.polygon),
            photo_path: request.photo_path,
        }
    }
}

/// Response for a field save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFieldResponse {
    pub field_id: crate::api::FieldId,
    /// True when a new record was created, false when replaced
    pub created: bool,
    /// Checksum of the stored polygon
    pub checksum: String,
    /// Message about the operation
    pub message: String,
}

/// Field list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldListResponse {
    /// List of fields
    pub fields: Vec<FieldInfo>,
    /// Total count
    pub total: usize,
}

/// Representative coordinate of a field polygon, for map centering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinateResponse {
    pub field_id: crate::api::FieldId,
    pub lon: f64,
    pub lat: f64,
}

/// Field area response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaResponse {
    pub field_id: crate::api::FieldId,
    pub area_hectares: f64,
}

/// Query parameters for the analysis endpoints (awd, carbon, report).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnalysisQuery {
    /// Range start (inclusive); defaults to 90 days before today
    #[serde(default)]
    pub start: Option<NaiveDate>,
    /// Range end (inclusive); defaults to today
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

/// Query parameters for the index series endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IndicesQuery {
    /// Index kind: "ndvi" (default) or "ndwi"
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository backend status
    pub repository: String,
}
