use serde::{Deserialize, Serialize};

use crate::models::IndexTimeSeries;

// =========================================================
// Reducer summary types
// =========================================================

/// Season summary the remote reducer computes over the polygon: mean
/// vegetation indices, dominant land-cover class, and climate covariates.
///
/// Every value can be absent when the reducer had no usable acquisitions;
/// absent means absent, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EnvironmentSummary {
    pub ndvi: Option<f64>,
    pub evi: Option<f64>,
    pub savi: Option<f64>,
    /// Dominant land-cover class code over the polygon.
    pub crop_type_class: Option<f64>,
    pub rainfall_mm: Option<f64>,
    pub temperature_k: Option<f64>,
    /// Volumetric soil water fraction of the top layer.
    pub soil_moisture: Option<f64>,
}

/// Index series plus reducer summary for one field and date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexSeriesData {
    pub field_id: crate::api::FieldId,
    pub series: IndexTimeSeries,
    pub environment: EnvironmentSummary,
}

/// Route function name constant for index series retrieval
pub const GET_INDEX_SERIES: &str = "get_index_series";
