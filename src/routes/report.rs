use serde::{Deserialize, Serialize};

use crate::models::DateRange;
use crate::routes::awd::AwdResult;
use crate::routes::carbon::CarbonMetrics;
use crate::routes::fusion::HealthScore;
use crate::routes::indices::EnvironmentSummary;

// =========================================================
// Advisory report types
// =========================================================

/// Complete advisory report for one field over one date range.
///
/// Assembled per request from the registered polygon, the reducer series,
/// and the model collaborators; nothing in it is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldReport {
    pub field_id: crate::api::FieldId,
    pub crop_type: String,
    pub range: DateRange,
    pub area_hectares: f64,
    pub awd: AwdResult,
    pub carbon: CarbonMetrics,
    pub environment: EnvironmentSummary,
    /// Present only when the field has a stored photo for the classifier.
    pub health: Option<HealthScore>,
    /// Number of usable water-index readings behind the AWD result.
    pub water_index_readings: usize,
}

/// Route function name constant for the advisory report
pub const GET_FIELD_REPORT: &str = "get_field_report";
