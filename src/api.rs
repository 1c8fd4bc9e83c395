//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::awd::AwdParams;
pub use crate::routes::awd::AwdResult;
pub use crate::routes::carbon::CarbonMetrics;
pub use crate::routes::carbon::CarbonParams;
pub use crate::routes::field::FieldDraft;
pub use crate::routes::field::FieldInfo;
pub use crate::routes::field::FieldRecord;
pub use crate::routes::field::SaveFieldOutcome;
pub use crate::routes::fusion::AdvisoryTier;
pub use crate::routes::fusion::FusionInputs;
pub use crate::routes::fusion::FusionWeights;
pub use crate::routes::fusion::HealthScore;
pub use crate::routes::indices::EnvironmentSummary;
pub use crate::routes::indices::IndexSeriesData;
pub use crate::routes::report::FieldReport;

pub use crate::models::{DateRange, FieldPolygon, IndexKind, IndexSample, IndexTimeSeries};

use serde::{Deserialize, Serialize};

/// Field identifier (repository primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FieldId(pub i64);

impl FieldId {
    pub fn new(value: i64) -> Self {
        FieldId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<FieldId> for i64 {
    fn from(id: FieldId) -> Self {
        id.0
    }
}

impl From<i64> for FieldId {
    fn from(value: i64) -> Self {
        FieldId(value)
    }
}
