//! Shared data models re-exported for database layer consumers.

pub use crate::api::{FieldDraft, FieldId, FieldInfo, FieldRecord, SaveFieldOutcome};
pub use crate::models::FieldPolygon;
