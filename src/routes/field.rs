use serde::{Deserialize, Serialize};

use crate::models::FieldPolygon;

// =========================================================
// Field registry types
// =========================================================

/// Stored field record: one polygon owned by exactly one user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRecord {
    pub field_id: crate::api::FieldId,
    /// Owning user account identifier.
    pub user_id: String,
    pub crop_type: String,
    pub polygon: FieldPolygon,
    /// Latest uploaded field photo, consumed by the image classifier.
    pub photo_path: Option<String>,
    /// SHA-256 of the canonical polygon JSON; changes when the ring is
    /// replaced with different geometry.
    pub checksum: String,
}

/// Incoming field data before the repository assigns an id and checksum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDraft {
    pub user_id: String,
    #[serde(default)]
    pub crop_type: String,
    pub polygon: FieldPolygon,
    #[serde(default)]
    pub photo_path: Option<String>,
}

/// Outcome of a save: fields are upserted per user, wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFieldOutcome {
    pub field_id: crate::api::FieldId,
    /// True when a new record was created, false when an existing field
    /// for the same user was replaced.
    pub created: bool,
    pub checksum: String,
}

/// Lightweight listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldInfo {
    pub field_id: crate::api::FieldId,
    pub user_id: String,
    pub crop_type: String,
}

/// Route function name constants for the field registry
pub const LIST_FIELDS: &str = "list_fields";
pub const SAVE_FIELD: &str = "save_field";
pub const GET_FIELD: &str = "get_field";
pub const DELETE_FIELD: &str = "delete_field";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_record_clone() {
        let record = FieldRecord {
            field_id: crate::api::FieldId::new(7),
            user_id: "farmer-1".to_string(),
            crop_type: "rice".to_string(),
            polygon: FieldPolygon::new(vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]),
            photo_path: None,
            checksum: "abc".to_string(),
        };
        let cloned = record.clone();
        assert_eq!(cloned.field_id.value(), 7);
        assert_eq!(cloned.crop_type, "rice");
    }

    #[test]
    fn test_field_draft_defaults() {
        let draft: FieldDraft = serde_json::from_str(
            r#"{"user_id": "farmer-1", "polygon": [[0.0,0.0],[1.0,0.0],[0.0,1.0]]}"#,
        )
        .unwrap();
        assert_eq!(draft.crop_type, "");
        assert!(draft.photo_path.is_none());
        assert_eq!(draft.polygon.ring.len(), 3);
    }

    #[test]
    fn test_const_values() {
        assert_eq!(LIST_FIELDS, "list_fields");
        assert_eq!(SAVE_FIELD, "save_field");
    }
}
