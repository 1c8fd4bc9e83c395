//! In-memory repository implementation.
//!
//! Backs unit tests and local development; also the default backend of the
//! server binary. All state lives in process memory and is lost on exit.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::db::checksum::calculate_checksum;
use crate::db::models::{FieldDraft, FieldId, FieldInfo, FieldRecord, SaveFieldOutcome};
use crate::db::repository::{ErrorContext, FieldRepository, RepositoryError, RepositoryResult};

/// In-memory field registry keyed by field id, with a per-user upsert
/// index.
#[derive(Debug)]
pub struct LocalRepository {
    fields: RwLock<HashMap<i64, FieldRecord>>,
    next_id: AtomicI64,
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalRepository {
    pub fn new() -> Self {
        Self {
            fields: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn validate_draft(draft: &FieldDraft) -> RepositoryResult<()> {
        if draft.user_id.trim().is_empty() {
            return Err(RepositoryError::validation_with_context(
                "user_id must not be empty",
                ErrorContext::new("save_field"),
            ));
        }
        let distinct = draft.polygon.distinct_vertex_count();
        if distinct < 3 {
            return Err(RepositoryError::validation_with_context(
                format!(
                    "polygon ring needs at least 3 distinct vertices, got {}",
                    distinct
                ),
                ErrorContext::new("save_field").with_details("invalid polygon"),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl FieldRepository for LocalRepository {
    async fn save_field(&self, draft: &FieldDraft) -> RepositoryResult<SaveFieldOutcome> {
        Self::validate_draft(draft)?;
        let checksum = calculate_checksum(&draft.polygon.canonical_json());

        let mut fields = self.fields.write();
        let existing_id = fields
            .values()
            .find(|record| record.user_id == draft.user_id)
            .map(|record| record.field_id);

        let (field_id, created) = match existing_id {
            Some(id) => (id, false),
            None => (
                FieldId::new(self.next_id.fetch_add(1, Ordering::SeqCst)),
                true,
            ),
        };

        fields.insert(
            field_id.value(),
            FieldRecord {
                field_id,
                user_id: draft.user_id.clone(),
                crop_type: draft.crop_type.clone(),
                polygon: draft.polygon.clone(),
                photo_path: draft.photo_path.clone(),
                checksum: checksum.clone(),
            },
        );

        Ok(SaveFieldOutcome {
            field_id,
            created,
            checksum,
        })
    }

    async fn fetch_field(&self, field_id: FieldId) -> RepositoryResult<FieldRecord> {
        self.fields
            .read()
            .get(&field_id.value())
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("field {} not found", field_id),
                    ErrorContext::new("fetch_field").with_entity_id(field_id),
                )
            })
    }

    async fn fetch_field_for_user(&self, user_id: &str) -> RepositoryResult<FieldRecord> {
        self.fields
            .read()
            .values()
            .find(|record| record.user_id == user_id)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("no field registered for user {}", user_id),
                    ErrorContext::new("fetch_field_for_user").with_entity_id(user_id),
                )
            })
    }

    async fn list_fields(&self) -> RepositoryResult<Vec<FieldInfo>> {
        let mut infos: Vec<FieldInfo> = self
            .fields
            .read()
            .values()
            .map(|record| FieldInfo {
                field_id: record.field_id,
                user_id: record.user_id.clone(),
                crop_type: record.crop_type.clone(),
            })
            .collect();
        infos.sort_by_key(|info| info.field_id);
        Ok(infos)
    }

    async fn delete_field(&self, field_id: FieldId) -> RepositoryResult<()> {
        match self.fields.write().remove(&field_id.value()) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::not_found_with_context(
                format!("field {} not found", field_id),
                ErrorContext::new("delete_field").with_entity_id(field_id),
            )),
        }
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
