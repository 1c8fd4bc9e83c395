//! High-level service functions over the field repository.
//!
//! These are the functions the HTTP handlers (and tests) call; they work
//! with any `FieldRepository` implementation.

use log::{debug, info};

use crate::api::{FieldDraft, FieldId, FieldInfo, FieldRecord, SaveFieldOutcome};
use crate::db::repository::{FieldRepository, RepositoryResult};

/// Save (create or wholesale-replace) a user's field polygon.
pub async fn save_field(
    repo: &dyn FieldRepository,
    draft: &FieldDraft,
) -> RepositoryResult<SaveFieldOutcome> {
    let outcome = repo.save_field(draft).await?;
    info!(
        "saved field {} for user {} (created={})",
        outcome.field_id, draft.user_id, outcome.created
    );
    Ok(outcome)
}

/// Fetch a field record by id.
pub async fn get_field(
    repo: &dyn FieldRepository,
    field_id: FieldId,
) -> RepositoryResult<FieldRecord> {
    repo.fetch_field(field_id).await
}

/// Fetch the field owned by a user account.
pub async fn get_field_for_user(
    repo: &dyn FieldRepository,
    user_id: &str,
) -> RepositoryResult<FieldRecord> {
    repo.fetch_field_for_user(user_id).await
}

/// List all registered fields.
pub async fn list_fields(repo: &dyn FieldRepository) -> RepositoryResult<Vec<FieldInfo>> {
    let fields = repo.list_fields().await?;
    debug!("listed {} fields", fields.len());
    Ok(fields)
}

/// Delete a field by id.
pub async fn delete_field(repo: &dyn FieldRepository, field_id: FieldId) -> RepositoryResult<()> {
    repo.delete_field(field_id).await?;
    info!("deleted field {}", field_id);
    Ok(())
}

/// Check the storage backend is reachable.
pub async fn health_check(repo: &dyn FieldRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
