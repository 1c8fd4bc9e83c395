//! Field repository trait.
//!
//! Storage abstraction over the registered field polygons. One polygon per
//! user account, replaced wholesale on save.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{FieldDraft, FieldId, FieldInfo, FieldRecord, SaveFieldOutcome};

/// Repository trait for field registry operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait FieldRepository: Send + Sync {
    /// Save a field, upserting by owning user.
    ///
    /// A user with no field gets a fresh record (`created = true`); an
    /// existing field for the same user is replaced wholesale
    /// (`created = false`), keeping its id.
    async fn save_field(&self, draft: &FieldDraft) -> RepositoryResult<SaveFieldOutcome>;

    /// Fetch a field by id.
    async fn fetch_field(&self, field_id: FieldId) -> RepositoryResult<FieldRecord>;

    /// Fetch the field owned by a user.
    async fn fetch_field_for_user(&self, user_id: &str) -> RepositoryResult<FieldRecord>;

    /// List all registered fields.
    async fn list_fields(&self) -> RepositoryResult<Vec<FieldInfo>>;

    /// Delete a field by id.
    async fn delete_field(&self, field_id: FieldId) -> RepositoryResult<()>;

    /// Check the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
