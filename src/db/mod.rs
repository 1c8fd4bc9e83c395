//! Storage module for the field registry.
//!
//! This module provides abstractions for storage operations via the
//! Repository pattern, allowing different backends to be swapped without
//! touching the service or HTTP layers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API)                            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Business Logic            │
//! │  - Polygon checksum on save                              │
//! │  - Upsert-per-user semantics                             │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! Use the service layer functions with any repository implementation:
//! ```ignore
//! use fsi_rust::db::{services, LocalRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let fields = services::list_fields(&repo).await?;
//!     Ok(())
//! }
//! ```

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod checksum;
pub mod models;
pub mod repositories;
pub mod repository;
pub mod services;

// ==================== Service Layer (Recommended for new code) ====================
// Use these high-level functions that work with any repository implementation

pub use services::{
    delete_field, get_field, get_field_for_user, health_check, list_fields, save_field,
};

// ==================== Repository Pattern Exports ====================

pub use checksum::calculate_checksum;
pub use repositories::LocalRepository;
pub use repository::{
    ErrorContext, FieldRepository, RepositoryError, RepositoryResult,
};
