//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Field CRUD
        .route("/fields", get(handlers::list_fields))
        .route("/fields", post(handlers::save_field))
        .route("/fields/{field_id}", get(handlers::get_field))
        .route("/fields/{field_id}", delete(handlers::delete_field))
        .route("/fields/{field_id}/coordinate", get(handlers::get_field_coordinate))
        // Analysis endpoints
        .route("/fields/{field_id}/area", get(handlers::get_area))
        .route("/fields/{field_id}/indices", get(handlers::get_indices))
        .route("/fields/{field_id}/awd", get(handlers::get_awd))
        .route("/fields/{field_id}/carbon", get(handlers::get_carbon))
        .route("/fields/{field_id}/report", get(handlers::get_report));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        // Polygon payloads are small; reject anything unreasonable.
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
