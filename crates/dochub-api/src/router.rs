//! Route definitions for the DocHub HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_size_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(folder_routes())
        .merge(document_routes())
        .merge(content_type_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, refresh, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/me", get(handlers::auth::me))
}

/// Folder CRUD and tree
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route("/folders", get(handlers::folder::list_folders))
        .route("/folders", post(handlers::folder::create_folder))
        .route("/folders/{id}", get(handlers::folder::get_folder))
        .route("/folders/{id}", put(handlers::folder::update_folder))
        .route("/folders/{id}", delete(handlers::folder::delete_folder))
        .route("/folders/{id}/tree", get(handlers::folder::get_subtree))
}

/// Document CRUD
fn document_routes() -> Router<AppState> {
    Router::new()
        .route("/documents", get(handlers::document::list_documents))
        .route("/documents", post(handlers::document::create_document))
        .route("/documents/{id}", get(handlers::document::get_document))
        .route("/documents/{id}", put(handlers::document::update_document))
        .route(
            "/documents/{id}",
            delete(handlers::document::delete_document),
        )
}

/// Content-type registry
fn content_type_routes() -> Router<AppState> {
    Router::new().route(
        "/content-types",
        get(handlers::content_type::list_content_types),
    )
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/detailed", get(handlers::health::detailed_health))
}
