//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use dochub_auth::jwt::decoder::JwtDecoder;
use dochub_core::config::AppConfig;
use dochub_service::document::service::DocumentService;
use dochub_service::folder::service::FolderService;
use dochub_service::folder::tree::TreeService;
use dochub_service::user::service::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// User registration/login/profile service.
    pub user_service: Arc<UserService>,
    /// Folder CRUD service.
    pub folder_service: Arc<FolderService>,
    /// Folder tree building service.
    pub tree_service: Arc<TreeService>,
    /// Document CRUD service.
    pub document_service: Arc<DocumentService>,
}
