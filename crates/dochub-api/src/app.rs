//! Application builder — wires repositories, services, and the router
//! into a runnable server.

use std::sync::Arc;

use sqlx::PgPool;

use dochub_auth::jwt::decoder::JwtDecoder;
use dochub_auth::jwt::encoder::JwtEncoder;
use dochub_auth::password::hasher::PasswordHasher;
use dochub_auth::password::validator::PasswordValidator;
use dochub_core::config::AppConfig;
use dochub_core::error::AppError;
use dochub_database::repositories::content_type::ContentTypeRepository;
use dochub_database::repositories::document::DocumentRepository;
use dochub_database::repositories::folder::FolderRepository;
use dochub_database::repositories::user::UserRepository;
use dochub_service::document::service::DocumentService;
use dochub_service::folder::service::FolderService;
use dochub_service::folder::tree::TreeService;
use dochub_service::user::service::UserService;

use crate::router::build_router;
use crate::state::AppState;

/// Construct the full application state from configuration and a pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    // Repositories
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let folder_repo = Arc::new(FolderRepository::new(db_pool.clone()));
    let document_repo = Arc::new(DocumentRepository::new(db_pool.clone()));
    let content_type_repo = Arc::new(ContentTypeRepository::new(db_pool.clone()));

    // Auth primitives
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    // Services
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
    ));
    let folder_service = Arc::new(FolderService::new(
        Arc::clone(&folder_repo),
        Arc::clone(&document_repo),
    ));
    let tree_service = Arc::new(TreeService::new(Arc::clone(&folder_repo)));
    let document_service = Arc::new(DocumentService::new(
        Arc::clone(&document_repo),
        Arc::clone(&folder_repo),
        Arc::clone(&content_type_repo),
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        jwt_decoder,
        user_service,
        folder_service,
        tree_service,
        document_service,
    }
}

/// Runs the DocHub server with the given configuration and database pool.
///
/// Blocks until a shutdown signal (Ctrl+C or SIGTERM) is received, then
/// drains in-flight requests.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config, db_pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("DocHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("DocHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
