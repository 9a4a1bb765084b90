//! Content-type registry handlers.

use axum::Json;
use axum::extract::State;

use dochub_core::error::AppError;
use dochub_entity::content_type::ContentType;

use crate::dto::response::ApiResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/content-types
pub async fn list_content_types(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<ContentType>>>, AppError> {
    let types = state.document_service.list_content_types().await?;
    Ok(Json(ApiResponse::ok(types)))
}
