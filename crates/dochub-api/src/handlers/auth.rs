//! Auth handlers — register, login, refresh, me.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use dochub_core::error::AppError;
use dochub_service::user::service::{AuthenticatedUser, RegisterRequest as SvcRegister};

use crate::dto::request::{LoginRequest, RefreshRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, LoginResponse, UserResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state
        .user_service
        .register(SvcRegister {
            username: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(ApiResponse::ok(login_response(result))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state
        .user_service
        .authenticate(&req.username, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(login_response(result))))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    let result = state.user_service.refresh(&req.refresh_token).await?;

    Ok(Json(ApiResponse::ok(login_response(result))))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state.user_service.get_profile(&auth).await?;

    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}

fn login_response(result: AuthenticatedUser) -> LoginResponse {
    LoginResponse {
        access_token: result.tokens.access_token,
        refresh_token: result.tokens.refresh_token,
        access_expires_at: result.tokens.access_expires_at,
        refresh_expires_at: result.tokens.refresh_expires_at,
        user: UserResponse::from(&result.user),
    }
}
