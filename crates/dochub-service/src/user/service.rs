//! User registration, login, token refresh, and profile operations.

use std::sync::Arc;

use tracing::info;

use dochub_auth::jwt::decoder::JwtDecoder;
use dochub_auth::jwt::encoder::{JwtEncoder, TokenPair};
use dochub_auth::password::hasher::PasswordHasher;
use dochub_auth::password::validator::PasswordValidator;
use dochub_core::error::AppError;
use dochub_database::repositories::user::UserRepository;
use dochub_entity::user::{CreateUser, User};

use crate::context::RequestContext;

/// Handles user registration, authentication, and profile access.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
    /// JWT token encoder.
    jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder.
    jwt_decoder: Arc<JwtDecoder>,
}

/// Request to register a new user.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Plaintext password (validated and hashed before storage).
    pub password: String,
}

/// Result of a successful registration or login.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The user row.
    pub user: User,
    /// Freshly issued token pair.
    pub tokens: TokenPair,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        jwt_encoder: Arc<JwtEncoder>,
        jwt_decoder: Arc<JwtDecoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            jwt_encoder,
            jwt_decoder,
        }
    }

    /// Registers a new user and logs them in.
    ///
    /// Username and email must be unused; the password must satisfy the
    /// configured policy.
    pub async fn register(&self, req: RegisterRequest) -> Result<AuthenticatedUser, AppError> {
        let username = req.username.trim();
        if username.is_empty() {
            return Err(AppError::validation("Username cannot be empty"));
        }

        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Username '{username}' is already taken"
            )));
        }

        if self.user_repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Email '{}' is already registered",
                req.email
            )));
        }

        self.validator.validate(&req.password)?;
        let password_hash = self.hasher.hash_password(&req.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                username: username.to_string(),
                email: req.email,
                password_hash,
            })
            .await?;

        let tokens = self.jwt_encoder.generate_token_pair(user.id, &user.username)?;

        info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(AuthenticatedUser { user, tokens })
    }

    /// Verifies credentials and issues a token pair.
    ///
    /// The failure message does not distinguish an unknown username from a
    /// wrong password.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid username or password"))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::authentication("Invalid username or password"));
        }

        let tokens = self.jwt_encoder.generate_token_pair(user.id, &user.username)?;

        info!(user_id = %user.id, username = %user.username, "User logged in");

        Ok(AuthenticatedUser { user, tokens })
    }

    /// Exchanges a valid refresh token for a fresh token pair.
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthenticatedUser, AppError> {
        let claims = self.jwt_decoder.decode_refresh_token(refresh_token)?;

        // The account may have been removed since the token was issued
        let user = self
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::authentication("Account no longer exists"))?;

        let tokens = self.jwt_encoder.generate_token_pair(user.id, &user.username)?;

        Ok(AuthenticatedUser { user, tokens })
    }

    /// Gets the current user's profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
