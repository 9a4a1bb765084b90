//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use dochub_core::config::AuthConfig;
use dochub_core::error::AppError;

use super::claims::{Claims, TokenType};

/// Creates signed JWT access and refresh tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Access token TTL in minutes.
    access_ttl_minutes: i64,
    /// Refresh token TTL in hours.
    refresh_ttl_hours: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_hours", &self.refresh_ttl_hours)
            .finish()
    }
}

/// Result of a successful token pair generation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl_minutes: config.jwt_access_ttl_minutes as i64,
            refresh_ttl_hours: config.jwt_refresh_ttl_hours as i64,
        }
    }

    /// Generates a new access + refresh token pair for the given user.
    pub fn generate_token_pair(
        &self,
        user_id: Uuid,
        username: &str,
    ) -> Result<TokenPair, AppError> {
        let now = Utc::now();
        let access_exp = now + chrono::Duration::minutes(self.access_ttl_minutes);
        let refresh_exp = now + chrono::Duration::hours(self.refresh_ttl_hours);

        let access_claims = Claims {
            sub: user_id,
            username: username.to_string(),
            iat: now.timestamp(),
            exp: access_exp.timestamp(),
            jti: Uuid::new_v4(),
            token_type: TokenType::Access,
        };

        let refresh_claims = Claims {
            sub: user_id,
            username: username.to_string(),
            iat: now.timestamp(),
            exp: refresh_exp.timestamp(),
            jti: Uuid::new_v4(),
            token_type: TokenType::Refresh,
        };

        let access_token = encode(&Header::default(), &access_claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        let refresh_token = encode(&Header::default(), &refresh_claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode refresh token: {e}")))?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at: access_exp,
            refresh_expires_at: refresh_exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::decoder::JwtDecoder;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_token_pair_round_trip() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);
        let user_id = Uuid::new_v4();

        let pair = encoder.generate_token_pair(user_id, "alice").unwrap();

        let access = decoder.decode_access_token(&pair.access_token).unwrap();
        assert_eq!(access.user_id(), user_id);
        assert_eq!(access.username, "alice");
        assert_eq!(access.token_type, TokenType::Access);
        assert!(!access.is_expired());

        let refresh = decoder.decode_refresh_token(&pair.refresh_token).unwrap();
        assert_eq!(refresh.token_type, TokenType::Refresh);
        assert!(refresh.exp > access.exp);
    }

    #[test]
    fn test_access_token_rejected_as_refresh() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let pair = encoder.generate_token_pair(Uuid::new_v4(), "bob").unwrap();
        assert!(decoder.decode_refresh_token(&pair.access_token).is_err());
        assert!(decoder.decode_access_token(&pair.refresh_token).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let encoder = JwtEncoder::new(&test_config());
        let other = AuthConfig {
            jwt_secret: "another-secret".to_string(),
            ..AuthConfig::default()
        };
        let decoder = JwtDecoder::new(&other);

        let pair = encoder.generate_token_pair(Uuid::new_v4(), "eve").unwrap();
        assert!(decoder.decode_access_token(&pair.access_token).is_err());
    }
}
