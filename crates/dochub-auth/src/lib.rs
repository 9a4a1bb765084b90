//! # dochub-auth
//!
//! Authentication primitives for DocHub: JWT claims, token encoding and
//! validation (HS256 access + refresh pairs), Argon2id password hashing,
//! and password-policy enforcement.

pub mod jwt;
pub mod password;

pub use jwt::claims::{Claims, TokenType};
pub use jwt::decoder::JwtDecoder;
pub use jwt::encoder::{JwtEncoder, TokenPair};
pub use password::hasher::PasswordHasher;
pub use password::validator::PasswordValidator;
