//! # dochub-entity
//!
//! Domain entity models for DocHub. Every struct in this crate represents
//! a database table row or a domain value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.

pub mod content_type;
pub mod document;
pub mod folder;
pub mod user;
