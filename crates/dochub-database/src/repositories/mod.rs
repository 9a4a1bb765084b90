//! Concrete repository implementations, one per entity.

pub mod content_type;
pub mod document;
pub mod folder;
pub mod user;
