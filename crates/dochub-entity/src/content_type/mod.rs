//! Content-type registry entities.

pub mod model;

pub use model::ContentType;
