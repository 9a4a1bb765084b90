//! # dochub-service
//!
//! Business logic services for DocHub. Services orchestrate repositories
//! and auth primitives, enforce ownership rules, and expose the operations
//! the HTTP layer calls into.

pub mod context;
pub mod document;
pub mod folder;
pub mod user;

pub use context::RequestContext;
