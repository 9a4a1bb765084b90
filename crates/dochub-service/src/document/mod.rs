//! Document services.

pub mod service;

pub use service::DocumentService;
