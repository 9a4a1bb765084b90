//! User registration, authentication, and profile services.

pub mod service;

pub use service::UserService;
