//! End-to-end API tests driven through the real router.
//!
//! These tests require a running PostgreSQL instance (`DATABASE_URL`) and
//! are marked `#[ignore]`; run them with `cargo test -- --ignored`.

mod helpers;

mod auth_test;
mod document_test;
mod folder_test;
