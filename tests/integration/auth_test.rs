//! Integration tests for registration, login, and token handling.

use http::StatusCode;

use crate::helpers::{self, TestApp, unique};

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_register_and_login() {
    let app = TestApp::new().await;
    let username = unique("reguser");

    let token = app.register_user(&username).await;
    assert!(!token.is_empty());

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": username,
                "password": helpers::STRONG_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data("access_token").is_string());
    assert!(response.data("refresh_token").is_string());
    assert_eq!(
        response.body.pointer("/data/user/username").unwrap(),
        &serde_json::json!(username)
    );
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_register_duplicate_username_conflicts() {
    let app = TestApp::new().await;
    let username = unique("dupuser");
    app.register_user(&username).await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": username,
                "email": format!("{}@other.example.com", unique("mail")),
                "password": helpers::STRONG_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_register_weak_password_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": unique("weakpw"),
                "email": format!("{}@example.com", unique("weakpw")),
                "password": "password1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_login_wrong_password_unauthorized() {
    let app = TestApp::new().await;
    let username = unique("wrongpw");
    app.register_user(&username).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": username,
                "password": "Definitely-Not-It-1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_me_requires_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let username = unique("meuser");
    let token = app.register_user(&username).await;

    let response = app
        .request("GET", "/api/auth/me", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data("username").as_str().unwrap(),
        username.as_str()
    );
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_refresh_issues_new_pair() {
    let app = TestApp::new().await;
    let username = unique("refresh");

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": username,
                "email": format!("{username}@example.com"),
                "password": helpers::STRONG_PASSWORD,
            })),
            None,
        )
        .await;
    let refresh_token = response.data("refresh_token").as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data("access_token").is_string());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_access_token_rejected_for_refresh() {
    let app = TestApp::new().await;
    let token = app.register_user(&unique("mixup")).await;

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": token })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
