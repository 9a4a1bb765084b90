//! Integration tests for document CRUD and content-type validation.

use http::StatusCode;

use crate::helpers::{TestApp, unique};

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_create_document_in_foreign_folder_rejected() {
    let app = TestApp::new().await;
    let owner = app.register_user(&unique("downer")).await;
    let intruder = app.register_user(&unique("dintruder")).await;

    let folder_id = app.create_folder(&owner, "private", None).await;

    let response = app
        .request(
            "POST",
            "/api/documents",
            Some(serde_json::json!({
                "title": "sneaky",
                "content": "hi",
                "content_type": "text/plain",
                "folder_id": folder_id,
            })),
            Some(&intruder),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_unknown_content_type_rejected() {
    let app = TestApp::new().await;
    let token = app.register_user(&unique("ctuser")).await;

    let response = app
        .request(
            "POST",
            "/api/documents",
            Some(serde_json::json!({
                "title": "weird",
                "content": "hi",
                "content_type": "application/x-unregistered",
                "folder_id": null,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_get_document_includes_folder_summary() {
    let app = TestApp::new().await;
    let token = app.register_user(&unique("dget")).await;

    let folder_id = app.create_folder(&token, "notes", None).await;
    let doc_id = app.create_document(&token, "note-1", Some(&folder_id)).await;

    let response = app
        .request(
            "GET",
            &format!("/api/documents/{doc_id}"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.pointer("/data/folder/name").unwrap(),
        &serde_json::json!("notes")
    );
    assert_eq!(
        response.body.pointer("/data/document/title").unwrap(),
        &serde_json::json!("note-1")
    );
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_list_documents_is_paginated_and_owner_scoped() {
    let app = TestApp::new().await;
    let token = app.register_user(&unique("dlist")).await;
    let other = app.register_user(&unique("dlistother")).await;

    for i in 0..3 {
        app.create_document(&token, &format!("doc-{i}"), None).await;
    }
    app.create_document(&other, "not-mine", None).await;

    let response = app
        .request(
            "GET",
            "/api/documents?page=1&per_page=2",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data("items").as_array().unwrap().len(), 2);
    assert_eq!(response.data("total_items").as_u64(), Some(3));
    assert_eq!(response.data("total_pages").as_u64(), Some(2));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_update_foreign_document_forbidden() {
    let app = TestApp::new().await;
    let owner = app.register_user(&unique("duowner")).await;
    let other = app.register_user(&unique("duother")).await;

    let doc_id = app.create_document(&owner, "mine", None).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/documents/{doc_id}"),
            Some(serde_json::json!({
                "title": "stolen",
                "content": "hi",
                "content_type": "text/plain",
                "folder_id": null,
            })),
            Some(&other),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_update_moves_document_between_folders() {
    let app = TestApp::new().await;
    let token = app.register_user(&unique("dmove")).await;

    let folder_id = app.create_folder(&token, "inbox", None).await;
    let doc_id = app.create_document(&token, "memo", Some(&folder_id)).await;

    // folder_id omitted: the document becomes unfiled
    let response = app
        .request(
            "PUT",
            &format!("/api/documents/{doc_id}"),
            Some(serde_json::json!({
                "title": "memo",
                "content": "updated body",
                "content_type": "text/markdown",
                "folder_id": null,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data("folder_id").is_null());
    assert_eq!(response.data("content").as_str(), Some("updated body"));
    assert_eq!(response.data("content_type").as_str(), Some("text/markdown"));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_delete_document_is_owner_scoped() {
    let app = TestApp::new().await;
    let owner = app.register_user(&unique("ddowner")).await;
    let other = app.register_user(&unique("ddother")).await;

    let doc_id = app.create_document(&owner, "target", None).await;

    let foreign = app
        .request(
            "DELETE",
            &format!("/api/documents/{doc_id}"),
            None,
            Some(&other),
        )
        .await;
    assert_eq!(foreign.status, StatusCode::NOT_FOUND);

    let owned = app
        .request(
            "DELETE",
            &format!("/api/documents/{doc_id}"),
            None,
            Some(&owner),
        )
        .await;
    assert_eq!(owned.status, StatusCode::OK);

    let gone = app
        .request(
            "GET",
            &format!("/api/documents/{doc_id}"),
            None,
            Some(&owner),
        )
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_content_type_registry_is_seeded() {
    let app = TestApp::new().await;
    let token = app.register_user(&unique("ctlist")).await;

    let response = app
        .request("GET", "/api/content-types", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<&str> = response
        .body
        .pointer("/data")
        .and_then(|d| d.as_array())
        .unwrap()
        .iter()
        .filter_map(|t| t["name"].as_str())
        .collect();
    assert!(names.contains(&"text/plain"));
    assert!(names.contains(&"text/markdown"));
}
