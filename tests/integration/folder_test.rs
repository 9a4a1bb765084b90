//! Integration tests for the folder hierarchy: creation, tree reads,
//! reparenting, and recursive deletion.

use http::StatusCode;

use crate::helpers::{TestApp, unique};

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_create_folder_with_foreign_parent_rejected() {
    let app = TestApp::new().await;
    let owner = app.register_user(&unique("owner")).await;
    let intruder = app.register_user(&unique("intruder")).await;

    let parent_id = app.create_folder(&owner, "private", None).await;

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(serde_json::json!({ "name": "sneaky", "parent_id": parent_id })),
            Some(&intruder),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_create_folder_with_missing_parent_rejected() {
    let app = TestApp::new().await;
    let token = app.register_user(&unique("noparent")).await;

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(serde_json::json!({
                "name": "orphan",
                "parent_id": "00000000-0000-0000-0000-000000000001",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_duplicate_sibling_name_conflicts() {
    let app = TestApp::new().await;
    let token = app.register_user(&unique("dupname")).await;

    app.create_folder(&token, "reports", None).await;

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(serde_json::json!({ "name": "reports", "parent_id": null })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_tree_returns_nested_children() {
    let app = TestApp::new().await;
    let token = app.register_user(&unique("treeuser")).await;

    let root_a = app.create_folder(&token, "a", None).await;
    let _root_b = app.create_folder(&token, "b", None).await;
    let child = app.create_folder(&token, "a-child", Some(&root_a)).await;
    let _grandchild = app
        .create_folder(&token, "a-grandchild", Some(&child))
        .await;

    let response = app.request("GET", "/api/folders", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data("total_folders").as_u64(), Some(4));

    let folders = response.data("folders").as_array().unwrap();
    assert_eq!(folders.len(), 2);

    let node_a = folders
        .iter()
        .find(|n| n["name"] == "a")
        .expect("root 'a' missing");
    assert_eq!(node_a["children"][0]["name"], "a-child");
    assert_eq!(node_a["children"][0]["children"][0]["name"], "a-grandchild");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_folder_detail_lists_documents_and_children() {
    let app = TestApp::new().await;
    let token = app.register_user(&unique("detail")).await;

    let folder_id = app.create_folder(&token, "docs", None).await;
    app.create_folder(&token, "sub", Some(&folder_id)).await;
    app.create_document(&token, "readme", Some(&folder_id)).await;

    let response = app
        .request(
            "GET",
            &format!("/api/folders/{folder_id}"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data("documents").as_array().unwrap().len(), 1);
    assert_eq!(response.data("children").as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_foreign_folder_reads_are_not_found() {
    let app = TestApp::new().await;
    let owner = app.register_user(&unique("fowner")).await;
    let other = app.register_user(&unique("fother")).await;

    let folder_id = app.create_folder(&owner, "mine", None).await;

    let response = app
        .request(
            "GET",
            &format!("/api/folders/{folder_id}"),
            None,
            Some(&other),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_update_foreign_folder_forbidden() {
    let app = TestApp::new().await;
    let owner = app.register_user(&unique("uowner")).await;
    let other = app.register_user(&unique("uother")).await;

    let folder_id = app.create_folder(&owner, "mine", None).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/folders/{folder_id}"),
            Some(serde_json::json!({ "name": "stolen", "parent_id": null })),
            Some(&other),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_reparent_to_foreign_parent_rejected() {
    let app = TestApp::new().await;
    let owner = app.register_user(&unique("rowner")).await;
    let other = app.register_user(&unique("rother")).await;

    let theirs = app.create_folder(&other, "theirs", None).await;
    // A nested folder, so the narrow previously-a-root case does not apply
    let root = app.create_folder(&owner, "root", None).await;
    let nested = app.create_folder(&owner, "nested", Some(&root)).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/folders/{nested}"),
            Some(serde_json::json!({ "name": "nested", "parent_id": theirs })),
            Some(&owner),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_reparent_into_own_descendant_rejected() {
    let app = TestApp::new().await;
    let token = app.register_user(&unique("cycle")).await;

    let top = app.create_folder(&token, "top", None).await;
    let mid = app.create_folder(&token, "mid", Some(&top)).await;
    let leaf = app.create_folder(&token, "leaf", Some(&mid)).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/folders/{top}"),
            Some(serde_json::json!({ "name": "top", "parent_id": leaf })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let into_self = app
        .request(
            "PUT",
            &format!("/api/folders/{top}"),
            Some(serde_json::json!({ "name": "top", "parent_id": top })),
            Some(&token),
        )
        .await;

    assert_eq!(into_self.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_rename_and_reparent() {
    let app = TestApp::new().await;
    let token = app.register_user(&unique("rename")).await;

    let a = app.create_folder(&token, "a", None).await;
    let b = app.create_folder(&token, "b", None).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/folders/{b}"),
            Some(serde_json::json!({ "name": "b-renamed", "parent_id": a })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data("name").as_str(), Some("b-renamed"));
    assert_eq!(response.data("parent_id").as_str(), Some(a.as_str()));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_recursive_delete_removes_descendants_and_documents() {
    let app = TestApp::new().await;
    let token = app.register_user(&unique("deluser")).await;

    let top = app.create_folder(&token, "top", None).await;
    let mid = app.create_folder(&token, "mid", Some(&top)).await;
    let leaf = app.create_folder(&token, "leaf", Some(&mid)).await;
    let doc_top = app.create_document(&token, "in-top", Some(&top)).await;
    let doc_leaf = app.create_document(&token, "in-leaf", Some(&leaf)).await;
    let unfiled = app.create_document(&token, "unfiled", None).await;

    let response = app
        .request("DELETE", &format!("/api/folders/{top}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    for folder in [&top, &mid, &leaf] {
        let check = app
            .request("GET", &format!("/api/folders/{folder}"), None, Some(&token))
            .await;
        assert_eq!(check.status, StatusCode::NOT_FOUND);
    }

    for doc in [&doc_top, &doc_leaf] {
        let check = app
            .request("GET", &format!("/api/documents/{doc}"), None, Some(&token))
            .await;
        assert_eq!(check.status, StatusCode::NOT_FOUND);
    }

    // Documents outside the subtree survive
    let check = app
        .request(
            "GET",
            &format!("/api/documents/{unfiled}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(check.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_subtree_endpoint_scopes_to_owner() {
    let app = TestApp::new().await;
    let owner = app.register_user(&unique("subowner")).await;
    let other = app.register_user(&unique("subother")).await;

    let root = app.create_folder(&owner, "root", None).await;
    app.create_folder(&owner, "inner", Some(&root)).await;

    let response = app
        .request(
            "GET",
            &format!("/api/folders/{root}/tree"),
            None,
            Some(&owner),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data("children").as_array().unwrap().len(), 1);

    let foreign = app
        .request(
            "GET",
            &format!("/api/folders/{root}/tree"),
            None,
            Some(&other),
        )
        .await;
    assert_eq!(foreign.status, StatusCode::NOT_FOUND);
}
