//! Folder tree integration tests: nesting, breadcrumbs, moves, and the
//! cascading delete.

use http::StatusCode;

use crate::helpers::{TestApp, simple_repo_body};

#[tokio::test]
async fn test_nested_create_and_contents() {
    let app = TestApp::new();
    let (_, token) = app.register_user("alice");
    let repo_id = app
        .create_repository(&token, simple_repo_body("docs", "private"))
        .await;

    let docs = app.create_folder(&token, repo_id, "Docs", None).await;
    let y2024 = app.create_folder(&token, repo_id, "2024", Some(docs)).await;

    // Root contents list only the top folder.
    let response = app
        .request(
            "GET",
            &format!("/api/folders/contents?repository_id={repo_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["current_folder"], serde_json::Value::Null);
    assert_eq!(response.data()["subfolders"][0]["name"], "Docs");
    assert_eq!(response.data()["subfolders"][0]["level"], 0);

    // The nested folder is level 1 with its parent in the path.
    let response = app
        .request(
            "GET",
            &format!("/api/folders/contents?repository_id={repo_id}&folder_id={docs}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.data()["subfolders"][0]["level"], 1);
    assert_eq!(
        response.data()["subfolders"][0]["path"][0],
        docs.to_string()
    );

    // Breadcrumb for the nested folder.
    let response = app
        .request(
            "GET",
            &format!("/api/folders/{y2024}/path"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let crumbs = response.data().as_array().unwrap();
    assert_eq!(crumbs.len(), 1);
    assert_eq!(crumbs[0]["name"], "Docs");
}

#[tokio::test]
async fn test_duplicate_sibling_name_conflicts() {
    let app = TestApp::new();
    let (_, token) = app.register_user("alice");
    let repo_id = app
        .create_repository(&token, simple_repo_body("docs", "private"))
        .await;

    app.create_folder(&token, repo_id, "Reports", None).await;
    let response = app
        .request(
            "POST",
            &format!("/api/repositories/{repo_id}/folders"),
            Some(serde_json::json!({ "name": "Reports" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_rename_keeps_descendant_breadcrumbs_current() {
    let app = TestApp::new();
    let (_, token) = app.register_user("alice");
    let repo_id = app
        .create_repository(&token, simple_repo_body("docs", "private"))
        .await;

    let docs = app.create_folder(&token, repo_id, "Docs", None).await;
    let y2025 = app.create_folder(&token, repo_id, "2025", Some(docs)).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/folders/{docs}"),
            Some(serde_json::json!({ "name": "Documents" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The child's breadcrumb immediately reflects the new label.
    let response = app
        .request(
            "GET",
            &format!("/api/folders/{y2025}/path"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.data()[0]["name"], "Documents");
}

#[tokio::test]
async fn test_move_rejects_self_and_descendants() {
    let app = TestApp::new();
    let (_, token) = app.register_user("alice");
    let repo_id = app
        .create_repository(&token, simple_repo_body("docs", "private"))
        .await;

    let a = app.create_folder(&token, repo_id, "a", None).await;
    let b = app.create_folder(&token, repo_id, "b", Some(a)).await;
    let c = app.create_folder(&token, repo_id, "c", Some(b)).await;

    // Into itself.
    let response = app
        .request(
            "PATCH",
            &format!("/api/folders/{a}/move"),
            Some(serde_json::json!({ "new_parent_folder_id": a })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    // Into a deep descendant.
    let response = app
        .request(
            "PATCH",
            &format!("/api/folders/{a}/move"),
            Some(serde_json::json!({ "new_parent_folder_id": c })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_move_rebases_subtree_paths() {
    let app = TestApp::new();
    let (_, token) = app.register_user("alice");
    let repo_id = app
        .create_repository(&token, simple_repo_body("docs", "private"))
        .await;

    let archive = app.create_folder(&token, repo_id, "Archive", None).await;
    let docs = app.create_folder(&token, repo_id, "Docs", None).await;
    let y2024 = app.create_folder(&token, repo_id, "2024", Some(docs)).await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/folders/{docs}/move"),
            Some(serde_json::json!({ "new_parent_folder_id": archive })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["level"], 1);

    // The grandchild now sits two levels deep under Archive.
    let response = app
        .request(
            "GET",
            &format!("/api/folders/{y2024}/path"),
            None,
            Some(&token),
        )
        .await;
    let crumbs = response.data().as_array().unwrap();
    assert_eq!(crumbs.len(), 2);
    assert_eq!(crumbs[0]["name"], "Archive");
    assert_eq!(crumbs[1]["name"], "Docs");

    // Moving back to the root is allowed.
    let response = app
        .request(
            "PATCH",
            &format!("/api/folders/{docs}/move"),
            Some(serde_json::json!({ "new_parent_folder_id": null })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["level"], 0);
}

#[tokio::test]
async fn test_delete_cascades_folders_and_files() {
    let app = TestApp::new();
    let (_, token) = app.register_user("alice");
    let repo_id = app
        .create_repository(&token, simple_repo_body("docs", "private"))
        .await;

    // Docs/2024 containing report.pdf.
    let docs = app.create_folder(&token, repo_id, "Docs", None).await;
    let y2024 = app.create_folder(&token, repo_id, "2024", Some(docs)).await;

    let response = app
        .request(
            "POST",
            &format!("/api/repositories/{repo_id}/files"),
            Some(serde_json::json!({
                "folder_id": y2024,
                "title": "report.pdf",
                "original_name": "report.pdf",
                "content_type": "application/pdf",
                "size": 4096,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let file_id = response.data_id();

    // Deleting Docs removes 2024 and the file in one operation.
    let response = app
        .request(
            "DELETE",
            &format!("/api/folders/{docs}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    for path in [
        format!("/api/folders/{y2024}/path"),
        format!("/api/files/{file_id}"),
    ] {
        let response = app.request("GET", &path, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
    }
}

#[tokio::test]
async fn test_cross_tenant_parent_reads_as_absent() {
    let app = TestApp::new();
    let (_, alice) = app.register_user("alice");
    let (_, bob) = app.register_user("bob");

    let alice_repo = app
        .create_repository(&alice, simple_repo_body("alice docs", "private"))
        .await;
    let bob_repo = app
        .create_repository(&bob, simple_repo_body("bob docs", "private"))
        .await;
    let bob_folder = app.create_folder(&bob, bob_repo, "theirs", None).await;

    let response = app
        .request(
            "POST",
            &format!("/api/repositories/{alice_repo}/folders"),
            Some(serde_json::json!({ "name": "leak", "parent_folder_id": bob_folder })),
            Some(&alice),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_blank_folder_name_is_rejected() {
    let app = TestApp::new();
    let (_, token) = app.register_user("alice");
    let repo_id = app
        .create_repository(&token, simple_repo_body("docs", "private"))
        .await;

    let response = app
        .request(
            "POST",
            &format!("/api/repositories/{repo_id}/folders"),
            Some(serde_json::json!({ "name": "   " })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}
