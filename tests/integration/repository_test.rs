//! Repository lifecycle and access integration tests.

use http::StatusCode;

use crate::helpers::{TestApp, simple_repo_body};

#[tokio::test]
async fn test_create_and_get_repository() {
    let app = TestApp::new();
    let (owner_id, token) = app.register_user("alice");

    let repo_id = app
        .create_repository(&token, simple_repo_body("team docs", "private"))
        .await;

    let response = app
        .request(
            "GET",
            &format!("/api/repositories/{repo_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["name"], "team docs");
    assert_eq!(response.data()["owner_id"], owner_id.to_string());
}

#[tokio::test]
async fn test_requests_without_token_are_unauthorized() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/repositories",
            Some(simple_repo_body("x", "private")),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/api/repositories/mine", None, Some("bogus"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_creator_repository_is_normalized() {
    let app = TestApp::new();
    let (_, token) = app.register_user("curator");

    let response = app
        .request(
            "POST",
            "/api/repositories",
            Some(serde_json::json!({
                "name": "studio",
                "repo_type": "creator",
                "category": "personal",
                "privacy": "private",
                "interest_areas": ["film"],
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    // Creator repositories drop the category and are recorded public.
    assert_eq!(response.data()["category"], serde_json::Value::Null);
    assert_eq!(response.data()["privacy"], "public");
    assert_eq!(response.data()["interest_areas"][0], "film");
}

#[tokio::test]
async fn test_public_repository_grants_implicit_read_only() {
    let app = TestApp::new();
    let (_, owner_token) = app.register_user("owner");
    let (_, stranger_token) = app.register_user("stranger");

    let repo_id = app
        .create_repository(&owner_token, simple_repo_body("open docs", "public"))
        .await;

    // A non-participant can read...
    let response = app
        .request(
            "GET",
            &format!("/api/repositories/{repo_id}"),
            None,
            Some(&stranger_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // ...but cannot mutate the tree.
    let response = app
        .request(
            "POST",
            &format!("/api/repositories/{repo_id}/folders"),
            Some(serde_json::json!({ "name": "intruder" })),
            Some(&stranger_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn test_private_repository_is_invisible_to_strangers() {
    let app = TestApp::new();
    let (_, owner_token) = app.register_user("owner");
    let (_, stranger_token) = app.register_user("stranger");

    let repo_id = app
        .create_repository(&owner_token, simple_repo_body("secret", "private"))
        .await;

    let response = app
        .request(
            "GET",
            &format!("/api/repositories/{repo_id}"),
            None,
            Some(&stranger_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_list_mine_and_public() {
    let app = TestApp::new();
    let (_, alice) = app.register_user("alice");
    let (_, bob) = app.register_user("bob");

    app.create_repository(&alice, simple_repo_body("a-private", "private"))
        .await;
    app.create_repository(&alice, simple_repo_body("a-public", "public"))
        .await;
    app.create_repository(&bob, simple_repo_body("b-private", "private"))
        .await;

    let response = app
        .request("GET", "/api/repositories/mine", None, Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data().as_array().unwrap().len(), 2);

    let response = app
        .request("GET", "/api/repositories/public", None, Some(&bob))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<&str> = response
        .data()
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["a-public"]);
}

#[tokio::test]
async fn test_only_owner_deletes_and_deletion_cascades() {
    let app = TestApp::new();
    let (_, owner_token) = app.register_user("owner");
    let (_, stranger_token) = app.register_user("stranger");

    let repo_id = app
        .create_repository(&owner_token, simple_repo_body("doomed", "public"))
        .await;
    let folder_id = app.create_folder(&owner_token, repo_id, "docs", None).await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/repositories/{repo_id}"),
            None,
            Some(&stranger_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "DELETE",
            &format!("/api/repositories/{repo_id}"),
            None,
            Some(&owner_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "GET",
            &format!("/api/folders/{folder_id}/path"),
            None,
            Some(&owner_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_is_unauthenticated() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
