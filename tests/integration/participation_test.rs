//! Invitation, application, and roster integration tests.

use http::StatusCode;
use serde_json::Value;
use uuid::Uuid;

use crate::helpers::{TestApp, simple_repo_body};

async fn invite(app: &TestApp, token: &str, repo_id: Uuid, email: &str, role: &str) -> Value {
    let response = app
        .request(
            "POST",
            &format!("/api/repositories/{repo_id}/invitations"),
            Some(serde_json::json!({ "email": email, "role": role })),
            Some(token),
        )
        .await;
    assert_eq!(
        response.status,
        StatusCode::OK,
        "Invite failed: {:?}",
        response.body
    );
    response.data().clone()
}

#[tokio::test]
async fn test_invitation_grants_invited_role() {
    let app = TestApp::new();
    let (_, owner) = app.register_user("owner");
    let (invitee_id, invitee) = app.register_user("invitee");

    let repo_id = app
        .create_repository(&owner, simple_repo_body("team", "private"))
        .await;
    let invitation = invite(&app, &owner, repo_id, "invitee@example.com", "writer").await;

    let response = app
        .request(
            "POST",
            "/api/invitations/accept",
            Some(serde_json::json!({ "token": invitation["token"] })),
            Some(&invitee),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let participant = &response.data()["participants"][0];
    assert_eq!(participant["user_id"], invitee_id.to_string());
    assert_eq!(participant["role"], "writer");
    assert_eq!(participant["status"], "active");

    // The new writer can now mutate the tree.
    app.create_folder(&invitee, repo_id, "contrib", None).await;
}

#[tokio::test]
async fn test_resolved_invitation_cannot_be_reused() {
    let app = TestApp::new();
    let (_, owner) = app.register_user("owner");
    let (_, invitee) = app.register_user("invitee");

    let repo_id = app
        .create_repository(&owner, simple_repo_body("team", "private"))
        .await;
    let invitation = invite(&app, &owner, repo_id, "x@example.com", "viewer").await;

    let accept = serde_json::json!({ "token": invitation["token"] });
    let response = app
        .request("POST", "/api/invitations/accept", Some(accept.clone()), Some(&invitee))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("POST", "/api/invitations/accept", Some(accept), Some(&invitee))
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_rejected_invitation_is_terminal() {
    let app = TestApp::new();
    let (_, owner) = app.register_user("owner");
    let (_, invitee) = app.register_user("invitee");

    let repo_id = app
        .create_repository(&owner, simple_repo_body("team", "private"))
        .await;
    let invitation = invite(&app, &owner, repo_id, "x@example.com", "writer").await;

    let response = app
        .request(
            "POST",
            "/api/invitations/reject",
            Some(serde_json::json!({ "invitation_id": invitation["id"] })),
            Some(&invitee),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "rejected");

    let response = app
        .request(
            "POST",
            "/api/invitations/accept",
            Some(serde_json::json!({ "token": invitation["token"] })),
            Some(&invitee),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_owner_role_cannot_be_granted() {
    let app = TestApp::new();
    let (_, owner) = app.register_user("owner");

    let repo_id = app
        .create_repository(&owner, simple_repo_body("team", "private"))
        .await;
    let response = app
        .request(
            "POST",
            &format!("/api/repositories/{repo_id}/invitations"),
            Some(serde_json::json!({ "email": "x@example.com", "role": "owner" })),
            Some(&owner),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_writer_cannot_manage_roster() {
    let app = TestApp::new();
    let (_, owner) = app.register_user("owner");
    let (_, writer) = app.register_user("writer");

    let repo_id = app
        .create_repository(&owner, simple_repo_body("team", "private"))
        .await;
    let invitation = invite(&app, &owner, repo_id, "w@example.com", "writer").await;
    app.request(
        "POST",
        "/api/invitations/accept",
        Some(serde_json::json!({ "token": invitation["token"] })),
        Some(&writer),
    )
    .await;

    let response = app
        .request(
            "POST",
            &format!("/api/repositories/{repo_id}/invitations"),
            Some(serde_json::json!({ "email": "y@example.com", "role": "viewer" })),
            Some(&writer),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_role_change_and_removal() {
    let app = TestApp::new();
    let (owner_id, owner) = app.register_user("owner");
    let (member_id, member) = app.register_user("member");

    let repo_id = app
        .create_repository(&owner, simple_repo_body("team", "private"))
        .await;
    let invitation = invite(&app, &owner, repo_id, "m@example.com", "viewer").await;
    app.request(
        "POST",
        "/api/invitations/accept",
        Some(serde_json::json!({ "token": invitation["token"] })),
        Some(&member),
    )
    .await;

    // Promote the viewer to admin.
    let response = app
        .request(
            "PUT",
            &format!("/api/repositories/{repo_id}/participants/{member_id}"),
            Some(serde_json::json!({ "role": "admin" })),
            Some(&owner),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["participants"][0]["role"], "admin");

    // The owner cannot be demoted through the roster.
    let response = app
        .request(
            "PUT",
            &format!("/api/repositories/{repo_id}/participants/{owner_id}"),
            Some(serde_json::json!({ "role": "viewer" })),
            Some(&owner),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // Removal revokes access to the private repository.
    let response = app
        .request(
            "DELETE",
            &format!("/api/repositories/{repo_id}/participants/{member_id}"),
            None,
            Some(&owner),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "GET",
            &format!("/api/repositories/{repo_id}"),
            None,
            Some(&member),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_application_review_flow() {
    let app = TestApp::new();
    let (_, owner) = app.register_user("owner");
    let (applicant_id, applicant) = app.register_user("applicant");

    let repo_id = app
        .create_repository(&owner, simple_repo_body("community", "public"))
        .await;

    let response = app
        .request(
            "POST",
            &format!("/api/repositories/{repo_id}/applications"),
            Some(serde_json::json!({ "kind": "member", "message": "let me in" })),
            Some(&applicant),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let application_id = response.data_id();

    // A duplicate pending application conflicts.
    let response = app
        .request(
            "POST",
            &format!("/api/repositories/{repo_id}/applications"),
            Some(serde_json::json!({ "kind": "member" })),
            Some(&applicant),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    // Approval seats the applicant as a writer.
    let response = app
        .request(
            "POST",
            &format!("/api/applications/{application_id}/review"),
            Some(serde_json::json!({ "approve": true })),
            Some(&owner),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "accepted");

    let response = app
        .request(
            "GET",
            &format!("/api/repositories/{repo_id}"),
            None,
            Some(&owner),
        )
        .await;
    let participant = &response.data()["participants"][0];
    assert_eq!(participant["user_id"], applicant_id.to_string());
    assert_eq!(participant["role"], "writer");
}

#[tokio::test]
async fn test_application_kind_must_match_repository_type() {
    let app = TestApp::new();
    let (_, owner) = app.register_user("owner");
    let (_, applicant) = app.register_user("applicant");

    let repo_id = app
        .create_repository(&owner, simple_repo_body("community", "public"))
        .await;

    let response = app
        .request(
            "POST",
            &format!("/api/repositories/{repo_id}/applications"),
            Some(serde_json::json!({ "kind": "creator" })),
            Some(&applicant),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
