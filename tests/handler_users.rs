mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_users_empty() {
    let server = common::make_server();

    let response = server.get("/api/v1/users").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_list_users_after_create() {
    let server = common::make_server();

    server
        .post("/api/v1/users")
        .json(&json!({ "name": "A", "email": "a@b.com", "password": "x" }))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/api/v1/users")
        .json(&json!({ "name": "B", "email": "b@c.org", "password": "y" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/api/v1/users").await;

    response.assert_status_ok();
    response.assert_json(&json!([
        { "id": 1, "name": "A", "email": "a@b.com" },
        { "id": 2, "name": "B", "email": "b@c.org" }
    ]));
}

// ─── CREATE ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_user_success() {
    let server = common::make_server();

    let response = server
        .post("/api/v1/users")
        .json(&json!({ "name": "A", "email": "a@b.com", "password": "x" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({ "id": 1, "name": "A", "email": "a@b.com" }));
}

#[tokio::test]
async fn test_create_user_ids_increase() {
    let server = common::make_server();

    let first = server
        .post("/api/v1/users")
        .json(&json!({ "name": "A", "email": "a@b.com", "password": "x" }))
        .await
        .json::<Value>();
    let second = server
        .post("/api/v1/users")
        .json(&json!({ "name": "A", "email": "a@b.com", "password": "x" }))
        .await
        .json::<Value>();

    assert_eq!(first["id"], 1);
    assert_eq!(second["id"], 2);
}

#[tokio::test]
async fn test_password_never_returned() {
    let server = common::make_server();

    let created = server
        .post("/api/v1/users")
        .json(&json!({ "name": "A", "email": "a@b.com", "password": "hunter2" }))
        .await;

    assert!(created.json::<Value>().get("password").is_none());
    assert!(!created.text().contains("hunter2"));

    let listed = server.get("/api/v1/users").await;
    assert!(!listed.text().contains("hunter2"));
}

#[tokio::test]
async fn test_create_user_without_password() {
    let server = common::make_server();

    let response = server
        .post("/api/v1/users")
        .json(&json!({ "name": "A", "email": "a@b.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_user_blank_name_accepted() {
    let server = common::make_server();

    let response = server
        .post("/api/v1/users")
        .json(&json!({ "email": "a@b.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({ "id": 1, "name": "", "email": "a@b.com" }));
}

#[tokio::test]
async fn test_create_user_email_stored_verbatim() {
    let server = common::make_server();

    let response = server
        .post("/api/v1/users")
        .json(&json!({ "name": "A", "email": "not-an-email", "password": "x" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({ "id": 1, "name": "A", "email": "not-an-email" }));
}

#[tokio::test]
async fn test_create_user_malformed_json() {
    let server = common::make_server();

    let response = server
        .post("/api/v1/users")
        .content_type("application/json")
        .bytes("{not json".into())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>().get("error").is_some());
}

#[tokio::test]
async fn test_create_user_wrong_field_type() {
    let server = common::make_server();

    let response = server
        .post("/api/v1/users")
        .json(&json!({ "name": 5, "email": "a@b.com" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_failed_create_does_not_consume_id() {
    let server = common::make_server();

    server
        .post("/api/v1/users")
        .content_type("application/json")
        .bytes("{not json".into())
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/api/v1/users")
        .json(&json!({ "name": "", "email": "" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["id"], 1);
}
