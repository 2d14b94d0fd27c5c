mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

async fn setup() -> (TestServer, sqlx::SqlitePool) {
    let pool = common::setup_test_db().await;
    let app = common::create_test_app(pool.clone());
    let server = TestServer::new(app).unwrap();
    (server, pool)
}

#[tokio::test]
async fn register_user_returns_created() {
    let (server, _pool) = setup().await;

    let res = server
        .post("/api/users")
        .json(&json!({"username": "alice", "email": "Alice@Test.com"}))
        .await;

    res.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = res.json();
    assert_eq!(body["username"], "alice");
    // Emails are normalized to lowercase
    assert_eq!(body["email"], "alice@test.com");
    assert_eq!(body["isActive"], 1);
    assert!(body["id"].as_str().is_some());
    assert!(body["createdAt"].as_str().is_some());
}

#[tokio::test]
async fn register_duplicate_username_returns_409() {
    let (server, pool) = setup().await;

    common::create_test_user(&pool, "alice", "alice@test.com").await;

    let res = server
        .post("/api/users")
        .json(&json!({"username": "alice", "email": "other@test.com"}))
        .await;

    res.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn register_duplicate_email_returns_409() {
    let (server, pool) = setup().await;

    common::create_test_user(&pool, "alice", "alice@test.com").await;

    let res = server
        .post("/api/users")
        .json(&json!({"username": "alice2", "email": "alice@test.com"}))
        .await;

    res.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn register_invalid_email_returns_400() {
    let (server, _pool) = setup().await;

    for bad in ["not-an-email", "a@b", "a @b.com", ""] {
        let res = server
            .post("/api/users")
            .json(&json!({"username": "alice", "email": bad}))
            .await;
        res.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn register_invalid_username_returns_400() {
    let (server, _pool) = setup().await;

    let res = server
        .post("/api/users")
        .json(&json!({"username": "a", "email": "a@test.com"}))
        .await;

    res.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_user_by_id() {
    let (server, pool) = setup().await;

    let user_id = common::create_test_user(&pool, "alice", "alice@test.com").await;

    let res = server.get(&format!("/api/users/{}", user_id)).await;
    res.assert_status_ok();
    let body: serde_json::Value = res.json();
    assert_eq!(body["id"], user_id);
    assert_eq!(body["username"], "alice");

    let res = server.get("/api/users/nope").await;
    res.assert_status(StatusCode::NOT_FOUND);
}
