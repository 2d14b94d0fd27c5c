mod common;

use axum_test::TestServer;
use serde_json::json;

async fn setup() -> TestServer {
    let pool = common::setup_test_db().await;
    let app = common::create_test_app(pool);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn clean_content_is_approved() {
    let server = setup().await;

    let res = server
        .post("/api/moderation/check")
        .json(&json!({"content": "hello world"}))
        .await;

    res.assert_status_ok();
    let body: serde_json::Value = res.json();
    assert_eq!(body["isApproved"], true);
    assert_eq!(body["severity"], "low");
    assert_eq!(body["suggestedAction"], "approve");
    assert!(body["flaggedWords"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn flagged_content_is_not_approved() {
    let server = setup().await;

    let res = server
        .post("/api/moderation/check")
        .json(&json!({"content": "this is SPAM"}))
        .await;

    res.assert_status_ok();
    let body: serde_json::Value = res.json();
    assert_eq!(body["isApproved"], false);
    assert_eq!(body["severity"], "medium");
    assert_eq!(body["suggestedAction"], "review");
    assert_eq!(body["flaggedWords"][0], "spam");
}

#[tokio::test]
async fn multiple_flags_escalate_to_reject() {
    let server = setup().await;

    let res = server
        .post("/api/moderation/check")
        .json(&json!({"content": "spam and scam together"}))
        .await;

    res.assert_status_ok();
    let body: serde_json::Value = res.json();
    assert_eq!(body["isApproved"], false);
    assert_eq!(body["severity"], "high");
    assert_eq!(body["suggestedAction"], "reject");
    assert_eq!(body["flaggedWords"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn banned_words_endpoint_lists_terms() {
    let server = setup().await;

    let res = server.get("/api/moderation/banned-words").await;
    res.assert_status_ok();
    let body: Vec<String> = res.json();
    assert!(body.contains(&"spam".to_string()));
    assert!(!body.is_empty());
}
