use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use bulletin_shared::validation::validate_username;

use crate::models::User;
use crate::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub username: String,
    pub email: String,
}

/// POST /api/users
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterUserRequest>,
) -> impl IntoResponse {
    let username = body.username.trim().to_string();
    let email = body.email.trim().to_lowercase();

    if let Err(msg) = validate_username(&username) {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": msg})),
        )
            .into_response();
    }

    let re = regex_lite::Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    if !re.is_match(&email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Invalid email address"})),
        )
            .into_response();
    }

    // Check if username already exists
    let exists =
        sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM "users" WHERE username = ?"#)
            .bind(&username)
            .fetch_one(&state.db)
            .await
            .unwrap_or(0);

    if exists > 0 {
        return (
            StatusCode::CONFLICT,
            Json(serde_json::json!({"error": "Username already taken"})),
        )
            .into_response();
    }

    // Check if email already exists
    let exists = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM "users" WHERE email = ?"#)
        .bind(&email)
        .fetch_one(&state.db)
        .await
        .unwrap_or(0);

    if exists > 0 {
        return (
            StatusCode::CONFLICT,
            Json(serde_json::json!({"error": "Email already registered"})),
        )
            .into_response();
    }

    let user_id = uuid::Uuid::new_v4().to_string();
    let now = chrono::Utc::now().to_rfc3339();

    let result = sqlx::query(
        r#"INSERT INTO "users" (id, username, email, is_active, created_at)
           VALUES (?, ?, ?, 1, ?)"#,
    )
    .bind(&user_id)
    .bind(&username)
    .bind(&email)
    .bind(&now)
    .execute(&state.db)
    .await;

    if let Err(e) = result {
        tracing::error!("Failed to insert user: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": "Database error"})),
        )
            .into_response();
    }

    tracing::info!(user_id = %user_id, "User registered");

    let user = User {
        id: user_id,
        username,
        email,
        is_active: 1,
        created_at: now,
    };

    (StatusCode::CREATED, Json(user)).into_response()
}

/// GET /api/users/:userId
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    let user = sqlx::query_as::<_, User>(r#"SELECT * FROM "users" WHERE id = ?"#)
        .bind(&user_id)
        .fetch_optional(&state.db)
        .await
        .ok()
        .flatten();

    match user {
        Some(user) => Json(user).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "User not found"})),
        )
            .into_response(),
    }
}
