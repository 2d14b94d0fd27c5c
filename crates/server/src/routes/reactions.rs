use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use bulletin_shared::validation::is_allowed_reaction;

use crate::models::Reaction;
use crate::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddReactionRequest {
    pub user_id: String,
    pub reaction_type: String,
}

/// POST /api/messages/:messageId/reactions
pub async fn add_reaction(
    State(state): State<Arc<AppState>>,
    Path(message_id): Path<String>,
    Json(body): Json<AddReactionRequest>,
) -> impl IntoResponse {
    if !is_allowed_reaction(&body.reaction_type) {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Invalid reaction type"})),
        )
            .into_response();
    }

    // Verify the message exists
    let message_exists = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM messages WHERE id = ?",
    )
    .bind(&message_id)
    .fetch_one(&state.db)
    .await
    .unwrap_or(0);

    if message_exists == 0 {
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "Message not found"})),
        )
            .into_response();
    }

    // Verify the user exists
    let user_exists = sqlx::query_scalar::<_, i64>(
        r#"SELECT COUNT(*) FROM "users" WHERE id = ?"#,
    )
    .bind(&body.user_id)
    .fetch_one(&state.db)
    .await
    .unwrap_or(0);

    if user_exists == 0 {
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "User not found"})),
        )
            .into_response();
    }

    let id = uuid::Uuid::new_v4().to_string();
    let now = chrono::Utc::now().to_rfc3339();

    // One reaction per (message, user): a second add replaces the type
    let result = sqlx::query(
        r#"INSERT INTO reactions (id, message_id, user_id, reaction_type, created_at)
           VALUES (?, ?, ?, ?, ?)
           ON CONFLICT (message_id, user_id)
           DO UPDATE SET reaction_type = excluded.reaction_type, created_at = excluded.created_at"#,
    )
    .bind(&id)
    .bind(&message_id)
    .bind(&body.user_id)
    .bind(&body.reaction_type)
    .bind(&now)
    .execute(&state.db)
    .await;

    if let Err(e) = result {
        tracing::error!("Failed to add reaction: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": "Database error"})),
        )
            .into_response();
    }

    let reaction = sqlx::query_as::<_, Reaction>(
        "SELECT * FROM reactions WHERE message_id = ? AND user_id = ?",
    )
    .bind(&message_id)
    .bind(&body.user_id)
    .fetch_one(&state.db)
    .await;

    match reaction {
        Ok(reaction) => Json(reaction).into_response(),
        Err(e) => {
            tracing::error!("Failed to reload reaction: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Database error"})),
            )
                .into_response()
        }
    }
}

/// DELETE /api/messages/:messageId/reactions/:userId
pub async fn remove_reaction(
    State(state): State<Arc<AppState>>,
    Path((message_id, user_id)): Path<(String, String)>,
) -> impl IntoResponse {
    let result = sqlx::query("DELETE FROM reactions WHERE message_id = ? AND user_id = ?")
        .bind(&message_id)
        .bind(&user_id)
        .execute(&state.db)
        .await;

    match result {
        Ok(r) if r.rows_affected() == 0 => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "Reaction not found"})),
        )
            .into_response(),
        Ok(_) => Json(serde_json::json!({"success": true})).into_response(),
        Err(e) => {
            tracing::error!("Failed to remove reaction: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Database error"})),
            )
                .into_response()
        }
    }
}

/// GET /api/messages/:messageId/reactions
pub async fn list_reactions(
    State(state): State<Arc<AppState>>,
    Path(message_id): Path<String>,
) -> impl IntoResponse {
    let items = sqlx::query_as::<_, Reaction>(
        "SELECT * FROM reactions WHERE message_id = ? ORDER BY created_at",
    )
    .bind(&message_id)
    .fetch_all(&state.db)
    .await
    .unwrap_or_default();

    Json(items)
}

/// GET /api/messages/:messageId/reactions/counts
pub async fn reaction_counts(
    State(state): State<Arc<AppState>>,
    Path(message_id): Path<String>,
) -> impl IntoResponse {
    let rows = sqlx::query_as::<_, (String, i64)>(
        "SELECT reaction_type, COUNT(*) FROM reactions WHERE message_id = ? GROUP BY reaction_type",
    )
    .bind(&message_id)
    .fetch_all(&state.db)
    .await
    .unwrap_or_default();

    let mut counts = serde_json::Map::new();
    for (reaction_type, count) in rows {
        counts.insert(reaction_type, serde_json::json!(count));
    }

    Json(serde_json::Value::Object(counts))
}
