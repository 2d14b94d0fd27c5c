use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use bulletin_shared::constants::{MAX_MESSAGE_PAGE_SIZE, MESSAGE_PAGE_SIZE};
use bulletin_shared::{moderation, validation};

use crate::models::{Message, PaginatedResponse};
use crate::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    pub author: String,
    pub content: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessageRequest {
    pub content: String,
}

#[derive(Deserialize)]
pub struct MessageQuery {
    pub cursor: Option<String>,
    pub limit: Option<i64>,
    pub author: Option<String>,
}

/// POST /api/messages
pub async fn create_message(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateMessageRequest>,
) -> impl IntoResponse {
    let author = body.author.trim().to_string();

    if let Err(msg) = validation::validate_author(&author) {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": msg})),
        )
            .into_response();
    }

    if let Err(msg) = validation::validate_message_content(&body.content) {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": msg})),
        )
            .into_response();
    }

    // Moderation gate: rejected content is never persisted
    if !moderation::check_content(&body.content) {
        tracing::warn!(author = %author, "Message rejected by moderation");
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({"error": "Message rejected by moderation"})),
        )
            .into_response();
    }

    let id = uuid::Uuid::new_v4().to_string();
    let now = chrono::Utc::now().to_rfc3339();

    let result = sqlx::query(
        "INSERT INTO messages (id, author, content, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(&author)
    .bind(&body.content)
    .bind(&now)
    .execute(&state.db)
    .await;

    if let Err(e) = result {
        tracing::error!("Failed to insert message: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": "Database error"})),
        )
            .into_response();
    }

    tracing::info!(message_id = %id, event = "create", "Message created");

    let message = Message {
        id,
        author,
        content: body.content,
        created_at: now,
        edited_at: None,
    };

    (StatusCode::CREATED, Json(message)).into_response()
}

/// GET /api/messages
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    let limit = query.limit.unwrap_or(MESSAGE_PAGE_SIZE);

    // A non-positive limit yields an empty page rather than an error
    if limit <= 0 {
        return Json(PaginatedResponse::<Message> {
            items: Vec::new(),
            cursor: None,
            has_more: false,
        })
        .into_response();
    }

    let limit = limit.min(MAX_MESSAGE_PAGE_SIZE);

    let mut sql = String::from("SELECT * FROM messages WHERE 1 = 1");
    if query.cursor.is_some() {
        sql.push_str(" AND created_at < ?");
    }
    if query.author.is_some() {
        sql.push_str(" AND author = ?");
    }
    sql.push_str(" ORDER BY created_at DESC LIMIT ?");

    let mut q = sqlx::query_as::<_, Message>(&sql);
    if let Some(cursor) = &query.cursor {
        q = q.bind(cursor);
    }
    if let Some(author) = &query.author {
        q = q.bind(author);
    }
    q = q.bind(limit + 1);

    let items = match q.fetch_all(&state.db).await {
        Ok(items) => items,
        Err(e) => {
            tracing::error!("Failed to list messages: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Database error"})),
            )
                .into_response();
        }
    };

    let has_more = items.len() as i64 > limit;
    let mut items = items;
    if has_more {
        items.pop();
    }

    // Newest first; the cursor is the oldest timestamp on the page
    let cursor = items.last().map(|m| m.created_at.clone());

    Json(PaginatedResponse {
        items,
        cursor,
        has_more,
    })
    .into_response()
}

/// PUT /api/messages/:messageId
pub async fn update_message(
    State(state): State<Arc<AppState>>,
    Path(message_id): Path<String>,
    Json(body): Json<UpdateMessageRequest>,
) -> impl IntoResponse {
    if let Err(msg) = validation::validate_message_content(&body.content) {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": msg})),
        )
            .into_response();
    }

    // Edited content passes the same gate as new content
    if !moderation::check_content(&body.content) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({"error": "Message rejected by moderation"})),
        )
            .into_response();
    }

    let now = chrono::Utc::now().to_rfc3339();

    let result = sqlx::query(
        "UPDATE messages SET content = ?, edited_at = ? WHERE id = ?",
    )
    .bind(&body.content)
    .bind(&now)
    .bind(&message_id)
    .execute(&state.db)
    .await;

    match result {
        Ok(r) if r.rows_affected() == 0 => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "Message not found"})),
        )
            .into_response(),
        Ok(_) => {
            tracing::info!(message_id = %message_id, event = "update", "Message updated");

            let message = sqlx::query_as::<_, Message>("SELECT * FROM messages WHERE id = ?")
                .bind(&message_id)
                .fetch_one(&state.db)
                .await;

            match message {
                Ok(message) => Json(message).into_response(),
                Err(e) => {
                    tracing::error!("Failed to reload message: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(serde_json::json!({"error": "Database error"})),
                    )
                        .into_response()
                }
            }
        }
        Err(e) => {
            tracing::error!("Failed to update message: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Database error"})),
            )
                .into_response()
        }
    }
}

/// DELETE /api/messages/:messageId
pub async fn delete_message(
    State(state): State<Arc<AppState>>,
    Path(message_id): Path<String>,
) -> impl IntoResponse {
    let result = sqlx::query("DELETE FROM messages WHERE id = ?")
        .bind(&message_id)
        .execute(&state.db)
        .await;

    match result {
        Ok(r) if r.rows_affected() == 0 => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "Message not found"})),
        )
            .into_response(),
        Ok(_) => {
            tracing::info!(message_id = %message_id, event = "delete", "Message deleted");
            Json(serde_json::json!({"success": true})).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to delete message: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Database error"})),
            )
                .into_response()
        }
    }
}

/// GET /api/messages/stats
pub async fn message_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM messages")
        .fetch_one(&state.db)
        .await
        .unwrap_or(0);

    let authors = sqlx::query_scalar::<_, i64>("SELECT COUNT(DISTINCT author) FROM messages")
        .fetch_one(&state.db)
        .await
        .unwrap_or(0);

    Json(serde_json::json!({
        "totalMessages": total,
        "uniqueAuthors": authors,
    }))
}
