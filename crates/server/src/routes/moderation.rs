use axum::{response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use bulletin_shared::moderation;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckContentRequest {
    pub content: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationResult {
    pub is_approved: bool,
    pub flagged_words: Vec<&'static str>,
    pub severity: &'static str,
    pub suggested_action: &'static str,
}

/// POST /api/moderation/check
pub async fn check_content(Json(body): Json<CheckContentRequest>) -> impl IntoResponse {
    let flagged = moderation::flagged_terms(&body.content);

    let result = ModerationResult {
        is_approved: moderation::check_content(&body.content),
        severity: moderation::severity(flagged.len()),
        suggested_action: moderation::suggested_action(&body.content),
        flagged_words: flagged,
    };

    Json(result)
}

/// GET /api/moderation/banned-words
pub async fn banned_words() -> impl IntoResponse {
    Json(moderation::BANNED_TERMS)
}
