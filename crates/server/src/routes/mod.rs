pub mod messages;
pub mod moderation;
pub mod reactions;
pub mod users;

use crate::AppState;
use axum::{routing::{get, post, put, delete}, Router};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Messages
        .route("/messages", post(messages::create_message))
        .route("/messages", get(messages::list_messages))
        .route("/messages/stats", get(messages::message_stats))
        .route("/messages/{messageId}", put(messages::update_message))
        .route("/messages/{messageId}", delete(messages::delete_message))
        // Reactions
        .route("/messages/{messageId}/reactions", post(reactions::add_reaction))
        .route("/messages/{messageId}/reactions", get(reactions::list_reactions))
        .route("/messages/{messageId}/reactions/counts", get(reactions::reaction_counts))
        .route("/messages/{messageId}/reactions/{userId}", delete(reactions::remove_reaction))
        // Users
        .route("/users", post(users::register_user))
        .route("/users/{userId}", get(users::get_user))
        // Moderation
        .route("/moderation/check", post(moderation::check_content))
        .route("/moderation/banned-words", get(moderation::banned_words));

    Router::new().nest("/api", api_routes).with_state(state)
}
