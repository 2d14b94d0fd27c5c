use axum::Router;
use bulletin_server::{config::Config, routes, AppState};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::sync::Arc;

/// Create an in-memory SQLite pool with schema applied.
pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory SQLite pool");

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .unwrap();

    // Run schema
    let schema = include_str!("../../src/db/schema.sql");
    for statement in schema.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            sqlx::query(trimmed).execute(&pool).await.unwrap();
        }
    }

    pool
}

/// Build a test Axum app with the given pool.
pub fn create_test_app(pool: SqlitePool) -> Router {
    let state = Arc::new(AppState {
        db: pool,
        config: Config {
            host: "127.0.0.1".into(),
            port: 0,
            database_path: ":memory:".into(),
        },
    });

    routes::build_router(state)
}

/// Create a test user directly in the database. Returns the user id.
pub async fn create_test_user(pool: &SqlitePool, username: &str, email: &str) -> String {
    let user_id = uuid::Uuid::new_v4().to_string();
    let now = chrono::Utc::now().to_rfc3339();

    sqlx::query(
        r#"INSERT INTO "users" (id, username, email, is_active, created_at)
           VALUES (?, ?, ?, 1, ?)"#,
    )
    .bind(&user_id)
    .bind(username)
    .bind(email)
    .bind(&now)
    .execute(pool)
    .await
    .unwrap();

    user_id
}

/// Insert a message directly in the database. Returns the message id.
pub async fn insert_message(pool: &SqlitePool, author: &str, content: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string();
    let now = chrono::Utc::now().to_rfc3339();

    sqlx::query("INSERT INTO messages (id, author, content, created_at) VALUES (?, ?, ?, ?)")
        .bind(&id)
        .bind(author)
        .bind(content)
        .bind(&now)
        .execute(pool)
        .await
        .unwrap();

    id
}
