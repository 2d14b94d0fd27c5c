mod config;
mod db;
mod models;
mod routes;

use config::Config;
use std::sync::Arc;
use tokio::net::TcpListener;
use axum::http::{HeaderName, Method};
use tower_http::cors::CorsLayer;

pub struct AppState {
    pub db: sqlx::SqlitePool,
    pub config: Config,
}

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bulletin_server=info".into()),
        )
        .init();

    let config = Config::from_env();

    // Initialize database
    let pool = db::init_pool(&config.database_path)
        .await
        .expect("Failed to initialize database");

    let state = Arc::new(AppState {
        db: pool.clone(),
        config: config.clone(),
    });

    // Build router
    let app = routes::build_router(state).layer(
        CorsLayer::new()
            .allow_origin(tower_http::cors::AllowOrigin::mirror_request())
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([HeaderName::from_static("content-type")])
            .allow_credentials(true),
    );

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind");

    tracing::info!("Bulletin server running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // Release the database on every exit path
    pool.close().await;
    tracing::info!("Bulletin server shut down");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
    tracing::info!("Shutdown signal received");
}
