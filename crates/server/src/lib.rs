pub mod config;
pub mod db;
pub mod models;
pub mod routes;

use config::Config;

pub struct AppState {
    pub db: sqlx::SqlitePool,
    pub config: Config,
}
