pub mod config;
pub mod controllers;
pub mod database;
pub mod errors;
pub mod middleware;
pub mod models;

use axum::{response::Html, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub db: database::Database,
    pub config: config::Config,
}

impl AppState {
    pub async fn new(config: config::Config) -> anyhow::Result<Arc<Self>> {
        let db = database::Database::new(&config.database.url, config.database.pool_size).await?;

        db.run_migrations().await?;

        Ok(Arc::new(Self { db, config }))
    }
}

// Главный роутер приложения
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .merge(controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn home() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}
