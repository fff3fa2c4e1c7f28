pub mod cafes;
pub mod manage;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(cafes::routes())
        .merge(manage::routes())
}
