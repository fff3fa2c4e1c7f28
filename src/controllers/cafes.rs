//! cafes.rs
//!
//! Модуль для чтения каталога кафе.
//!
//! Включает в себя следующую функциональность:
//! - Выбор одного случайного кафе из каталога.
//! - Получение всех кафе, отсортированных по имени.
//! - Поиск кафе по локации без учета регистра.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::errors::ApiError;
use crate::models::Cafe;
use crate::AppState;

/// Определяет маршруты чтения каталога.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/random", get(get_random_cafe))
        .route("/all", get(get_all_cafes))
        .route("/search", get(search_by_location))
}

/// GET /random
///
/// Возвращает одно случайное кафе (равномерный выбор по всей таблице).
async fn get_random_cafe(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let cafes = Cafe::all(&state.db).await?;

    let cafe = cafes.choose(&mut rand::thread_rng()).ok_or_else(|| {
        ApiError::NotFound("Sorry, there are no cafes in the database yet.".to_string())
    })?;

    Ok(Json(json!({ "cafe": cafe })))
}

/// GET /all
///
/// Возвращает все кафе массивом, отсортированным по имени.
async fn get_all_cafes(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let cafes = Cafe::all(&state.db).await?;
    Ok(Json(cafes))
}

/// GET /search?loc=...
#[derive(Debug, Deserialize)]
struct SearchQuery {
    loc: String,
}

async fn search_by_location(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let cafes = Cafe::find_by_location(&state.db, &params.loc).await?;

    if cafes.is_empty() {
        return Err(ApiError::NotFound(
            "Sorry, we don't have a cafe at that location.".to_string(),
        ));
    }

    Ok(Json(cafes))
}
