use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, patch, post},
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::errors::ApiError;
use crate::middleware::DeleteKey;
use crate::models::{Cafe, NewCafe};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/add", post(add_cafe))
        .route("/update-price/{cafe_id}", patch(update_price))
        .route("/report-closed/{cafe_id}", delete(report_closed))
}

/* ---------- helpers ---------- */

const CAFE_NOT_FOUND: &str = "Sorry a cafe with that id was not found in the database.";

// Явный разбор флагов удобств: "true" / "on" / "1" -> true, все остальное -> false
fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(str::trim),
        Some(v) if v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("on") || v == "1"
    )
}

// Отсутствие записи переводим в 404, остальное остается ошибкой БД
fn map_row_not_found(e: sqlx::Error) -> ApiError {
    match e {
        sqlx::Error::RowNotFound => ApiError::NotFound(CAFE_NOT_FOUND.to_string()),
        other => ApiError::Database(other),
    }
}

/* ---------- CAFES ---------- */

// POST /add
#[derive(Debug, Deserialize)]
struct AddCafeForm {
    name: String,
    map_url: String,
    img_url: String,
    loc: String,
    seats: String,
    sockets: Option<String>,
    toilet: Option<String>,
    wifi: Option<String>,
    calls: Option<String>,
    coffee_price: Option<String>,
}

async fn add_cafe(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddCafeForm>,
) -> Result<impl IntoResponse, ApiError> {
    let new = NewCafe {
        name: form.name,
        map_url: form.map_url,
        img_url: form.img_url,
        location: form.loc,
        seats: form.seats,
        has_sockets: parse_flag(form.sockets.as_deref()),
        has_toilet: parse_flag(form.toilet.as_deref()),
        has_wifi: parse_flag(form.wifi.as_deref()),
        can_take_calls: parse_flag(form.calls.as_deref()),
        coffee_price: form.coffee_price.filter(|p| !p.is_empty()),
    };

    let id = Cafe::insert(&state.db, &new)
        .await
        .map_err(ApiError::from_insert_error)?;

    tracing::info!("cafe '{}' added with id {}", new.name, id);

    Ok((
        StatusCode::CREATED,
        Json(json!({"response": {"success": "Successfully added the new cafe."}})),
    ))
}

// PATCH /update-price/{cafe_id}
#[derive(Debug, Deserialize)]
struct UpdatePriceQuery {
    new_price: String,
}

async fn update_price(
    State(state): State<Arc<AppState>>,
    Path(cafe_id): Path<i64>,
    Query(params): Query<UpdatePriceQuery>,
) -> Result<impl IntoResponse, ApiError> {
    // ищем запись падающим вариантом, как делал бы get_or_404
    let cafe = Cafe::get_by_id(&state.db, cafe_id)
        .await
        .map_err(map_row_not_found)?;

    Cafe::update_price(&state.db, cafe.id, &params.new_price).await?;

    tracing::info!("cafe {} price updated to {}", cafe.id, params.new_price);

    Ok((
        StatusCode::OK,
        Json(json!({"success": "Successfully updated the price."})),
    ))
}

// DELETE /report-closed/{cafe_id}?api-key=...
async fn report_closed(
    State(state): State<Arc<AppState>>,
    Path(cafe_id): Path<i64>,
    _key: DeleteKey,
) -> Result<impl IntoResponse, ApiError> {
    let cafe = Cafe::get_by_id(&state.db, cafe_id)
        .await
        .map_err(map_row_not_found)?;

    Cafe::delete(&state.db, cafe.id).await?;

    tracing::info!("cafe {} ('{}') reported closed and deleted", cafe.id, cafe.name);

    Ok((
        StatusCode::OK,
        Json(json!({"response": {"success": "Successfully deleted the cafe."}})),
    ))
}

#[cfg(test)]
mod tests {
    use super::parse_flag;

    #[test]
    fn flag_truthy_values() {
        assert!(parse_flag(Some("true")));
        assert!(parse_flag(Some("True")));
        assert!(parse_flag(Some("on")));
        assert!(parse_flag(Some("1")));
        assert!(parse_flag(Some(" on ")));
    }

    #[test]
    fn flag_falsy_values() {
        assert!(!parse_flag(None));
        assert!(!parse_flag(Some("")));
        assert!(!parse_flag(Some("false")));
        assert!(!parse_flag(Some("0")));
        assert!(!parse_flag(Some("yes")));
    }
}
