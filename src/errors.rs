//! errors.rs
//!
//! Единый тип ошибок API и его отображение в HTTP статусы.
//!
//! Каждому виду ошибки соответствует свой статус-код:
//! - NotFound  -> 404
//! - Conflict  -> 409 (нарушение уникальности name)
//! - Forbidden -> 403 (неверный api-key)
//! - Database  -> 500 (детали только в логах)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Forbidden(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// Статус-код, соответствующий виду ошибки.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Переводит ошибку вставки в Conflict, если нарушена уникальность.
    pub fn from_insert_error(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return ApiError::Conflict(
                    "There is already a cafe with that name in the database.".to_string(),
                );
            }
        }
        ApiError::Database(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::NotFound(msg) => json!({"error": {"Not Found": msg}}),
            ApiError::Conflict(msg) => json!({"error": {"Conflict": msg}}),
            ApiError::Forbidden(msg) => json!({"error": msg}),
            ApiError::Database(e) => {
                tracing::error!("database error: {:?}", e);
                json!({"error": "Internal server error"})
            }
        };
        (status, Json(body)).into_response()
    }
}
