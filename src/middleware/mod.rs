use axum::{extract::FromRequestParts, http::request::Parts};
use serde::Deserialize;
use std::sync::Arc;

use crate::errors::ApiError;

const WRONG_KEY: &str = "Sorry, that's not allowed. Make sure you have the correct api_key.";

// Доступ к удалению записей: статический ключ в query-параметре `api-key`
#[derive(Debug, Clone)]
pub struct DeleteKey;

// Структура для разбора строки запроса
#[derive(Debug, Deserialize)]
struct KeyQuery {
    #[serde(rename = "api-key")]
    api_key: Option<String>,
}

impl FromRequestParts<Arc<crate::AppState>> for DeleteKey {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<crate::AppState>,
    ) -> Result<Self, Self::Rejection> {
        // Получаем query string
        let query = parts.uri.query().unwrap_or_default();

        // Разбираем параметры, лишние ключи игнорируем
        let parsed: KeyQuery = serde_urlencoded::from_str(query)
            .map_err(|_| ApiError::Forbidden(WRONG_KEY.to_string()))?;

        // Сравниваем со значением из конфигурации
        match parsed.api_key {
            Some(ref key) if *key == state.config.api.delete_key => Ok(DeleteKey),
            _ => Err(ApiError::Forbidden(WRONG_KEY.to_string())),
        }
    }
}
