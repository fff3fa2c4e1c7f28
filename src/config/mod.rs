use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Настройки базы данных
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
}

// Настройки API
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    // Статический ключ, которым защищено удаление записей
    pub delete_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "cafe_api=debug,tower_http=debug".to_string()),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://cafes.db".to_string()),
                pool_size: env::var("DB_POOL_SIZE")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .expect("DB_POOL_SIZE must be a valid number"),
            },
            api: ApiConfig {
                delete_key: env::var("DELETE_API_KEY").unwrap_or_else(|_| "TopSecret".to_string()),
            },
        }
    }
}
