use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::Database;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

// Данные новой записи; id назначает база
#[derive(Debug, Clone)]
pub struct NewCafe {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

impl Cafe {
    // Все кафе, отсортированные по имени
    pub async fn all(db: &Database) -> Result<Vec<Cafe>, sqlx::Error> {
        sqlx::query_as::<_, Cafe>("SELECT * FROM cafe ORDER BY name")
            .fetch_all(&db.pool)
            .await
    }

    // Поиск по локации без учета регистра
    pub async fn find_by_location(db: &Database, location: &str) -> Result<Vec<Cafe>, sqlx::Error> {
        sqlx::query_as::<_, Cafe>(
            "SELECT * FROM cafe WHERE LOWER(location) = LOWER(?) ORDER BY name",
        )
        .bind(location)
        .fetch_all(&db.pool)
        .await
    }

    /// Вариант поиска по id, возвращающий `None` для отсутствующей записи.
    pub async fn find_by_id(db: &Database, id: i64) -> Result<Option<Cafe>, sqlx::Error> {
        sqlx::query_as::<_, Cafe>("SELECT * FROM cafe WHERE id = ?")
            .bind(id)
            .fetch_optional(&db.pool)
            .await
    }

    /// Вариант поиска по id, падающий с `RowNotFound` для отсутствующей записи.
    pub async fn get_by_id(db: &Database, id: i64) -> Result<Cafe, sqlx::Error> {
        sqlx::query_as::<_, Cafe>("SELECT * FROM cafe WHERE id = ?")
            .bind(id)
            .fetch_one(&db.pool)
            .await
    }

    // Вставка новой записи, возвращает назначенный id
    pub async fn insert(db: &Database, new: &NewCafe) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO cafe
                (name, map_url, img_url, location, seats,
                 has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&new.name)
        .bind(&new.map_url)
        .bind(&new.img_url)
        .bind(&new.location)
        .bind(&new.seats)
        .bind(new.has_toilet)
        .bind(new.has_wifi)
        .bind(new.has_sockets)
        .bind(new.can_take_calls)
        .bind(&new.coffee_price)
        .fetch_one(&db.pool)
        .await
    }

    pub async fn update_price(
        db: &Database,
        id: i64,
        new_price: &str,
    ) -> Result<u64, sqlx::Error> {
        sqlx::query("UPDATE cafe SET coffee_price = ? WHERE id = ?")
            .bind(new_price)
            .bind(id)
            .execute(&db.pool)
            .await
            .map(|r| r.rows_affected())
    }

    pub async fn delete(db: &Database, id: i64) -> Result<u64, sqlx::Error> {
        sqlx::query("DELETE FROM cafe WHERE id = ?")
            .bind(id)
            .execute(&db.pool)
            .await
            .map(|r| r.rows_affected())
    }
}
