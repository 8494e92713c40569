//! Show queries

use sqlx::SqlitePool;

use super::models::{NewShow, Show, ShowListing};
use crate::Result;

/// Every show with its venue and artist, in start-time order
pub async fn list(pool: &SqlitePool) -> Result<Vec<ShowListing>> {
    let shows = sqlx::query_as::<_, ShowListing>(
        r#"
        SELECT s.id AS id,
               v.id AS venue_id,
               v.name AS venue_name,
               a.id AS artist_id,
               a.name AS artist_name,
               a.image_link AS artist_image_link,
               s.start_time AS start_time
        FROM show s
        JOIN venue v ON v.id = s.venue_id
        JOIN artist a ON a.id = s.artist_id
        ORDER BY s.start_time, s.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(shows)
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Show>> {
    let show = sqlx::query_as::<_, Show>(
        "SELECT id, start_time, venue_id, artist_id FROM show WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(show)
}

/// Insert a show and return its id
///
/// Fails with a foreign key violation if the venue or artist does not exist.
pub async fn insert(pool: &SqlitePool, show: &NewShow) -> Result<i64> {
    let result = sqlx::query("INSERT INTO show (start_time, venue_id, artist_id) VALUES (?, ?, ?)")
        .bind(show.start_time)
        .bind(show.venue_id)
        .bind(show.artist_id)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM show")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
