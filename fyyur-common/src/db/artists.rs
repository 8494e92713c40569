//! Artist queries

use chrono::NaiveDateTime;
use sqlx::SqlitePool;

use super::filter_by_name;
use super::models::{Artist, ArtistEntry, ArtistShow, NewArtist, SearchResults, Summary};
use crate::Result;

/// All artists, ordered by name
pub async fn list(pool: &SqlitePool) -> Result<Vec<ArtistEntry>> {
    let artists = sqlx::query_as::<_, ArtistEntry>("SELECT id, name FROM artist ORDER BY name, id")
        .fetch_all(pool)
        .await?;

    Ok(artists)
}

/// Case-insensitive substring search on artist name
pub async fn search(pool: &SqlitePool, term: &str, now: NaiveDateTime) -> Result<SearchResults> {
    let rows = sqlx::query_as::<_, Summary>(
        r#"
        SELECT a.id AS id,
               a.name AS name,
               COALESCE(SUM(CASE WHEN s.start_time > ? THEN 1 ELSE 0 END), 0) AS num_upcoming_shows
        FROM artist a
        LEFT JOIN show s ON s.artist_id = a.id
        GROUP BY a.id
        ORDER BY a.name, a.id
        "#,
    )
    .bind(now)
    .fetch_all(pool)
    .await?;

    Ok(SearchResults::from(filter_by_name(rows, term)))
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Artist>> {
    let artist = sqlx::query_as::<_, Artist>("SELECT * FROM artist WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(artist)
}

/// Shows by an artist with their venues, in start-time order
pub async fn shows(pool: &SqlitePool, artist_id: i64) -> Result<Vec<ArtistShow>> {
    let shows = sqlx::query_as::<_, ArtistShow>(
        r#"
        SELECT v.id AS venue_id,
               v.name AS venue_name,
               v.image_link AS venue_image_link,
               s.start_time AS start_time
        FROM show s
        JOIN venue v ON v.id = s.venue_id
        WHERE s.artist_id = ?
        ORDER BY s.start_time, s.id
        "#,
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    Ok(shows)
}

/// Insert an artist and return its id
pub async fn insert(pool: &SqlitePool, artist: &NewArtist) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO artist (
            name, seeking, seeking_message, genres, city, state, phone,
            website_link, image_link, facebook_link
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&artist.name)
    .bind(artist.seeking)
    .bind(&artist.seeking_message)
    .bind(artist.genres.serialize())
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.website_link)
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Overwrite an artist; returns false when no artist has this id
pub async fn update(pool: &SqlitePool, id: i64, artist: &NewArtist) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE artist
        SET name = ?, seeking = ?, seeking_message = ?, genres = ?, city = ?,
            state = ?, phone = ?, website_link = ?, image_link = ?, facebook_link = ?
        WHERE id = ?
        "#,
    )
    .bind(&artist.name)
    .bind(artist.seeking)
    .bind(&artist.seeking_message)
    .bind(artist.genres.serialize())
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.website_link)
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete an artist and, by cascade, their shows
///
/// Returns the deleted artist's name, or None when no artist has this id.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<String>> {
    let mut tx = pool.begin().await?;

    let name: Option<String> = sqlx::query_scalar("SELECT name FROM artist WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

    if name.is_some() {
        sqlx::query("DELETE FROM artist WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(name)
}
