//! Venue queries

use chrono::NaiveDateTime;
use sqlx::SqlitePool;

use super::filter_by_name;
use super::models::{Area, NewVenue, SearchResults, Summary, Venue, VenueShow};
use crate::Result;

/// Venue columns plus an upcoming show count, grouped per venue
const SUMMARY_SELECT: &str = r#"
    SELECT v.id AS id,
           v.name AS name,
           COALESCE(SUM(CASE WHEN s.start_time > ? THEN 1 ELSE 0 END), 0) AS num_upcoming_shows
    FROM venue v
    LEFT JOIN show s ON s.venue_id = v.id
"#;

/// All venues grouped by city and state
///
/// Areas are ordered by city then state, venues by name within an area.
pub async fn list_areas(pool: &SqlitePool, now: NaiveDateTime) -> Result<Vec<Area>> {
    let rows = sqlx::query_as::<_, (String, String, i64, String, i64)>(
        r#"
        SELECT v.city, v.state, v.id, v.name,
               COALESCE(SUM(CASE WHEN s.start_time > ? THEN 1 ELSE 0 END), 0)
        FROM venue v
        LEFT JOIN show s ON s.venue_id = v.id
        GROUP BY v.id
        ORDER BY v.city, v.state, v.name, v.id
        "#,
    )
    .bind(now)
    .fetch_all(pool)
    .await?;

    Ok(group_by_area(rows.into_iter().map(
        |(city, state, id, name, num_upcoming_shows)| {
            (
                city,
                state,
                Summary {
                    id,
                    name,
                    num_upcoming_shows,
                },
            )
        },
    )))
}

/// Fold `(city, state, venue)` rows, already sorted by area, into areas
pub fn group_by_area<I>(rows: I) -> Vec<Area>
where
    I: IntoIterator<Item = (String, String, Summary)>,
{
    let mut areas: Vec<Area> = Vec::new();

    for (city, state, venue) in rows {
        match areas.last_mut() {
            Some(area) if area.city == city && area.state == state => area.venues.push(venue),
            _ => areas.push(Area {
                city,
                state,
                venues: vec![venue],
            }),
        }
    }

    areas
}

/// Case-insensitive substring search on venue name
pub async fn search(pool: &SqlitePool, term: &str, now: NaiveDateTime) -> Result<SearchResults> {
    let sql = format!("{} GROUP BY v.id ORDER BY v.name, v.id", SUMMARY_SELECT);

    let rows = sqlx::query_as::<_, Summary>(&sql)
        .bind(now)
        .fetch_all(pool)
        .await?;

    Ok(SearchResults::from(filter_by_name(rows, term)))
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Venue>> {
    let venue = sqlx::query_as::<_, Venue>("SELECT * FROM venue WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(venue)
}

/// Shows at a venue with their artists, in start-time order
pub async fn shows(pool: &SqlitePool, venue_id: i64) -> Result<Vec<VenueShow>> {
    let shows = sqlx::query_as::<_, VenueShow>(
        r#"
        SELECT a.id AS artist_id,
               a.name AS artist_name,
               a.image_link AS artist_image_link,
               s.start_time AS start_time
        FROM show s
        JOIN artist a ON a.id = s.artist_id
        WHERE s.venue_id = ?
        ORDER BY s.start_time, s.id
        "#,
    )
    .bind(venue_id)
    .fetch_all(pool)
    .await?;

    Ok(shows)
}

/// Insert a venue and return its id
pub async fn insert(pool: &SqlitePool, venue: &NewVenue) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO venue (
            name, seeking, seeking_message, genres, city, state, address,
            phone, website_link, image_link, facebook_link
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&venue.name)
    .bind(venue.seeking)
    .bind(&venue.seeking_message)
    .bind(venue.genres.serialize())
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.website_link)
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Overwrite a venue; returns false when no venue has this id
pub async fn update(pool: &SqlitePool, id: i64, venue: &NewVenue) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE venue
        SET name = ?, seeking = ?, seeking_message = ?, genres = ?, city = ?,
            state = ?, address = ?, phone = ?, website_link = ?, image_link = ?,
            facebook_link = ?
        WHERE id = ?
        "#,
    )
    .bind(&venue.name)
    .bind(venue.seeking)
    .bind(&venue.seeking_message)
    .bind(venue.genres.serialize())
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.website_link)
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a venue and, by cascade, its shows
///
/// Returns the deleted venue's name, or None when no venue has this id.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<String>> {
    let mut tx = pool.begin().await?;

    let name: Option<String> = sqlx::query_scalar("SELECT name FROM venue WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

    if name.is_some() {
        sqlx::query("DELETE FROM venue WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(city: &str, state: &str, id: i64, name: &str) -> (String, String, Summary) {
        (
            city.to_string(),
            state.to_string(),
            Summary {
                id,
                name: name.to_string(),
                num_upcoming_shows: 0,
            },
        )
    }

    #[test]
    fn test_group_by_area_merges_consecutive_rows() {
        let areas = group_by_area(vec![
            row("New York", "NY", 2, "Dueling Pianos"),
            row("New York", "NY", 3, "Park Square"),
            row("San Francisco", "CA", 1, "The Musical Hop"),
        ]);

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].city, "New York");
        assert_eq!(areas[0].venues.len(), 2);
        assert_eq!(areas[1].state, "CA");
        assert_eq!(areas[1].venues[0].name, "The Musical Hop");
    }

    #[test]
    fn test_group_by_area_keeps_hyphenated_cities_whole() {
        let areas = group_by_area(vec![
            row("Wilkes-Barre", "PA", 1, "Kirby Center"),
            row("Winston-Salem", "NC", 2, "Ziggy's"),
        ]);

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].city, "Wilkes-Barre");
        assert_eq!(areas[1].city, "Winston-Salem");
    }

    #[test]
    fn test_same_city_different_state_is_separate_area() {
        let areas = group_by_area(vec![
            row("Portland", "ME", 1, "State Theatre"),
            row("Portland", "OR", 2, "Crystal Ballroom"),
        ]);

        assert_eq!(areas.len(), 2);
    }

    #[test]
    fn test_group_by_area_empty() {
        assert!(group_by_area(Vec::new()).is_empty());
    }
}
