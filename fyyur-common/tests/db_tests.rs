//! Integration tests for database initialization and queries
//!
//! Each test works on a fresh database file inside a temporary directory.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use fyyur_common::db::{self, artists, shows, venues, NewArtist, NewShow, NewVenue};
use fyyur_common::Genres;
use sqlx::SqlitePool;
use tempfile::TempDir;

async fn setup_db() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let pool = db::init_database(&dir.path().join("fyyur.db"))
        .await
        .expect("Should initialize database");
    (dir, pool)
}

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap()
}

fn venue(name: &str, city: &str, state: &str) -> NewVenue {
    NewVenue {
        name: name.to_string(),
        seeking: true,
        seeking_message: Some("Looking for local jazz acts".to_string()),
        genres: Genres::new(vec!["Jazz".to_string(), "Folk".to_string()]),
        city: city.to_string(),
        state: state.to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: "123-123-1234".to_string(),
        website_link: Some("https://www.themusicalhop.com".to_string()),
        image_link: "https://images.example.com/venue.jpg".to_string(),
        facebook_link: None,
    }
}

fn artist(name: &str) -> NewArtist {
    NewArtist {
        name: name.to_string(),
        seeking: false,
        seeking_message: None,
        genres: Genres::new(vec!["Rock n Roll".to_string()]),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: "326-123-5000".to_string(),
        website_link: None,
        image_link: "https://images.example.com/artist.jpg".to_string(),
        facebook_link: Some("https://www.facebook.com/GunsNPetals".to_string()),
    }
}

async fn add_venue(pool: &SqlitePool, new_venue: NewVenue) -> i64 {
    venues::insert(pool, &new_venue)
        .await
        .expect("Should insert venue")
}

async fn add_artist(pool: &SqlitePool, new_artist: NewArtist) -> i64 {
    artists::insert(pool, &new_artist)
        .await
        .expect("Should insert artist")
}

async fn add_show(
    pool: &SqlitePool,
    venue_id: i64,
    artist_id: i64,
    start_time: NaiveDateTime,
) -> i64 {
    shows::insert(
        pool,
        &NewShow {
            venue_id,
            artist_id,
            start_time,
        },
    )
    .await
    .expect("Should insert show")
}

#[tokio::test]
async fn test_init_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("fyyur.db");

    let pool1 = db::init_database(&path).await.expect("First init");
    assert!(path.exists(), "Database file was not created");
    drop(pool1);

    let pool2 = db::init_database(&path).await.expect("Second init");
    let version = db::get_schema_version(&pool2).await.unwrap();
    assert_eq!(version, db::CURRENT_SCHEMA_VERSION);
}

#[tokio::test]
async fn test_venue_insert_and_get() {
    let (_dir, pool) = setup_db().await;

    let id = venues::insert(&pool, &venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let stored = venues::get(&pool, id).await.unwrap().expect("Venue should exist");

    assert_eq!(stored.name, "The Musical Hop");
    assert!(stored.seeking);
    assert_eq!(stored.genres.as_slice(), ["Jazz", "Folk"]);
    assert_eq!(stored.address, "1015 Folsom Street");
    assert!(stored.facebook_link.is_none());

    assert!(venues::get(&pool, id + 100).await.unwrap().is_none());
}

#[tokio::test]
async fn test_venue_update() {
    let (_dir, pool) = setup_db().await;
    let id = add_venue(&pool, venue("Old Name", "Austin", "TX")).await;

    let mut changed = venue("New Name", "Dallas", "TX");
    changed.seeking = false;
    changed.seeking_message = None;
    assert!(venues::update(&pool, id, &changed).await.unwrap());

    let stored = venues::get(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.name, "New Name");
    assert_eq!(stored.city, "Dallas");
    assert!(!stored.seeking);

    assert!(!venues::update(&pool, id + 1, &changed).await.unwrap());
}

#[tokio::test]
async fn test_areas_group_by_city_and_state() {
    let (_dir, pool) = setup_db().await;
    let hop = add_venue(&pool, venue("The Musical Hop", "San Francisco", "CA")).await;
    add_venue(&pool, venue("Park Square Live", "San Francisco", "CA")).await;
    add_venue(&pool, venue("The Dueling Pianos Bar", "New York", "NY")).await;
    let band = add_artist(&pool, artist("Guns N Petals")).await;

    add_show(&pool, hop, band, now() + Duration::days(3)).await;
    add_show(&pool, hop, band, now() - Duration::days(3)).await;

    let areas = venues::list_areas(&pool, now()).await.unwrap();

    assert_eq!(areas.len(), 2);
    assert_eq!((areas[0].city.as_str(), areas[0].state.as_str()), ("New York", "NY"));
    assert_eq!(areas[1].city, "San Francisco");
    assert_eq!(areas[1].venues.len(), 2);
    // Venues sorted by name within an area
    assert_eq!(areas[1].venues[0].name, "Park Square Live");
    assert_eq!(areas[1].venues[0].num_upcoming_shows, 0);
    assert_eq!(areas[1].venues[1].name, "The Musical Hop");
    assert_eq!(areas[1].venues[1].num_upcoming_shows, 1);
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let (_dir, pool) = setup_db().await;
    add_venue(&pool, venue("The Musical Hop", "San Francisco", "CA")).await;
    add_venue(&pool, venue("Park Square Live Music & Coffee", "San Francisco", "CA")).await;
    add_venue(&pool, venue("The Dueling Pianos Bar", "New York", "NY")).await;

    let results = venues::search(&pool, "MUSIC", now()).await.unwrap();
    assert_eq!(results.count, 2);
    assert_eq!(results.data.len(), 2);
    // Each hit is its own record
    assert_ne!(results.data[0].id, results.data[1].id);

    let results = venues::search(&pool, "hop", now()).await.unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].name, "The Musical Hop");
}

#[tokio::test]
async fn test_search_folds_non_ascii_case() {
    let (_dir, pool) = setup_db().await;
    add_venue(&pool, venue("Café Éclair", "Montréal", "NY")).await;
    add_venue(&pool, venue("The Musical Hop", "San Francisco", "CA")).await;
    add_artist(&pool, artist("Ólafur Árnason")).await;

    let results = venues::search(&pool, "CAFÉ ÉCLAIR", now()).await.unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].name, "Café Éclair");

    let results = venues::search(&pool, "éclair", now()).await.unwrap();
    assert_eq!(results.count, 1);

    let results = artists::search(&pool, "ólafur", now()).await.unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].name, "Ólafur Árnason");
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    let (_dir, pool) = setup_db().await;
    add_artist(&pool, artist("100% Funk")).await;
    add_artist(&pool, artist("1000 Funk")).await;

    let results = artists::search(&pool, "100%", now()).await.unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].name, "100% Funk");

    let results = artists::search(&pool, "_", now()).await.unwrap();
    assert_eq!(results.count, 0);
}

#[tokio::test]
async fn test_empty_search_matches_everything() {
    let (_dir, pool) = setup_db().await;
    add_artist(&pool, artist("Guns N Petals")).await;
    add_artist(&pool, artist("Matt Quevedo")).await;

    let results = artists::search(&pool, "", now()).await.unwrap();
    assert_eq!(results.count, 2);
}

#[tokio::test]
async fn test_artist_search_counts_upcoming_shows() {
    let (_dir, pool) = setup_db().await;
    let hop = add_venue(&pool, venue("The Musical Hop", "San Francisco", "CA")).await;
    let band = add_artist(&pool, artist("Guns N Petals")).await;

    add_show(&pool, hop, band, now() + Duration::hours(1)).await;
    add_show(&pool, hop, band, now() + Duration::days(30)).await;
    add_show(&pool, hop, band, now() - Duration::days(30)).await;
    // Starting exactly now counts as past
    add_show(&pool, hop, band, now()).await;

    let results = artists::search(&pool, "petals", now()).await.unwrap();
    assert_eq!(results.data[0].num_upcoming_shows, 2);
}

#[tokio::test]
async fn test_detail_shows_ordered_by_start_time() {
    let (_dir, pool) = setup_db().await;
    let hop = add_venue(&pool, venue("The Musical Hop", "San Francisco", "CA")).await;
    let band = add_artist(&pool, artist("Guns N Petals")).await;

    add_show(&pool, hop, band, now() + Duration::days(2)).await;
    add_show(&pool, hop, band, now() - Duration::days(2)).await;

    let venue_shows = venues::shows(&pool, hop).await.unwrap();
    assert_eq!(venue_shows.len(), 2);
    assert!(venue_shows[0].start_time < venue_shows[1].start_time);
    assert_eq!(venue_shows[0].artist_name, "Guns N Petals");

    let artist_shows = artists::shows(&pool, band).await.unwrap();
    assert_eq!(artist_shows.len(), 2);
    assert_eq!(artist_shows[1].venue_name, "The Musical Hop");
    assert_eq!(artist_shows[1].start_time, now() + Duration::days(2));
}

#[tokio::test]
async fn test_show_requires_existing_venue_and_artist() {
    let (_dir, pool) = setup_db().await;
    let band = add_artist(&pool, artist("Guns N Petals")).await;

    let err = shows::insert(
        &pool,
        &NewShow {
            venue_id: 999,
            artist_id: band,
            start_time: now(),
        },
    )
    .await
    .expect_err("Unknown venue should be rejected");

    assert!(err.is_foreign_key_violation(), "Unexpected error: {}", err);
    assert_eq!(shows::count(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_show_round_trips_start_time() {
    let (_dir, pool) = setup_db().await;
    let hop = add_venue(&pool, venue("The Musical Hop", "San Francisco", "CA")).await;
    let band = add_artist(&pool, artist("Guns N Petals")).await;

    let id = add_show(&pool, hop, band, now()).await;
    let show = shows::get(&pool, id).await.unwrap().expect("Show should exist");

    assert_eq!(show.start_time, now());
    assert_eq!(show.venue_id, hop);
    assert_eq!(show.artist_id, band);
}

#[tokio::test]
async fn test_deleting_venue_cascades_to_shows() {
    let (_dir, pool) = setup_db().await;
    let hop = add_venue(&pool, venue("The Musical Hop", "San Francisco", "CA")).await;
    let other = add_venue(&pool, venue("Park Square Live", "San Francisco", "CA")).await;
    let band = add_artist(&pool, artist("Guns N Petals")).await;

    add_show(&pool, hop, band, now()).await;
    add_show(&pool, other, band, now()).await;

    let deleted = venues::delete(&pool, hop).await.unwrap();
    assert_eq!(deleted.as_deref(), Some("The Musical Hop"));
    assert_eq!(shows::count(&pool).await.unwrap(), 1);

    assert!(venues::delete(&pool, hop).await.unwrap().is_none());
}

#[tokio::test]
async fn test_deleting_artist_cascades_to_shows() {
    let (_dir, pool) = setup_db().await;
    let hop = add_venue(&pool, venue("The Musical Hop", "San Francisco", "CA")).await;
    let band = add_artist(&pool, artist("Guns N Petals")).await;
    add_show(&pool, hop, band, now()).await;

    assert_eq!(
        artists::delete(&pool, band).await.unwrap().as_deref(),
        Some("Guns N Petals")
    );
    assert_eq!(shows::count(&pool).await.unwrap(), 0);
    assert!(artists::list(&pool).await.unwrap().is_empty());
    assert!(venues::get(&pool, hop).await.unwrap().is_some());
}

#[tokio::test]
async fn test_show_listing_joins_names() {
    let (_dir, pool) = setup_db().await;
    let hop = add_venue(&pool, venue("The Musical Hop", "San Francisco", "CA")).await;
    let band = add_artist(&pool, artist("Guns N Petals")).await;
    add_show(&pool, hop, band, now()).await;

    let listing = shows::list(&pool).await.unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].venue_name, "The Musical Hop");
    assert_eq!(listing[0].artist_name, "Guns N Petals");
    assert_eq!(listing[0].artist_image_link, "https://images.example.com/artist.jpg");
}

#[tokio::test]
async fn test_legacy_json_genres_are_read() {
    let (_dir, pool) = setup_db().await;
    let id = add_artist(&pool, artist("Matt Quevedo")).await;

    sqlx::query("UPDATE artist SET genres = ? WHERE id = ?")
        .bind(r#"["Jazz", "Blues"]"#)
        .bind(id)
        .execute(&pool)
        .await
        .unwrap();

    let stored = artists::get(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.genres.as_slice(), ["Jazz", "Blues"]);
}
