//! Database models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use crate::genres::Genres;
use crate::schedule::Scheduled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    /// Seeking talent
    pub seeking: bool,
    pub seeking_message: Option<String>,
    pub genres: Genres,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub website_link: Option<String>,
    pub image_link: String,
    pub facebook_link: Option<String>,
}

impl<'r> FromRow<'r, SqliteRow> for Venue {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            seeking: row.try_get("seeking")?,
            seeking_message: row.try_get("seeking_message")?,
            genres: Genres::parse(row.try_get::<&str, _>("genres")?),
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            address: row.try_get("address")?,
            phone: row.try_get("phone")?,
            website_link: row.try_get("website_link")?,
            image_link: row.try_get("image_link")?,
            facebook_link: row.try_get("facebook_link")?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    /// Seeking venue
    pub seeking: bool,
    pub seeking_message: Option<String>,
    pub genres: Genres,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website_link: Option<String>,
    pub image_link: String,
    pub facebook_link: Option<String>,
}

impl<'r> FromRow<'r, SqliteRow> for Artist {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            seeking: row.try_get("seeking")?,
            seeking_message: row.try_get("seeking_message")?,
            genres: Genres::parse(row.try_get::<&str, _>("genres")?),
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            phone: row.try_get("phone")?,
            website_link: row.try_get("website_link")?,
            image_link: row.try_get("image_link")?,
            facebook_link: row.try_get("facebook_link")?,
        })
    }
}

/// Values written by the venue create and edit forms
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewVenue {
    pub name: String,
    pub seeking: bool,
    pub seeking_message: Option<String>,
    pub genres: Genres,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub website_link: Option<String>,
    pub image_link: String,
    pub facebook_link: Option<String>,
}

/// Values written by the artist create and edit forms
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewArtist {
    pub name: String,
    pub seeking: bool,
    pub seeking_message: Option<String>,
    pub genres: Genres,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website_link: Option<String>,
    pub image_link: String,
    pub facebook_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewShow {
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Show {
    pub id: i64,
    pub start_time: NaiveDateTime,
    pub venue_id: i64,
    pub artist_id: i64,
}

/// A show as listed on a venue page
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VenueShow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: NaiveDateTime,
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }
}

/// A show as listed on an artist page
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ArtistShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: NaiveDateTime,
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }
}

/// A row of the all-shows listing
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ShowListing {
    pub id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: NaiveDateTime,
}

/// Venue or artist with its upcoming show count, used by listings and
/// search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Summary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Artist as shown on the artists index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct ArtistEntry {
    pub id: i64,
    pub name: String,
}

/// Venues sharing one city and state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<Summary>,
}

/// Search results with their count
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<Summary>,
}

impl From<Vec<Summary>> for SearchResults {
    fn from(data: Vec<Summary>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}
