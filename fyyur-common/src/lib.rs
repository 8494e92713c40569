//! # Fyyur Common Library
//!
//! Shared code for the Fyyur booking directory:
//! - Database models and queries (venues, artists, shows)
//! - Schema initialization and migrations
//! - Genre list codec
//! - Upcoming/past show classification and date formatting
//! - Configuration loading

pub mod config;
pub mod db;
pub mod error;
pub mod genres;
pub mod schedule;
pub mod time;

pub use error::{Error, Result};
pub use genres::Genres;
pub use time::{Clock, FixedClock, SystemClock};
