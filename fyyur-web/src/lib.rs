//! fyyur-web library - venue and artist booking directory
//!
//! Server-rendered HTML over the Fyyur SQLite database: listings, search,
//! detail pages, and create/edit/delete forms for venues, artists and shows.

use std::sync::Arc;

use axum::Router;
use chrono::NaiveDateTime;
use fyyur_common::{Clock, SystemClock};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod cli;
pub mod error;
pub mod flash;
pub mod forms;
pub mod ui;

pub use crate::error::{ApiError, PageError};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Source of "now" for upcoming/past classification
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create new application state on the local wall clock
    pub fn new(db: SqlitePool) -> Self {
        Self::with_clock(db, Arc::new(SystemClock))
    }

    pub fn with_clock(db: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        Self { db, clock }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::page_routes())
        .merge(api::venue_routes())
        .merge(api::artist_routes())
        .merge(api::show_routes())
        .merge(api::health_routes())
        .fallback(api::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
