//! HTTP handlers for fyyur-web

pub mod artists;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};

use tracing::warn;

use crate::error::PageError;
use crate::flash::Flash;
use crate::forms::validate::parse_id;
use crate::forms::{FieldErrors, ProfileForm};
use crate::ui;
use crate::AppState;

pub use health::health_routes;

/// Home page routes
pub fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(home::index))
}

/// Venue listing, search, detail and form routes
pub fn venue_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(venues::list_venues))
        .route("/venues/search", post(venues::search_venues))
        .route(
            "/venues/create",
            get(venues::create_venue_form).post(venues::create_venue),
        )
        .route(
            "/venues/:venue_id",
            get(venues::show_venue).delete(venues::delete_venue),
        )
        .route(
            "/venues/:venue_id/edit",
            get(venues::edit_venue_form).post(venues::edit_venue),
        )
}

/// Artist listing, search, detail and form routes
pub fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(artists::list_artists))
        .route("/artists/search", post(artists::search_artists))
        .route(
            "/artists/create",
            get(artists::create_artist_form).post(artists::create_artist),
        )
        .route(
            "/artists/:artist_id",
            get(artists::show_artist).delete(artists::delete_artist),
        )
        .route(
            "/artists/:artist_id/edit",
            get(artists::edit_artist_form).post(artists::edit_artist),
        )
}

/// Show listing and creation routes
pub fn show_routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(shows::list_shows))
        .route(
            "/shows/create",
            get(shows::create_show_form).post(shows::create_show),
        )
}

/// Fallback for unknown routes
pub async fn not_found() -> Response {
    PageError::NotFound("route".to_string()).into_response()
}

/// Render `body` in the layout, showing and clearing any flash
pub(crate) fn page(title: &str, flash: &Flash, body: &str) -> Response {
    page_with_status(StatusCode::OK, title, flash, body)
}

pub(crate) fn page_with_status(
    status: StatusCode,
    title: &str,
    flash: &Flash,
    body: &str,
) -> Response {
    let mut response = (status, Html(ui::layout(title, flash.message(), body))).into_response();
    flash.consume(&mut response);
    response
}

/// Home page with a message from the request that just completed
pub(crate) fn home_with_message(flash: Flash, message: String) -> Response {
    page(home::TITLE, &flash.replace(message), &ui::home::home())
}

/// Venue or artist form page, for creating or for editing record `editing`
pub(crate) fn profile_form_page(
    status: StatusCode,
    flash: &Flash,
    form: &ProfileForm,
    errors: &FieldErrors,
    editing: Option<i64>,
) -> Response {
    let label = form.kind.label();
    let collection = form.kind.collection();
    if !errors.is_empty() {
        warn!(
            "{} form rejected: {}",
            label,
            errors.fields().copied().collect::<Vec<_>>().join(", ")
        );
    }

    let (title, action, heading) = match editing {
        Some(id) => (
            format!("Edit {}", label),
            format!("/{}/{}/edit", collection, id),
            format!("Edit {} {}", label.to_lowercase(), form.name),
        ),
        None => (
            format!("New {}", label),
            format!("/{}/create", collection),
            format!("List a new {}", label.to_lowercase()),
        ),
    };

    page_with_status(
        status,
        &title,
        flash,
        &ui::forms::profile_form(form, errors, &action, &heading),
    )
}

/// Record id from the path; anything but a positive integer is a 404
pub(crate) fn record_id(raw: &str, label: &str) -> Result<i64, PageError> {
    parse_id(raw).ok_or_else(|| PageError::NotFound(format!("{} {}", label, raw)))
}
