//! Venue handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fyyur_common::db::venues;
use fyyur_common::schedule::partition;
use serde_json::json;
use tracing::{error, info};

use super::{home_with_message, page, profile_form_page, record_id};
use crate::error::{ApiError, PageError};
use crate::flash::{redirect_with_flash, with_flash, Flash};
use crate::forms::validate::parse_id;
use crate::forms::{FieldErrors, FormFields, ProfileForm, ProfileKind};
use crate::ui;
use crate::AppState;

const KIND: ProfileKind = ProfileKind::Venue;

/// GET /venues
pub async fn list_venues(
    State(state): State<AppState>,
    flash: Flash,
) -> Result<Response, PageError> {
    let areas = venues::list_areas(&state.db, state.now()).await?;
    Ok(page("Venues", &flash, &ui::venues::index(&areas)))
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    flash: Flash,
    body: Bytes,
) -> Result<Response, PageError> {
    let search_term = FormFields::parse(&body).text("search_term");
    let results = venues::search(&state.db, &search_term, state.now()).await?;
    Ok(page(
        "Venue Search",
        &flash,
        &ui::search_results(KIND.collection(), &search_term, &results),
    ))
}

/// GET /venues/:venue_id
pub async fn show_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
    flash: Flash,
) -> Result<Response, PageError> {
    let id = record_id(&venue_id, KIND.label())?;
    let venue = venues::get(&state.db, id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("{} {}", KIND.label(), id)))?;
    let shows = partition(venues::shows(&state.db, id).await?, state.now());

    Ok(page(&venue.name, &flash, &ui::venues::detail(&venue, &shows)))
}

/// GET /venues/create
pub async fn create_venue_form(flash: Flash) -> Response {
    let form = ProfileForm::empty(KIND);
    profile_form_page(StatusCode::OK, &flash, &form, &FieldErrors::default(), None)
}

/// POST /venues/create
pub async fn create_venue(
    State(state): State<AppState>,
    flash: Flash,
    body: Bytes,
) -> Response {
    let form = ProfileForm::from_fields(KIND, &FormFields::parse(&body));
    let venue = match form.to_venue() {
        Ok(venue) => venue,
        Err(errors) => {
            return profile_form_page(
                StatusCode::UNPROCESSABLE_ENTITY,
                &flash,
                &form,
                &errors,
                None,
            );
        }
    };

    let message = match venues::insert(&state.db, &venue).await {
        Ok(id) => {
            info!("Listed venue {} ({})", id, venue.name);
            format!("{} {} was successfully listed!", KIND.label(), venue.name)
        }
        Err(e) => {
            error!("Failed to list venue {}: {}", venue.name, e);
            format!(
                "An error occurred. {} {} could not be listed.",
                KIND.label(),
                venue.name
            )
        }
    };

    home_with_message(flash, message)
}

/// GET /venues/:venue_id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
    flash: Flash,
) -> Result<Response, PageError> {
    let id = record_id(&venue_id, KIND.label())?;
    let venue = venues::get(&state.db, id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("{} {}", KIND.label(), id)))?;

    let form = ProfileForm::from_venue(&venue);
    Ok(profile_form_page(StatusCode::OK, &flash, &form, &FieldErrors::default(), Some(id)))
}

/// POST /venues/:venue_id/edit
pub async fn edit_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
    flash: Flash,
    body: Bytes,
) -> Result<Response, PageError> {
    let id = record_id(&venue_id, KIND.label())?;
    if venues::get(&state.db, id).await?.is_none() {
        return Err(PageError::NotFound(format!("{} {}", KIND.label(), id)));
    }

    let form = ProfileForm::from_fields(KIND, &FormFields::parse(&body));
    let venue = match form.to_venue() {
        Ok(venue) => venue,
        Err(errors) => {
            return Ok(profile_form_page(
                StatusCode::UNPROCESSABLE_ENTITY,
                &flash,
                &form,
                &errors,
                Some(id),
            ));
        }
    };

    let message = match venues::update(&state.db, id, &venue).await {
        Ok(true) => {
            info!("Updated venue {} ({})", id, venue.name);
            format!("{} {} was successfully updated!", KIND.label(), venue.name)
        }
        Ok(false) => return Err(PageError::NotFound(format!("{} {}", KIND.label(), id))),
        Err(e) => {
            error!("Failed to update venue {}: {}", id, e);
            format!(
                "An error occurred. {} {} could not be updated.",
                KIND.label(),
                venue.name
            )
        }
    };

    Ok(redirect_with_flash(&format!("/{}/{}", KIND.collection(), id), &message))
}

/// DELETE /venues/:venue_id
///
/// Removes the venue and its shows. The message is returned as JSON and
/// also stored as the flash for the page the script navigates to next.
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
) -> Result<Response, ApiError> {
    let not_found = || ApiError::NotFound(format!("{} {} not found", KIND.label(), venue_id));
    let id = parse_id(&venue_id).ok_or_else(not_found)?;

    let venue = venues::get(&state.db, id).await?.ok_or_else(not_found)?;

    let (status, success, message) = match venues::delete(&state.db, id).await {
        Ok(Some(name)) => {
            info!("Removed venue {} ({})", id, name);
            (
                StatusCode::OK,
                true,
                format!("{} {} was successfully removed from the system.", KIND.label(), name),
            )
        }
        Ok(None) => return Err(not_found()),
        Err(e) => {
            error!("Failed to remove venue {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                false,
                format!(
                    "An error occurred. {} {} was not removed from the system.",
                    KIND.label(),
                    venue.name
                ),
            )
        }
    };

    let body = Json(json!({
        "success": success,
        "message": message,
    }));
    Ok(with_flash((status, body).into_response(), &message))
}
