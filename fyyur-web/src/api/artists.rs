//! Artist handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fyyur_common::db::artists;
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

const KIND: ProfileKind = ProfileKind::Artist;

/// GET /artists
pub async fn list_artists(
    State(state): State<AppState>,
    flash: Flash,
) -> Result<Response, PageError> {
    let artists = artists::list(&state.db).await?;
    Ok(page("Artists", &flash, &ui::artists::index(&artists)))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    flash: Flash,
    body: Bytes,
) -> Result<Response, PageError> {
    let search_term = FormFields::parse(&body).text("search_term");
    let results = artists::search(&state.db, &search_term, state.now()).await?;
    Ok(page(
        "Artist Search",
        &flash,
        &ui::search_results(KIND.collection(), &search_term, &results),
    ))
}

/// GET /artists/:artist_id
pub async fn show_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    flash: Flash,
) -> Result<Response, PageError> {
    let id = record_id(&artist_id, KIND.label())?;
    let artist = artists::get(&state.db, id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("{} {}", KIND.label(), id)))?;
    let shows = partition(artists::shows(&state.db, id).await?, state.now());

    Ok(page(&artist.name, &flash, &ui::artists::detail(&artist, &shows)))
}

/// GET /artists/create
pub async fn create_artist_form(flash: Flash) -> Response {
    let form = ProfileForm::empty(KIND);
    profile_form_page(StatusCode::OK, &flash, &form, &FieldErrors::default(), None)
}

/// POST /artists/create
pub async fn create_artist(
    State(state): State<AppState>,
    flash: Flash,
    body: Bytes,
) -> Response {
    let form = ProfileForm::from_fields(KIND, &FormFields::parse(&body));
    let artist = match form.to_artist() {
        Ok(artist) => artist,
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

    let message = match artists::insert(&state.db, &artist).await {
        Ok(id) => {
            info!("Listed artist {} ({})", id, artist.name);
            format!("{} {} was successfully listed!", KIND.label(), artist.name)
        }
        Err(e) => {
            error!("Failed to list artist {}: {}", artist.name, e);
            format!(
                "An error occurred. {} {} could not be listed.",
                KIND.label(),
                artist.name
            )
        }
    };

    home_with_message(flash, message)
}

/// GET /artists/:artist_id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    flash: Flash,
) -> Result<Response, PageError> {
    let id = record_id(&artist_id, KIND.label())?;
    let artist = artists::get(&state.db, id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("{} {}", KIND.label(), id)))?;

    let form = ProfileForm::from_artist(&artist);
    Ok(profile_form_page(StatusCode::OK, &flash, &form, &FieldErrors::default(), Some(id)))
}

/// POST /artists/:artist_id/edit
pub async fn edit_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    flash: Flash,
    body: Bytes,
) -> Result<Response, PageError> {
    let id = record_id(&artist_id, KIND.label())?;
    if artists::get(&state.db, id).await?.is_none() {
        return Err(PageError::NotFound(format!("{} {}", KIND.label(), id)));
    }

    let form = ProfileForm::from_fields(KIND, &FormFields::parse(&body));
    let artist = match form.to_artist() {
        Ok(artist) => artist,
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

    let message = match artists::update(&state.db, id, &artist).await {
        Ok(true) => {
            info!("Updated artist {} ({})", id, artist.name);
            format!("{} {} was successfully updated!", KIND.label(), artist.name)
        }
        Ok(false) => return Err(PageError::NotFound(format!("{} {}", KIND.label(), id))),
        Err(e) => {
            error!("Failed to update artist {}: {}", id, e);
            format!(
                "An error occurred. {} {} could not be updated.",
                KIND.label(),
                artist.name
            )
        }
    };

    Ok(redirect_with_flash(&format!("/{}/{}", KIND.collection(), id), &message))
}

/// DELETE /artists/:artist_id
///
/// Removes the artist and its shows; the message doubles as the next flash.
pub async fn delete_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
) -> Result<Response, ApiError> {
    let not_found = || ApiError::NotFound(format!("{} {} not found", KIND.label(), artist_id));
    let id = parse_id(&artist_id).ok_or_else(not_found)?;

    let artist = artists::get(&state.db, id).await?.ok_or_else(not_found)?;

    let (status, success, message) = match artists::delete(&state.db, id).await {
        Ok(Some(name)) => {
            info!("Removed artist {} ({})", id, name);
            (
                StatusCode::OK,
                true,
                format!("{} {} was successfully removed from the system.", KIND.label(), name),
            )
        }
        Ok(None) => return Err(not_found()),
        Err(e) => {
            error!("Failed to remove artist {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                false,
                format!(
                    "An error occurred. {} {} was not removed from the system.",
                    KIND.label(),
                    artist.name
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
