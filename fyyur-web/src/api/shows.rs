//! Show handlers

use axum::{body::Bytes, extract::State, http::StatusCode, response::Response};
use fyyur_common::db::shows;
use tracing::{error, info, warn};

use super::{home_with_message, page, page_with_status};
use crate::error::PageError;
use crate::flash::Flash;
use crate::forms::{FieldErrors, FormFields, ShowForm};
use crate::ui;
use crate::AppState;

/// GET /shows
pub async fn list_shows(
    State(state): State<AppState>,
    flash: Flash,
) -> Result<Response, PageError> {
    let shows = shows::list(&state.db).await?;
    Ok(page("Shows", &flash, &ui::shows::index(&shows)))
}

/// GET /shows/create
pub async fn create_show_form(State(state): State<AppState>, flash: Flash) -> Response {
    let form = ShowForm::new(state.clock.as_ref());
    page(
        "New Show",
        &flash,
        &ui::forms::show_form(&form, &FieldErrors::default()),
    )
}

/// POST /shows/create
///
/// Unknown artist or venue ids fail the foreign key and are reported
/// through the error flash.
pub async fn create_show(
    State(state): State<AppState>,
    flash: Flash,
    body: Bytes,
) -> Response {
    let form = ShowForm::from_fields(&FormFields::parse(&body));
    let show = match form.to_show() {
        Ok(show) => show,
        Err(errors) => {
            warn!(
                "Show form rejected: {}",
                errors.fields().copied().collect::<Vec<_>>().join(", ")
            );
            return page_with_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                "New Show",
                &flash,
                &ui::forms::show_form(&form, &errors),
            );
        }
    };

    let message = match shows::insert(&state.db, &show).await {
        Ok(id) => {
            info!(
                "Listed show {} (artist {}, venue {}, {})",
                id, show.artist_id, show.venue_id, show.start_time
            );
            "Show was successfully listed!".to_string()
        }
        Err(e) if e.is_foreign_key_violation() => {
            warn!(
                "Show references unknown artist {} or venue {}",
                show.artist_id, show.venue_id
            );
            "An error occurred. Show could not be listed.".to_string()
        }
        Err(e) => {
            error!("Failed to list show: {}", e);
            "An error occurred. Show could not be listed.".to_string()
        }
    };

    home_with_message(flash, message)
}
