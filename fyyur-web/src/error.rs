//! Error types for fyyur-web
//!
//! Page handlers fail with [`PageError`], rendered as an HTML error page.
//! The DELETE endpoints are called from script and fail with [`ApiError`],
//! rendered as JSON.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::ui;

/// Error from an HTML page handler
#[derive(Debug, Error)]
pub enum PageError {
    /// Unknown route or record id (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// fyyur-common error (500)
    #[error(transparent)]
    Common(#[from] fyyur_common::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound(_) => {
                (StatusCode::NOT_FOUND, Html(ui::errors::not_found_page())).into_response()
            }
            PageError::Common(err) => {
                error!("Request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(ui::errors::server_error_page()),
                )
                    .into_response()
            }
        }
    }
}

/// Error from a JSON endpoint
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// fyyur-common error
    #[error("Common error: {0}")]
    Common(#[from] fyyur_common::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Common(err) => {
                error!("Request failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = Json(json!({
            "success": false,
            "message": message,
        }));

        (status, body).into_response()
    }
}
