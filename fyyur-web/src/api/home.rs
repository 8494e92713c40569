//! Home page

use axum::response::Response;

use super::page;
use crate::flash::Flash;
use crate::ui;

pub use crate::ui::home::TITLE;

/// GET /
pub async fn index(flash: Flash) -> Response {
    page(TITLE, &flash, &ui::home::home())
}
