//! One-shot flash messages
//!
//! A handler that redirects stores its message in the `fyyur_flash` cookie;
//! the next page rendered shows it and clears the cookie. Handlers that
//! render a page directly pass the message straight to the layout instead.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{
        header::{COOKIE, LOCATION, SET_COOKIE},
        request::Parts,
        HeaderMap, HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
};
use url::form_urlencoded;

pub const FLASH_COOKIE: &str = "fyyur_flash";

/// Flash message pending for the page being rendered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash {
    message: Option<String>,
    from_cookie: bool,
}

impl Flash {
    /// Read the flash cookie from request headers
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let message = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == FLASH_COOKIE)
            .map(|(_, value)| decode(value))
            .filter(|message| !message.is_empty());

        Self {
            from_cookie: message.is_some(),
            message,
        }
    }

    /// Show `message` instead, still clearing the cookie if one was read
    pub fn replace(self, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            from_cookie: self.from_cookie,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True when rendering this flash must also clear the cookie
    pub fn needs_clearing(&self) -> bool {
        self.from_cookie
    }

    /// Attach a cookie-clearing header if this flash came from the cookie
    pub fn consume(&self, response: &mut Response) {
        if self.needs_clearing() {
            if let Ok(value) = HeaderValue::from_str(&clear_cookie()) {
                response.headers_mut().append(SET_COOKIE, value);
            }
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

fn encode(message: &str) -> String {
    form_urlencoded::byte_serialize(message.as_bytes()).collect()
}

fn decode(value: &str) -> String {
    form_urlencoded::parse(format!("m={}", value).as_bytes())
        .next()
        .map(|(_, message)| message.into_owned())
        .unwrap_or_default()
}

/// `Set-Cookie` value storing a flash message
pub fn set_cookie(message: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        FLASH_COOKIE,
        encode(message)
    )
}

/// `Set-Cookie` value removing the flash cookie
pub fn clear_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", FLASH_COOKIE)
}

/// Attach a flash cookie to any response
pub fn with_flash(mut response: Response, message: &str) -> Response {
    if let Ok(value) = HeaderValue::from_str(&set_cookie(message)) {
        response.headers_mut().append(SET_COOKIE, value);
    }
    response
}

/// 303 redirect carrying a flash message
pub fn redirect_with_flash(location: &str, message: &str) -> Response {
    let mut response = StatusCode::SEE_OTHER.into_response();
    if let Ok(value) = HeaderValue::from_str(location) {
        response.headers_mut().insert(LOCATION, value);
    }
    with_flash(response, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_cookie_value_decodes_to_message() {
        let message = "Venue The Musical Hop was successfully updated!";
        let cookie = set_cookie(message);
        let pair = cookie.split(';').next().unwrap();

        let flash = Flash::from_headers(&headers_with_cookie(pair));
        assert_eq!(flash.message(), Some(message));
        assert!(flash.needs_clearing());
    }

    #[test]
    fn test_finds_flash_among_other_cookies() {
        let headers =
            headers_with_cookie("theme=dark; fyyur_flash=Show+was+successfully+listed%21; x=1");
        let flash = Flash::from_headers(&headers);
        assert_eq!(flash.message(), Some("Show was successfully listed!"));
    }

    #[test]
    fn test_no_cookie_no_flash() {
        let flash = Flash::from_headers(&HeaderMap::new());
        assert_eq!(flash.message(), None);
        assert!(!flash.needs_clearing());
    }

    #[test]
    fn test_empty_cookie_is_no_flash() {
        let flash = Flash::from_headers(&headers_with_cookie("fyyur_flash="));
        assert_eq!(flash.message(), None);
    }

    #[test]
    fn test_direct_flash_does_not_clear_cookie() {
        let flash = Flash::default().replace("Artist Matt Quevedo was successfully listed!");
        assert!(flash.message().is_some());
        assert!(!flash.needs_clearing());
    }

    #[test]
    fn test_replace_keeps_cookie_clearing() {
        let flash = Flash::from_headers(&headers_with_cookie("fyyur_flash=old"))
            .replace("Show was successfully listed!");
        assert_eq!(flash.message(), Some("Show was successfully listed!"));
        assert!(flash.needs_clearing());
    }

    #[test]
    fn test_redirect_sets_location_and_cookie() {
        let response = redirect_with_flash("/venues/3", "Venue X was successfully updated!");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/venues/3");
        let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("fyyur_flash=Venue+X+was+successfully+updated%21"));
    }

    #[test]
    fn test_consume_clears_cookie() {
        let flash = Flash::from_headers(&headers_with_cookie("fyyur_flash=hello"));
        let mut response = StatusCode::OK.into_response();
        flash.consume(&mut response);
        let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(cookie.contains("Max-Age=0"));
    }
}
