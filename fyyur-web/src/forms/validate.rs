//! Field validators shared by the venue, artist and show forms

use url::Url;

pub const REQUIRED: &str = "This field is required.";

/// Two-letter state codes offered by the state select
pub const US_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

pub const MAX_NAME_LEN: usize = 120;
pub const MAX_LINK_LEN: usize = 500;
pub const MAX_SEEKING_MESSAGE_LEN: usize = 500;

pub fn is_us_state(code: &str) -> bool {
    US_STATES.contains(&code)
}

/// Absolute http(s) URL with a host
pub fn is_web_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}

/// Ten digits, allowing `-`, `.`, spaces and parentheses as separators
pub fn is_phone_number(value: &str) -> bool {
    let mut digits = 0;
    for c in value.chars() {
        match c {
            '0'..='9' => digits += 1,
            '-' | '.' | ' ' | '(' | ')' => {}
            _ => return false,
        }
    }
    digits == 10
}

/// Parse the `seeking` select; absent means "No"
pub fn parse_yes_no(value: &str) -> Option<bool> {
    match value {
        "Yes" => Some(true),
        "No" | "" => Some(false),
        _ => None,
    }
}

/// Positive integer record id
pub fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().filter(|id| *id > 0)
}
