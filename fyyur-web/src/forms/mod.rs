//! Form binding and validation
//!
//! Request bodies are `application/x-www-form-urlencoded`. Multi-selects
//! (genres) repeat the field name, so the body is parsed into ordered pairs
//! rather than a map.

use std::collections::BTreeMap;

use url::form_urlencoded;

mod profile;
mod show;
pub mod validate;

pub use profile::{ProfileForm, ProfileKind};
pub use show::ShowForm;

/// Parsed urlencoded form body
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    pub fn parse(body: &[u8]) -> Self {
        Self {
            pairs: form_urlencoded::parse(body).into_owned().collect(),
        }
    }

    /// First value of a field, trimmed; empty when absent
    pub fn text(&self, name: &str) -> String {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.trim().to_string())
            .unwrap_or_default()
    }

    /// Every non-empty value of a repeated field, in submission order
    pub fn all(&self, name: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .collect()
    }
}

/// Validation messages keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &&'static str> {
        self.0.keys()
    }

    /// Ok when nothing was reported
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Blank text becomes None
pub(crate) fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repeated_fields() {
        let fields = FormFields::parse(b"name=The+Hop&genres=Jazz&genres=R%26B&genres=");
        assert_eq!(fields.text("name"), "The Hop");
        assert_eq!(fields.all("genres"), vec!["Jazz", "R&B"]);
    }

    #[test]
    fn test_missing_field_is_empty() {
        let fields = FormFields::parse(b"");
        assert_eq!(fields.text("name"), "");
        assert!(fields.all("genres").is_empty());
    }

    #[test]
    fn test_text_is_trimmed() {
        let fields = FormFields::parse(b"city=++Austin++");
        assert_eq!(fields.text("city"), "Austin");
    }

    #[test]
    fn test_field_errors_collects_per_field() {
        let mut errors = FieldErrors::default();
        assert!(errors.clone().into_result(()).is_ok());

        errors.add("name", "This field is required.");
        errors.add("name", "Too long.");
        errors.add("phone", "Invalid phone number.");

        assert_eq!(errors.get("name").len(), 2);
        assert!(errors.has("phone"));
        assert!(errors.get("city").is_empty());
        assert_eq!(errors.fields().count(), 2);
        assert!(errors.into_result(()).is_err());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(" x "), Some("x".to_string()));
    }
}
