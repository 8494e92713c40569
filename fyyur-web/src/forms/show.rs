//! Show form

use fyyur_common::db::NewShow;
use fyyur_common::time::{form_default_start, format_form_datetime, parse_start_time};
use fyyur_common::Clock;

use super::validate::{parse_id, REQUIRED};
use super::{FieldErrors, FormFields};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    /// Blank ids, start time defaulting to now
    pub fn new(clock: &dyn Clock) -> Self {
        Self {
            artist_id: String::new(),
            venue_id: String::new(),
            start_time: format_form_datetime(form_default_start(clock)),
        }
    }

    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            artist_id: fields.text("artist_id"),
            venue_id: fields.text("venue_id"),
            start_time: fields.text("start_time"),
        }
    }

    pub fn to_show(&self) -> Result<NewShow, FieldErrors> {
        let mut errors = FieldErrors::default();

        let artist_id = id_field(&mut errors, "artist_id", &self.artist_id);
        let venue_id = id_field(&mut errors, "venue_id", &self.venue_id);

        let start_time = if self.start_time.is_empty() {
            errors.add("start_time", REQUIRED);
            None
        } else {
            match parse_start_time(&self.start_time) {
                Ok(start_time) => Some(start_time),
                Err(_) => {
                    errors.add("start_time", "Use the format YYYY-MM-DD HH:MM.");
                    None
                }
            }
        };

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) if errors.is_empty() => Ok(NewShow {
                venue_id,
                artist_id,
                start_time,
            }),
            _ => Err(errors),
        }
    }
}

fn id_field(errors: &mut FieldErrors, field: &'static str, value: &str) -> Option<i64> {
    if value.is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    let id = parse_id(value);
    if id.is_none() {
        errors.add(field, "Must be a positive whole number.");
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fyyur_common::FixedClock;

    #[test]
    fn test_default_start_time_is_now() {
        let now = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_milli_opt(20, 15, 30, 250)
            .unwrap();
        let form = ShowForm::new(&FixedClock(now));
        assert_eq!(form.start_time, "2024-06-01 20:15:30");
        assert!(form.artist_id.is_empty());
    }

    #[test]
    fn test_valid_show() {
        let fields = FormFields::parse(b"artist_id=4&venue_id=1&start_time=2035-04-01T20%3A00");
        let show = ShowForm::from_fields(&fields).to_show().expect("Should validate");

        assert_eq!(show.artist_id, 4);
        assert_eq!(show.venue_id, 1);
        assert_eq!(
            show.start_time,
            NaiveDate::from_ymd_opt(2035, 4, 1).unwrap().and_hms_opt(20, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_invalid_show_reports_each_field() {
        let fields = FormFields::parse(b"artist_id=abc&venue_id=&start_time=soon");
        let errors = ShowForm::from_fields(&fields).to_show().unwrap_err();

        assert_eq!(errors.get("artist_id"), ["Must be a positive whole number."]);
        assert_eq!(errors.get("venue_id"), [REQUIRED]);
        assert!(errors.has("start_time"));
    }
}
