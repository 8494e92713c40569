//! Venue and artist forms
//!
//! Both records share one field set; venues add a street address.

use fyyur_common::db::{Artist, NewArtist, NewVenue, Venue};
use fyyur_common::genres::{is_known_genre, Genres};

use super::validate::{
    is_phone_number, is_us_state, is_web_url, parse_yes_no, MAX_LINK_LEN, MAX_NAME_LEN,
    MAX_SEEKING_MESSAGE_LEN, REQUIRED,
};
use super::{non_empty, FieldErrors, FormFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    Venue,
    Artist,
}

impl ProfileKind {
    /// "Venue" / "Artist", as used in flash messages
    pub fn label(self) -> &'static str {
        match self {
            ProfileKind::Venue => "Venue",
            ProfileKind::Artist => "Artist",
        }
    }

    /// URL path segment
    pub fn collection(self) -> &'static str {
        match self {
            ProfileKind::Venue => "venues",
            ProfileKind::Artist => "artists",
        }
    }

    /// Caption for the seeking select
    pub fn seeking_label(self) -> &'static str {
        match self {
            ProfileKind::Venue => "Seeking Talent",
            ProfileKind::Artist => "Seeking Venue",
        }
    }
}

/// Raw field values as submitted or pre-populated
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileForm {
    pub kind: ProfileKind,
    pub name: String,
    pub city: String,
    pub state: String,
    /// Venues only
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub website_link: String,
    pub image_link: String,
    pub facebook_link: String,
    /// `Yes` or `No`
    pub seeking: String,
    pub seeking_message: String,
}

impl ProfileForm {
    pub fn empty(kind: ProfileKind) -> Self {
        Self {
            kind,
            name: String::new(),
            city: String::new(),
            state: String::new(),
            address: String::new(),
            phone: String::new(),
            genres: Vec::new(),
            website_link: String::new(),
            image_link: String::new(),
            facebook_link: String::new(),
            seeking: "No".to_string(),
            seeking_message: String::new(),
        }
    }

    pub fn from_fields(kind: ProfileKind, fields: &FormFields) -> Self {
        Self {
            kind,
            name: fields.text("name"),
            city: fields.text("city"),
            state: fields.text("state"),
            address: if kind == ProfileKind::Venue {
                fields.text("address")
            } else {
                String::new()
            },
            phone: fields.text("phone"),
            genres: fields.all("genres"),
            website_link: fields.text("website_link"),
            image_link: fields.text("image_link"),
            facebook_link: fields.text("facebook_link"),
            seeking: fields.text("seeking"),
            seeking_message: fields.text("seeking_message"),
        }
    }

    pub fn from_venue(venue: &Venue) -> Self {
        Self {
            kind: ProfileKind::Venue,
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            genres: venue.genres.as_slice().to_vec(),
            website_link: venue.website_link.clone().unwrap_or_default(),
            image_link: venue.image_link.clone(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            seeking: yes_no(venue.seeking),
            seeking_message: venue.seeking_message.clone().unwrap_or_default(),
        }
    }

    pub fn from_artist(artist: &Artist) -> Self {
        Self {
            kind: ProfileKind::Artist,
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            address: String::new(),
            phone: artist.phone.clone(),
            genres: artist.genres.as_slice().to_vec(),
            website_link: artist.website_link.clone().unwrap_or_default(),
            image_link: artist.image_link.clone(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            seeking: yes_no(artist.seeking),
            seeking_message: artist.seeking_message.clone().unwrap_or_default(),
        }
    }

    /// Check every field, reporting all problems at once
    pub fn check(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.name.is_empty() {
            errors.add("name", REQUIRED);
        } else if self.name.chars().count() > MAX_NAME_LEN {
            errors.add("name", format!("Must be at most {} characters.", MAX_NAME_LEN));
        }

        if self.city.is_empty() {
            errors.add("city", REQUIRED);
        }

        if self.state.is_empty() {
            errors.add("state", REQUIRED);
        } else if !is_us_state(&self.state) {
            errors.add("state", "Not a valid choice.");
        }

        if self.kind == ProfileKind::Venue && self.address.is_empty() {
            errors.add("address", REQUIRED);
        }

        if self.phone.is_empty() {
            errors.add("phone", REQUIRED);
        } else if !is_phone_number(&self.phone) {
            errors.add("phone", "Invalid phone number.");
        }

        if self.genres.is_empty() {
            errors.add("genres", REQUIRED);
        }
        for genre in &self.genres {
            if !is_known_genre(genre) {
                errors.add("genres", format!("'{}' is not a valid choice.", genre));
            }
        }

        if self.image_link.is_empty() {
            errors.add("image_link", REQUIRED);
        }
        for (field, value) in [
            ("image_link", &self.image_link),
            ("website_link", &self.website_link),
            ("facebook_link", &self.facebook_link),
        ] {
            if value.is_empty() {
                continue;
            }
            if value.len() > MAX_LINK_LEN || !is_web_url(value) {
                errors.add(field, "Invalid URL.");
            }
        }

        if parse_yes_no(&self.seeking).is_none() {
            errors.add("seeking", "Not a valid choice.");
        }

        if self.seeking_message.chars().count() > MAX_SEEKING_MESSAGE_LEN {
            errors.add(
                "seeking_message",
                format!("Must be at most {} characters.", MAX_SEEKING_MESSAGE_LEN),
            );
        }

        errors
    }

    pub fn to_venue(&self) -> Result<NewVenue, FieldErrors> {
        self.check().into_result(NewVenue {
            name: self.name.clone(),
            seeking: self.seeking_flag(),
            seeking_message: non_empty(&self.seeking_message),
            genres: Genres::from(self.genres.clone()),
            city: self.city.clone(),
            state: self.state.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            website_link: non_empty(&self.website_link),
            image_link: self.image_link.clone(),
            facebook_link: non_empty(&self.facebook_link),
        })
    }

    pub fn to_artist(&self) -> Result<NewArtist, FieldErrors> {
        self.check().into_result(NewArtist {
            name: self.name.clone(),
            seeking: self.seeking_flag(),
            seeking_message: non_empty(&self.seeking_message),
            genres: Genres::from(self.genres.clone()),
            city: self.city.clone(),
            state: self.state.clone(),
            phone: self.phone.clone(),
            website_link: non_empty(&self.website_link),
            image_link: self.image_link.clone(),
            facebook_link: non_empty(&self.facebook_link),
        })
    }

    fn seeking_flag(&self) -> bool {
        parse_yes_no(&self.seeking).unwrap_or(false)
    }
}

fn yes_no(flag: bool) -> String {
    let value = if flag { "Yes" } else { "No" };
    value.to_string()
}
