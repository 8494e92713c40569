//! Create and edit forms
//!
//! Submitted values are echoed back into the inputs so a form that fails
//! validation re-renders with what the user typed and the errors beside
//! each field.

use fyyur_common::genres::GENRE_CHOICES;

use super::escape;
use crate::forms::validate::US_STATES;
use crate::forms::{FieldErrors, ProfileForm, ProfileKind, ShowForm};

/// Venue or artist form posting to `action`
pub fn profile_form(
    form: &ProfileForm,
    errors: &FieldErrors,
    action: &str,
    heading: &str,
) -> String {
    let mut fields = String::new();

    fields.push_str(&text_input("name", "Name", &form.name, errors));
    fields.push_str(&text_input("city", "City", &form.city, errors));
    fields.push_str(&select(
        "state",
        "State",
        US_STATES,
        |code| code == form.state,
        false,
        errors,
    ));
    if form.kind == ProfileKind::Venue {
        fields.push_str(&text_input("address", "Address", &form.address, errors));
    }
    fields.push_str(&text_input("phone", "Phone", &form.phone, errors));
    fields.push_str(&text_input("image_link", "Image Link", &form.image_link, errors));
    fields.push_str(&select(
        "genres",
        "Genres",
        GENRE_CHOICES,
        |genre| form.genres.iter().any(|chosen| chosen == genre),
        true,
        errors,
    ));
    fields.push_str(&text_input("facebook_link", "Facebook Link", &form.facebook_link, errors));
    fields.push_str(&text_input("website_link", "Website Link", &form.website_link, errors));
    fields.push_str(&select(
        "seeking",
        form.kind.seeking_label(),
        &["Yes", "No"],
        |choice| choice == form.seeking,
        false,
        errors,
    ));
    fields.push_str(&textarea(
        "seeking_message",
        "Seeking Description",
        &form.seeking_message,
        errors,
    ));

    form_shell(heading, action, &fields)
}

/// Show form
pub fn show_form(form: &ShowForm, errors: &FieldErrors) -> String {
    let mut fields = String::new();
    fields.push_str(&text_input("artist_id", "Artist ID", &form.artist_id, errors));
    fields.push_str(&text_input("venue_id", "Venue ID", &form.venue_id, errors));
    fields.push_str(&text_input("start_time", "Start Time", &form.start_time, errors));
    form_shell("List a new show", "/shows/create", &fields)
}

fn form_shell(heading: &str, action: &str, fields: &str) -> String {
    format!(
        r#"
    <h1>{heading}</h1>
    <form method="post" action="{action}">{fields}
        <button class="button" type="submit">Submit</button>
    </form>"#,
        heading = escape(heading),
        action = escape(action),
        fields = fields,
    )
}

fn field_errors(name: &str, errors: &FieldErrors) -> String {
    errors
        .get(name)
        .iter()
        .map(|message| format!(r#"<div class="error">{}</div>"#, escape(message)))
        .collect()
}

fn text_input(name: &str, label: &str, value: &str, errors: &FieldErrors) -> String {
    format!(
        r#"
        <div class="form-field">
            <label for="{name}">{label}</label>
            <input type="text" id="{name}" name="{name}" value="{value}">
            {errors}
        </div>"#,
        name = name,
        label = escape(label),
        value = escape(value),
        errors = field_errors(name, errors),
    )
}

fn textarea(name: &str, label: &str, value: &str, errors: &FieldErrors) -> String {
    format!(
        r#"
        <div class="form-field">
            <label for="{name}">{label}</label>
            <textarea id="{name}" name="{name}" rows="3">{value}</textarea>
            {errors}
        </div>"#,
        name = name,
        label = escape(label),
        value = escape(value),
        errors = field_errors(name, errors),
    )
}

fn select(
    name: &str,
    label: &str,
    choices: &[&str],
    selected: impl Fn(&str) -> bool,
    multiple: bool,
    errors: &FieldErrors,
) -> String {
    let options: String = choices
        .iter()
        .map(|choice| {
            format!(
                r#"<option value="{value}"{selected}>{value}</option>"#,
                value = escape(choice),
                selected = if selected(*choice) { " selected" } else { "" },
            )
        })
        .collect();

    format!(
        r#"
        <div class="form-field">
            <label for="{name}">{label}</label>
            <select id="{name}" name="{name}"{multiple}>{blank}{options}</select>
            {errors}
        </div>"#,
        name = name,
        label = escape(label),
        multiple = if multiple { " multiple" } else { "" },
        blank = if multiple { "" } else { r#"<option value=""></option>"# },
        options = options,
        errors = field_errors(name, errors),
    )
}
