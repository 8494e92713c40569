//! Artist pages

use fyyur_common::db::{Artist, ArtistEntry, ArtistShow};
use fyyur_common::schedule::ShowPartition;
use fyyur_common::time::{format_datetime, DateFormat};

use super::{contact_block, delete_script, escape, genre_list, plural, seeking_block};

pub fn index(artists: &[ArtistEntry]) -> String {
    if artists.is_empty() {
        return r#"
    <h1>Artists</h1>
    <p class="muted">No artists listed yet. <a href="/artists/create">Post one</a>.</p>"#
            .to_string();
    }

    let items: String = artists
        .iter()
        .map(|artist| {
            format!(
                r#"
        <li><a href="/artists/{id}">{name}</a></li>"#,
                id = artist.id,
                name = escape(&artist.name),
            )
        })
        .collect();

    format!(
        r#"
    <h1>Artists</h1>
    <ul class="items">{}
    </ul>"#,
        items
    )
}

pub fn detail(artist: &Artist, shows: &ShowPartition<ArtistShow>) -> String {
    format!(
        r#"
    <h1>{name}</h1>
    <p class="muted">ID: {id}</p>
    {genres}
    <p>{city}, {state}</p>
    {contact}
    {seeking}
    <img class="profile-image" src="{image}" alt="{name}">
    <p>
        <a class="button" href="/artists/{id}/edit">Edit</a>
        <button class="button danger" id="delete-button" type="button">Delete</button>
    </p>
    <h2>{upcoming_heading}</h2>
    {upcoming}
    <h2>{past_heading}</h2>
    {past}
    {script}"#,
        name = escape(&artist.name),
        id = artist.id,
        genres = genre_list(artist.genres.as_slice()),
        city = escape(&artist.city),
        state = escape(&artist.state),
        contact = contact_block(
            &artist.phone,
            artist.website_link.as_deref(),
            artist.facebook_link.as_deref()
        ),
        seeking = seeking_block(
            artist.seeking,
            "Seeking venues",
            artist.seeking_message.as_deref()
        ),
        image = escape(&artist.image_link),
        upcoming_heading = plural(shows.upcoming_count() as i64, "Upcoming Show"),
        upcoming = show_cards(&shows.upcoming_shows),
        past_heading = plural(shows.past_count() as i64, "Past Show"),
        past = show_cards(&shows.past_shows),
        script = delete_script("artists", artist.id),
    )
}

fn show_cards(shows: &[ArtistShow]) -> String {
    if shows.is_empty() {
        return r#"<p class="muted">None</p>"#.to_string();
    }
    shows
        .iter()
        .map(|show| {
            format!(
                r#"
    <div class="show-card">
        <img src="{image}" alt="{name}">
        <div>
            <a href="/venues/{id}">{name}</a><br>
            <span class="muted">{when}</span>
        </div>
    </div>"#,
                image = escape(&show.venue_image_link),
                name = escape(&show.venue_name),
                id = show.venue_id,
                when = format_datetime(show.start_time, DateFormat::Full),
            )
        })
        .collect()
}
