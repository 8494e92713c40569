//! Venue pages

use fyyur_common::db::{Area, Venue, VenueShow};
use fyyur_common::schedule::ShowPartition;
use fyyur_common::time::{format_datetime, DateFormat};

use super::{contact_block, delete_script, escape, genre_list, plural, seeking_block};

/// Venues grouped by city and state
pub fn index(areas: &[Area]) -> String {
    if areas.is_empty() {
        return r#"
    <h1>Venues</h1>
    <p class="muted">No venues listed yet. <a href="/venues/create">Post one</a>.</p>"#
            .to_string();
    }

    let mut html = String::from("\n    <h1>Venues</h1>");
    for area in areas {
        html.push_str(&format!(
            r#"
    <h3>{city}, {state}</h3>
    <ul class="items">"#,
            city = escape(&area.city),
            state = escape(&area.state),
        ));
        for venue in &area.venues {
            html.push_str(&format!(
                r#"
        <li><a href="/venues/{id}">{name}</a> <span class="muted">{upcoming}</span></li>"#,
                id = venue.id,
                name = escape(&venue.name),
                upcoming = plural(venue.num_upcoming_shows, "upcoming show"),
            ));
        }
        html.push_str("\n    </ul>");
    }
    html
}

pub fn detail(venue: &Venue, shows: &ShowPartition<VenueShow>) -> String {
    let location = format!(
        "{}<br>{}, {}",
        escape(&venue.address),
        escape(&venue.city),
        escape(&venue.state)
    );

    format!(
        r#"
    <h1>{name}</h1>
    <p class="muted">ID: {id}</p>
    {genres}
    <p>{location}</p>
    {contact}
    {seeking}
    <img class="profile-image" src="{image}" alt="{name}">
    <p>
        <a class="button" href="/venues/{id}/edit">Edit</a>
        <button class="button danger" id="delete-button" type="button">Delete</button>
    </p>
    <h2>{upcoming_heading}</h2>
    {upcoming}
    <h2>{past_heading}</h2>
    {past}
    {script}"#,
        name = escape(&venue.name),
        id = venue.id,
        genres = genre_list(venue.genres.as_slice()),
        location = location,
        contact = contact_block(
            &venue.phone,
            venue.website_link.as_deref(),
            venue.facebook_link.as_deref()
        ),
        seeking = seeking_block(venue.seeking, "Seeking talent", venue.seeking_message.as_deref()),
        image = escape(&venue.image_link),
        upcoming_heading = plural(shows.upcoming_count() as i64, "Upcoming Show"),
        upcoming = show_cards(&shows.upcoming_shows),
        past_heading = plural(shows.past_count() as i64, "Past Show"),
        past = show_cards(&shows.past_shows),
        script = delete_script("venues", venue.id),
    )
}

fn show_cards(shows: &[VenueShow]) -> String {
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
            <a href="/artists/{id}">{name}</a><br>
            <span class="muted">{when}</span>
        </div>
    </div>"#,
                image = escape(&show.artist_image_link),
                name = escape(&show.artist_name),
                id = show.artist_id,
                when = format_datetime(show.start_time, DateFormat::Full),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fyyur_common::db::Summary;
    use fyyur_common::Genres;

    fn venue() -> Venue {
        Venue {
            id: 1,
            name: "The Musical Hop".to_string(),
            seeking: true,
            seeking_message: Some("We are on the lookout for a local artist".to_string()),
            genres: Genres::parse(r#"{"Jazz","Reggae"}"#),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: "123-123-1234".to_string(),
            website_link: Some("https://www.themusicalhop.com".to_string()),
            image_link: "https://images.example.com/hop.jpg".to_string(),
            facebook_link: None,
        }
    }

    #[test]
    fn test_index_renders_areas() {
        let areas = vec![Area {
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            venues: vec![Summary {
                id: 1,
                name: "The Musical Hop".to_string(),
                num_upcoming_shows: 0,
            }],
        }];
        let html = index(&areas);
        assert!(html.contains("<h3>San Francisco, CA</h3>"));
        assert!(html.contains(r#"<a href="/venues/1">The Musical Hop</a>"#));
        assert!(html.contains("0 upcoming shows"));
    }

    #[test]
    fn test_index_empty() {
        assert!(index(&[]).contains("No venues listed yet"));
    }

    #[test]
    fn test_detail_formats_show_times() {
        let start = NaiveDate::from_ymd_opt(2019, 5, 21)
            .unwrap()
            .and_hms_opt(21, 30, 0)
            .unwrap();
        let shows = ShowPartition {
            upcoming_shows: Vec::new(),
            past_shows: vec![VenueShow {
                artist_id: 4,
                artist_name: "Guns N Petals".to_string(),
                artist_image_link: "https://images.example.com/gnp.jpg".to_string(),
                start_time: start,
            }],
        };

        let html = detail(&venue(), &shows);
        assert!(html.contains("Tuesday May, 21, 2019 at 9:30PM"));
        assert!(html.contains("1 Past Show<"));
        assert!(html.contains("0 Upcoming Shows"));
        assert!(html.contains(r#"<a href="/artists/4">Guns N Petals</a>"#));
        assert!(html.contains("<span>Jazz</span>"));
        assert!(html.contains("Seeking talent"));
        assert!(html.contains(r#"href="/venues/1/edit""#));
    }
}
