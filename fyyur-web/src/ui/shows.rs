//! All-shows listing

use fyyur_common::db::ShowListing;
use fyyur_common::time::{format_datetime, DateFormat};

use super::escape;

pub fn index(shows: &[ShowListing]) -> String {
    if shows.is_empty() {
        return r#"
    <h1>Shows</h1>
    <p class="muted">No shows listed yet. <a href="/shows/create">Post one</a>.</p>"#
            .to_string();
    }

    let cards: String = shows
        .iter()
        .map(|show| {
            format!(
                r#"
    <div class="show-card">
        <img src="{image}" alt="{artist}">
        <div>
            <span class="muted">{when}</span><br>
            <a href="/artists/{artist_id}">{artist}</a> playing at
            <a href="/venues/{venue_id}">{venue}</a>
        </div>
    </div>"#,
                image = escape(&show.artist_image_link),
                artist = escape(&show.artist_name),
                artist_id = show.artist_id,
                venue = escape(&show.venue_name),
                venue_id = show.venue_id,
                when = format_datetime(show.start_time, DateFormat::Medium),
            )
        })
        .collect();

    format!("\n    <h1>Shows</h1>{}", cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_index_uses_medium_format() {
        let html = index(&[ShowListing {
            id: 1,
            venue_id: 1,
            venue_name: "The Musical Hop".to_string(),
            artist_id: 4,
            artist_name: "Guns N Petals".to_string(),
            artist_image_link: "https://images.example.com/gnp.jpg".to_string(),
            start_time: NaiveDate::from_ymd_opt(2019, 5, 21)
                .unwrap()
                .and_hms_opt(21, 30, 0)
                .unwrap(),
        }]);
        assert!(html.contains("Tue 05, 21, 2019 9:30PM"));
        assert!(html.contains(r#"<a href="/venues/1">The Musical Hop</a>"#));
    }

    #[test]
    fn test_index_empty() {
        assert!(index(&[]).contains("No shows listed yet"));
    }
}
