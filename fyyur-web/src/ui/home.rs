//! Landing page

pub const TITLE: &str = "Home";

pub fn home() -> String {
    r#"
    <h1>Fyyur</h1>
    <p>Find venues and artists, and book the next show.</p>
    <p>
        <a class="button" href="/venues/create">Post a venue</a>
        <a class="button" href="/artists/create">Post an artist</a>
        <a class="button" href="/shows/create">Post a show</a>
    </p>
    <ul class="items">
        <li><a href="/venues">Browse venues by city</a></li>
        <li><a href="/artists">Browse artists</a></li>
        <li><a href="/shows">See all shows</a></li>
    </ul>"#
        .to_string()
}
