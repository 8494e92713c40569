//! HTML rendering
//!
//! Pages are built with `format!` around one shared layout. Every value
//! that came from the database or the request goes through [`escape`].
//!
//! - **Layout** (`layout`): document shell, navigation, search boxes, flash
//! - **Home** (`home`): landing page
//! - **Venues** (`venues`) / **Artists** (`artists`): listings and detail pages
//! - **Shows** (`shows`): all-shows listing
//! - **Forms** (`forms`): create/edit forms
//! - **Errors** (`errors`): 404 and 500 pages

pub mod artists;
pub mod errors;
pub mod forms;
pub mod home;
pub mod layout;
pub mod shows;
pub mod venues;

pub use layout::layout;

use fyyur_common::db::SearchResults;

/// Escape text for HTML element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// "1 upcoming show" / "3 upcoming shows"
pub(crate) fn plural(count: i64, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Genre tags
pub(crate) fn genre_list(genres: &[String]) -> String {
    let tags: String = genres
        .iter()
        .map(|genre| format!("<span>{}</span>", escape(genre)))
        .collect();
    format!(r#"<p class="genres">{}</p>"#, tags)
}

/// Phone plus the optional website and facebook links
pub(crate) fn contact_block(phone: &str, website: Option<&str>, facebook: Option<&str>) -> String {
    let mut html = format!("<p>Phone: {}</p>", escape(phone));
    for (label, link) in [("Website", website), ("Facebook", facebook)] {
        if let Some(link) = link {
            html.push_str(&format!(
                r#"
    <p>{label}: <a href="{href}">{href}</a></p>"#,
                label = label,
                href = escape(link),
            ));
        }
    }
    html
}

pub(crate) fn seeking_block(seeking: bool, caption: &str, message: Option<&str>) -> String {
    if !seeking {
        return format!(r#"<p class="muted">Not currently {}</p>"#, caption.to_lowercase());
    }
    format!(
        r#"<div class="seeking"><strong>{caption}</strong><p>{message}</p></div>"#,
        caption = escape(caption),
        message = escape(message.unwrap_or_default()),
    )
}

/// Delete button handler: DELETE the record, then go home where the flash
/// cookie set by the response is shown
pub(crate) fn delete_script(collection: &str, id: i64) -> String {
    format!(
        r#"<script>
    document.getElementById('delete-button').addEventListener('click', function () {{
        if (!confirm('Delete this record and all of its shows?')) {{
            return;
        }}
        fetch('/{collection}/{id}', {{ method: 'DELETE' }})
            .then(function (response) {{ return response.json(); }})
            .then(function (body) {{
                if (!body.success) {{
                    alert(body.message);
                }}
                window.location = '/';
            }})
            .catch(function () {{ alert('Delete failed.'); }});
    }});
    </script>"#,
        collection = collection,
        id = id,
    )
}

/// Search results body shared by venue and artist search
pub fn search_results(collection: &str, search_term: &str, results: &SearchResults) -> String {
    let items: String = results
        .data
        .iter()
        .map(|hit| {
            format!(
                r#"
        <li><a href="/{collection}/{id}">{name}</a> <span class="muted">{upcoming}</span></li>"#,
                collection = collection,
                id = hit.id,
                name = escape(&hit.name),
                upcoming = plural(hit.num_upcoming_shows, "upcoming show"),
            )
        })
        .collect();

    format!(
        r#"
    <h2>Number of search results for "{term}": {count}</h2>
    <ul class="items">{items}
    </ul>"#,
        term = escape(search_term),
        count = results.count,
        items = items,
    )
}
