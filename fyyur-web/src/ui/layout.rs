//! Document shell shared by every page

use super::escape;

const STYLES: &str = r#"
        * { box-sizing: border-box; }
        body {
            margin: 0;
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            line-height: 1.6;
        }
        a { color: #4a9eff; }
        header {
            background-color: #2a2a2a;
            border-bottom: 1px solid #3a3a3a;
            padding: 12px 20px;
            display: flex;
            flex-wrap: wrap;
            gap: 16px;
            align-items: center;
        }
        header .brand { font-size: 22px; font-weight: 600; text-decoration: none; }
        header nav a { margin-right: 12px; text-decoration: none; }
        header form { display: inline-flex; gap: 4px; }
        main { padding: 20px; max-width: 960px; }
        h1, h2, h3 { color: #4a9eff; }
        .flash {
            background: #10b981;
            color: #fff;
            padding: 10px 20px;
        }
        .muted { color: #888; }
        .items { list-style: none; padding: 0; }
        .items li { padding: 6px 0; border-bottom: 1px solid #2a2a2a; }
        .genres span {
            display: inline-block;
            padding: 2px 8px;
            margin: 2px;
            border-radius: 10px;
            background: #2a2a2a;
        }
        .seeking { border-left: 3px solid #f59e0b; padding-left: 10px; }
        .show-card { display: flex; gap: 12px; align-items: center; padding: 8px 0; }
        .show-card img, .avatar { width: 64px; height: 64px; object-fit: cover; border-radius: 4px; }
        .profile-image { max-width: 100%; max-height: 320px; border-radius: 4px; }
        .button {
            display: inline-block;
            padding: 8px 16px;
            background: #4a9eff;
            color: #fff;
            border: none;
            border-radius: 4px;
            text-decoration: none;
            font-weight: 600;
            cursor: pointer;
        }
        .button.danger { background: #ef4444; }
        .form-field { margin-bottom: 12px; }
        .form-field label { display: block; font-weight: 600; }
        .form-field input, .form-field select, .form-field textarea { width: 100%; padding: 6px; }
        .form-field .error { color: #ef4444; font-size: 14px; }
"#;

/// Full HTML document around `body`
pub fn layout(title: &str, flash: Option<&str>, body: &str) -> String {
    let flash_html = flash
        .map(|message| format!(r#"<div class="flash" role="status">{}</div>"#, escape(message)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Fyyur</title>
    <style>{styles}</style>
</head>
<body>
    <header>
        <a class="brand" href="/">Fyyur</a>
        <nav>
            <a href="/venues">Venues</a>
            <a href="/artists">Artists</a>
            <a href="/shows">Shows</a>
        </nav>
        <form method="post" action="/venues/search">
            <input type="search" name="search_term" placeholder="Find a venue" aria-label="Search venues">
        </form>
        <form method="post" action="/artists/search">
            <input type="search" name="search_term" placeholder="Find an artist" aria-label="Search artists">
        </form>
    </header>
    {flash}
    <main>{body}
    </main>
</body>
</html>
"#,
        title = escape(title),
        styles = STYLES,
        flash = flash_html,
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_includes_flash_and_search() {
        let html = layout("Venues", Some("Venue <X> was successfully listed!"), "<p>hi</p>");
        assert!(html.contains("<title>Venues | Fyyur</title>"));
        assert!(html.contains("Venue &lt;X&gt; was successfully listed!"));
        assert!(html.contains(r#"action="/venues/search""#));
        assert!(html.contains(r#"action="/artists/search""#));
        assert!(html.contains("<p>hi</p>"));
    }

    #[test]
    fn test_layout_without_flash() {
        let html = layout("Home", None, "");
        assert!(!html.contains(r#"class="flash""#));
    }
}
