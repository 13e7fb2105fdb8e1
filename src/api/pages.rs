use std::fmt::{self, Write};

use super::models::ResultsView;

const EXAMPLES: [&str; 4] = [
    "need a plumber in Koramangala today",
    "cheap electrician HSR Layout",
    "biryani MG Road late night",
    "24/7 hospital near Indiranagar",
];

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn build_page(title: &str, content: &str) -> Result<String, fmt::Error> {
    let mut page = String::new();
    write!(
        page,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<main>
{content}
</main>
</body>
</html>
"#,
        title = html_escape(title),
    )?;
    Ok(page)
}

pub fn render_home() -> Result<String, fmt::Error> {
    let mut content = String::new();
    writeln!(content, "<h1>Bino Search Helper</h1>")?;
    writeln!(
        content,
        "<p>Describe what you need. We turn it into better hyper-local queries you can send to Bino on WhatsApp.</p>"
    )?;
    writeln!(content, "<h3>Try something like</h3>")?;
    writeln!(content, "<ul class=\"examples\">")?;
    for example in EXAMPLES {
        writeln!(content, "<li>{}</li>", html_escape(example))?;
    }
    writeln!(content, "</ul>")?;
    write!(
        content,
        r#"<form action="/generate" method="get">
<input type="text" name="need" placeholder="e.g. plumber Koramangala urgent" required autofocus>
<button type="submit">Get suggestions</button>
</form>"#
    )?;
    build_page("Bino Search Helper", &content)
}

pub fn render_results(view: &ResultsView) -> Result<String, fmt::Error> {
    let mut content = String::new();
    writeln!(content, "<h1>Suggestions</h1>")?;
    writeln!(
        content,
        "<p>For: <strong>{}</strong></p>",
        html_escape(view.need.as_str())
    )?;
    writeln!(content, "<ol class=\"results\">")?;
    for result in &view.links {
        writeln!(
            content,
            r#"<li><a href="{}" target="_blank" rel="noopener">{}</a></li>"#,
            html_escape(&result.link),
            html_escape(&result.query)
        )?;
    }
    writeln!(content, "</ol>")?;
    write!(content, "<a href=\"/\">Search again</a>")?;
    build_page("Suggestions", &content)
}

/// Bare error fragment, not wrapped in the page layout.
pub fn render_error_fragment(message: &str) -> String {
    format!("<h2>{}</h2><a href='/'>Back</a>", html_escape(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::build_links;
    use crate::need::Need;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_home_has_form_targeting_generate() {
        let page = render_home().unwrap();
        assert!(page.contains(r#"<form action="/generate" method="get">"#));
        assert!(page.contains(r#"name="need""#));
        assert!(page.contains("cheap electrician HSR Layout"));
    }

    #[test]
    fn test_results_escape_need_and_queries() {
        let view = ResultsView {
            need: Need::parse("<script>alert(1)</script>").unwrap(),
            links: build_links(vec!["fish & chips".to_string()]),
        };
        let page = render_results(&view).unwrap();
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains(">fish &amp; chips</a>"));
        assert!(page.contains(r#"href="https://wa.me/919800081110?text=fish+%26+chips""#));
        assert!(page.contains(r#"target="_blank""#));
    }

    #[test]
    fn test_error_fragment_links_home() {
        assert_eq!(
            render_error_fragment("Error: Please enter something!"),
            "<h2>Error: Please enter something!</h2><a href='/'>Back</a>"
        );
    }
}
