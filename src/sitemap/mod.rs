//! Sitemap generation
//!
//! Renders sitemap.xml from the enumerated route list, one `<url>` per
//! route, prefixed with the site hostname. Excluded routes (the 404 page)
//! are skipped.

/// Render sitemap.xml for the given routes
pub fn render(hostname: &str, exclude: &[String], routes: &[String]) -> String {
    let hostname = hostname.trim_end_matches('/');
    let lastmod = chrono::Utc::now().format("%Y-%m-%d").to_string();

    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');

    for route in routes {
        if exclude.iter().any(|e| e == route) {
            continue;
        }

        xml.push_str("  <url>\n");
        xml.push_str(&format!(
            "    <loc>{}{}</loc>\n",
            escape_xml(hostname),
            escape_xml(route)
        ));
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Escape XML special characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
