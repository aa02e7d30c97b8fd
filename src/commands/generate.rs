//! Generate build artifacts

use anyhow::Result;
use std::fs;

use crate::contentful::EntrySource;
use crate::manifest::Manifest;
use crate::routes::get_all_routes;
use crate::{sitemap, Prerender};

/// Enumerate routes and write routes.json, sitemap.xml, manifest.json and
/// head.json into the public directory
pub async fn run<S: EntrySource>(app: &Prerender, source: &S) -> Result<()> {
    let start = std::time::Instant::now();

    let routes = get_all_routes(source, &app.contentful.content_types).await?;
    tracing::info!("Enumerated {} routes", routes.len());

    fs::create_dir_all(&app.public_dir)?;

    // Route list consumed by the static-site generator
    let routes_json = serde_json::to_string_pretty(&routes)?;
    fs::write(app.public_dir.join("routes.json"), routes_json)?;
    tracing::debug!("Generated routes.json");

    // Sitemap
    let hostname = if app.config.sitemap.hostname.is_empty() {
        &app.config.url
    } else {
        &app.config.sitemap.hostname
    };
    let xml = sitemap::render(hostname, &app.config.sitemap.exclude, &routes);
    fs::write(app.public_dir.join("sitemap.xml"), xml)?;
    tracing::debug!("Generated sitemap.xml");

    // Web-app manifest
    let manifest = Manifest::from_config(&app.config.manifest);
    fs::write(app.public_dir.join("manifest.json"), manifest.to_json()?)?;
    tracing::debug!("Generated manifest.json");

    // Head metadata for the downstream generator's page templates
    let head = head_metadata(app);
    fs::write(
        app.public_dir.join("head.json"),
        serde_json::to_string_pretty(&head)?,
    )?;
    tracing::debug!("Generated head.json");

    tracing::info!("Generated in {:.2}s", start.elapsed().as_secs_f64());

    Ok(())
}

fn head_metadata(app: &Prerender) -> serde_json::Value {
    serde_json::json!({
        "title": app.config.title,
        "lang": app.config.lang,
        "theme_color": app.config.theme_color,
        "og_image": app.config.og_image,
        "dns_prefetch": app.config.dns_prefetch,
        "feeds": app.config.feeds,
        "google_analytics": app.config.google_analytics,
    })
}
