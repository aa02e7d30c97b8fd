//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub lang: String,
    pub url: String,

    // Head
    pub theme_color: String,
    pub og_image: String,
    pub dns_prefetch: Vec<String>,
    pub feeds: Vec<FeedLink>,
    pub google_analytics: Option<String>,

    // Directory
    pub public_dir: String,

    // Artifacts
    #[serde(default)]
    pub manifest: ManifestConfig,
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Site".to_string(),
            lang: "en".to_string(),
            url: "https://example.com".to_string(),

            theme_color: "#ffffff".to_string(),
            og_image: String::new(),
            dns_prefetch: vec![
                "https://cdn.contentful.com".to_string(),
                "https://images.contentful.com".to_string(),
                "https://videos.contentful.com".to_string(),
            ],
            feeds: Vec::new(),
            google_analytics: None,

            public_dir: "public".to_string(),

            manifest: ManifestConfig::default(),
            sitemap: SitemapConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// An RSS/Atom feed advertised in the page head
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedLink {
    pub title: String,
    pub href: String,
}

/// Web-app manifest configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    pub name: String,
    pub short_name: String,
    pub lang: String,
    pub theme_color: String,
    pub background_color: String,
    pub start_url: String,
    pub display: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            name: "My Site".to_string(),
            short_name: "My Site".to_string(),
            lang: "en".to_string(),
            theme_color: "#ffffff".to_string(),
            background_color: "#ffffff".to_string(),
            start_url: "/".to_string(),
            display: "standalone".to_string(),
        }
    }
}

/// Sitemap configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Hostname prefixed to every route; falls back to the site URL when empty
    pub hostname: String,
    /// Routes left out of the sitemap
    pub exclude: Vec<String>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            hostname: String::new(),
            exclude: vec!["/404".to_string()],
        }
    }
}
