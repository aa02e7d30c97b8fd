//! Web-app manifest generation

use serde::Serialize;

use crate::config::ManifestConfig;

/// The PWA manifest written to manifest.json
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub name: String,
    pub short_name: String,
    pub lang: String,
    pub theme_color: String,
    pub background_color: String,
    pub start_url: String,
    pub display: String,
}

impl Manifest {
    pub fn from_config(config: &ManifestConfig) -> Self {
        Self {
            name: config.name.clone(),
            short_name: config.short_name.clone(),
            lang: config.lang.clone(),
            theme_color: config.theme_color.clone(),
            background_color: config.background_color.clone(),
            start_url: config.start_url.clone(),
            display: config.display.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
