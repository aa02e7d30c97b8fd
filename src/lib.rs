//! prerender-rs: build-time tooling for a Contentful-backed static site
//!
//! This crate queries the Contentful Content Delivery API for the site's
//! content types, enumerates every page route the static-site generator
//! must pre-render, and writes the build artifacts the generator consumes
//! (route list, sitemap, web-app manifest, head metadata).

pub mod commands;
pub mod config;
pub mod contentful;
pub mod manifest;
pub mod routes;
pub mod sitemap;

use anyhow::Result;
use std::path::Path;

/// The main application handle
#[derive(Clone)]
pub struct Prerender {
    /// Site configuration (_config.yml)
    pub config: config::SiteConfig,
    /// Contentful credentials and content-type identifiers (environment)
    pub contentful: config::ContentfulConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Prerender {
    /// Create a new instance from a directory, reading `_config.yml` and
    /// the `CTF_*` environment variables
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let contentful = config::ContentfulConfig::from_env()?;
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            contentful,
            base_dir,
            public_dir,
        })
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
