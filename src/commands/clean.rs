//! Clean the public folder

use anyhow::Result;
use std::fs;

use crate::Prerender;

/// Remove the public directory
pub fn run(app: &Prerender) -> Result<()> {
    if app.public_dir.exists() {
        fs::remove_dir_all(&app.public_dir)?;
        tracing::info!("Removed {:?}", app.public_dir);
    }
    Ok(())
}
