//! CLI entry point for prerender-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "prerender-rs")]
#[command(version)]
#[command(about = "Route enumeration and build artifacts for a Contentful-backed static site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Query the Preview API (draft content) instead of the Delivery API
    #[arg(long, global = true)]
    preview: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate all static routes and print them
    Routes,

    /// Generate build artifacts (routes.json, sitemap.xml, manifest.json, head.json)
    #[command(alias = "g")]
    Generate,

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "prerender_rs=debug,info"
    } else {
        "prerender_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Routes => {
            let app = prerender_rs::Prerender::new(&base_dir)?;
            let client =
                prerender_rs::contentful::ContentfulClient::new(&app.contentful, cli.preview)?;
            prerender_rs::commands::routes::run(&app, &client).await?;
        }

        Commands::Generate => {
            let app = prerender_rs::Prerender::new(&base_dir)?;
            let client =
                prerender_rs::contentful::ContentfulClient::new(&app.contentful, cli.preview)?;
            tracing::info!("Generating build artifacts...");
            prerender_rs::commands::generate::run(&app, &client).await?;
            println!("Generated successfully!");
        }

        Commands::Clean => {
            let app = prerender_rs::Prerender::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            app.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("prerender-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
