//! Print the enumerated route list

use anyhow::Result;

use crate::contentful::EntrySource;
use crate::routes::get_all_routes;
use crate::Prerender;

/// Enumerate all static routes and print them
pub async fn run<S: EntrySource>(app: &Prerender, source: &S) -> Result<()> {
    let routes = get_all_routes(source, &app.contentful.content_types).await?;

    println!("Routes ({}):", routes.len());
    for route in &routes {
        println!("  {}", route);
    }

    Ok(())
}
