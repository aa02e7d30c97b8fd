//! Configuration module

mod contentful;
mod site;

pub use contentful::ConfigError;
pub use contentful::ContentTypes;
pub use contentful::ContentfulConfig;
pub use site::FeedLink;
pub use site::ManifestConfig;
pub use site::SiteConfig;
pub use site::SitemapConfig;
