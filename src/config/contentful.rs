//! Contentful credentials and content-type identifiers, read from the
//! environment at startup

use thiserror::Error;

const ENV_SPACE_ID: &str = "CTF_SPACE_ID";
const ENV_ENVIRONMENT_ID: &str = "CTF_ENVIRONMENT_ID";
const ENV_CDA_TOKEN: &str = "CTF_CDA_TOKEN";
const ENV_CPA_TOKEN: &str = "CTF_CPA_TOKEN";
const ENV_POST_ID: &str = "CTF_POST_ID";
const ENV_TIL_ID: &str = "CTF_TIL_ID";
const ENV_LANDING_PAGE_ID: &str = "CTF_LANDING_PAGE_ID";
const ENV_TOPIC_ID: &str = "CTF_TOPIC_ID";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {0}")]
    MissingKeys(String),
}

/// Contentful space credentials plus the content-type identifiers the
/// route enumeration queries
#[derive(Debug, Clone)]
pub struct ContentfulConfig {
    pub space_id: String,
    pub environment_id: String,
    /// Content Delivery API token (published content)
    pub cda_token: String,
    /// Content Preview API token, only needed for `--preview`
    pub cpa_token: Option<String>,
    pub content_types: ContentTypes,
}

/// The four content types that drive static generation
#[derive(Debug, Clone)]
pub struct ContentTypes {
    pub post: String,
    pub til_post: String,
    pub landing_page: String,
    pub topic: String,
}

impl Default for ContentTypes {
    fn default() -> Self {
        Self {
            // the blog post type carries a generated id in the source space
            post: "2wKn6yEnZewu2SCCkus4as".to_string(),
            til_post: "tilPost".to_string(),
            landing_page: "landingPage".to_string(),
            topic: "topic".to_string(),
        }
    }
}

impl ContentfulConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok().filter(|v| !v.is_empty()))
    }

    /// Read configuration through a key lookup. Missing required keys are
    /// collected and reported together rather than one at a time
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing: Vec<&'static str> = Vec::new();
        let mut required = |key: &'static str| match lookup(key) {
            Some(value) => value,
            None => {
                missing.push(key);
                String::new()
            }
        };

        let space_id = required(ENV_SPACE_ID);
        let environment_id = required(ENV_ENVIRONMENT_ID);
        let cda_token = required(ENV_CDA_TOKEN);

        if !missing.is_empty() {
            return Err(ConfigError::MissingKeys(missing.join(", ")));
        }

        let defaults = ContentTypes::default();
        let content_types = ContentTypes {
            post: lookup(ENV_POST_ID).unwrap_or(defaults.post),
            til_post: lookup(ENV_TIL_ID).unwrap_or(defaults.til_post),
            landing_page: lookup(ENV_LANDING_PAGE_ID).unwrap_or(defaults.landing_page),
            topic: lookup(ENV_TOPIC_ID).unwrap_or(defaults.topic),
        };

        Ok(Self {
            space_id,
            environment_id,
            cda_token,
            cpa_token: lookup(ENV_CPA_TOKEN),
            content_types,
        })
    }
}
