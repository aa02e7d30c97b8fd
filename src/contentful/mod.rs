//! Contentful Content Delivery API client
//!
//! A minimal read-only client: one `getEntries`-style call filtered by
//! content type with optional server-side ordering. There is no retry and
//! no pagination; a failed query fails the whole build step.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

use crate::config::ContentfulConfig;

/// Content Delivery API host (published content)
const CDA_HOST: &str = "https://cdn.contentful.com";
/// Content Preview API host (draft content)
const CPA_HOST: &str = "https://preview.contentful.com";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("contentful returned status {status}: {body}")]
    Api { status: StatusCode, body: String },
    #[error("failed to decode entries response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("preview mode requires CTF_CPA_TOKEN")]
    MissingPreviewToken,
}

/// A single content entry
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    pub fields: EntryFields,
}

/// The entry fields route enumeration cares about; everything else stays
/// opaque
#[derive(Debug, Clone, Deserialize)]
pub struct EntryFields {
    pub slug: String,
    /// Publication date; only used for server-side ordering, never
    /// re-sorted locally
    #[serde(default)]
    pub date: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Response envelope for an entries query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entries {
    #[serde(default)]
    pub items: Vec<Entry>,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub skip: usize,
    #[serde(default)]
    pub limit: usize,
}

/// Parameters of an entries query
#[derive(Debug, Clone)]
pub struct EntryQuery {
    pub content_type: String,
    pub order: Option<String>,
}

impl EntryQuery {
    pub fn new(content_type: &str) -> Self {
        Self {
            content_type: content_type.to_string(),
            order: None,
        }
    }

    /// Server-side ordering, e.g. `-fields.date` for newest first
    pub fn order(mut self, order: &str) -> Self {
        self.order = Some(order.to_string());
        self
    }
}

/// Anything that can answer entry queries: the API client in production,
/// a stub in tests
#[async_trait]
pub trait EntrySource {
    async fn entries(&self, query: &EntryQuery) -> Result<Entries, ClientError>;
}

/// Read-only client for the Contentful Delivery/Preview API
#[derive(Debug)]
pub struct ContentfulClient {
    client: Client,
    base: Url,
    access_token: String,
}

impl ContentfulClient {
    /// Create a client for the configured space. With `preview` the client
    /// talks to the Preview API using the CPA token
    pub fn new(config: &ContentfulConfig, preview: bool) -> Result<Self, ClientError> {
        let (host, token) = if preview {
            let token = config
                .cpa_token
                .clone()
                .ok_or(ClientError::MissingPreviewToken)?;
            (CPA_HOST, token)
        } else {
            (CDA_HOST, config.cda_token.clone())
        };

        let base = Url::parse(host)?.join(&format!(
            "spaces/{}/environments/{}/entries",
            config.space_id, config.environment_id
        ))?;

        let client = Client::builder().user_agent(Self::user_agent()).build()?;

        Ok(Self {
            client,
            base,
            access_token: token,
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("prerender-rs/", env!("CARGO_PKG_VERSION"))
    }

    fn query_url(&self, query: &EntryQuery) -> Url {
        let mut url = self.base.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("access_token", &self.access_token);
            pairs.append_pair("content_type", &query.content_type);
            if let Some(ref order) = query.order {
                pairs.append_pair("order", order);
            }
        }
        url
    }
}

#[async_trait]
impl EntrySource for ContentfulClient {
    async fn entries(&self, query: &EntryQuery) -> Result<Entries, ClientError> {
        // the token is a query parameter, log the bare endpoint only
        tracing::debug!(
            "GET {} (content_type={})",
            self.base.path(),
            query.content_type
        );

        let resp = self.client.get(self.query_url(query)).send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            return Err(ClientError::Api { status, body });
        }

        let entries = serde_json::from_slice(&bytes)?;
        Ok(entries)
    }
}
