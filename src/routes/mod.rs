//! Route enumeration for static generation
//!
//! Derives the full list of page paths the generator must pre-render:
//! one page per content entry plus the paginated blog listing pages,
//! interleaved with the posts they follow.

use crate::config::ContentTypes;
use crate::contentful::{ClientError, EntryQuery, EntrySource};

/// Number of posts per blog listing page
pub const BLOG_PAGE_SIZE: usize = 5;

/// Enumerate every static route the site generator must pre-render.
///
/// The four content-type queries run concurrently and the whole call fails
/// if any one of them fails; there is no partial route list. Blog and TIL
/// posts arrive newest first (server-side ordering) and are kept in that
/// order. The result concatenates blog routes (with interleaved pagination
/// pages), TIL routes, landing-page routes and topic routes.
pub async fn get_all_routes<S: EntrySource>(
    source: &S,
    types: &ContentTypes,
) -> Result<Vec<String>, ClientError> {
    let post_query = EntryQuery::new(&types.post).order("-fields.date");
    let til_query = EntryQuery::new(&types.til_post).order("-fields.date");
    let landing_query = EntryQuery::new(&types.landing_page);
    let topic_query = EntryQuery::new(&types.topic);
    let (blog_posts, til_posts, landing_pages, topics) = tokio::try_join!(
        source.entries(&post_query),
        source.entries(&til_query),
        source.entries(&landing_query),
        source.entries(&topic_query),
    )?;

    let mut routes = Vec::new();

    for (index, entry) in blog_posts.items.iter().enumerate() {
        routes.push(format!("/blog/{}", entry.fields.slug));

        // a listing page follows every BLOG_PAGE_SIZE posts
        if index % BLOG_PAGE_SIZE == 0 && index != 0 {
            routes.push(format!("/blog/page/{}", index / BLOG_PAGE_SIZE));
        }
    }

    for entry in &til_posts.items {
        routes.push(format!("/today-i-learned/{}", entry.fields.slug));
    }

    for entry in &landing_pages.items {
        routes.push(format!("/{}", entry.fields.slug));
    }

    for entry in &topics.items {
        routes.push(format!("/topics/{}", entry.fields.slug));
    }

    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contentful::{Entries, Entry, EntryFields};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    fn entries_for(slugs: &[&str]) -> Entries {
        Entries {
            items: slugs
                .iter()
                .map(|slug| Entry {
                    fields: EntryFields {
                        slug: slug.to_string(),
                        date: None,
                        extra: HashMap::new(),
                    },
                })
                .collect(),
            total: slugs.len(),
            skip: 0,
            limit: 100,
        }
    }

    fn test_types() -> ContentTypes {
        ContentTypes {
            post: "post".to_string(),
            til_post: "tilPost".to_string(),
            landing_page: "landingPage".to_string(),
            topic: "topic".to_string(),
        }
    }

    #[derive(Default)]
    struct StubSource {
        responses: HashMap<String, Entries>,
        fail: Option<String>,
        seen: Mutex<Vec<EntryQuery>>,
    }

    impl StubSource {
        fn with(mut self, content_type: &str, slugs: &[&str]) -> Self {
            self.responses
                .insert(content_type.to_string(), entries_for(slugs));
            self
        }

        fn failing(mut self, content_type: &str) -> Self {
            self.fail = Some(content_type.to_string());
            self
        }
    }

    #[async_trait]
    impl EntrySource for StubSource {
        async fn entries(&self, query: &EntryQuery) -> Result<Entries, ClientError> {
            self.seen.lock().unwrap().push(query.clone());

            if self.fail.as_deref() == Some(query.content_type.as_str()) {
                return Err(ClientError::Api {
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                    body: "stub failure".to_string(),
                });
            }
            Ok(self
                .responses
                .get(&query.content_type)
                .cloned()
                .unwrap_or_default())
        }
    }

    #[tokio::test]
    async fn test_empty_content_yields_no_routes() {
        let source = StubSource::default();
        let routes = get_all_routes(&source, &test_types()).await.unwrap();
        assert!(routes.is_empty());
    }

    #[tokio::test]
    async fn test_pagination_page_after_every_fifth_post() {
        let source =
            StubSource::default().with("post", &["a0", "a1", "a2", "a3", "a4", "a5"]);
        let routes = get_all_routes(&source, &test_types()).await.unwrap();
        assert_eq!(
            routes,
            vec![
                "/blog/a0",
                "/blog/a1",
                "/blog/a2",
                "/blog/a3",
                "/blog/a4",
                "/blog/a5",
                "/blog/page/1",
            ]
        );
    }

    #[tokio::test]
    async fn test_multiple_pagination_pages() {
        let slugs: Vec<String> = (0..11).map(|i| format!("a{}", i)).collect();
        let slug_refs: Vec<&str> = slugs.iter().map(String::as_str).collect();
        let source = StubSource::default().with("post", &slug_refs);
        let routes = get_all_routes(&source, &test_types()).await.unwrap();

        assert_eq!(routes.len(), 13);
        assert_eq!(routes[5], "/blog/a5");
        assert_eq!(routes[6], "/blog/page/1");
        assert_eq!(routes[11], "/blog/a10");
        assert_eq!(routes[12], "/blog/page/2");
    }

    #[tokio::test]
    async fn test_no_pagination_below_page_size() {
        let source = StubSource::default().with("post", &["a0", "a1", "a2", "a3", "a4"]);
        let routes = get_all_routes(&source, &test_types()).await.unwrap();
        assert!(!routes.iter().any(|r| r.starts_with("/blog/page/")));
    }

    #[tokio::test]
    async fn test_single_til_entry() {
        let source = StubSource::default().with("tilPost", &["foo"]);
        let routes = get_all_routes(&source, &test_types()).await.unwrap();
        assert_eq!(routes, vec!["/today-i-learned/foo"]);
    }

    #[tokio::test]
    async fn test_concatenation_order() {
        let source = StubSource::default()
            .with("post", &["p1"])
            .with("tilPost", &["t1"])
            .with("landingPage", &["x", "y"])
            .with("topic", &["z"]);
        let routes = get_all_routes(&source, &test_types()).await.unwrap();
        assert_eq!(
            routes,
            vec!["/blog/p1", "/today-i-learned/t1", "/x", "/y", "/topics/z"]
        );
    }

    #[tokio::test]
    async fn test_any_failed_query_fails_the_call() {
        for failing in ["post", "tilPost", "landingPage", "topic"] {
            let source = StubSource::default()
                .with("post", &["p1"])
                .failing(failing);
            let result = get_all_routes(&source, &test_types()).await;
            assert!(result.is_err(), "expected failure for {}", failing);
        }
    }

    #[tokio::test]
    async fn test_posts_are_queried_newest_first() {
        let source = StubSource::default();
        get_all_routes(&source, &test_types()).await.unwrap();

        let seen = source.seen.lock().unwrap();
        assert_eq!(seen.len(), 4);
        for query in seen.iter() {
            match query.content_type.as_str() {
                "post" | "tilPost" => {
                    assert_eq!(query.order.as_deref(), Some("-fields.date"))
                }
                _ => assert!(query.order.is_none()),
            }
        }
    }
}
