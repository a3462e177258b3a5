use crate::parser;
use crate::types::{FetchConfig, RawFeed, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Capability for retrieving a feed by URL. Returns `Ok(None)` when the
/// URL is unreachable or the response is not a usable feed, so callers can
/// report it against the URL; transport failures are errors.
#[async_trait]
pub trait FetchFeed: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Option<RawFeed>>;
}

/// reqwest-backed [`FetchFeed`] implementation.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Self {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl FetchFeed for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Option<RawFeed>> {
        let parsed = Url::parse(url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            warn!("Unsupported scheme {:?} in feed URL {}", parsed.scheme(), url);
            return Ok(None);
        }

        debug!("Fetching feed: {}", url);
        let response = self.client.get(parsed).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Feed request to {} returned {}", url, status);
            return Ok(None);
        }

        let content = response.text().await?;
        info!("Fetched feed: {} ({} bytes)", url, content.len());

        match parser::parse_feed(&content) {
            Ok(feed) => Ok(Some(feed)),
            Err(e) => {
                warn!("Discarding malformed feed from {}: {}", url, e);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StatsError;

    #[tokio::test]
    async fn rejects_unparseable_urls() {
        let fetcher = HttpFetcher::new(FetchConfig::default());
        let err = fetcher.fetch("not a url").await.unwrap_err();
        assert!(matches!(err, StatsError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn non_http_schemes_yield_no_feed() {
        let fetcher = HttpFetcher::new(FetchConfig::default());
        let result = fetcher.fetch("ftp://example.com/feed.xml").await.unwrap();
        assert!(result.is_none());
    }
}
