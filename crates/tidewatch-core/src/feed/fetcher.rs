use bytes::Bytes;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::{Client, Proxy};
use url::Url;

use super::aggregator::FeedReader;
use super::models::RawFeedItem;
use super::parser::parse_feed;
use crate::config::{FeedSource, FeedsConfig};
use crate::{Error, Result};

const MAX_FEED_BYTES: usize = 5 * 1024 * 1024;

// Rotating User-Agent pool - some publishers reject non-browser clients
static USER_AGENT_INDEX: AtomicUsize = AtomicUsize::new(0);
const USER_AGENTS: &[&str] = &[
    // Chrome on macOS
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    // Chrome on Windows
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    // Firefox on macOS
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:121.0) Gecko/20100101 Firefox/121.0",
    // Safari on macOS
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Safari/605.1.15",
];

/// Get the next User-Agent in rotation
fn next_user_agent() -> &'static str {
    let index = USER_AGENT_INDEX.fetch_add(1, Ordering::Relaxed) % USER_AGENTS.len();
    USER_AGENTS[index]
}

/// HTTP feed reader: one GET per source, parsed with feed-rs
pub struct FeedFetcher {
    client: Client,
}

impl FeedFetcher {
    pub fn new(config: &FeedsConfig) -> Result<Self> {
        let client = Self::build_client(config.request_timeout_secs, &config.proxy_url)?;
        Ok(Self { client })
    }

    /// Build HTTP client with optional proxy
    fn build_client(timeout_secs: u64, proxy_url: &Option<String>) -> Result<Client> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(10));

        if let Some(ref proxy) = proxy_url {
            let proxy = Proxy::all(proxy)
                .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
            tracing::info!("Using HTTP proxy for feed fetching");
        }

        builder.build().map_err(Error::Http)
    }

    /// Build browser-like headers for a request
    fn build_headers(user_agent: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "application/rss+xml,application/atom+xml,application/xml;q=0.9,text/xml;q=0.8,*/*;q=0.5"
            )
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate, br"));
        if let Ok(ua) = HeaderValue::from_str(user_agent) {
            headers.insert(USER_AGENT, ua);
        }
        headers
    }

    /// Download a feed document. Single attempt; callers decide what a failure means.
    pub async fn fetch_raw(&self, url: &str) -> Result<Bytes> {
        Url::parse(url)?;

        let user_agent = next_user_agent();
        tracing::debug!("Fetching {} with User-Agent: {}", url, user_agent);

        let response = self.client
            .get(url)
            .headers(Self::build_headers(user_agent))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::FeedFetch(format!("HTTP {} for URL: {}", status, url)));
        }

        let bytes = response.bytes().await?;
        self.ensure_content_size(bytes.len(), url)?;

        if self.is_cloudflare_challenge(&bytes) {
            return Err(Error::FeedFetch(format!(
                "Cloudflare JavaScript challenge detected for URL: {}. \
                Configure a proxy under [feeds] proxy_url or drop this source.",
                url
            )));
        }

        Ok(bytes)
    }

    /// Check if content is a Cloudflare challenge page
    fn is_cloudflare_challenge(&self, content: &[u8]) -> bool {
        let check_len = content.len().min(2048);
        let preview = String::from_utf8_lossy(&content[..check_len]);

        preview.contains("Just a moment...")
            || preview.contains("cf-browser-verification")
            || preview.contains("_cf_chl_opt")
            || preview.contains("challenge-platform")
    }

    fn ensure_content_size(&self, size: usize, url: &str) -> Result<()> {
        if size > MAX_FEED_BYTES {
            return Err(Error::FeedFetch(format!(
                "Feed too large ({} bytes) for URL: {}",
                size,
                url
            )));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl FeedReader for FeedFetcher {
    async fn read(&self, source: &FeedSource) -> Result<Vec<RawFeedItem>> {
        tracing::info!("Fetching feed from: {}", source.url);
        let content = self.fetch_raw(&source.url).await?;
        parse_feed(&content, source.max_items)
    }
}
