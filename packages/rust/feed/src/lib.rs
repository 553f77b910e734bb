//! Feed ingestion and link extraction.
//!
//! Fetches the newsletter feed, parses it as RSS (falling back to Atom),
//! and turns each entry's HTML content into candidate links via the
//! pattern-based extractor in [`extract`].

pub mod domains;
pub mod extract;

use tracing::{debug, info};

use linkdigest_shared::{FeedEntry, LinkDigestError, Result};

pub use extract::{ExtractedLinks, LinkExtractor, LinkFilter};

/// Fetches and parses the newsletter feed.
pub struct FeedClient {
    client: reqwest::Client,
}

impl FeedClient {
    /// Build a feed client sending the given User-Agent.
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| LinkDigestError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Fetch the feed and return its entries, skipping items without content.
    pub async fn fetch_entries(&self, feed_url: &str) -> Result<Vec<FeedEntry>> {
        let response = self
            .client
            .get(feed_url)
            .send()
            .await
            .map_err(|e| LinkDigestError::Network(format!("{feed_url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LinkDigestError::Network(format!(
                "{feed_url}: HTTP {status}"
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| LinkDigestError::Network(format!("{feed_url}: body read failed: {e}")))?;

        let entries = parse_feed(&bytes)
            .ok_or_else(|| LinkDigestError::parse(format!("failed to parse feed: {feed_url}")))?;

        info!(feed_url, entries = entries.len(), "feed fetched");
        Ok(entries)
    }
}

/// Parse feed bytes as RSS first, then Atom. Items without content are skipped.
fn parse_feed(bytes: &[u8]) -> Option<Vec<FeedEntry>> {
    if let Ok(channel) = rss::Channel::read_from(bytes) {
        return Some(rss_entries(&channel));
    }

    if let Ok(feed) = atom_syndication::Feed::read_from(bytes) {
        return Some(atom_entries(&feed));
    }

    None
}

fn rss_entries(channel: &rss::Channel) -> Vec<FeedEntry> {
    channel
        .items()
        .iter()
        .filter_map(|item| {
            let content = match item.content() {
                Some(c) => c.to_string(),
                None => {
                    debug!(title = item.title().unwrap_or(""), "entry without content, skipped");
                    return None;
                }
            };
            Some(FeedEntry {
                source: item.title().unwrap_or_default().to_string(),
                content,
            })
        })
        .collect()
}

fn atom_entries(feed: &atom_syndication::Feed) -> Vec<FeedEntry> {
    feed.entries()
        .iter()
        .filter_map(|entry| {
            let content = match entry.content().and_then(|c| c.value()) {
                Some(c) => c.to_string(),
                None => {
                    debug!(title = entry.title().as_str(), "entry without content, skipped");
                    return None;
                }
            };
            Some(FeedEntry {
                source: entry.title().to_string(),
                content,
            })
        })
        .collect()
}
