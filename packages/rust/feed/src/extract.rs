//! Pattern-based link extraction from entry content.
//!
//! Entry content arrives as a markup fragment that is frequently truncated
//! or unterminated, so extraction deliberately uses a permissive raw scan
//! (`href="` up to the next quote or end of input) instead of a structural
//! parser that would depend on well-formed nesting.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use linkdigest_shared::{CandidateLink, FeedEntry};

/// Header phrase opening the fundraising sub-section. Matches the
/// fundraising category's canonical id.
const FUNDRAISING_HEADER: &str = "data fundraising";

/// `href="` plus everything up to the next quote or end of input.
static HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href="[^"]*"#).expect("valid regex"));

/// Case-insensitive start of the fundraising sub-section.
static FUNDRAISING_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(FUNDRAISING_HEADER)
        .case_insensitive(true)
        .build()
        .expect("valid regex")
});

/// Case-insensitive next heading marker, ending the fundraising span.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new("<h2")
        .case_insensitive(true)
        .build()
        .expect("valid regex")
});

// ---------------------------------------------------------------------------
// LinkFilter
// ---------------------------------------------------------------------------

/// Blacklist-based admission check for candidate URLs.
///
/// A URL is kept unless it contains a blacklist entry as a case-sensitive
/// literal substring. Deliberately substring-based, not host-exact.
#[derive(Debug, Clone)]
pub struct LinkFilter {
    blacklist: Vec<String>,
}

impl LinkFilter {
    /// Filter over the given blacklist substrings.
    pub fn new(blacklist: Vec<String>) -> Self {
        Self { blacklist }
    }

    /// True when the URL passes the blacklist.
    pub fn keep(&self, url: &str) -> bool {
        !self.blacklist.iter().any(|entry| url.contains(entry.as_str()))
    }
}

// ---------------------------------------------------------------------------
// LinkExtractor
// ---------------------------------------------------------------------------

/// Links extracted from one feed entry, split by classification path.
#[derive(Debug, Default)]
pub struct ExtractedLinks {
    /// Links from the fundraising sub-section: classified directly with the
    /// fundraising category, keyword scoring skipped.
    pub fundraising: Vec<CandidateLink>,
    /// Everything else, awaiting fetch and categorization.
    pub general: Vec<CandidateLink>,
}

/// Parses one feed entry's raw content into candidate links.
///
/// Performs no I/O: fetching and classifying the extracted links is the
/// pipeline's job.
pub struct LinkExtractor {
    filter: LinkFilter,
}

impl LinkExtractor {
    pub fn new(filter: LinkFilter) -> Self {
        Self { filter }
    }

    /// Extract fundraising and general candidate links from an entry.
    ///
    /// A URL whose text occurs inside the fundraising span is claimed by the
    /// fundraising set and never enters the general set.
    pub fn extract(&self, entry: &FeedEntry) -> ExtractedLinks {
        let span = fundraising_span(&entry.content);

        let mut links = ExtractedLinks::default();

        if let Some(span_text) = span {
            for url in hrefs(span_text) {
                if self.filter.keep(&url) {
                    links.fundraising.push(CandidateLink {
                        url,
                        source: entry.source.clone(),
                    });
                }
            }
        }

        for url in hrefs(&entry.content) {
            if let Some(span_text) = span {
                if span_text.contains(url.as_str()) {
                    continue;
                }
            }
            if self.filter.keep(&url) {
                links.general.push(CandidateLink {
                    url,
                    source: entry.source.clone(),
                });
            }
        }

        links
    }
}

/// All href targets in the fragment, permissively scanned.
fn hrefs(content: &str) -> Vec<String> {
    HREF_RE
        .find_iter(content)
        .map(|m| m.as_str().trim_start_matches("href=\"").to_string())
        .collect()
}

/// The fundraising sub-section: from the header phrase (case-insensitive)
/// to the next heading marker or end of content.
fn fundraising_span(content: &str) -> Option<&str> {
    let start = FUNDRAISING_START_RE.find(content)?.start();
    let end = HEADING_RE
        .find_at(content, start)
        .map(|m| m.start())
        .unwrap_or(content.len());
    Some(&content[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkdigest_shared::config::DEFAULT_BLACKLIST;

    fn default_filter() -> LinkFilter {
        LinkFilter::new(DEFAULT_BLACKLIST.iter().map(|s| s.to_string()).collect())
    }

    fn extractor() -> LinkExtractor {
        LinkExtractor::new(default_filter())
    }

    fn entry(content: &str) -> FeedEntry {
        FeedEntry {
            source: "Issue #1".into(),
            content: content.into(),
        }
    }

    #[test]
    fn filter_rejects_blacklisted_substrings() {
        let f = default_filter();
        assert!(!f.keep("mailto:test@example.com"));
        assert!(!f.keep("https://images.unsplash.com/photo.jpg"));
        assert!(!f.keep("https://www.blef.fr/about"));
        assert!(!f.keep("https://www.google.com/"));
    }

    #[test]
    fn filter_keeps_everything_else() {
        let f = default_filter();
        assert!(f.keep("https://example.com/article"));
        assert!(f.keep("https://github.com/org/repo"));
    }

    #[test]
    fn hrefs_found_across_entry() {
        let links = extractor().extract(&entry(
            r#"<p><a href="https://a.example.com">a</a> and <a href="https://b.example.com">b</a></p>"#,
        ));
        let urls: Vec<&str> = links.general.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(urls, vec!["https://a.example.com", "https://b.example.com"]);
        assert!(links.fundraising.is_empty());
    }

    #[test]
    fn unterminated_href_runs_to_end_of_input() {
        // Truncated fragment: no closing quote, no closing tags.
        let links = extractor().extract(&entry(r#"<a href="https://a.example.com/cut-off"#));
        assert_eq!(links.general.len(), 1);
        assert_eq!(links.general[0].url, "https://a.example.com/cut-off");
    }

    #[test]
    fn fundraising_span_claims_its_links() {
        let content = r#"<h2>Data fundraising</h2><a href="https://fund.example.com/a">a</a><h2>News</h2><a href="https://news.example.com/b">b</a>"#;
        let links = extractor().extract(&entry(content));

        let fund: Vec<&str> = links.fundraising.iter().map(|l| l.url.as_str()).collect();
        let general: Vec<&str> = links.general.iter().map(|l| l.url.as_str()).collect();

        assert_eq!(fund, vec!["https://fund.example.com/a"]);
        // The fundraising link never reaches the general set.
        assert_eq!(general, vec!["https://news.example.com/b"]);
    }

    #[test]
    fn fundraising_header_is_case_insensitive() {
        let content = r#"<h2>DATA FUNDRAISING</h2><a href="https://fund.example.com/x">x</a>"#;
        let links = extractor().extract(&entry(content));
        assert_eq!(links.fundraising.len(), 1);
        assert!(links.general.is_empty());
    }

    #[test]
    fn fundraising_span_without_next_heading_extends_to_end() {
        let content = r#"intro <p>Data fundraising</p><a href="https://fund.example.com/y">y"#;
        let links = extractor().extract(&entry(content));
        assert_eq!(links.fundraising.len(), 1);
        assert_eq!(links.fundraising[0].url, "https://fund.example.com/y");
    }

    #[test]
    fn blacklisted_links_filtered_from_both_paths() {
        let content = r#"<h2>Data fundraising</h2><a href="mailto:fund@example.com">m</a><h2>Rest</h2><a href="mailto:test@example.com">m</a>"#;
        let links = extractor().extract(&entry(content));
        assert!(links.fundraising.is_empty());
        assert!(links.general.is_empty());
    }

    #[test]
    fn entry_without_fundraising_section_has_no_fast_path() {
        let links = extractor().extract(&entry(r#"<a href="https://a.example.com">a</a>"#));
        assert!(links.fundraising.is_empty());
        assert_eq!(links.general.len(), 1);
    }
}
