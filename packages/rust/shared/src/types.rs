//! Core domain types for the link-aggregation pipeline.

use serde::{Deserialize, Serialize};

/// Label emitted when no category matched a link.
pub const OTHERS_LABEL: &str = "others";

// ---------------------------------------------------------------------------
// FeedEntry
// ---------------------------------------------------------------------------

/// One item from the ingested feed: an issue title and its raw HTML content.
///
/// The content is a markup fragment straight out of the feed and may be
/// malformed or unterminated; nothing downstream assumes well-formed nesting.
#[derive(Debug, Clone)]
pub struct FeedEntry {
    /// Issue/newsletter title, used as provenance and as the sort-key source.
    pub source: String,
    /// Raw HTML content of the entry.
    pub content: String,
}

// ---------------------------------------------------------------------------
// CandidateLink
// ---------------------------------------------------------------------------

/// A URL extracted from a feed entry, awaiting fetch and classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLink {
    /// The extracted URL, verbatim from the href attribute.
    pub url: String,
    /// Title of the feed entry the link came from.
    pub source: String,
}

// ---------------------------------------------------------------------------
// ClassifiedLink
// ---------------------------------------------------------------------------

/// A fully classified link, ready for output.
///
/// Field order mirrors the published row order. The URL carries a trailing
/// space, kept for compatibility with the existing spreadsheet consumers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifiedLink {
    /// URL with a trailing space appended.
    pub url: String,
    /// Comma-joined canonical category ids, or [`OTHERS_LABEL`].
    pub category: String,
    /// Source issue title.
    pub source: String,
    /// 10-character date prefix from `article:published_time`, or `"0"`.
    pub published: String,
    /// Page title up to the first `|` delimiter, whitespace preserved.
    pub title: String,
    /// Page description meta content, or empty.
    pub description: String,
}

impl ClassifiedLink {
    /// Output row in published column order.
    pub fn into_row(self) -> [String; 6] {
        [
            self.url,
            self.category,
            self.source,
            self.published,
            self.title,
            self.description,
        ]
    }
}
