//! Fetched-page wrapper and metadata extraction.
//!
//! [`FetchedPage`] holds the parsed HTML of one fetched link and exposes the
//! handful of regions classification cares about. Metadata access never
//! fails: missing elements or attributes degrade to empty/sentinel values.

use scraper::{Html, Selector};

use linkdigest_shared::ClassifiedLink;

/// Sentinel published date for pages without `article:published_time`.
const NO_DATE: &str = "0";

/// A fetched page, parsed once and queried read-only.
pub struct FetchedPage {
    doc: Html,
}

impl FetchedPage {
    /// Parse a page from its raw HTML body.
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }

    /// Full text of the `<title>` element, if present.
    pub fn title_text(&self) -> Option<String> {
        let sel = Selector::parse("title").unwrap();
        self.doc
            .select(&sel)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    /// Concatenated text of the `<body>` element, if present.
    pub fn body_text(&self) -> Option<String> {
        let sel = Selector::parse("body").unwrap();
        self.doc
            .select(&sel)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    /// Concatenated text of the first `<article>` element, if present.
    pub fn article_text(&self) -> Option<String> {
        let sel = Selector::parse("article").unwrap();
        self.doc
            .select(&sel)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    /// Raw `article:published_time` meta content, if present.
    pub fn published_time(&self) -> Option<String> {
        let sel = Selector::parse(r#"meta[property="article:published_time"]"#).unwrap();
        self.doc
            .select(&sel)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(str::to_string)
    }

    /// Description meta content, if present.
    pub fn description(&self) -> Option<String> {
        let sel = Selector::parse(r#"meta[name="description"]"#).unwrap();
        self.doc
            .select(&sel)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(str::to_string)
    }
}

/// Build the output record for a classified link.
///
/// - title: text before the first `|` delimiter, whitespace preserved;
/// - published: first 10 characters of `article:published_time`, else `"0"`;
/// - description: meta content, else empty;
/// - url: trailing space appended, kept for sheet compatibility.
pub fn build_record(
    url: &str,
    category: &str,
    source: &str,
    page: &FetchedPage,
) -> ClassifiedLink {
    let title = page
        .title_text()
        .map(|t| t.split('|').next().unwrap_or_default().to_string())
        .unwrap_or_default();

    let published = page
        .published_time()
        .map(|t| t.chars().take(10).collect::<String>())
        .unwrap_or_else(|| NO_DATE.to_string());

    let description = page.description().unwrap_or_default();

    ClassifiedLink {
        url: format!("{url} "),
        category: category.to_string(),
        source: source.to_string(),
        published,
        title,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><head>
        <title> Data Mesh Basics | Weekly</title>
        <meta property="article:published_time" content="2023-04-01T08:30:00Z">
        <meta name="description" content="An intro to data mesh.">
        </head><body><article>mesh mesh</article><p>outside</p></body></html>"#;

    #[test]
    fn title_keeps_text_before_pipe_untrimmed() {
        let page = FetchedPage::parse(PAGE);
        let rec = build_record("https://example.com/p", "data mesh", "Issue #1", &page);
        assert_eq!(rec.title, " Data Mesh Basics ");
    }

    #[test]
    fn published_is_ten_char_prefix() {
        let page = FetchedPage::parse(PAGE);
        let rec = build_record("https://example.com/p", "data mesh", "Issue #1", &page);
        assert_eq!(rec.published, "2023-04-01");
    }

    #[test]
    fn url_gains_trailing_space() {
        let page = FetchedPage::parse(PAGE);
        let rec = build_record("https://example.com/p", "data mesh", "Issue #1", &page);
        assert_eq!(rec.url, "https://example.com/p ");
    }

    #[test]
    fn missing_metadata_degrades_to_defaults() {
        let page = FetchedPage::parse("<html><body>no head to speak of</body></html>");
        let rec = build_record("https://example.com/p", "others", "Issue #1", &page);
        assert_eq!(rec.title, "");
        assert_eq!(rec.published, "0");
        assert_eq!(rec.description, "");
    }

    #[test]
    fn meta_without_content_attr_is_swallowed() {
        let page = FetchedPage::parse(r#"<html><head><meta name="description"></head></html>"#);
        let rec = build_record("https://example.com/p", "others", "Issue #1", &page);
        assert_eq!(rec.description, "");
    }

    #[test]
    fn article_text_is_scoped() {
        let page = FetchedPage::parse(PAGE);
        let article = page.article_text().expect("article");
        assert!(article.contains("mesh mesh"));
        assert!(!article.contains("outside"));
    }
}
