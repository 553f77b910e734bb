//! Link categorization: keyword taxonomy, scoring, and page metadata.
//!
//! The categorizer assigns zero or more canonical category ids to a fetched
//! page; an empty result becomes the literal `"others"` label. Scoring is
//! pure text processing ([`scoring`]); this crate performs no network I/O.

pub mod metadata;
pub mod scoring;
pub mod taxonomy;

use url::Url;

pub use metadata::{FetchedPage, build_record};
pub use taxonomy::{Category, FUNDRAISING_ID, Taxonomy};

use linkdigest_shared::OTHERS_LABEL;

/// Assigns category labels to fetched pages.
pub struct Categorizer {
    taxonomy: Taxonomy,
}

impl Categorizer {
    /// Categorizer over the given taxonomy.
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// Categorizer over the production taxonomy.
    pub fn with_defaults() -> Self {
        Self::new(Taxonomy::default())
    }

    /// Classify a fetched page into a category label.
    ///
    /// Pages hosted on a code-hosting platform are scored on their
    /// `<article>` text only; everything else gets the de-duplicated union
    /// of the body category and all title categories. No match yields the
    /// literal `"others"`.
    pub fn classify(&self, url: &str, page: &FetchedPage) -> String {
        let mut categories: Vec<&str> = Vec::new();

        if is_code_hosting(url) {
            if let Some(article) = page.article_text() {
                categories.extend(scoring::body_category(&article, &self.taxonomy));
            }
        } else {
            if let Some(body) = page.body_text() {
                categories.extend(scoring::body_category(&body, &self.taxonomy));
            }
            if let Some(title) = page.title_text() {
                for id in scoring::title_categories(&title, &self.taxonomy) {
                    if !categories.contains(&id) {
                        categories.push(id);
                    }
                }
            }
        }

        let label = if categories.is_empty() {
            OTHERS_LABEL.to_string()
        } else {
            categories.join(",")
        };
        tracing::debug!(url, category = %label, "page classified");
        label
    }
}

/// True when the URL's host points at a code-hosting platform.
///
/// Unparseable URLs fall back to the general classification path.
fn is_code_hosting(url: &str) -> bool {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.contains("github")))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(html: &str) -> FetchedPage {
        FetchedPage::parse(html)
    }

    #[test]
    fn no_match_yields_others() {
        let cat = Categorizer::with_defaults();
        let p = page("<html><head><title>Cooking tips</title></head><body>recipes</body></html>");
        assert_eq!(cat.classify("https://example.com/cooking", &p), "others");
    }

    #[test]
    fn label_is_never_empty() {
        let cat = Categorizer::with_defaults();
        let p = page("");
        assert_eq!(cat.classify("https://example.com", &p), "others");
    }

    #[test]
    fn title_match_contributes_category() {
        let cat = Categorizer::with_defaults();
        let p = page(
            "<html><head><title>Data Mesh Basics | Weekly</title></head>\
             <body>unrelated text</body></html>",
        );
        assert_eq!(cat.classify("https://example.com/mesh", &p), "data mesh");
    }

    #[test]
    fn body_category_precedes_title_categories() {
        let cat = Categorizer::with_defaults();
        // Body scores "etl / elt"; title adds "data mesh".
        let p = page(
            "<html><head><title>Data Mesh Basics | Weekly</title></head>\
             <body>etl etl etl</body></html>",
        );
        assert_eq!(cat.classify("https://example.com/x", &p), "etl / elt,data mesh");
    }

    #[test]
    fn union_is_deduplicated() {
        let cat = Categorizer::with_defaults();
        // Body and title both resolve to "data mesh"; joined once.
        let p = page(
            "<html><head><title>data mesh</title></head>\
             <body>data mesh data mesh</body></html>",
        );
        assert_eq!(cat.classify("https://example.com/x", &p), "data mesh");
    }

    #[test]
    fn body_scoring_prefers_higher_frequency() {
        let cat = Categorizer::with_defaults();
        let p = page(
            "<html><body>etl etl etl etl etl data lake data lake</body></html>",
        );
        // etl scores 5, data lake 2.
        assert_eq!(cat.classify("https://example.com/x", &p), "etl / elt");
    }

    #[test]
    fn github_host_uses_article_only() {
        let cat = Categorizer::with_defaults();
        let p = page(
            "<html><head><title>data mesh tool</title></head>\
             <body><article>etl etl</article>data mesh everywhere</body></html>",
        );
        // Title is ignored, body outside <article> is ignored.
        assert_eq!(cat.classify("https://github.com/org/repo", &p), "etl / elt");
    }

    #[test]
    fn github_page_without_article_is_others() {
        let cat = Categorizer::with_defaults();
        let p = page("<html><head><title>data mesh</title></head><body>etl</body></html>");
        assert_eq!(cat.classify("https://github.com/org/repo", &p), "others");
    }

    #[test]
    fn github_in_path_does_not_trigger_article_path() {
        let cat = Categorizer::with_defaults();
        let p = page("<html><head><title>data mesh</title></head><body>x</body></html>");
        assert_eq!(
            cat.classify("https://example.com/blog/github-trends", &p),
            "data mesh"
        );
    }

    #[test]
    fn redirect_style_empty_page_is_others() {
        let cat = Categorizer::with_defaults();
        // A redirect response body: no title, no body content.
        let p = page("");
        assert_eq!(cat.classify("https://example.com/moved", &p), "others");
    }
}
