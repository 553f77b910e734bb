//! Keyword scoring over plain text.
//!
//! Pure functions, no I/O: the categorizer hands in extracted text and the
//! taxonomy, which keeps the scoring rules property-testable in isolation.

use crate::taxonomy::Taxonomy;

/// Categories whose synonyms occur in the title, case-insensitively.
///
/// Every matching category is collected, in taxonomy order; there is no cap.
pub fn title_categories<'t>(title: &str, taxonomy: &'t Taxonomy) -> Vec<&'t str> {
    let title_lower = title.to_lowercase();
    taxonomy
        .categories()
        .iter()
        .filter(|cat| cat.synonyms().iter().any(|kw| title_lower.contains(kw.as_str())))
        .map(|cat| cat.id())
        .collect()
}

/// The single category whose synonyms occur most often in the body text.
///
/// A category's score is the sum of non-overlapping occurrence counts of its
/// synonyms. Only a strictly greater score displaces the running maximum, so
/// ties keep the earliest-declared category. Keywords are matched
/// case-sensitively against the raw body text, and matches inside longer
/// words count. All-zero scores produce `None`.
pub fn body_category<'t>(body: &str, taxonomy: &'t Taxonomy) -> Option<&'t str> {
    let mut best: Option<&str> = None;
    let mut best_score = 0usize;

    for cat in taxonomy.categories() {
        let score: usize = cat
            .synonyms()
            .iter()
            .map(|kw| body.matches(kw.as_str()).count())
            .sum();
        if score > best_score {
            best_score = score;
            best = Some(cat.id());
        }
    }

    best
}
