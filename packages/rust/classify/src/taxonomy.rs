//! The category taxonomy: canonical categories and their keyword synonyms.
//!
//! A category's canonical id is its first synonym. Declaration order matters:
//! it is the tie-break precedence for body scoring, so reordering the table
//! changes classification results.

/// Canonical id of the fundraising category.
///
/// Fundraising links are claimed by a dedicated extraction path and never go
/// through keyword scoring, so the category is not part of [`Taxonomy`].
pub const FUNDRAISING_ID: &str = "data fundraising";

/// One canonical category with its ordered synonym list.
#[derive(Debug, Clone)]
pub struct Category {
    synonyms: Vec<String>,
}

impl Category {
    /// Build a category from its synonyms. The list must be non-empty and
    /// lowercase; the first synonym is the canonical id.
    pub fn new<S: Into<String>>(synonyms: impl IntoIterator<Item = S>) -> Self {
        let synonyms: Vec<String> = synonyms.into_iter().map(Into::into).collect();
        assert!(!synonyms.is_empty(), "category needs at least one synonym");
        Self { synonyms }
    }

    /// Canonical id: the first synonym.
    pub fn id(&self) -> &str {
        &self.synonyms[0]
    }

    /// All synonym keywords, canonical id included.
    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }
}

/// Ordered sequence of categories. Order is tie-break precedence.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    categories: Vec<Category>,
}

impl Taxonomy {
    /// Build a taxonomy from an ordered category list.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

impl Default for Taxonomy {
    /// The production taxonomy, spellings and all. Do not "fix" keywords:
    /// downstream sheets key off these exact ids.
    fn default() -> Self {
        Self::new(vec![
            Category::new(["data mesh"]),
            Category::new(["data warehouse", "data lake", "lake", "warehouse"]),
            Category::new(["data managment", "data organisation", "managment", "organization"]),
            Category::new(["etl / elt", "etl", "elt", "airflow", "dbt"]),
            Category::new(["modern data stack", "data stack", "stack"]),
            Category::new([
                "data analytics",
                "dataviz",
                "data vizualization",
                "bi",
                "looker",
                "tableau",
            ]),
            Category::new(["data monitoring", "monitoring", "data quality"]),
            Category::new([
                "ia",
                "artificial intelligence",
                "machine learning",
                "neural networks",
                "deep learning",
            ]),
        ])
    }
}
