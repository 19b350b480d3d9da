//! Sort keys for the catalog pipeline.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort order for the displayed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Source order (default, no reordering).
    #[default]
    Relevance,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Newest first (highest id).
    Newest,
    /// Oldest first (lowest id).
    Oldest,
    /// Title A-Z.
    NameAsc,
    /// Title Z-A.
    NameDesc,
}

impl SortKey {
    /// Parse a sort key from its wire form. Total over any string: unknown
    /// keys degrade to [`SortKey::Relevance`] rather than failing.
    pub fn from_key(key: &str) -> Self {
        match key {
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            "newest" => SortKey::Newest,
            "oldest" => SortKey::Oldest,
            "name-asc" => SortKey::NameAsc,
            "name-desc" => SortKey::NameDesc,
            _ => SortKey::Relevance,
        }
    }

    /// Wire form of this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
        }
    }

    /// Human-readable name for a sort selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Newest => "Newest First",
            SortKey::Oldest => "Oldest First",
            SortKey::NameAsc => "Name: A-Z",
            SortKey::NameDesc => "Name: Z-A",
        }
    }

    /// Sort a copy of `products` by this key.
    ///
    /// Always a permutation of the input, always stable: equal sort values
    /// keep their input order. Price comparison uses `f64::total_cmp`, so
    /// the sort is total even over pathological values. Title comparison is
    /// case-insensitive with the raw string as tie-breaker, the stand-in for
    /// locale collation.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut sorted = products.to_vec();
        match self {
            SortKey::Relevance => {}
            SortKey::PriceAsc => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortKey::PriceDesc => sorted.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortKey::Newest => sorted.sort_by(|a, b| b.id.cmp(&a.id)),
            SortKey::Oldest => sorted.sort_by(|a, b| a.id.cmp(&b.id)),
            SortKey::NameAsc => sorted.sort_by(|a, b| title_cmp(&a.title, &b.title)),
            SortKey::NameDesc => sorted.sort_by(|a, b| title_cmp(&b.title, &a.title)),
        }
        sorted
    }
}

fn title_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
