//! Category filtering.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// The shopper's multi-select of categories.
///
/// Categories toggle in and out; an empty selection means "all categories".
/// Matching against product records is a case-sensitive exact comparison, so
/// a category string the catalog never uses simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySelection(Vec<String>);

impl CategorySelection {
    /// Empty selection (all categories).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `category` to the selection, or remove it if already selected.
    pub fn toggle(&mut self, category: &str) {
        if let Some(pos) = self.0.iter().position(|c| c == category) {
            self.0.remove(pos);
        } else {
            self.0.push(category.to_string());
        }
    }

    /// Reset to "all categories".
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Whether `category` is currently selected.
    pub fn contains(&self, category: &str) -> bool {
        self.0.iter().any(|c| c == category)
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Selected categories in toggle order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for CategorySelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Keep the products whose category is selected; an empty selection keeps
/// everything. Input order is preserved.
pub fn apply(products: &[Product], selection: &CategorySelection) -> Vec<Product> {
    if selection.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| selection.contains(&p.category))
        .cloned()
        .collect()
}
