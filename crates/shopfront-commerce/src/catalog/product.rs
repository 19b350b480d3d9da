//! Product record types.

use serde::{Deserialize, Serialize};

/// The storefront's recognized categories, in display order.
///
/// Category filtering matches these case-sensitively; records from the
/// catalog source use exactly these strings (including the upstream
/// "jewelery" spelling).
pub const KNOWN_CATEGORIES: [&str; 4] = [
    "men's clothing",
    "women's clothing",
    "jewelery",
    "electronics",
];

/// A raw product record from the catalog source.
///
/// Immutable once fetched; `id` is unique within the catalog. Numeric fields
/// have already been coerced at the decode boundary, so `price` is always a
/// finite number here (0.0 for records that carried garbage).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: i64,
    /// Product title.
    pub title: String,
    /// Base price.
    pub price: f64,
    /// Category name.
    pub category: String,
    /// Primary image URL.
    pub image: String,
    /// Aggregate rating, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Product {
    /// Create a product record.
    pub fn new(
        id: i64,
        title: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            category: category.into(),
            image: image.into(),
            rating: None,
        }
    }

    /// Attach an aggregate rating.
    pub fn with_rating(mut self, rate: f64, count: i64) -> Self {
        self.rating = Some(Rating { rate, count });
        self
    }
}

/// Aggregate customer rating on a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    /// Average rating value.
    pub rate: f64,
    /// Number of ratings.
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new(1, "Backpack", 109.95, "men's clothing", "https://img/1.jpg");
        assert_eq!(product.id, 1);
        assert!(product.rating.is_none());
    }

    #[test]
    fn test_rating_roundtrip() {
        let product = Product::new(2, "Shirt", 22.3, "men's clothing", "https://img/2.jpg")
            .with_rating(4.1, 259);
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
