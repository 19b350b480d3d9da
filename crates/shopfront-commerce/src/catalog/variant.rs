//! Variant synthesis.
//!
//! The storefront has no real inventory feed: purchasable variants are
//! synthesized deterministically from a product's id, category, and price,
//! and recomputed on every projection. Availability gaps come from small
//! modulus rules on the id, a deliberate demo stand-in for stock data.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// A purchasable option of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    /// Label shown in the selector (unique within a product's list).
    pub label: String,
    /// Price of this variant.
    pub price: f64,
    /// Whether this variant can currently be purchased.
    pub available: bool,
}

impl Variant {
    fn new(label: &str, price: f64, available: bool) -> Self {
        Self {
            label: label.to_string(),
            price,
            available,
        }
    }
}

/// Synthesize the variant list for a product.
///
/// Pure and total: the category is matched case-insensitively by substring,
/// first rule wins, and a category matching no rule still yields a single
/// `Default` variant — the result is never empty.
pub fn synthesize(product: &Product) -> Vec<Variant> {
    let base = if product.price.is_finite() {
        product.price
    } else {
        0.0
    };
    let id = product.id;
    let category = product.category.to_lowercase();

    if category.contains("clothing") {
        vec![
            Variant::new("S", base, true),
            Variant::new("M", base, id % 3 != 0),
            Variant::new("L", base, true),
            Variant::new("XL", base, id % 5 != 0),
        ]
    } else if category.contains("electronic") {
        vec![
            Variant::new("64 GB", base, true),
            Variant::new("128 GB", base + 20.0, id % 4 != 0),
            Variant::new("256 GB", base + 40.0, true),
        ]
    } else if category.contains("jewel") {
        vec![
            Variant::new("Silver", base, true),
            Variant::new("Gold", base + 30.0, id % 2 != 0),
        ]
    } else {
        vec![Variant::new("Default", base, id % 2 != 0)]
    }
}

/// Pick the variant a view should pre-select: the first available one, or
/// the first in the list when none are available. `None` only for an empty
/// slice, which [`synthesize`] never produces.
pub fn select_default(variants: &[Variant]) -> Option<&Variant> {
    variants.iter().find(|v| v.available).or_else(|| variants.first())
}
